//! Error types for guarded operations on cars and units

/// Rejected car operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CarError {
    /// Not enough fuel for the whole ride; the car stays put
    #[error("out of fuel: ride needs {required} but only {available} in the tank")]
    OutOfFuel { required: f64, available: f64 },

    /// The tank overflowed; it is left full and `excess` is what did not fit
    #[error("too much fuel: tank holds {capacity}, {excess} did not fit")]
    TooMuchFuel { capacity: f64, excess: f64 },

    /// Refills must add fuel; the tank is left as it was
    #[error("cannot refill a negative amount of fuel: {fuel}")]
    NegativeFuel { fuel: f64 },
}

/// Rejected unit operations
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit has no hp left and cannot act or be acted upon
    #[error("{name} is dead: what is dead may never die")]
    UnitIsDead { name: String },
}

/// Any error raised by the pieces
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PiecesError {
    #[error(transparent)]
    Car(#[from] CarError),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Result type used by operations that may touch more than one kind of piece
pub type PiecesResult<T> = Result<T, PiecesError>;
