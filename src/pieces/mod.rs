//! Standalone game pieces
//!
//! Three independent value objects: a point on a 2D plane, a fuel-limited
//! car that drives between points, and a battle unit. None of them share
//! state; a car simply owns its current point.

mod car;
mod error;
mod point;
mod unit;

pub use car::{Car, DEFAULT_FUEL_CAPACITY, DEFAULT_FUEL_CONSUMPTION, DEFAULT_MODEL};
pub use error::{CarError, PiecesError, PiecesResult, UnitError};
pub use point::Point;
pub use unit::Unit;
