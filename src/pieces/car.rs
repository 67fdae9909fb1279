//! Fuel-limited car that drives between points
//!
//! A car burns fuel in proportion to the distance it covers and refuses any
//! ride it cannot finish.

use std::fmt;

use log::{debug, warn};

use super::error::CarError;
use super::point::Point;

/// Tank size used by `Car::default`
pub const DEFAULT_FUEL_CAPACITY: f64 = 60.0;

/// Fuel burned per unit of distance used by `Car::default`
pub const DEFAULT_FUEL_CONSUMPTION: f64 = 0.6;

/// Model name used by `Car::default`
pub const DEFAULT_MODEL: &str = "bmw";

/// A car on the 2D plane
///
/// Fuel always stays within `0..=fuel_capacity`. The tank starts empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    fuel_capacity: f64,
    fuel_consumption: f64,
    location: Point,
    model: String,
    fuel_amount: f64,
}

impl Default for Car {
    fn default() -> Self {
        Self::new(
            DEFAULT_FUEL_CAPACITY,
            DEFAULT_FUEL_CONSUMPTION,
            Point::origin(),
            DEFAULT_MODEL,
        )
    }
}

impl Car {
    /// Create a car with an empty tank
    ///
    /// `fuel_capacity` and `fuel_consumption` must be positive. Debug builds
    /// panic otherwise.
    pub fn new(
        fuel_capacity: f64,
        fuel_consumption: f64,
        location: Point,
        model: impl Into<String>,
    ) -> Self {
        debug_assert!(fuel_capacity > 0.0, "fuel capacity must be positive");
        debug_assert!(fuel_consumption > 0.0, "fuel consumption must be positive");

        Self {
            fuel_capacity,
            fuel_consumption,
            location,
            model: model.into(),
            fuel_amount: 0.0,
        }
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn fuel_amount(&self) -> f64 {
        self.fuel_amount
    }

    /// Fuel burned by a ride from the current location to `destination`
    pub fn fuel_needed(&self, destination: &Point) -> f64 {
        self.location.distance(destination) * self.fuel_consumption
    }

    /// Drive to `destination`, given either as a `Point` or an `(x, y)` pair
    ///
    /// Only succeeds when the tank holds enough fuel for the whole ride.
    /// On failure neither the location nor the fuel changes.
    pub fn drive(&mut self, destination: impl Into<Point>) -> Result<(), CarError> {
        let destination = destination.into();
        let required = self.fuel_needed(&destination);

        if self.fuel_amount < required {
            warn!(
                "{} cannot reach {}: needs {} fuel, has {}",
                self.model, destination, required, self.fuel_amount
            );
            return Err(CarError::OutOfFuel {
                required,
                available: self.fuel_amount,
            });
        }

        debug!(
            "{} drove from {} to {} using {} fuel",
            self.model, self.location, destination, required
        );
        self.location = destination;
        self.fuel_amount -= required;
        Ok(())
    }

    /// Pour `fuel` into the tank
    ///
    /// If the tank overflows it is left full and `TooMuchFuel` is returned,
    /// so the error does not mean nothing happened. A negative amount is
    /// rejected with `NegativeFuel` and leaves the tank untouched.
    pub fn refill(&mut self, fuel: f64) -> Result<(), CarError> {
        if fuel < 0.0 {
            warn!("{} refused to refill {} fuel", self.model, fuel);
            return Err(CarError::NegativeFuel { fuel });
        }

        self.fuel_amount += fuel;

        if self.fuel_amount > self.fuel_capacity {
            let excess = self.fuel_amount - self.fuel_capacity;
            self.fuel_amount = self.fuel_capacity;
            warn!(
                "{} tank overflowed: {} fuel did not fit in {}",
                self.model, excess, self.fuel_capacity
            );
            return Err(CarError::TooMuchFuel {
                capacity: self.fuel_capacity,
                excess,
            });
        }

        debug!("{} refilled {} fuel, now has {}", self.model, fuel, self.fuel_amount);
        Ok(())
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, located at {}, with {} fuel",
            self.model, self.location, self.fuel_amount
        )
    }
}
