//! The fuel tank and its operations.
//!
//! [`FuelTank`] keeps two private fields, `capacity` and `level`, and
//! maintains `ZERO <= level <= capacity` across every operation. The
//! capacity is fixed at construction; the level moves through
//! [`add_fuel`](FuelTank::add_fuel) and [`use_fuel`](FuelTank::use_fuel).

use fueltank_types::Liters;
use thiserror::Error;

/// The fuel reservoir of a single vehicle.
///
/// A `FuelTank` value is always consistent: the constructor rejects
/// impossible tanks, and mutating operations verify their preconditions
/// before touching the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelTank {
    capacity: Liters,
    level: Liters,
}

impl FuelTank {
    /// Creates a tank with the given capacity and starting fuel level.
    ///
    /// # Errors
    ///
    /// * [`TankError::NonPositiveCapacity`] - `capacity` is zero or negative
    /// * [`TankError::NegativeFuel`] - `level` is negative
    /// * [`TankError::LevelExceedsCapacity`] - `level` is more than `capacity`
    pub fn new(capacity: Liters, level: Liters) -> Result<Self, TankError> {
        if capacity <= Liters::ZERO {
            return Err(TankError::NonPositiveCapacity(capacity));
        }
        if level < Liters::ZERO {
            return Err(TankError::NegativeFuel(level));
        }
        if level > capacity {
            return Err(TankError::LevelExceedsCapacity { level, capacity });
        }

        let tank = Self { capacity, level };
        tank.debug_check_invariant();
        Ok(tank)
    }

    /// Returns the fixed capacity of the tank.
    pub fn capacity(&self) -> Liters {
        self.capacity
    }

    /// Returns the current fuel level.
    pub fn level(&self) -> Liters {
        self.level
    }

    /// Returns the unused volume, `capacity - level`.
    pub fn free(&self) -> Liters {
        self.capacity - self.level
    }

    /// Returns true if the tank holds no fuel at all.
    pub fn is_empty(&self) -> bool {
        self.level.is_zero()
    }

    /// Returns true if the tank is filled to capacity.
    pub fn is_full(&self) -> bool {
        self.level == self.capacity
    }

    /// Returns the fill level as a fraction in `[0, 1]`.
    pub fn fill_fraction(&self) -> f64 {
        (self.level.as_f64() / self.capacity.as_f64()).clamp(0.0, 1.0)
    }

    /// Adds fuel to the tank.
    ///
    /// # Errors
    ///
    /// * [`TankError::NonPositiveAmount`] - `amount` is zero or negative
    /// * [`TankError::WouldOverfill`] - the tank lacks headroom for `amount`
    ///
    /// On error the level is exactly what it was before the call.
    pub fn add_fuel(&mut self, amount: Liters) -> Result<(), TankError> {
        if amount <= Liters::ZERO {
            return Err(TankError::NonPositiveAmount(amount));
        }
        if self.level + amount > self.capacity {
            return Err(TankError::WouldOverfill {
                amount,
                free: self.free(),
            });
        }

        self.level = self.level + amount;
        self.debug_check_invariant();
        Ok(())
    }

    /// Draws fuel from the tank and returns the volume drawn.
    ///
    /// The drawn volume always equals `amount`; there is no partial
    /// draw. A request for more fuel than the tank holds fails whole.
    ///
    /// # Errors
    ///
    /// * [`TankError::NonPositiveAmount`] - `amount` is zero or negative
    /// * [`TankError::InsufficientFuel`] - `amount` is more than the level
    ///
    /// On error the level is exactly what it was before the call.
    pub fn use_fuel(&mut self, amount: Liters) -> Result<Liters, TankError> {
        if amount <= Liters::ZERO {
            return Err(TankError::NonPositiveAmount(amount));
        }
        if amount > self.level {
            return Err(TankError::InsufficientFuel {
                requested: amount,
                available: self.level,
            });
        }

        self.level = self.level - amount;
        self.debug_check_invariant();
        Ok(amount)
    }

    // Postcondition: the level stays inside [ZERO, capacity].
    fn debug_check_invariant(&self) {
        debug_assert!(
            self.level >= Liters::ZERO && self.level <= self.capacity,
            "tank invariant violated: level={}, capacity={}",
            self.level,
            self.capacity
        );
    }
}

// ============================================================================
// TankError
// ============================================================================

/// Error for tank operations whose arguments are real numbers but violate
/// a range or consistency constraint.
///
/// The "wrong type" category (non-numeric input) cannot reach this API;
/// it is caught at the text and deserialization boundaries as
/// [`fueltank_types::VolumeError`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TankError {
    // Construction errors
    #[error("tank capacity must be positive, got {0}")]
    NonPositiveCapacity(Liters),

    #[error("fuel level cannot be negative, got {0}")]
    NegativeFuel(Liters),

    #[error("fuel level {level} exceeds tank capacity {capacity}")]
    LevelExceedsCapacity { level: Liters, capacity: Liters },

    // Operation errors
    #[error("fuel amount must be positive, got {0}")]
    NonPositiveAmount(Liters),

    #[error("adding {amount} would overfill the tank: {free} free")]
    WouldOverfill { amount: Liters, free: Liters },

    #[error("cannot draw {requested}: only {available} in the tank")]
    InsufficientFuel {
        requested: Liters,
        available: Liters,
    },
}
