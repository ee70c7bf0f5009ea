//! # fueltank: A validated car fuel tank
//!
//! The core library models the fuel reservoir of a single vehicle. It is
//! pure and deterministic: no IO, no clocks, no globals. Every operation
//! checks its preconditions up front and either returns a typed error or
//! applies the whole change, so a failed call never leaves the tank
//! half-updated.
//!
//! ## Key Principles
//!
//! - **Guarded construction**: a [`FuelTank`] that exists is valid
//! - **No partial mutation**: operations are check-then-assign
//! - **Typed errors**: range violations are [`TankError`] variants, not
//!   panics or clamps
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fueltank::FuelTank;
//! use fueltank_types::Liters;
//!
//! let mut tank = FuelTank::new(Liters::new(50.0)?, Liters::new(20.0)?)?;
//! assert!(!tank.is_empty());
//!
//! tank.add_fuel(Liters::new(10.0)?)?;
//! let drawn = tank.use_fuel(Liters::new(5.0)?)?;
//!
//! assert_eq!(drawn.as_f64(), 5.0);
//! assert_eq!(tank.level().as_f64(), 25.0);
//! # Ok(())
//! # }
//! ```

pub mod tank;


pub use tank::{FuelTank, TankError};
