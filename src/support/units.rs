//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities inside the reservoir
//! model (areas, temperatures, densities, energy, power).
//! This module provides the pieces that [`uom`] doesn't include.
//!
//! ## Temperature differences
//!
//! Stored heat depends on the temperature drop from the reservoir down to a
//! reference temperature. [`TemperatureDifference::minus`] subtracts one
//! absolute temperature from another and yields a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_celsius};
//! use twine_geothermal::support::units::TemperatureDifference;
//!
//! let reservoir = ThermodynamicTemperature::new::<degree_celsius>(200.0);
//! let reference = ThermodynamicTemperature::new::<degree_celsius>(15.0);
//! let drop = reservoir.minus(reference);
//! assert!((drop.get::<temperature_interval::kelvin>() - 185.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::VolumetricHeatCapacity;
pub use temperature_difference::TemperatureDifference;
