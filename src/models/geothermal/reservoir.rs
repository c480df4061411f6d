//! Volumetric geothermal reservoir model.
//!
//! [`VolumetricReservoir`] implements [`twine_core::Model`] over the internal
//! `core`, mapping a seven-factor [`ParameterVector`] to an installed
//! electrical capacity.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_geothermal::models::geothermal::reservoir::{ParameterVector, VolumetricReservoir};
//! use uom::si::power::gigawatt;
//!
//! let model = VolumetricReservoir::default();
//! let power = model.call(&ParameterVector::reference()).unwrap();
//! assert!((power.get::<gigawatt>() - 8.615).abs() < 1e-3);
//! ```

mod core;

pub use self::core::{
    DomainWarning, Factor, InvalidShape, ModelConstants, ParameterVector, PowerEstimate,
    ReservoirProperties, StoredHeat, check_domain, compute_power, conversion_efficiency, estimate,
    rock_specific_heat,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::Power;

/// Reservoir model with fixed [`ModelConstants`].
///
/// Inputs outside their expected domain are logged as warnings and then
/// computed anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VolumetricReservoir {
    constants: ModelConstants,
}

impl VolumetricReservoir {
    #[must_use]
    pub fn new(constants: ModelConstants) -> Self {
        Self { constants }
    }

    #[must_use]
    pub fn constants(&self) -> &ModelConstants {
        &self.constants
    }

    /// Estimates capacity along with stored heat and efficiency.
    #[must_use]
    pub fn estimate(&self, params: &ParameterVector) -> PowerEstimate {
        for warning in check_domain(params) {
            tracing::warn!(factor = %warning.factor(), "{warning}");
        }
        estimate(params, &self.constants)
    }
}

impl Model for VolumetricReservoir {
    type Input = ParameterVector;
    type Output = Power;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.estimate(input).power)
    }
}
