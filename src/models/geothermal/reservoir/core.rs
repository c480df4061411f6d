//! Volumetric heat-in-place estimate of geothermal power capacity.
//!
//! Heat stored in the rock and pore fluid above a reference temperature is
//! scaled by a recovery factor and a conversion efficiency, then spread over
//! the plant life and divided by the capacity factor to give an installed
//! electrical capacity.

mod constants;
mod correlations;
mod diagnostics;
mod factor;
mod parameters;
mod stored_heat;

pub use constants::ModelConstants;
pub use correlations::{conversion_efficiency, rock_specific_heat};
pub use diagnostics::{DomainWarning, check_domain};
pub use factor::Factor;
pub use parameters::{InvalidShape, ParameterVector, ReservoirProperties};
pub use stored_heat::StoredHeat;

use uom::si::{
    f64::{Power, Ratio},
    ratio::ratio,
};

/// Intermediate and final values of a capacity estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEstimate {
    /// Heat in place above the reference temperature.
    pub stored_heat: StoredHeat,
    /// Heat-to-power conversion efficiency.
    pub efficiency: Ratio,
    /// Installed electrical capacity.
    pub power: Power,
}

/// Estimates electrical capacity and its intermediate values.
///
/// Out-of-domain inputs are not rejected; negative or non-finite results
/// propagate unchecked.
#[must_use]
pub fn estimate(params: &ParameterVector, constants: &ModelConstants) -> PowerEstimate {
    let props = params.to_properties();

    let stored_heat = StoredHeat::new(&props, constants);
    let efficiency = conversion_efficiency(props.temperature);

    let recovered = stored_heat.total()
        * props.recovery_factor.get::<ratio>()
        * efficiency.get::<ratio>();
    let power = recovered / (constants.plant_life() * props.capacity_factor.get::<ratio>());

    PowerEstimate {
        stored_heat,
        efficiency,
        power,
    }
}

/// Estimates electrical capacity for a reservoir.
///
/// This is [`estimate`] without the intermediate values.
#[must_use]
pub fn compute_power(params: &ParameterVector, constants: &ModelConstants) -> Power {
    estimate(params, constants).power
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::gigawatt;

    const REFERENCE_GWE: f64 = 8.615_139_891_373_257;

    fn gwe(params: &ParameterVector) -> f64 {
        compute_power(params, &ModelConstants::default()).get::<gigawatt>()
    }

    #[test]
    fn reference_capacity() {
        assert_relative_eq!(
            gwe(&ParameterVector::reference()),
            REFERENCE_GWE,
            max_relative = 1e-12
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn deterministic() {
        let params = ParameterVector::reference();
        assert_eq!(gwe(&params).to_bits(), gwe(&params).to_bits());
    }

    #[test]
    fn estimate_exposes_intermediates() {
        let result = estimate(&ParameterVector::reference(), &ModelConstants::default());

        assert_relative_eq!(
            result.efficiency.get::<ratio>(),
            0.163_734,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.power.get::<gigawatt>(),
            REFERENCE_GWE,
            max_relative = 1e-12
        );
    }

    #[test]
    fn monotonic_response_to_each_factor() {
        let baseline = ParameterVector::reference();
        let base = gwe(&baseline);

        for factor in [
            Factor::Area,
            Factor::Thickness,
            Factor::ReservoirTemp,
            Factor::RockDensity,
            Factor::RecoveryFactor,
        ] {
            assert!(
                gwe(&baseline.with_scaled(factor, 1.1)) > base,
                "{factor} should increase capacity"
            );
        }

        assert!(gwe(&baseline.with_scaled(Factor::CapacityFactor, 1.1)) < base);
    }

    #[test]
    fn linear_in_area_thickness_and_recovery() {
        let baseline = ParameterVector::reference();
        let base = gwe(&baseline);

        for factor in [Factor::Area, Factor::Thickness, Factor::RecoveryFactor] {
            assert_relative_eq!(
                gwe(&baseline.with_scaled(factor, 2.0)),
                2.0 * base,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn longer_plant_life_lowers_capacity() {
        let params = ParameterVector::reference();
        let constants = ModelConstants::default();
        let longer = ModelConstants::new(
            ModelConstants::plant_life_from_years(50.0),
            constants.fluid_specific_heat(),
            constants.fluid_density(),
        )
        .unwrap();

        assert_relative_eq!(
            compute_power(&params, &longer).get::<gigawatt>(),
            REFERENCE_GWE / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_at_reference_temperature() {
        let params = ParameterVector::reference().with_scaled(Factor::ReservoirTemp, 15.0 / 200.0);
        assert_eq!(gwe(&params), 0.0);
    }

    #[test]
    fn out_of_domain_input_is_computed() {
        // Below ~24.9 °C the efficiency fit goes negative, and so does capacity.
        let params = ParameterVector::reference().with_scaled(Factor::ReservoirTemp, 0.1);
        assert!(gwe(&params) < 0.0);

        let params = ParameterVector::reference().with_scaled(Factor::CapacityFactor, 0.0);
        assert!(gwe(&params).is_infinite());
    }
}
