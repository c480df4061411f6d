use uom::si::{f64::Energy, ratio::ratio};

use crate::support::units::{TemperatureDifference, VolumetricHeatCapacity};

use super::{ModelConstants, ReservoirProperties, correlations::rock_specific_heat};

/// Heat in place above the reference temperature, split by phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredHeat {
    /// Heat held by the rock matrix.
    pub rock: Energy,
    /// Heat held by the pore fluid.
    pub fluid: Energy,
}

impl StoredHeat {
    /// Computes rock and fluid heat in place for a reservoir.
    ///
    /// Both terms scale with bulk volume and with the drop from reservoir
    /// temperature to the reference temperature; porosity splits the volume
    /// between rock and fluid.
    #[must_use]
    pub fn new(props: &ReservoirProperties, constants: &ModelConstants) -> Self {
        let volume = props.volume();
        let delta_t = props
            .temperature
            .minus(constants.reference_temperature());
        let porosity = props.porosity.get::<ratio>();

        let rock_capacity: VolumetricHeatCapacity =
            props.rock_density * rock_specific_heat(props.temperature);
        let fluid_capacity: VolumetricHeatCapacity =
            constants.fluid_density() * constants.fluid_specific_heat();

        Self {
            rock: rock_capacity * volume * delta_t * (1.0 - porosity),
            fluid: fluid_capacity * volume * delta_t * porosity,
        }
    }

    /// Total heat in place.
    #[must_use]
    pub fn total(&self) -> Energy {
        self.rock + self.fluid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::energy::joule;

    use crate::models::geothermal::reservoir::core::{Factor, ParameterVector};

    #[test]
    fn reference_reservoir() {
        let props = ParameterVector::reference().to_properties();
        let heat = StoredHeat::new(&props, &ModelConstants::default());

        let volume = 225e6 * 2.5e3;
        let cr = -4.418e-7 * 200.0_f64.powi(3) - 8.209e-4 * 200.0_f64.powi(2)
            + 1.352 * 200.0
            + 994.2;
        let rock = 2700.0 * cr * volume * 0.95 * 185.0;
        let fluid = 1000.0 * 4180.0 * volume * 0.05 * 185.0;

        assert_relative_eq!(heat.rock.get::<joule>(), rock, max_relative = 1e-12);
        assert_relative_eq!(heat.fluid.get::<joule>(), fluid, max_relative = 1e-12);
        assert_relative_eq!(
            heat.total().get::<joule>(),
            rock + fluid,
            max_relative = 1e-12
        );
    }

    #[test]
    fn no_heat_at_reference_temperature() {
        let params = ParameterVector::reference().with_scaled(Factor::ReservoirTemp, 15.0 / 200.0);
        let heat = StoredHeat::new(&params.to_properties(), &ModelConstants::default());

        assert_eq!(heat.total().get::<joule>(), 0.0);
    }

    #[test]
    fn zero_porosity_has_no_fluid_heat() {
        let params = ParameterVector::reference().with_scaled(Factor::Porosity, 0.0);
        let heat = StoredHeat::new(&params.to_properties(), &ModelConstants::default());

        assert_eq!(heat.fluid.get::<joule>(), 0.0);
        assert!(heat.rock.get::<joule>() > 0.0);
    }
}
