use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermodynamicTemperature, Time},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Seconds in a 365-day year.
const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Fixed values that are not perturbed during an analysis.
///
/// Plant life and fluid properties are validated as strictly positive when
/// constructed through [`ModelConstants::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConstants {
    plant_life: Constrained<Time, StrictlyPositive>,
    fluid_specific_heat: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    fluid_density: Constrained<MassDensity, StrictlyPositive>,
    reference_temperature: ThermodynamicTemperature,
}

impl ModelConstants {
    /// Creates constants with the default 15 °C reference temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`](crate::support::constraint::ConstraintError)
    /// if plant life, fluid specific heat, or fluid density is not strictly positive.
    pub fn new(
        plant_life: Time,
        fluid_specific_heat: SpecificHeatCapacity,
        fluid_density: MassDensity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            plant_life: StrictlyPositive::new(plant_life)?,
            fluid_specific_heat: StrictlyPositive::new(fluid_specific_heat)?,
            fluid_density: StrictlyPositive::new(fluid_density)?,
            reference_temperature: ThermodynamicTemperature::new::<degree_celsius>(15.0),
        })
    }

    /// Converts a plant life in 365-day years to a [`Time`].
    #[must_use]
    pub fn plant_life_from_years(years: f64) -> Time {
        Time::new::<second>(years * SECONDS_PER_YEAR)
    }

    /// Returns a copy using a different reference (rejection) temperature.
    #[must_use]
    pub fn with_reference_temperature(mut self, temperature: ThermodynamicTemperature) -> Self {
        self.reference_temperature = temperature;
        self
    }

    #[must_use]
    pub fn plant_life(&self) -> Time {
        *self.plant_life.as_ref()
    }

    #[must_use]
    pub fn fluid_specific_heat(&self) -> SpecificHeatCapacity {
        *self.fluid_specific_heat.as_ref()
    }

    #[must_use]
    pub fn fluid_density(&self) -> MassDensity {
        *self.fluid_density.as_ref()
    }

    #[must_use]
    pub fn reference_temperature(&self) -> ThermodynamicTemperature {
        self.reference_temperature
    }
}

/// 25-year plant life, water at 4180 J/kg·K and 1000 kg/m³, 15 °C reference.
impl Default for ModelConstants {
    fn default() -> Self {
        Self::new(
            Self::plant_life_from_years(25.0),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        )
        .expect("reference constants are strictly positive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_plant_life_is_25_years_of_seconds() {
        let constants = ModelConstants::default();
        assert_relative_eq!(
            constants.plant_life().get::<second>(),
            25.0 * 365.0 * 24.0 * 3600.0
        );
    }

    #[test]
    fn rejects_non_positive_values() {
        let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1000.0);

        assert_eq!(
            ModelConstants::new(ModelConstants::plant_life_from_years(0.0), cp, rho),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            ModelConstants::new(
                ModelConstants::plant_life_from_years(30.0),
                -cp,
                rho
            ),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn reference_temperature_can_be_overridden() {
        let constants = ModelConstants::default()
            .with_reference_temperature(ThermodynamicTemperature::new::<degree_celsius>(25.0));
        assert_relative_eq!(
            constants.reference_temperature().get::<degree_celsius>(),
            25.0,
            epsilon = 1e-9
        );
    }
}
