use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values directly isn't
/// supported by [`uom`], see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn reservoir_above_reference() {
        let reservoir = ThermodynamicTemperature::new::<degree_celsius>(200.0);
        let reference = ThermodynamicTemperature::new::<degree_celsius>(15.0);

        assert_relative_eq!(
            reservoir.minus(reference).get::<delta_celsius>(),
            185.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            reference.minus(reservoir).get::<delta_celsius>(),
            -185.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn equal_temperatures_give_exact_zero() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        assert_eq!(t.minus(t).get::<delta_kelvin>(), 0.0);
    }
}
