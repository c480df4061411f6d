//! Empirical temperature correlations.
//!
//! Both correlations take the reservoir temperature in °C.

use uom::si::{
    f64::{Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::percent,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Cubic fit for rock specific heat, highest order first (J/kg·°C).
const ROCK_CP_COEFFS: [f64; 4] = [-4.418e-7, -8.209e-4, 1.352, 994.2];

/// Linear fit for net conversion efficiency, slope then intercept (percent).
const EFFICIENCY_COEFFS: [f64; 2] = [0.0935, -2.3266];

/// Specific heat of reservoir rock at the given temperature.
#[must_use]
pub fn rock_specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
    let t = temperature.get::<degree_celsius>();
    let [a, b, c, d] = ROCK_CP_COEFFS;
    let cp = a * t.powi(3) + b * t.powi(2) + c * t + d;
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp)
}

/// Heat-to-power conversion efficiency at the given temperature.
///
/// Becomes negative below roughly 24.9 °C; the value is returned unchecked.
#[must_use]
pub fn conversion_efficiency(temperature: ThermodynamicTemperature) -> Ratio {
    let t = temperature.get::<degree_celsius>();
    let [slope, intercept] = EFFICIENCY_COEFFS;
    Ratio::new::<percent>(slope * t + intercept)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn rock_specific_heat_at_200c() {
        let expected = -4.418e-7 * 200.0_f64.powi(3) - 8.209e-4 * 200.0_f64.powi(2)
            + 1.352 * 200.0
            + 994.2;
        assert_relative_eq!(
            rock_specific_heat(celsius(200.0)).get::<joule_per_kilogram_kelvin>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rock_specific_heat_at_zero_is_intercept() {
        assert_relative_eq!(
            rock_specific_heat(celsius(0.0)).get::<joule_per_kilogram_kelvin>(),
            994.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn efficiency_at_200c() {
        assert_relative_eq!(
            conversion_efficiency(celsius(200.0)).get::<ratio>(),
            (0.0935 * 200.0 - 2.3266) / 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn efficiency_goes_negative_for_cold_reservoirs() {
        assert!(conversion_efficiency(celsius(20.0)).get::<ratio>() < 0.0);
        assert!(conversion_efficiency(celsius(30.0)).get::<ratio>() > 0.0);
    }
}
