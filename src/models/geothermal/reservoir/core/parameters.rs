use std::ops::Index;

use thiserror::Error;
use uom::si::{
    area::square_kilometer,
    f64::{Area, Length, MassDensity, Ratio, ThermodynamicTemperature, Volume},
    length::kilometer,
    mass_density::kilogram_per_cubic_meter,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use super::Factor;

/// A parameter list did not contain exactly one value per [`Factor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} reservoir parameters, got {actual}")]
pub struct InvalidShape {
    /// Required number of values.
    pub expected: usize,
    /// Number of values supplied.
    pub actual: usize,
}

/// Raw reservoir inputs in [`Factor`] order and documented units.
///
/// Values are not range-checked.
/// Out-of-domain input is computed as-is; see
/// [`check_domain`](super::check_domain) for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterVector([f64; Factor::COUNT]);

impl ParameterVector {
    /// Creates a vector from values in [`Factor::ALL`] order.
    #[must_use]
    pub const fn new(values: [f64; Factor::COUNT]) -> Self {
        Self(values)
    }

    /// Reference baseline: 225 km², 2.5 km, 200 °C, 2700 kg/m³, 5% porosity,
    /// 11% recovery, 92.7% capacity factor.
    #[must_use]
    pub const fn reference() -> Self {
        Self([225.0, 2.5, 200.0, 2700.0, 0.05, 11.0, 92.7])
    }

    /// Creates a vector from a slice that must hold exactly seven values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShape`] if the slice length is not [`Factor::COUNT`].
    pub fn from_slice(values: &[f64]) -> Result<Self, InvalidShape> {
        let array: [f64; Factor::COUNT] = values.try_into().map_err(|_| InvalidShape {
            expected: Factor::COUNT,
            actual: values.len(),
        })?;
        Ok(Self(array))
    }

    /// Returns the raw value for `factor`.
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        self.0[factor.index()]
    }

    /// Returns a copy with only `factor` multiplied by `multiplier`.
    #[must_use]
    pub fn with_scaled(&self, factor: Factor, multiplier: f64) -> Self {
        let mut values = self.0;
        values[factor.index()] *= multiplier;
        Self(values)
    }

    /// Iterates over `(factor, value)` pairs in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Returns the raw values in vector order.
    #[must_use]
    pub fn as_array(&self) -> &[f64; Factor::COUNT] {
        &self.0
    }

    /// Converts the raw values into typed quantities.
    #[must_use]
    pub fn to_properties(&self) -> ReservoirProperties {
        ReservoirProperties {
            area: Area::new::<square_kilometer>(self.get(Factor::Area)),
            thickness: Length::new::<kilometer>(self.get(Factor::Thickness)),
            temperature: ThermodynamicTemperature::new::<degree_celsius>(
                self.get(Factor::ReservoirTemp),
            ),
            rock_density: MassDensity::new::<kilogram_per_cubic_meter>(
                self.get(Factor::RockDensity),
            ),
            porosity: Ratio::new::<ratio>(self.get(Factor::Porosity)),
            recovery_factor: Ratio::new::<percent>(self.get(Factor::RecoveryFactor)),
            capacity_factor: Ratio::new::<percent>(self.get(Factor::CapacityFactor)),
        }
    }
}

impl From<[f64; Factor::COUNT]> for ParameterVector {
    fn from(values: [f64; Factor::COUNT]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for ParameterVector {
    type Error = InvalidShape;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl Index<Factor> for ParameterVector {
    type Output = f64;

    fn index(&self, factor: Factor) -> &f64 {
        &self.0[factor.index()]
    }
}

/// Typed view of a [`ParameterVector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirProperties {
    pub area: Area,
    pub thickness: Length,
    pub temperature: ThermodynamicTemperature,
    pub rock_density: MassDensity,
    pub porosity: Ratio,
    pub recovery_factor: Ratio,
    pub capacity_factor: Ratio,
}

impl ReservoirProperties {
    /// Bulk reservoir volume (rock plus pore space).
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.area * self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::cubic_meter;

    #[test]
    fn from_slice_requires_seven_values() {
        let values = ParameterVector::reference().as_array().to_vec();
        assert_eq!(
            ParameterVector::from_slice(&values),
            Ok(ParameterVector::reference())
        );

        assert_eq!(
            ParameterVector::from_slice(&values[..6]),
            Err(InvalidShape {
                expected: 7,
                actual: 6
            })
        );

        let mut long = values.clone();
        long.push(1.0);
        assert_eq!(
            ParameterVector::try_from(long.as_slice()),
            Err(InvalidShape {
                expected: 7,
                actual: 8
            })
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn scaling_touches_one_entry() {
        let baseline = ParameterVector::reference();

        for factor in Factor::ALL {
            let perturbed = baseline.with_scaled(factor, 1.1);
            for other in Factor::ALL {
                if other == factor {
                    assert_eq!(perturbed[other], baseline[other] * 1.1);
                } else {
                    assert_eq!(perturbed[other], baseline[other]);
                }
            }
        }
    }

    #[test]
    fn reference_properties() {
        let props = ParameterVector::reference().to_properties();

        assert_relative_eq!(props.volume().get::<cubic_meter>(), 225e6 * 2.5e3);
        assert_relative_eq!(
            props.temperature.get::<degree_celsius>(),
            200.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(props.porosity.get::<ratio>(), 0.05);
        assert_relative_eq!(props.recovery_factor.get::<ratio>(), 0.11);
        assert_relative_eq!(props.capacity_factor.get::<ratio>(), 0.927);
    }
}
