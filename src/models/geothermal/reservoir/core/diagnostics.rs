//! Domain diagnostics for reservoir inputs.
//!
//! The model computes any finite or non-finite input as-is.
//! These checks classify suspicious input so callers can report it.

use thiserror::Error;
use uom::si::{ratio::percent, thermodynamic_temperature::degree_celsius};

use crate::support::constraint::{
    Constraint, NonNegative, Percentage, StrictlyPositive, UnitInterval,
};

use super::{Factor, ParameterVector, correlations::conversion_efficiency};

/// An input value outside the range the model was built for.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainWarning {
    #[error("{factor} is not finite ({value})")]
    NonFinite { factor: Factor, value: f64 },

    #[error("{factor} is negative ({value})")]
    Negative { factor: Factor, value: f64 },

    #[error("porosity {value} is outside [0, 1]")]
    PorosityOutOfRange { value: f64 },

    #[error("{factor} {value}% is outside [0, 100]")]
    PercentageOutOfRange { factor: Factor, value: f64 },

    #[error("{factor} must be greater than zero ({value})")]
    NotPositive { factor: Factor, value: f64 },

    #[error(
        "reservoir temperature {temperature} °C gives a non-positive conversion efficiency ({efficiency}%)"
    )]
    NonPositiveEfficiency { temperature: f64, efficiency: f64 },
}

impl DomainWarning {
    /// The factor the warning refers to.
    #[must_use]
    pub fn factor(&self) -> Factor {
        match self {
            Self::NonFinite { factor, .. }
            | Self::Negative { factor, .. }
            | Self::PercentageOutOfRange { factor, .. }
            | Self::NotPositive { factor, .. } => *factor,
            Self::PorosityOutOfRange { .. } => Factor::Porosity,
            Self::NonPositiveEfficiency { .. } => Factor::ReservoirTemp,
        }
    }
}

/// Returns a warning for every input outside its expected domain.
///
/// An empty result means every value is finite and in range.
#[must_use]
pub fn check_domain(params: &ParameterVector) -> Vec<DomainWarning> {
    let mut warnings = Vec::new();

    for (factor, value) in params.iter() {
        if !value.is_finite() {
            warnings.push(DomainWarning::NonFinite { factor, value });
            continue;
        }

        let warning = match factor {
            Factor::Area | Factor::Thickness | Factor::RockDensity => NonNegative::check(&value)
                .err()
                .map(|_| DomainWarning::Negative { factor, value }),
            Factor::Porosity => UnitInterval::check(&value)
                .err()
                .map(|_| DomainWarning::PorosityOutOfRange { value }),
            Factor::RecoveryFactor => percentage_warning(factor, value),
            // Capacity divides the recovered heat, so zero gives infinite capacity.
            Factor::CapacityFactor => percentage_warning(factor, value).or_else(|| {
                StrictlyPositive::check(&value)
                    .err()
                    .map(|_| DomainWarning::NotPositive { factor, value })
            }),
            Factor::ReservoirTemp => efficiency_warning(params),
        };

        warnings.extend(warning);
    }

    warnings
}

fn percentage_warning(factor: Factor, value: f64) -> Option<DomainWarning> {
    Percentage::check(&value)
        .err()
        .map(|_| DomainWarning::PercentageOutOfRange { factor, value })
}

fn efficiency_warning(params: &ParameterVector) -> Option<DomainWarning> {
    let temperature = params.to_properties().temperature;
    let efficiency = conversion_efficiency(temperature).get::<percent>();

    StrictlyPositive::check(&efficiency)
        .err()
        .map(|_| DomainWarning::NonPositiveEfficiency {
            temperature: temperature.get::<degree_celsius>(),
            efficiency,
        })
}
