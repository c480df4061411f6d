//! One-at-a-time (OAT) sensitivity analysis.
//!
//! Each factor of a baseline [`ParameterVector`] is scaled by
//! `1 + perturbation` while the others stay at baseline, and the change in
//! modeled capacity is recorded.
//! Results keep the order in which factors were declared.
//!
//! # Example
//!
//! ```
//! use twine_geothermal::analysis::sensitivity::{SensitivityConfig, run_oat};
//!
//! let factors = [
//!     ("Area", 225.0),
//!     ("Thickness", 2.5),
//!     ("ReservoirTemp", 200.0),
//!     ("RockDensity", 2700.0),
//!     ("Porosity", 0.05),
//!     ("RecoveryFactor", 11.0),
//!     ("CapacityFactor", 92.7),
//! ];
//!
//! let results = run_oat(&factors, &SensitivityConfig::default()).unwrap();
//! assert_eq!(results.as_slice()[0].name(), "Area");
//! assert!((results.as_slice()[0].relative_change() - 0.10).abs() < 1e-12);
//! ```

mod config;
mod error;
mod report;
mod results;
mod series;

pub use config::SensitivityConfig;
pub use error::SensitivityError;
pub use report::SensitivityTable;
pub use results::{SensitivityResult, SensitivityResults};
pub use series::BarSeries;

use twine_core::Model;
use uom::{
    ConstZero,
    si::{f64::Power, power::gigawatt},
};

use crate::models::geothermal::reservoir::{Factor, ParameterVector, VolumetricReservoir};

/// Runs an OAT sweep over named baseline values.
///
/// `factors` must list one `(name, value)` pair per [`Factor`], in
/// [`Factor::ALL`] order. Names are carried into the results unchanged.
///
/// # Errors
///
/// - [`SensitivityError::InvalidShape`] if `factors` does not hold exactly seven pairs.
/// - [`SensitivityError::InvalidPerturbation`] if the perturbation is not finite.
pub fn run_oat<S: AsRef<str>>(
    factors: &[(S, f64)],
    config: &SensitivityConfig,
) -> Result<SensitivityResults, SensitivityError> {
    let values: Vec<f64> = factors.iter().map(|(_, value)| *value).collect();
    let baseline = ParameterVector::from_slice(&values)?;
    let names = factors.iter().map(|(name, _)| name.as_ref().to_owned());

    let model = VolumetricReservoir::new(config.constants);
    sweep(&model, baseline, names, config.perturbation)
}

/// Runs an OAT sweep over a parameter vector, labeling rows by [`Factor::label`].
///
/// # Errors
///
/// Returns [`SensitivityError::InvalidPerturbation`] if the perturbation is not finite.
pub fn run_oat_vector(
    baseline: &ParameterVector,
    config: &SensitivityConfig,
) -> Result<SensitivityResults, SensitivityError> {
    let model = VolumetricReservoir::new(config.constants);
    run_oat_with(&model, baseline, config.perturbation)
}

/// Runs an OAT sweep against any model that maps a [`ParameterVector`] to power.
///
/// # Errors
///
/// Returns [`SensitivityError::InvalidPerturbation`] if the perturbation is not
/// finite, or [`SensitivityError::ModelFailed`] if any evaluation fails.
pub fn run_oat_with<M>(
    model: &M,
    baseline: &ParameterVector,
    perturbation: f64,
) -> Result<SensitivityResults, SensitivityError>
where
    M: Model<Input = ParameterVector, Output = Power>,
    M::Error: std::error::Error + Send + Sync + 'static,
{
    let names = Factor::ALL.iter().map(|factor| factor.label().to_owned());
    sweep(model, *baseline, names, perturbation)
}

fn sweep<M>(
    model: &M,
    baseline: ParameterVector,
    names: impl Iterator<Item = String>,
    perturbation: f64,
) -> Result<SensitivityResults, SensitivityError>
where
    M: Model<Input = ParameterVector, Output = Power>,
    M::Error: std::error::Error + Send + Sync + 'static,
{
    if !perturbation.is_finite() {
        return Err(SensitivityError::InvalidPerturbation { perturbation });
    }
    let multiplier = 1.0 + perturbation;

    // The model is pure, so the baseline is evaluated once for every factor.
    let baseline_power = model
        .call(&baseline)
        .map_err(|err| SensitivityError::model_failed("baseline", err))?;

    if baseline_power == Power::ZERO || !baseline_power.is_finite() {
        tracing::warn!(
            baseline_gwe = baseline_power.get::<gigawatt>(),
            "baseline capacity is zero or not finite; relative changes are undefined"
        );
    }

    let mut results = Vec::with_capacity(Factor::COUNT);
    for (factor, name) in Factor::ALL.into_iter().zip(names) {
        let perturbed = baseline.with_scaled(factor, multiplier);
        let perturbed_power = model
            .call(&perturbed)
            .map_err(|err| SensitivityError::model_failed(format!("{factor} perturbed"), err))?;

        let result = SensitivityResult::new(factor, name, baseline_power, perturbed_power);
        tracing::debug!(
            %factor,
            baseline_gwe = baseline_power.get::<gigawatt>(),
            perturbed_gwe = perturbed_power.get::<gigawatt>(),
            relative_change = result.relative_change(),
            "evaluated factor"
        );
        results.push(result);
    }

    Ok(SensitivityResults::new(
        baseline,
        perturbation,
        baseline_power,
        results,
    ))
}
