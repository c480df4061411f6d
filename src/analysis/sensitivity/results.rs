use std::slice;

use uom::{
    ConstZero,
    si::{f64::Power, power::gigawatt, ratio::ratio},
};

use crate::models::geothermal::reservoir::{Factor, ParameterVector};

use super::series::BarSeries;

/// Outcome of perturbing a single factor.
///
/// Records are created once during a sweep and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityResult {
    factor: Factor,
    name: String,
    baseline_power: Power,
    perturbed_power: Power,
    absolute_change: Power,
    relative_change: f64,
}

impl SensitivityResult {
    /// Builds a record from baseline and perturbed capacity.
    ///
    /// A baseline of exactly zero makes the relative change undefined; it is
    /// stored as `NaN`. Any non-finite relative change, such as one from an
    /// infinite baseline, makes [`is_degenerate`](Self::is_degenerate) true.
    #[must_use]
    pub fn new(
        factor: Factor,
        name: impl Into<String>,
        baseline_power: Power,
        perturbed_power: Power,
    ) -> Self {
        let absolute_change = (perturbed_power - baseline_power).abs();
        let relative_change = if baseline_power == Power::ZERO {
            f64::NAN
        } else {
            (absolute_change / baseline_power).get::<ratio>()
        };

        Self {
            factor,
            name: name.into(),
            baseline_power,
            perturbed_power,
            absolute_change,
            relative_change,
        }
    }

    #[must_use]
    pub fn factor(&self) -> Factor {
        self.factor
    }

    /// Label supplied for this factor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn baseline_power(&self) -> Power {
        self.baseline_power
    }

    #[must_use]
    pub fn perturbed_power(&self) -> Power {
        self.perturbed_power
    }

    /// `|perturbed - baseline|`.
    #[must_use]
    pub fn absolute_change(&self) -> Power {
        self.absolute_change
    }

    /// Absolute change divided by baseline capacity, or `NaN` if degenerate.
    #[must_use]
    pub fn relative_change(&self) -> f64 {
        self.relative_change
    }

    /// Relative change, or `None` when it is not a finite number.
    #[must_use]
    pub fn relative_change_checked(&self) -> Option<f64> {
        (!self.is_degenerate()).then_some(self.relative_change)
    }

    /// Absolute change in GWe, or `None` when it is not a finite number.
    #[must_use]
    pub fn absolute_change_checked(&self) -> Option<f64> {
        Some(self.absolute_change.get::<gigawatt>()).filter(|v| v.is_finite())
    }

    /// True when no finite relative change exists.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.relative_change.is_finite()
    }
}

/// Ordered results of a sweep, one per factor in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityResults {
    baseline: ParameterVector,
    perturbation: f64,
    baseline_power: Power,
    results: Vec<SensitivityResult>,
}

impl SensitivityResults {
    pub(super) fn new(
        baseline: ParameterVector,
        perturbation: f64,
        baseline_power: Power,
        results: Vec<SensitivityResult>,
    ) -> Self {
        Self {
            baseline,
            perturbation,
            baseline_power,
            results,
        }
    }

    /// The unperturbed parameter vector.
    #[must_use]
    pub fn baseline(&self) -> &ParameterVector {
        &self.baseline
    }

    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    #[must_use]
    pub fn baseline_power(&self) -> Power {
        self.baseline_power
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SensitivityResult] {
        &self.results
    }

    pub fn iter(&self) -> slice::Iter<'_, SensitivityResult> {
        self.results.iter()
    }

    /// Returns the record for `factor`.
    #[must_use]
    pub fn get(&self, factor: Factor) -> Option<&SensitivityResult> {
        self.results.iter().find(|r| r.factor == factor)
    }

    /// True if any record has an undefined relative change.
    #[must_use]
    pub fn has_degenerate(&self) -> bool {
        self.results.iter().any(SensitivityResult::is_degenerate)
    }

    /// Records sorted by absolute change, largest first.
    ///
    /// Ties keep declaration order and `NaN` changes sort last.
    /// The stored order is not affected.
    #[must_use]
    pub fn ranked(&self) -> Vec<&SensitivityResult> {
        let mut ranked: Vec<_> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            let (a, b) = (a.absolute_change.value, b.absolute_change.value);
            a.is_nan().cmp(&b.is_nan()).then_with(|| b.total_cmp(&a))
        });
        ranked
    }

    /// Absolute changes in GWe, for a bar chart.
    ///
    /// Non-finite changes have no value.
    #[must_use]
    pub fn absolute_series(&self) -> BarSeries {
        BarSeries::new(
            "Absolute change in power output",
            "GWe",
            self.results
                .iter()
                .map(|r| (r.name.clone(), r.absolute_change_checked())),
        )
    }

    /// Relative changes in percent, for a bar chart.
    ///
    /// Degenerate records have no value.
    #[must_use]
    pub fn relative_series_percent(&self) -> BarSeries {
        BarSeries::new(
            "Relative change in power output",
            "%",
            self.results.iter().map(|r| {
                (
                    r.name.clone(),
                    r.relative_change_checked().map(|v| v * 100.0),
                )
            }),
        )
    }
}

impl<'a> IntoIterator for &'a SensitivityResults {
    type Item = &'a SensitivityResult;
    type IntoIter = slice::Iter<'a, SensitivityResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
