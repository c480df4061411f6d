//! Fixed-width text report of sensitivity results.

use std::fmt;

use super::SensitivityResults;

const ABSOLUTE_HEADER: &str = "Absolute Change (GWe)";
const RELATIVE_HEADER: &str = "Relative Change (%)";

/// Text table with one row per factor.
///
/// Absolute change is printed in scientific notation and relative change as
/// a percentage with two decimals.
/// Values that are not finite, such as the relative change of a zero
/// baseline, print as `N/A`.
///
/// ```
/// use twine_geothermal::analysis::sensitivity::{SensitivityConfig, SensitivityTable, run_oat_vector};
/// use twine_geothermal::models::geothermal::reservoir::ParameterVector;
///
/// let results = run_oat_vector(&ParameterVector::reference(), &SensitivityConfig::default()).unwrap();
/// let table = SensitivityTable::new(&results).to_string();
/// assert!(table.lines().any(|line| line.starts_with("Area") && line.ends_with("10.00")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SensitivityTable<'a> {
    results: &'a SensitivityResults,
}

impl<'a> SensitivityTable<'a> {
    #[must_use]
    pub fn new(results: &'a SensitivityResults) -> Self {
        Self { results }
    }

    fn name_width(&self) -> usize {
        self.results
            .iter()
            .map(|r| r.name().chars().count())
            .chain(std::iter::once("Factor".len()))
            .max()
            .unwrap_or_default()
    }
}

impl fmt::Display for SensitivityTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_w = self.name_width();
        let abs_w = ABSOLUTE_HEADER.len();
        let rel_w = RELATIVE_HEADER.len();

        writeln!(
            f,
            "{:<name_w$}  {ABSOLUTE_HEADER:>abs_w$}  {RELATIVE_HEADER:>rel_w$}",
            "Factor"
        )?;
        writeln!(f, "{}", "-".repeat(name_w + abs_w + rel_w + 4))?;

        for result in self.results {
            let absolute = match result.absolute_change_checked() {
                Some(value) => format!("{value:.4e}"),
                None => "N/A".to_string(),
            };
            let relative = match result.relative_change_checked() {
                Some(value) => format!("{:.2}", value * 100.0),
                None => "N/A".to_string(),
            };
            writeln!(
                f,
                "{:<name_w$}  {absolute:>abs_w$}  {relative:>rel_w$}",
                result.name()
            )?;
        }

        Ok(())
    }
}
