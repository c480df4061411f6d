//! Reference one-at-a-time sensitivity study for a 225 km² reservoir.
//!
//! Run with `RUST_LOG=twine_geothermal=debug` to see each evaluation.

use tracing_subscriber::EnvFilter;
use twine_geothermal::{
    analysis::sensitivity::{SensitivityConfig, SensitivityError, SensitivityTable, run_oat},
    models::geothermal::reservoir::ParameterVector,
};
use uom::si::power::gigawatt;

fn main() -> Result<(), SensitivityError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("twine_geothermal=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    let baseline = ParameterVector::reference();
    let factors: Vec<_> = baseline
        .iter()
        .map(|(factor, value)| (format!("{} ({})", factor.label(), factor.unit()), value))
        .collect();

    let config = SensitivityConfig::default();
    let results = run_oat(&factors, &config)?;

    tracing::info!(
        baseline_gwe = results.baseline_power().get::<gigawatt>(),
        perturbation = config.perturbation,
        "sensitivity sweep complete"
    );

    println!("{}", SensitivityTable::new(&results));

    println!("Ranked by absolute change:");
    for result in results.ranked() {
        println!(
            "  {:<24} {:.4e} GWe",
            result.name(),
            result.absolute_change().get::<gigawatt>()
        );
    }

    for series in [results.absolute_series(), results.relative_series_percent()] {
        println!("\n{} [{}]", series.title, series.unit);
        for (label, value) in series.iter() {
            match value {
                Some(value) => println!("  {label:<24} {value:>12.4}"),
                None => println!("  {label:<24} {:>12}", "N/A"),
            }
        }
    }

    Ok(())
}
