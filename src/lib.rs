//! # Twine Geothermal
//!
//! Volumetric geothermal reservoir modeling for
//! [Twine](https://github.com/isentropic-dev/twine), with a one-at-a-time
//! sensitivity analysis built on top of it.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`analysis`]: Studies that drive models repeatedly and collect results.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_geothermal::analysis::sensitivity::{SensitivityConfig, SensitivityTable, run_oat_vector};
//! use twine_geothermal::models::geothermal::reservoir::ParameterVector;
//!
//! let results = run_oat_vector(&ParameterVector::reference(), &SensitivityConfig::default())
//!     .expect("reference analysis is well-formed");
//!
//! assert_eq!(results.len(), 7);
//! println!("{}", SensitivityTable::new(&results));
//! ```

pub mod analysis;
pub mod models;
pub mod support;
