use thiserror::Error;

use crate::models::geothermal::reservoir::InvalidShape;

/// Errors that stop a sensitivity sweep before it produces results.
#[derive(Debug, Error)]
pub enum SensitivityError {
    /// The baseline did not hold one value per factor.
    #[error("invalid baseline: {0}")]
    InvalidShape(#[from] InvalidShape),

    /// The perturbation fraction is NaN or infinite.
    #[error("perturbation must be finite, got {perturbation}")]
    InvalidPerturbation { perturbation: f64 },

    /// The model failed to evaluate a parameter vector.
    #[error("model evaluation failed: {context}")]
    ModelFailed {
        /// Which evaluation failed.
        context: String,

        /// Underlying model error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SensitivityError {
    pub(super) fn model_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ModelFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
