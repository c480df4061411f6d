use crate::models::geothermal::reservoir::ModelConstants;

/// Configuration for a one-at-a-time sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityConfig {
    /// Fractional change applied to each factor (`0.10` scales by `1.10`).
    ///
    /// Negative values are allowed and shrink the factor instead.
    pub perturbation: f64,

    /// Fixed model constants shared by every evaluation.
    pub constants: ModelConstants,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            perturbation: 0.10,
            constants: ModelConstants::default(),
        }
    }
}
