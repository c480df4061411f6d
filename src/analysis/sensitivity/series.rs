/// One bar chart's worth of data: a category label and value per bar.
///
/// `None` marks a bar with no defined value, which renderers should show as
/// missing rather than as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub title: &'static str,
    pub unit: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl BarSeries {
    /// Rotation for category labels, in degrees.
    pub const LABEL_ROTATION_DEGREES: f64 = 45.0;

    pub(super) fn new(
        title: &'static str,
        unit: &'static str,
        bars: impl IntoIterator<Item = (String, Option<f64>)>,
    ) -> Self {
        let (labels, values) = bars.into_iter().unzip();
        Self {
            title,
            unit,
            labels,
            values,
        }
    }

    /// Iterates over `(label, value)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
