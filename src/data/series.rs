use serde::Serialize;

// ---------------------------------------------------------------------------
// Chart-ready output series
// ---------------------------------------------------------------------------

/// One slice of the success distribution: `{label, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionSlice {
    pub label: String,
    pub value: usize,
}

/// Ordered `(label, count)` pairs for the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessDistribution {
    pub title: String,
    pub slices: Vec<DistributionSlice>,
}

impl SuccessDistribution {
    /// Sum of all slice counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Convenience view as `(label, count)` tuples.
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }
}

/// One scatter point: payload mass, outcome and booster category (colour key).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    pub color: String,
}

/// Payload-vs-outcome points in dataset row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
