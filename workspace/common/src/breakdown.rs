use serde::{Deserialize, Serialize};

/// One labelled share of a category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownSlice {
    pub label: String,
    /// Percent share of the whole. Fixture values are kept verbatim and are
    /// not normalized, so a breakdown may sum to slightly off 100.
    pub share: u32,
    /// Color tag consumed by the chart collaborator and the legend.
    pub color: String,
}

impl BreakdownSlice {
    pub fn new(label: &str, share: u32, color: &str) -> Self {
        Self {
            label: label.to_string(),
            share,
            color: color.to_string(),
        }
    }
}

/// A partition of a metric across named categories, rendered as a donut pie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBreakdown {
    pub slices: Vec<BreakdownSlice>,
}

impl CategoryBreakdown {
    pub fn new(slices: Vec<BreakdownSlice>) -> Self {
        Self { slices }
    }

    pub fn labels(&self) -> Vec<String> {
        self.slices.iter().map(|s| s.label.clone()).collect()
    }

    pub fn shares(&self) -> Vec<u32> {
        self.slices.iter().map(|s| s.share).collect()
    }

    pub fn colors(&self) -> Vec<String> {
        self.slices.iter().map(|s| s.color.clone()).collect()
    }

    pub fn share_total(&self) -> u32 {
        self.slices.iter().map(|s| s.share).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryBreakdown {
        CategoryBreakdown::new(vec![
            BreakdownSlice::new("Male", 55, "#60a5fa"),
            BreakdownSlice::new("Female", 42, "#f472b6"),
            BreakdownSlice::new("Other", 3, "#a78bfa"),
        ])
    }

    #[test]
    fn columns_preserve_slice_order() {
        let breakdown = sample();

        assert_eq!(breakdown.labels(), vec!["Male", "Female", "Other"]);
        assert_eq!(breakdown.shares(), vec![55, 42, 3]);
        assert_eq!(breakdown.colors(), vec!["#60a5fa", "#f472b6", "#a78bfa"]);
    }

    #[test]
    fn share_total_sums_all_slices() {
        assert_eq!(sample().share_total(), 100);
    }
}
