use serde::{Deserialize, Serialize};

/// Direction of the trend delta shown next to a summary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

/// A labelled, preformatted dashboard figure with its trend delta.
///
/// Values are fixture literals passed through to the rendering layer
/// unchanged; nothing here is computed from other fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryMetric {
    pub label: String,
    /// Already formatted for display ("$124,750.50", "8,942", "24.8%").
    pub value: String,
    /// Trend magnitude, already formatted ("+12.5%", "-2.1%").
    pub change: String,
    pub direction: TrendDirection,
    /// Font Awesome class for the card icon.
    pub icon: String,
    /// Optional caption shown under the change ("Compared to last month").
    pub detail: Option<String>,
    /// Optional color tag for accent-bar cards.
    pub accent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_passes_values_through_unchanged() {
        let metric = SummaryMetric {
            label: "Total Revenue".to_string(),
            value: "$124,750.50".to_string(),
            change: "+12.5%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-arrow-trend-up".to_string(),
            detail: Some("Compared to last month".to_string()),
            accent: None,
        };

        assert_eq!(metric.value, "$124,750.50");
        assert!(metric.direction.is_up());
    }
}
