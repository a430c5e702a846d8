//! Shared view-model types for the guest analytics dashboard.
//! The dashboard has no backend: every displayed figure is either a fixture
//! literal reproduced verbatim or a series generated client-side at panel
//! mount. These types give the frontend one typed vocabulary for summary
//! cards, category breakdowns and chart series.

mod breakdown;
mod fixtures;
mod series;
mod summary;

pub use breakdown::{BreakdownSlice, CategoryBreakdown};
pub use fixtures::{
    age_breakdown, checkin_series, engagement_metrics, gender_breakdown, overview_rates,
    payment_method_breakdown, performance_cards, quick_stats, recent_activity, reports_summary,
    whatsapp_template_usage, ActivityEntry, CheckinRecord, RateMetric, TemplateUsage,
};
pub use series::{generate_metric_series, DateRange, MetricRecord, REPORT_WINDOW_LABEL};
pub use summary::{SummaryMetric, TrendDirection};
