//! Fixture data displayed by the dashboard panels.
//!
//! These are literal product figures, not computed aggregates. They are
//! intentionally not reconciled against each other or against generated
//! series; reproduce them verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::breakdown::{BreakdownSlice, CategoryBreakdown};
use crate::summary::{SummaryMetric, TrendDirection};

/// One day of check-in activity, tracked as fixed observations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckinRecord {
    pub date: NaiveDate,
    pub total_checkins: u32,
    pub contactless_checkins: u32,
    pub total_checkouts: u32,
}

/// Delivered/read counts for one WhatsApp message template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateUsage {
    pub name: String,
    pub delivered: u32,
    pub read: u32,
}

/// A labelled completion percentage for the overview progress rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateMetric {
    pub label: String,
    /// Percent in [0, 100].
    pub percent: u32,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub action: String,
    pub subject: String,
    pub time_ago: String,
    pub badge: String,
}

// ===================== Insights =====================

pub fn engagement_metrics() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Email Sent".to_string(),
            value: "2,436".to_string(),
            change: "+12.5%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-paper-plane".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "Email Link Opened".to_string(),
            value: "350".to_string(),
            change: "+8.2%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-link".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "WhatsApp Sent".to_string(),
            value: "8,768".to_string(),
            change: "+24.3%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-comment".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "WhatsApp Link Opened".to_string(),
            value: "452".to_string(),
            change: "+6.7%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-link".to_string(),
            detail: None,
            accent: None,
        },
    ]
}

pub fn quick_stats() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Average Order".to_string(),
            value: "$124.32".to_string(),
            change: "+12.5%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-credit-card".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "Total Revenue".to_string(),
            value: "$45,678".to_string(),
            change: "+8.2%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-wallet".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "Conversion Rate".to_string(),
            value: "5.16%".to_string(),
            change: "+0.8%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-comment".to_string(),
            detail: None,
            accent: None,
        },
        SummaryMetric {
            label: "Click Rate".to_string(),
            value: "14.38%".to_string(),
            change: "-2.1%".to_string(),
            direction: TrendDirection::Down,
            icon: "fas fa-paper-plane".to_string(),
            detail: None,
            accent: None,
        },
    ]
}

pub fn age_breakdown() -> CategoryBreakdown {
    CategoryBreakdown::new(vec![
        BreakdownSlice::new("Children (00-14 years)", 5, "#f87171"),
        BreakdownSlice::new("Youth (15-24 years)", 25, "#10b981"),
        BreakdownSlice::new("Adults (25-35 years)", 45, "#fb923c"),
        BreakdownSlice::new("Middle Aged (36-50 years)", 20, "#a3e635"),
        BreakdownSlice::new("Seniors (50+ years)", 5, "#818cf8"),
    ])
}

pub fn gender_breakdown() -> CategoryBreakdown {
    CategoryBreakdown::new(vec![
        BreakdownSlice::new("Male", 55, "#60a5fa"),
        BreakdownSlice::new("Female", 42, "#f472b6"),
        BreakdownSlice::new("Other", 3, "#a78bfa"),
    ])
}

pub fn payment_method_breakdown() -> CategoryBreakdown {
    CategoryBreakdown::new(vec![
        BreakdownSlice::new("Cash", 10, "#f87171"),
        BreakdownSlice::new("Swipe", 5, "#10b981"),
        BreakdownSlice::new("Hotel UPI", 7, "#fb923c"),
        BreakdownSlice::new("Card", 38, "#84cc16"),
        BreakdownSlice::new("UPI", 30, "#22d3ee"),
        BreakdownSlice::new("Internet Banking", 5, "#fcd34d"),
        BreakdownSlice::new("Wallet", 3, "#d1d5db"),
        BreakdownSlice::new("Paylater", 2, "#60a5fa"),
    ])
}

// ===================== Performance =====================

pub fn performance_cards() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Total Revenue".to_string(),
            value: "$124,750.50".to_string(),
            change: "+12.5%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-arrow-trend-up".to_string(),
            detail: Some("Compared to last month".to_string()),
            accent: None,
        },
        SummaryMetric {
            label: "Food Orders".to_string(),
            value: "8,942".to_string(),
            change: "+7.2%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-chart-column".to_string(),
            detail: Some("Increased from previous period".to_string()),
            accent: None,
        },
        SummaryMetric {
            label: "Upsell Conversion".to_string(),
            value: "24.8%".to_string(),
            change: "+3.1%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-arrow-trend-up".to_string(),
            detail: Some("Higher than target rate".to_string()),
            accent: None,
        },
        SummaryMetric {
            label: "Avg. Order Value".to_string(),
            value: "$42.35".to_string(),
            change: "+5.7%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-credit-card".to_string(),
            detail: Some("12% above industry average".to_string()),
            accent: None,
        },
    ]
}

// ===================== Reports =====================

pub fn reports_summary() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric {
            label: "Total Check-ins".to_string(),
            value: "284".to_string(),
            change: "+12%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-users".to_string(),
            detail: Some("from last month".to_string()),
            accent: Some("bg-green-500".to_string()),
        },
        SummaryMetric {
            label: "Contactless Check-ins".to_string(),
            value: "154".to_string(),
            change: "+5%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-wave-square".to_string(),
            detail: Some("from last month".to_string()),
            accent: Some("bg-blue-500".to_string()),
        },
        SummaryMetric {
            label: "Total Check-outs".to_string(),
            value: "237".to_string(),
            change: "+8%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-clock".to_string(),
            detail: Some("from last month".to_string()),
            accent: Some("bg-orange-500".to_string()),
        },
        SummaryMetric {
            label: "WhatsApp Messages".to_string(),
            value: "354".to_string(),
            change: "+22%".to_string(),
            direction: TrendDirection::Up,
            icon: "fas fa-comment".to_string(),
            detail: Some("from last month".to_string()),
            accent: Some("bg-purple-500".to_string()),
        },
    ]
}

pub fn checkin_series() -> Vec<CheckinRecord> {
    let day = |d: u32| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();

    vec![
        CheckinRecord { date: day(12), total_checkins: 30, contactless_checkins: 20, total_checkouts: 15 },
        CheckinRecord { date: day(13), total_checkins: 20, contactless_checkins: 10, total_checkouts: 18 },
        CheckinRecord { date: day(14), total_checkins: 29, contactless_checkins: 18, total_checkouts: 22 },
        CheckinRecord { date: day(15), total_checkins: 22, contactless_checkins: 8, total_checkouts: 36 },
        CheckinRecord { date: day(16), total_checkins: 15, contactless_checkins: 5, total_checkouts: 18 },
        CheckinRecord { date: day(17), total_checkins: 12, contactless_checkins: 7, total_checkouts: 15 },
        CheckinRecord { date: day(18), total_checkins: 25, contactless_checkins: 15, total_checkouts: 18 },
        CheckinRecord { date: day(19), total_checkins: 24, contactless_checkins: 12, total_checkouts: 22 },
        CheckinRecord { date: day(20), total_checkins: 18, contactless_checkins: 8, total_checkouts: 19 },
        CheckinRecord { date: day(21), total_checkins: 27, contactless_checkins: 17, total_checkouts: 25 },
        CheckinRecord { date: day(22), total_checkins: 32, contactless_checkins: 22, total_checkouts: 28 },
    ]
}

pub fn whatsapp_template_usage() -> Vec<TemplateUsage> {
    vec![
        TemplateUsage { name: "ask_for_booking_payment".to_string(), delivered: 80, read: 160 },
        TemplateUsage { name: "checkin_default".to_string(), delivered: 120, read: 85 },
        TemplateUsage { name: "feedback".to_string(), delivered: 20, read: 15 },
        TemplateUsage { name: "price_quotation".to_string(), delivered: 10, read: 6 },
        TemplateUsage { name: "review".to_string(), delivered: 60, read: 55 },
        TemplateUsage { name: "test_template".to_string(), delivered: 30, read: 20 },
        TemplateUsage { name: "today_unpaid".to_string(), delivered: 8, read: 12 },
        TemplateUsage { name: "tomorrow_unpaid".to_string(), delivered: 4, read: 7 },
    ]
}

pub fn overview_rates() -> Vec<RateMetric> {
    vec![
        RateMetric { label: "Check-in Completion Rate".to_string(), percent: 78 },
        RateMetric { label: "WhatsApp Read Rate".to_string(), percent: 65 },
        RateMetric { label: "Template Efficiency".to_string(), percent: 92 },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "New check-in".to_string(),
            subject: "Room 304".to_string(),
            time_ago: "5 minutes ago".to_string(),
            badge: "Check-in".to_string(),
        },
        ActivityEntry {
            action: "WhatsApp template sent".to_string(),
            subject: "Emily Parker".to_string(),
            time_ago: "12 minutes ago".to_string(),
            badge: "Message".to_string(),
        },
        ActivityEntry {
            action: "Check-out completed".to_string(),
            subject: "Room 215".to_string(),
            time_ago: "43 minutes ago".to_string(),
            badge: "Check-out".to_string(),
        },
        ActivityEntry {
            action: "Payment received".to_string(),
            subject: "Alex Johnson".to_string(),
            time_ago: "1 hour ago".to_string(),
            badge: "Payment".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_breakdown_has_five_bands() {
        let breakdown = age_breakdown();

        assert_eq!(breakdown.slices.len(), 5);
        assert_eq!(breakdown.share_total(), 100);
    }

    #[test]
    fn gender_breakdown_has_three_entries_summing_to_hundred() {
        let breakdown = gender_breakdown();

        assert_eq!(breakdown.slices.len(), 3);
        assert_eq!(breakdown.shares(), vec![55, 42, 3]);
        assert_eq!(breakdown.share_total(), 100);
    }

    #[test]
    fn payment_breakdown_has_eight_methods() {
        let breakdown = payment_method_breakdown();

        assert_eq!(breakdown.slices.len(), 8);
        assert_eq!(breakdown.share_total(), 100);
    }

    #[test]
    fn checkin_series_covers_eleven_ascending_days() {
        let series = checkin_series();

        assert_eq!(series.len(), 11);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(series[10].date, NaiveDate::from_ymd_opt(2025, 3, 22).unwrap());
        for pair in series.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn card_fixtures_have_four_entries_each() {
        assert_eq!(engagement_metrics().len(), 4);
        assert_eq!(quick_stats().len(), 4);
        assert_eq!(performance_cards().len(), 4);
        assert_eq!(reports_summary().len(), 4);
    }

    #[test]
    fn every_reports_card_carries_an_accent() {
        assert!(reports_summary().iter().all(|m| m.accent.is_some()));
    }

    #[test]
    fn overview_rates_stay_within_percent_scale() {
        let rates = overview_rates();

        assert_eq!(rates.len(), 3);
        assert!(rates.iter().all(|r| r.percent <= 100));
    }

    #[test]
    fn whatsapp_usage_lists_all_templates() {
        let usage = whatsapp_template_usage();

        assert_eq!(usage.len(), 8);
        assert_eq!(usage[0].name, "ask_for_booking_payment");
        assert_eq!(usage[0].read, 160);
    }
}
