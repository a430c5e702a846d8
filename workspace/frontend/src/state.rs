//! View-state selectors for the shell and the panel sub-tabs.
//!
//! Every selector is a closed enum rather than an open string key. Raw keys
//! from the outside resolve through `from_key`; an unknown key resolves to
//! `None`, which the shell renders as nothing.

/// The active top-level dashboard panel. Owned by the shell, reset to
/// Insights on every page load; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabSelection {
    #[default]
    Insights,
    Performance,
    Reports,
}

impl TabSelection {
    pub const ALL: [TabSelection; 3] = [
        TabSelection::Insights,
        TabSelection::Performance,
        TabSelection::Reports,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TabSelection::Insights => "insights",
            TabSelection::Performance => "performance",
            TabSelection::Reports => "reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TabSelection::Insights => "Insights",
            TabSelection::Performance => "Performance",
            TabSelection::Reports => "Reports",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "insights" => Some(TabSelection::Insights),
            "performance" => Some(TabSelection::Performance),
            "reports" => Some(TabSelection::Reports),
            _ => None,
        }
    }
}

/// Guest Stats sub-tab on the Insights panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsBreakdown {
    #[default]
    ByAge,
    ByGender,
}

impl StatsBreakdown {
    pub fn label(self) -> &'static str {
        match self {
            StatsBreakdown::ByAge => "By Age",
            StatsBreakdown::ByGender => "By Gender",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "by_age" => Some(StatsBreakdown::ByAge),
            "by_gender" => Some(StatsBreakdown::ByGender),
            _ => None,
        }
    }
}

/// Payments sub-tab on the Insights panel. All three categories currently
/// display the same payment-method breakdown; the selection still exists
/// as its own state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentCategory {
    #[default]
    Reservation,
    Food,
    Upsell,
}

impl PaymentCategory {
    pub const ALL: [PaymentCategory; 3] = [
        PaymentCategory::Reservation,
        PaymentCategory::Food,
        PaymentCategory::Upsell,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentCategory::Reservation => "Reservation",
            PaymentCategory::Food => "Food",
            PaymentCategory::Upsell => "Upsell",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "reservation" => Some(PaymentCategory::Reservation),
            "food" => Some(PaymentCategory::Food),
            "upsell" => Some(PaymentCategory::Upsell),
            _ => None,
        }
    }
}

/// Detail sub-view on the Performance panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerformanceView {
    #[default]
    Details,
    Comparison,
}

impl PerformanceView {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceView::Details => "Detailed Analytics",
            PerformanceView::Comparison => "Comparison View",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "details" => Some(PerformanceView::Details),
            "comparison" => Some(PerformanceView::Comparison),
            _ => None,
        }
    }
}

/// Chart sub-tab on the Reports panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportsView {
    #[default]
    CheckIns,
    WhatsApp,
}

impl ReportsView {
    pub fn label(self) -> &'static str {
        match self {
            ReportsView::CheckIns => "Check-ins Track",
            ReportsView::WhatsApp => "WhatsApp Usage",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "check-ins" => Some(ReportsView::CheckIns),
            "whatsapp" => Some(ReportsView::WhatsApp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_valid_tab_key_selects_its_own_panel() {
        for tab in TabSelection::ALL {
            assert_eq!(TabSelection::from_key(tab.key()), Some(tab));
        }

        // Labels are distinct, so each selection shows exactly one panel.
        let labels: Vec<_> = TabSelection::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Insights", "Performance", "Reports"]);
    }

    #[test]
    fn unknown_tab_key_selects_nothing() {
        assert_eq!(TabSelection::from_key("settings"), None);
        assert_eq!(TabSelection::from_key(""), None);
        assert_eq!(TabSelection::from_key("Insights"), None);
    }

    #[test]
    fn shell_starts_on_insights() {
        assert_eq!(TabSelection::default(), TabSelection::Insights);
    }

    #[test]
    fn sub_tabs_start_on_their_fixed_defaults() {
        assert_eq!(StatsBreakdown::default(), StatsBreakdown::ByAge);
        assert_eq!(PaymentCategory::default(), PaymentCategory::Reservation);
        assert_eq!(PerformanceView::default(), PerformanceView::Details);
        assert_eq!(ReportsView::default(), ReportsView::CheckIns);
    }

    #[test]
    fn sub_tab_keys_round_trip() {
        assert_eq!(StatsBreakdown::from_key("by_gender"), Some(StatsBreakdown::ByGender));
        assert_eq!(PaymentCategory::from_key("upsell"), Some(PaymentCategory::Upsell));
        assert_eq!(PerformanceView::from_key("comparison"), Some(PerformanceView::Comparison));
        assert_eq!(ReportsView::from_key("whatsapp"), Some(ReportsView::WhatsApp));

        assert_eq!(StatsBreakdown::from_key("by_income"), None);
        assert_eq!(PaymentCategory::from_key("spa"), None);
        assert_eq!(PerformanceView::from_key("summary"), None);
        assert_eq!(ReportsView::from_key("sms"), None);
    }

    #[test]
    fn reselecting_the_active_sub_tab_is_a_no_op() {
        let active = StatsBreakdown::ByGender;
        let reselected = StatsBreakdown::from_key("by_gender").unwrap();

        // Same variant: setting it again leaves the state unchanged.
        assert_eq!(active, reselected);
    }
}
