use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::{generate_metric_series, DateRange, MetricRecord};

/// Lifecycle of a generated metric series. There is no error state because
/// generation cannot fail.
#[derive(Clone, PartialEq)]
pub enum SeriesState {
    Loading,
    Ready(Vec<MetricRecord>),
}

impl SeriesState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn records(&self) -> Option<&[MetricRecord]> {
        match self {
            Self::Ready(records) => Some(records),
            Self::Loading => None,
        }
    }
}

/// Generates one metric series per mount, deferred behind a one-shot timer
/// so the loading placeholder does not flash.
///
/// The effect runs once (empty dependency tuple), so sub-tab changes and
/// re-renders never trigger another generation. The cleanup drops the
/// timeout handle, which cancels it: unmounting before the timer fires
/// discards the pending transition instead of mutating a dead panel's
/// state.
#[hook]
pub fn use_generated_series(range: DateRange) -> UseStateHandle<SeriesState> {
    let state = use_state(|| SeriesState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let delay = crate::settings::get_settings().loading_delay_ms;
            log::debug!("scheduling series generation in {}ms", delay);

            let timeout = Timeout::new(delay, move || {
                state.set(SeriesState::Ready(generate_metric_series(range)));
            });

            move || drop(timeout)
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn loading_state_exposes_no_records() {
        let state = SeriesState::Loading;

        assert!(state.is_loading());
        assert!(state.records().is_none());
    }

    #[test]
    fn ready_state_exposes_the_generated_series() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let series = generate_metric_series(DateRange::new(day, day));
        let state = SeriesState::Ready(series.clone());

        assert!(!state.is_loading());
        assert_eq!(state.records(), Some(series.as_slice()));
    }
}
