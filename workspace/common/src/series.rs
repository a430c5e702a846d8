use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Label shown next to every chart that covers the reporting window.
pub const REPORT_WINDOW_LABEL: &str = "March 12, 2025 - April 10, 2025";

/// Inclusive run of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "range must not be empty");
        Self { start, end }
    }

    /// The fixed window the dashboard reports on.
    pub fn reporting_window() -> Self {
        Self::new(
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        )
    }

    /// Number of calendar days covered, both endpoints included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// One day of observed business metrics.
///
/// Payment fields are decimal currency amounts, `sales_rate` is in [0, 1)
/// and `cancel_rate` in [0, 0.3).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricRecord {
    pub date: NaiveDate,
    pub total_payment: u32,
    pub booking_payment: u32,
    pub food_payment: u32,
    pub upsell_payment: u32,
    pub sales_rate: f64,
    pub cancel_rate: f64,
}

/// Produces one record per calendar day in `range`, in ascending date order.
///
/// Fields are drawn independently from uniform distributions over fixed
/// ranges. Unseeded: every call yields a fresh series.
pub fn generate_metric_series(range: DateRange) -> Vec<MetricRecord> {
    let mut rng = rand::thread_rng();
    let mut records = Vec::with_capacity(range.num_days() as usize);

    let mut date = range.start;
    while date <= range.end {
        records.push(MetricRecord {
            date,
            total_payment: rng.gen_range(2_000..32_000),
            booking_payment: rng.gen_range(1_000..16_000),
            food_payment: rng.gen_range(500..8_500),
            upsell_payment: rng.gen_range(200..5_200),
            sales_rate: rng.gen_range(0.0..1.0),
            cancel_rate: rng.gen_range(0.0..0.3),
        });
        date = date + Duration::days(1);
    }

    log::trace!(
        "generated {} metric records for {} to {}",
        records.len(),
        range.start,
        range.end
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_window_covers_thirty_days() {
        let range = DateRange::reporting_window();
        assert_eq!(range.num_days(), 30);
    }

    #[test]
    fn series_has_one_record_per_day() {
        let range = DateRange::reporting_window();
        let series = generate_metric_series(range);

        assert_eq!(series.len(), 30);
        for (i, record) in series.iter().enumerate() {
            assert_eq!(record.date, range.start + Duration::days(i as i64));
        }
    }

    #[test]
    fn series_dates_strictly_ascending_without_gaps() {
        let series = generate_metric_series(DateRange::reporting_window());

        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn single_day_range_yields_single_record() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let series = generate_metric_series(DateRange::new(day, day));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, day);
    }

    #[test]
    fn generated_fields_stay_in_documented_ranges() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let range = DateRange::new(day, day + Duration::days(2));

        for _ in 0..1_000 {
            for record in generate_metric_series(range) {
                assert!((2_000..32_000).contains(&record.total_payment));
                assert!((1_000..16_000).contains(&record.booking_payment));
                assert!((500..8_500).contains(&record.food_payment));
                assert!((200..5_200).contains(&record.upsell_payment));
                assert!((0.0..1.0).contains(&record.sales_rate));
                assert!((0.0..0.3).contains(&record.cancel_rate));
            }
        }
    }

    #[test]
    fn record_date_serializes_as_iso_day() {
        let series = generate_metric_series(DateRange::reporting_window());
        let json = serde_json::to_value(&series[0]).unwrap();

        assert_eq!(json["date"], serde_json::json!("2025-03-12"));
    }
}
