use serde_json::{json, Value};
use web_sys::Element;
use yew::prelude::*;

use crate::components::plotly;
use common::MetricRecord;

/// Last `n` records of the series, or all of them if it is shorter.
fn tail(records: &[MetricRecord], n: usize) -> &[MetricRecord] {
    &records[records.len().saturating_sub(n)..]
}

fn tick_labels(records: &[MetricRecord]) -> Vec<String> {
    records.iter().map(|r| plotly::short_date(r.date)).collect()
}

pub(crate) fn sales_cancellation_traces(records: &[MetricRecord]) -> Value {
    let window = tail(records, 14);
    let x = tick_labels(window);

    json!([
        {
            "x": x.clone(),
            "y": window.iter().map(|r| r.sales_rate).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Total Sales",
            "marker": {"color": "#3b82f6"},
        },
        {
            "x": x.clone(),
            "y": window.iter().map(|r| r.cancel_rate).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Cancelled",
            "marker": {"color": "#f97316"},
        },
    ])
}

pub(crate) fn payment_trend_traces(records: &[MetricRecord]) -> Value {
    let x = tick_labels(records);

    json!([
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.total_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Total Payment",
            "line": {"color": "#10b981", "width": 3, "shape": "spline"},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.booking_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Booking Payment",
            "line": {"color": "#3b82f6", "width": 2},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.food_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Food Payment",
            "line": {"color": "#f97316", "width": 2},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.upsell_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Upsell Payment",
            "line": {"color": "#eab308", "width": 2},
        },
    ])
}

pub(crate) fn trend_detail_traces(records: &[MetricRecord]) -> Value {
    let x = tick_labels(records);

    json!([
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.total_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Total Payment",
            "line": {"color": "#8b5cf6", "width": 3},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.food_payment).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines",
            "name": "Food Payment",
            "line": {"color": "#f97316", "width": 2},
        },
    ])
}

pub(crate) fn sales_comparison_traces(records: &[MetricRecord]) -> Value {
    let window = tail(records, 10);
    let x = tick_labels(window);

    json!([
        {
            "x": x.clone(),
            "y": window.iter().map(|r| r.total_payment).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Total Payment",
            "marker": {"color": "#10b981"},
        },
        {
            "x": x.clone(),
            "y": window.iter().map(|r| r.booking_payment).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Booking Payment",
            "marker": {"color": "#3b82f6"},
        },
        {
            "x": x.clone(),
            "y": window.iter().map(|r| r.sales_rate).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Sales Rate",
            "marker": {"color": "#8b5cf6"},
            "yaxis": "y2",
        },
    ])
}

/// Layout with a second y axis overlaying the right edge, for the
/// rate-vs-currency comparison bars.
pub(crate) fn comparison_layout() -> Value {
    let mut layout = plotly::base_layout();
    layout["yaxis2"] = json!({"overlaying": "y", "side": "right", "showgrid": false});
    layout
}

#[derive(Properties, PartialEq)]
pub struct SeriesChartProps {
    pub records: Vec<MetricRecord>,
}

/// Grouped bars of daily sales vs cancellation rates over the last 14 days.
#[function_component(SalesCancellationChart)]
pub fn sales_cancellation_chart(props: &SeriesChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (props.records.clone(), chart_ref.clone()),
        move |(records, chart_ref)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    plotly::render(
                        &div_id,
                        &sales_cancellation_traces(records),
                        &plotly::base_layout(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-sales-cancellations" class="chart-container" style="height: 300px;"></div>
    }
}

/// Revenue trend lines by payment category over the full window.
#[function_component(PaymentTrendChart)]
pub fn payment_trend_chart(props: &SeriesChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (props.records.clone(), chart_ref.clone()),
        move |(records, chart_ref)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    plotly::render(
                        &div_id,
                        &payment_trend_traces(records),
                        &plotly::base_layout(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-payment-trends" class="chart-container" style="height: 300px;"></div>
    }
}

/// Total vs food payment lines for the detailed analytics sub-view.
#[function_component(TrendDetailChart)]
pub fn trend_detail_chart(props: &SeriesChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (props.records.clone(), chart_ref.clone()),
        move |(records, chart_ref)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    plotly::render(
                        &div_id,
                        &trend_detail_traces(records),
                        &plotly::base_layout(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-trend-detail" class="chart-container" style="height: 320px;"></div>
    }
}

/// Side-by-side payment and sales-rate bars for the comparison sub-view.
#[function_component(SalesComparisonChart)]
pub fn sales_comparison_chart(props: &SeriesChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (props.records.clone(), chart_ref.clone()),
        move |(records, chart_ref)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    plotly::render(
                        &div_id,
                        &sales_comparison_traces(records),
                        &comparison_layout(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-sales-comparison" class="chart-container" style="height: 320px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{generate_metric_series, DateRange};

    fn series() -> Vec<MetricRecord> {
        generate_metric_series(DateRange::reporting_window())
    }

    #[test]
    fn sales_chart_windows_the_last_fourteen_days() {
        let records = series();
        let traces = sales_cancellation_traces(&records);

        assert_eq!(traces.as_array().unwrap().len(), 2);
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 14);
        // Window ends on the final day of the range.
        assert_eq!(traces[0]["x"][13], "4/10");
        assert_eq!(traces[0]["x"][0], "3/28");
    }

    #[test]
    fn payment_trend_plots_one_line_per_category() {
        let records = series();
        let traces = payment_trend_traces(&records);
        let traces = traces.as_array().unwrap();

        assert_eq!(traces.len(), 4);
        assert_eq!(traces[0]["name"], "Total Payment");
        assert_eq!(traces[0]["line"]["color"], "#10b981");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 30);
        assert_eq!(traces[3]["name"], "Upsell Payment");
    }

    #[test]
    fn comparison_chart_windows_ten_days_with_secondary_axis() {
        let records = series();
        let traces = sales_comparison_traces(&records);

        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 10);
        assert_eq!(traces[2]["yaxis"], "y2");

        let layout = comparison_layout();
        assert_eq!(layout["yaxis2"]["overlaying"], "y");
        assert_eq!(layout["yaxis2"]["side"], "right");
    }

    #[test]
    fn short_series_is_not_truncated() {
        let records = series();
        let short = &records[..5];
        let traces = sales_cancellation_traces(short);

        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 5);
    }
}
