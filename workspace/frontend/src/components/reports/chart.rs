use serde_json::{json, Value};
use web_sys::Element;
use yew::prelude::*;

use crate::components::plotly;
use common::{checkin_series, whatsapp_template_usage};

pub(crate) fn checkin_traces() -> Value {
    let records = checkin_series();
    let x: Vec<String> = records
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect();

    json!([
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.total_checkins).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Total Check-ins",
            "line": {"color": "#10b981", "width": 3},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.contactless_checkins).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Contactless Check-ins",
            "line": {"color": "#3b82f6", "width": 2, "dash": "dash"},
        },
        {
            "x": x.clone(),
            "y": records.iter().map(|r| r.total_checkouts).collect::<Vec<_>>(),
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Total Check-outs",
            "line": {"color": "#f97316", "width": 2},
        },
    ])
}

pub(crate) fn template_usage_traces() -> Value {
    let usage = whatsapp_template_usage();
    let x: Vec<String> = usage.iter().map(|t| t.name.clone()).collect();

    json!([
        {
            "x": x.clone(),
            "y": usage.iter().map(|t| t.delivered).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Delivered",
            "marker": {"color": "#94a3b8"},
        },
        {
            "x": x.clone(),
            "y": usage.iter().map(|t| t.read).collect::<Vec<_>>(),
            "type": "bar",
            "name": "Read",
            "marker": {"color": "#60a5fa"},
        },
    ])
}

/// Line chart of the fixed check-in tracking observations.
#[function_component(CheckinTrendChart)]
pub fn checkin_trend_chart() -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(chart_ref.clone(), move |chart_ref| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                plotly::render(&div_id, &checkin_traces(), &plotly::base_layout());
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-checkin-trend" class="chart-container" style="height: 320px;"></div>
    }
}

/// Delivered vs read bars per WhatsApp template.
#[function_component(TemplateUsageChart)]
pub fn template_usage_chart() -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(chart_ref.clone(), move |chart_ref| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                plotly::render(&div_id, &template_usage_traces(), &plotly::base_layout());
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-template-usage" class="chart-container" style="height: 320px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkin_chart_plots_three_lines_over_eleven_days() {
        let traces = checkin_traces();
        let traces = traces.as_array().unwrap();

        assert_eq!(traces.len(), 3);
        for trace in traces {
            assert_eq!(trace["x"].as_array().unwrap().len(), 11);
        }
        assert_eq!(traces[0]["x"][0], "2025-03-12");
        assert_eq!(traces[0]["x"][10], "2025-03-22");
        assert_eq!(traces[1]["line"]["dash"], "dash");
    }

    #[test]
    fn template_chart_pairs_delivered_and_read_per_template() {
        let traces = template_usage_traces();
        let traces = traces.as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "Delivered");
        assert_eq!(traces[1]["name"], "Read");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 8);
        assert_eq!(traces[0]["x"][0], "ask_for_booking_payment");
        assert_eq!(traces[1]["y"][0], 160);
    }
}
