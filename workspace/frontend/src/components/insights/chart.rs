use serde_json::{json, Value};
use web_sys::Element;
use yew::prelude::*;

use crate::components::plotly;
use common::CategoryBreakdown;

pub(crate) fn pie_traces(breakdown: &CategoryBreakdown) -> Value {
    json!([{
        "labels": breakdown.labels(),
        "values": breakdown.shares(),
        "type": "pie",
        "hole": 0.5,
        "marker": {"colors": breakdown.colors()},
        "textinfo": "none",
        "hovertemplate": "%{label}: %{value}%<extra></extra>",
    }])
}

#[derive(Properties, PartialEq)]
pub struct BreakdownPieProps {
    /// Target div id; must be unique per chart instance on the page.
    pub id: AttrValue,
    pub breakdown: CategoryBreakdown,
}

/// Donut pie of a category breakdown. Re-plots whenever the breakdown
/// changes, e.g. on a sub-tab switch.
#[function_component(BreakdownPie)]
pub fn breakdown_pie(props: &BreakdownPieProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (props.breakdown.clone(), chart_ref.clone()),
        move |(breakdown, chart_ref)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let div_id = element.id();
                if !div_id.is_empty() {
                    let mut layout = plotly::base_layout();
                    layout["showlegend"] = json!(false);
                    plotly::render(&div_id, &pie_traces(breakdown), &layout);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id={props.id.clone()} class="chart-container" style="height: 260px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{age_breakdown, gender_breakdown};

    #[test]
    fn pie_trace_mirrors_the_breakdown_columns() {
        let traces = pie_traces(&gender_breakdown());
        let pie = &traces[0];

        assert_eq!(pie["type"], "pie");
        assert_eq!(pie["labels"], json!(["Male", "Female", "Other"]));
        assert_eq!(pie["values"], json!([55, 42, 3]));
        assert_eq!(pie["marker"]["colors"], json!(["#60a5fa", "#f472b6", "#a78bfa"]));
    }

    #[test]
    fn pie_trace_keeps_all_age_bands() {
        let traces = pie_traces(&age_breakdown());

        assert_eq!(traces[0]["labels"].as_array().unwrap().len(), 5);
    }
}
