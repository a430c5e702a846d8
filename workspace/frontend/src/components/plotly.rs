//! Boundary with the charting collaborator.
//!
//! Traces and layouts are plain `serde_json` values handed to the global
//! `Plotly.newPlot`; nothing flows back from the chart into the dashboard.

use chrono::{Datelike, NaiveDate};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Hands traces and layout to Plotly for the given target div.
pub fn render(div_id: &str, data: &Value, layout: &Value) {
    let config = json!({"responsive": true, "displayModeBar": false});

    newPlot(
        div_id,
        serde_wasm_bindgen::to_value(data).unwrap(),
        serde_wasm_bindgen::to_value(layout).unwrap(),
        serde_wasm_bindgen::to_value(&config).unwrap(),
    );
}

/// Shared layout base: transparent background, tight margins, light grid.
pub fn base_layout() -> Value {
    json!({
        "margin": {"t": 20, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee"},
        "legend": {"orientation": "h", "y": -0.2},
    })
}

/// Axis tick label for a calendar day, e.g. "3/12".
pub fn short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_date_drops_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert_eq!(short_date(date), "3/12");

        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(short_date(date), "4/1");
    }

    #[test]
    fn base_layout_hides_chart_chrome() {
        let layout = base_layout();

        assert_eq!(layout["paper_bgcolor"], "rgba(0,0,0,0)");
        assert_eq!(layout["xaxis"]["showgrid"], false);
    }
}
