use yew::prelude::*;

use common::RateMetric;

#[derive(Properties, PartialEq)]
pub struct RateBarProps {
    pub rate: RateMetric,
    #[prop_or("progress-primary".into())]
    pub color_class: AttrValue,
}

/// Labelled percentage bar for the overview rows.
#[function_component(RateBar)]
pub fn rate_bar(props: &RateBarProps) -> Html {
    let rate = &props.rate;

    html! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class="text-sm font-medium">{&rate.label}</span>
                <span class="text-sm font-medium">{format!("{}%", rate.percent)}</span>
            </div>
            <progress
                class={classes!("progress", "w-full", props.color_class.to_string())}
                value={rate.percent.to_string()}
                max="100"
            ></progress>
        </div>
    }
}
