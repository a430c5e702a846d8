use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChartLoadingProps {
    /// Height of the reserved chart region, e.g. "300px".
    #[prop_or("300px".into())]
    pub height: AttrValue,
}

/// Placeholder spinner that reserves the chart region while a series is
/// still loading, so the transition to ready does not shift the layout.
#[function_component(ChartLoading)]
pub fn chart_loading(props: &ChartLoadingProps) -> Html {
    html! {
        <div
            class="flex justify-center items-center"
            style={format!("height: {};", props.height)}
        >
            <span class="loading loading-dots loading-lg text-primary"></span>
        </div>
    }
}
