use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LegendDotProps {
    pub color: String,
    pub label: String,
}

/// Color dot plus label, shown above the pie charts.
#[function_component(LegendDot)]
pub fn legend_dot(props: &LegendDotProps) -> Html {
    html! {
        <div class="flex items-center space-x-2">
            <div
                class="h-3 w-3 rounded-full"
                style={format!("background-color: {};", props.color)}
            />
            <span class="text-xs text-gray-500">{&props.label}</span>
        </div>
    }
}
