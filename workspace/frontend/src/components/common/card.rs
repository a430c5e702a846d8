use yew::prelude::*;

use common::SummaryMetric;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub metric: SummaryMetric,
}

fn trend_classes(metric: &SummaryMetric) -> &'static str {
    if metric.direction.is_up() {
        "text-success"
    } else {
        "text-error"
    }
}

fn trend_arrow(metric: &SummaryMetric) -> &'static str {
    if metric.direction.is_up() {
        "fas fa-arrow-up"
    } else {
        "fas fa-arrow-down"
    }
}

/// Engagement card: icon tile, trend pill, large value.
#[function_component(MetricCard)]
pub fn metric_card(props: &CardProps) -> Html {
    let metric = &props.metric;

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body p-4">
                <div class="flex justify-between items-start">
                    <div class="bg-base-200 p-2 rounded-lg">
                        <i class={metric.icon.clone()}></i>
                    </div>
                    <span class={classes!("badge", "badge-ghost", "gap-1", "text-xs", trend_classes(metric))}>
                        <i class={trend_arrow(metric)}></i>
                        {&metric.change}
                    </span>
                </div>
                <h3 class="text-3xl font-bold mt-4">{&metric.value}</h3>
                <p class="text-sm text-gray-500 mt-1">{&metric.label}</p>
            </div>
        </div>
    }
}

/// Compact stat row: icon tile, label, value with inline delta.
#[function_component(QuickStat)]
pub fn quick_stat(props: &CardProps) -> Html {
    let metric = &props.metric;

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body p-4 flex-row items-center space-x-4">
                <div class="bg-base-200 p-3 rounded-lg">
                    <i class={metric.icon.clone()}></i>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{&metric.label}</p>
                    <div class="flex items-center mt-1">
                        <span class="text-lg font-semibold">{&metric.value}</span>
                        <span class={classes!("ml-2", "text-xs", trend_classes(metric))}>
                            {&metric.change}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Stat card with a caption line under the change.
#[function_component(StatCard)]
pub fn stat_card(props: &CardProps) -> Html {
    let metric = &props.metric;

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
            <div class="card-body p-4">
                <div class="flex justify-between items-center">
                    <span class="text-sm font-medium text-gray-500">{&metric.label}</span>
                    <i class={metric.icon.clone()}></i>
                </div>
                <div class="text-2xl font-bold mt-2">{&metric.value}</div>
                <div class="flex items-center mt-1">
                    <span class={classes!("text-xs", "font-medium", trend_classes(metric))}>
                        {&metric.change}
                    </span>
                    {if let Some(detail) = &metric.detail {
                        html! { <span class="text-xs text-gray-400 ml-2">{detail}</span> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}

/// Summary card with a colored accent bar along the top edge.
#[function_component(AccentCard)]
pub fn accent_card(props: &CardProps) -> Html {
    let metric = &props.metric;
    let accent = metric.accent.clone().unwrap_or_else(|| "bg-base-300".to_string());

    html! {
        <div class="card bg-base-100 shadow overflow-hidden hover:shadow-lg transition-all">
            <div class={classes!("h-1", accent)}></div>
            <div class="card-body p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-sm font-medium text-gray-500">{&metric.label}</p>
                        <h3 class="text-2xl font-bold mt-1">{&metric.value}</h3>
                        <p class={classes!("text-xs", "font-medium", "mt-1", trend_classes(metric))}>
                            {&metric.change}
                            {if let Some(detail) = &metric.detail {
                                html! { <span class="text-gray-400">{format!(" {}", detail)}</span> }
                            } else {
                                html! {}
                            }}
                        </p>
                    </div>
                    <div class="bg-base-200 p-3 rounded-full">
                        <i class={metric.icon.clone()}></i>
                    </div>
                </div>
            </div>
        </div>
    }
}
