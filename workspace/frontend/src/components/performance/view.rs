use yew::prelude::*;

use super::chart::{
    PaymentTrendChart, SalesCancellationChart, SalesComparisonChart, TrendDetailChart,
};
use crate::components::common::{ChartLoading, StatCard};
use crate::hooks::use_generated_series;
use crate::state::PerformanceView;
use common::{performance_cards, DateRange};

#[function_component(Performance)]
pub fn performance() -> Html {
    // One series per mount; both top charts and the active sub-view all
    // read from the same generation.
    let series = use_generated_series(DateRange::reporting_window());
    let view = use_state(PerformanceView::default);

    let on_details = {
        let view = view.clone();
        Callback::from(move |_| view.set(PerformanceView::Details))
    };
    let on_comparison = {
        let view = view.clone();
        Callback::from(move |_| view.set(PerformanceView::Comparison))
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                { for performance_cards().into_iter().map(|metric| html! {
                    <StatCard {metric} />
                })}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <div>
                                <h2 class="card-title">{"Food Items Performance"}</h2>
                                <p class="text-sm text-gray-500">{"Sales vs. Cancellations"}</p>
                            </div>
                            <i class="fas fa-chart-pie text-blue-500"></i>
                        </div>
                        {match series.records() {
                            None => html! { <ChartLoading /> },
                            Some(records) => html! {
                                <SalesCancellationChart records={records.to_vec()} />
                            },
                        }}
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <div>
                                <h2 class="card-title">{"Payment Analytics"}</h2>
                                <p class="text-sm text-gray-500">{"Revenue trends by category"}</p>
                            </div>
                            <i class="fas fa-chart-column text-emerald-500"></i>
                        </div>
                        {match series.records() {
                            None => html! { <ChartLoading /> },
                            Some(records) => html! {
                                <PaymentTrendChart records={records.to_vec()} />
                            },
                        }}
                    </div>
                </div>
            </div>

            <div>
                <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit mb-4">
                    <a
                        role="tab"
                        class={classes!("tab", (*view == PerformanceView::Details).then_some("tab-active"))}
                        onclick={on_details}
                    >
                        {PerformanceView::Details.label()}
                    </a>
                    <a
                        role="tab"
                        class={classes!("tab", (*view == PerformanceView::Comparison).then_some("tab-active"))}
                        onclick={on_comparison}
                    >
                        {PerformanceView::Comparison.label()}
                    </a>
                </div>

                {match *view {
                    PerformanceView::Details => html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Monthly Trends Analysis"}</h2>
                                <p class="text-sm text-gray-500">{"Comprehensive view of sales and payment metrics"}</p>
                                {match series.records() {
                                    None => html! { <ChartLoading height="320px" /> },
                                    Some(records) => html! {
                                        <TrendDetailChart records={records.to_vec()} />
                                    },
                                }}
                            </div>
                        </div>
                    },
                    PerformanceView::Comparison => html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Sales Comparison"}</h2>
                                <p class="text-sm text-gray-500">{"Side-by-side analysis of key metrics"}</p>
                                {match series.records() {
                                    None => html! { <ChartLoading height="320px" /> },
                                    Some(records) => html! {
                                        <SalesComparisonChart records={records.to_vec()} />
                                    },
                                }}
                            </div>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
