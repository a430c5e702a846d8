use yew::prelude::*;

use super::chart::BreakdownPie;
use crate::components::common::{LegendDot, MetricCard, QuickStat};
use crate::state::{PaymentCategory, StatsBreakdown};
use common::{
    age_breakdown, engagement_metrics, gender_breakdown, payment_method_breakdown, quick_stats,
    REPORT_WINDOW_LABEL,
};

#[function_component(Insights)]
pub fn insights() -> Html {
    let stats_tab = use_state(StatsBreakdown::default);
    let payment_tab = use_state(PaymentCategory::default);

    let guest_breakdown = match *stats_tab {
        StatsBreakdown::ByAge => age_breakdown(),
        StatsBreakdown::ByGender => gender_breakdown(),
    };

    // Every payment category currently shows the same method breakdown.
    let payment_breakdown = payment_method_breakdown();

    let on_by_age = {
        let stats_tab = stats_tab.clone();
        Callback::from(move |_| stats_tab.set(StatsBreakdown::ByAge))
    };
    let on_by_gender = {
        let stats_tab = stats_tab.clone();
        Callback::from(move |_| stats_tab.set(StatsBreakdown::ByGender))
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                { for engagement_metrics().into_iter().map(|metric| html! {
                    <MetricCard {metric} />
                })}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">{"Guest Stats"}</h2>
                            <span class="text-sm text-gray-500">{REPORT_WINDOW_LABEL}</span>
                        </div>

                        <div role="tablist" class="tabs tabs-boxed grid grid-cols-2 mb-4">
                            <a
                                role="tab"
                                class={classes!("tab", (*stats_tab == StatsBreakdown::ByAge).then_some("tab-active"))}
                                onclick={on_by_age}
                            >
                                {StatsBreakdown::ByAge.label()}
                            </a>
                            <a
                                role="tab"
                                class={classes!("tab", (*stats_tab == StatsBreakdown::ByGender).then_some("tab-active"))}
                                onclick={on_by_gender}
                            >
                                {StatsBreakdown::ByGender.label()}
                            </a>
                        </div>

                        <div class="flex flex-wrap gap-3 mb-4">
                            { for guest_breakdown.slices.iter().map(|slice| html! {
                                <LegendDot color={slice.color.clone()} label={slice.label.clone()} />
                            })}
                        </div>

                        <BreakdownPie id="chart-guest-stats" breakdown={guest_breakdown.clone()} />
                    </div>
                </div>

                <div class="card bg-base-100 shadow hover:shadow-md transition-shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">{"Payments"}</h2>
                            <span class="text-sm text-gray-500">{REPORT_WINDOW_LABEL}</span>
                        </div>

                        <div role="tablist" class="tabs tabs-boxed grid grid-cols-3 mb-4">
                            { for PaymentCategory::ALL.iter().map(|category| {
                                let category = *category;
                                let onclick = {
                                    let payment_tab = payment_tab.clone();
                                    Callback::from(move |_| payment_tab.set(category))
                                };
                                html! {
                                    <a
                                        role="tab"
                                        class={classes!("tab", (*payment_tab == category).then_some("tab-active"))}
                                        {onclick}
                                    >
                                        {category.label()}
                                    </a>
                                }
                            })}
                        </div>

                        <div class="flex flex-wrap gap-3 mb-4">
                            { for payment_breakdown.slices.iter().map(|slice| html! {
                                <LegendDot color={slice.color.clone()} label={slice.label.clone()} />
                            })}
                        </div>

                        <BreakdownPie id="chart-payments" breakdown={payment_breakdown.clone()} />
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                { for quick_stats().into_iter().map(|metric| html! {
                    <QuickStat {metric} />
                })}
            </div>
        </div>
    }
}
