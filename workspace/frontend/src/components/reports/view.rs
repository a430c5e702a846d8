use yew::prelude::*;

use super::activity::RecentActivity;
use super::chart::{CheckinTrendChart, TemplateUsageChart};
use crate::components::common::{AccentCard, RateBar};
use crate::state::ReportsView;
use common::{overview_rates, reports_summary};

// One accent per overview row, in display order.
const RATE_ACCENTS: [&str; 3] = ["progress-secondary", "progress-info", "progress-success"];

#[function_component(Reports)]
pub fn reports() -> Html {
    let view = use_state(ReportsView::default);

    let on_checkins = {
        let view = view.clone();
        Callback::from(move |_| view.set(ReportsView::CheckIns))
    };
    let on_whatsapp = {
        let view = view.clone();
        Callback::from(move |_| view.set(ReportsView::WhatsApp))
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                { for reports_summary().into_iter().map(|metric| html! {
                    <AccentCard {metric} />
                })}
            </div>

            <div>
                <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit mb-4">
                    <a
                        role="tab"
                        class={classes!("tab", (*view == ReportsView::CheckIns).then_some("tab-active"))}
                        onclick={on_checkins}
                    >
                        {ReportsView::CheckIns.label()}
                    </a>
                    <a
                        role="tab"
                        class={classes!("tab", (*view == ReportsView::WhatsApp).then_some("tab-active"))}
                        onclick={on_whatsapp}
                    >
                        {ReportsView::WhatsApp.label()}
                    </a>
                </div>

                {match *view {
                    ReportsView::CheckIns => html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">
                                    <i class="fas fa-wave-square text-success mr-2"></i>
                                    {"Check-in Tracking"}
                                </h2>
                                <CheckinTrendChart />
                            </div>
                        </div>
                    },
                    ReportsView::WhatsApp => html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">
                                    <i class="fas fa-comment text-success mr-2"></i>
                                    {"WhatsApp Template Usage"}
                                </h2>
                                <TemplateUsageChart />
                            </div>
                        </div>
                    },
                }}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">
                            <i class="fas fa-arrow-trend-up text-secondary mr-2"></i>
                            {"Performance Overview"}
                        </h2>
                        { for overview_rates().into_iter().zip(RATE_ACCENTS).map(|(rate, accent)| html! {
                            <RateBar {rate} color_class={accent} />
                        })}
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">
                            <i class="fas fa-calendar text-info mr-2"></i>
                            {"Recent Activity"}
                        </h2>
                        <RecentActivity />
                    </div>
                </div>
            </div>
        </div>
    }
}
