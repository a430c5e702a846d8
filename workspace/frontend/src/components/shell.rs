use yew::prelude::*;

use crate::components::insights::Insights;
use crate::components::performance::Performance;
use crate::components::reports::Reports;
use crate::state::TabSelection;
use common::REPORT_WINDOW_LABEL;

/// Renders the panel for `selection`. `None`, the result of an
/// unrecognized selector key, renders nothing, silently.
fn active_panel(selection: Option<TabSelection>) -> Html {
    match selection {
        Some(TabSelection::Insights) => html! { <Insights /> },
        Some(TabSelection::Performance) => html! { <Performance /> },
        Some(TabSelection::Reports) => html! { <Reports /> },
        None => html! {},
    }
}

/// Page shell: header, tab navigation and exactly one active panel.
///
/// The tab selection lives here and flows down as read-only state plus a
/// selection callback; panels never mutate it. Selectors arrive as raw
/// keys and resolve through `TabSelection::from_key`.
#[function_component(DashboardShell)]
pub fn dashboard_shell() -> Html {
    let selection = use_state(|| Some(TabSelection::default()));

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |key: String| {
            let tab = TabSelection::from_key(&key);
            if tab.is_none() {
                log::warn!("Unknown tab selector: {}", key);
            }
            selection.set(tab);
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 p-6">
            <header class="flex flex-wrap justify-between items-center mb-8">
                <div class="flex items-center space-x-3">
                    <div class="bg-primary h-10 w-10 rounded-lg flex items-center justify-center">
                        <i class="fas fa-arrow-trend-up text-white"></i>
                    </div>
                    <h1 class="text-2xl font-bold">{"Analytics Dashboard"}</h1>
                </div>
                <div class="badge badge-outline badge-lg gap-2">
                    <i class="fas fa-calendar"></i>
                    {REPORT_WINDOW_LABEL}
                </div>
            </header>

            <div role="tablist" class="tabs tabs-boxed bg-base-100 shadow-sm w-fit mb-8">
                { for TabSelection::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_| on_select.emit(tab.key().to_string()))
                    };
                    html! {
                        <a
                            role="tab"
                            class={classes!("tab", (*selection == Some(tab)).then_some("tab-active"))}
                            {onclick}
                        >
                            {tab.label()}
                        </a>
                    }
                })}
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    { active_panel(*selection) }
                </div>
            </div>
        </div>
    }
}
