use yew::prelude::*;

use common::recent_activity;

/// Recent activity feed: fixed entries, newest first.
#[function_component(RecentActivity)]
pub fn recent_activity_feed() -> Html {
    html! {
        <div class="space-y-4">
            { for recent_activity().into_iter().map(|entry| html! {
                <div class="flex items-center gap-4">
                    <div class="w-2 h-2 rounded-full bg-success"></div>
                    <div class="flex-1">
                        <p class="text-sm font-medium">{&entry.action}</p>
                        <p class="text-xs text-gray-500">{&entry.subject}</p>
                    </div>
                    <div class="text-right">
                        <span class="badge badge-outline badge-sm">{&entry.badge}</span>
                        <p class="text-xs text-gray-500 mt-1">{&entry.time_ago}</p>
                    </div>
                </div>
            })}
        </div>
    }
}
