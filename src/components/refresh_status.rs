//! Refresh Status Component
//!
//! Loading hint, the failed-request banner with a retry action, and a
//! separate dismissable banner for failed row actions.

use leptos::prelude::*;

use crate::context::use_meals;
use crate::store::MealTableStateStoreFields;

#[component]
pub fn RefreshStatus() -> impl IntoView {
    let ctx = use_meals();
    let store = ctx.store;

    let is_refreshing = move || store.refresh().read().is_refreshing();
    let failure = move || store.refresh().read().error().map(str::to_string);
    let action_failure = move || store.action_error().get().map(|e| e.summary());

    let retry_ctx = ctx.clone();
    view! {
        <Show when=is_refreshing>
            <div class="refresh-status loading">"Loading…"</div>
        </Show>
        {move || failure().map(|message| {
            let ctx = retry_ctx.clone();
            view! {
                <div class="refresh-status error" role="alert">
                    <span class="error-text">"Could not load meals: " {message}</span>
                    <button class="retry-btn" on:click=move |_| ctx.update_table()>"Retry"</button>
                </div>
            }
        })}
        {move || action_failure().map(|summary| {
            let ctx = ctx.clone();
            view! {
                <div class="action-status error" role="alert">
                    <span class="error-text">{summary}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_action_error()>"Dismiss"</button>
                </div>
            }
        })}
    }
}
