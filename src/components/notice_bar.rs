//! Notice Bar Component
//!
//! Dismissible banner for submission failures.

use leptos::prelude::*;

use crate::context::AdminContext;

/// Shows the current failure notice from context, with a dismiss button
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");

    view! {
        <Show when=move || ctx.notice.get().is_some()>
            <div class="notice-bar">
                <span class="notice-text">{move || ctx.notice.get().unwrap_or_default()}</span>
                <button
                    class="notice-dismiss"
                    on:click=move |_| ctx.clear_notice()
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
