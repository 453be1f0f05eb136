//! Reorder Notifier
//!
//! The drop pipeline shared by all sortable components: guard check,
//! order mutation, submission to the collection's sorting endpoint, and
//! the success/failure visual state. Components hand the resulting
//! closure to `leptos_sortable::bind_global_mouseup`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use leptos_sortable::SortSignals;

use crate::commands;
use crate::context::AdminContext;
use crate::reorder::{plan_reorder, DEFAULT_SAVE_BEFORE_REORDER_MESSAGE};
use crate::store::{store_apply_order, store_collection, AdminStore};

/// Build the drop handler for one collection.
///
/// `on_drop(from, slot)` runs when a drag ends over a slot:
/// 1. Pending deletions block the reorder: the order is left as it was and
///    a blocking alert tells the user to save first.
/// 2. Otherwise the new order is applied to the store immediately and the
///    `indexes=...` payload is POSTed. The collection stays locked until
///    the request resolves, so submissions are serialized per collection.
/// 3. Success highlights the moved item for a second; failure reverts to
///    the pre-drop order and raises a dismissible notice.
pub fn make_on_drop(
    store: AdminStore,
    ctx: AdminContext,
    collection_id: u32,
    sort: SortSignals,
    set_highlight: WriteSignal<Option<usize>>,
) -> impl Fn(usize, usize) + Clone + 'static {
    move |from: usize, slot: usize| {
        let Some(collection) = store_collection(&store, collection_id) else {
            return;
        };

        let plan = match plan_reorder(&collection.items, from, slot) {
            Some(plan) => plan,
            None => {
                let message = collection
                    .save_before_reorder_message
                    .as_deref()
                    .unwrap_or(DEFAULT_SAVE_BEFORE_REORDER_MESSAGE);
                web_sys::console::warn_1(
                    &format!("[SORT] Reorder blocked on collection {}: pending delete", collection_id).into(),
                );
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(message);
                }
                return;
            }
        };

        let prev = collection.items;
        let to = plan.moved_to;
        let payload = plan.payload;

        // Client-visible order changes before the server acknowledges
        store_apply_order(&store, collection_id, plan.items);
        sort.locked_write.set(true);

        let sorting_url = collection.sorting_url;
        let title = collection.title;
        spawn_local(async move {
            match commands::submit_order(&sorting_url, &payload).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[SORT] Persisted order for collection {}: {}", collection_id, payload).into(),
                    );
                    sort.locked_write.set(false);
                    set_highlight.set(Some(to));
                    gloo_timers::future::TimeoutFuture::new(1_000).await;
                    set_highlight.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[SORT] Failed to persist order for collection {}: {}", collection_id, e).into(),
                    );
                    store_apply_order(&store, collection_id, prev);
                    sort.locked_write.set(false);
                    ctx.notify(format!("Could not save the new order for \"{}\": {}", title, e));
                    // Re-sync with the server's authoritative order
                    ctx.reload();
                }
            }
        });
    }
}
