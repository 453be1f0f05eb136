//! Sortable Admin Frontend App
//!
//! Loads the page's sortable collections and renders each as a sortable
//! list or table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NoticeBar, SortableList, SortableTable};
use crate::context::AdminContext;
use crate::models::CollectionKind;
use crate::store::{store_set_collections, AdminState, AdminStateStoreFields, AdminStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notice, set_notice) = signal(None::<String>);

    // Provide context and store to all children
    let ctx = AdminContext::new((reload_trigger, set_reload_trigger), (notice, set_notice));
    provide_context(ctx);
    let store: AdminStore = Store::new(AdminState::default());
    provide_context(store);

    // Load collections on mount and when the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading collections, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::fetch_collections().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} collections", loaded.len()).into());
                    store_set_collections(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load collections: {}", e).into());
                }
            }
        });
    });

    // Stable handles for the For; item churn re-renders inside the components
    let collection_refs = Memo::new(move |_| {
        store
            .collections()
            .read()
            .iter()
            .map(|c| (c.id, c.kind))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="admin-layout">
            <NoticeBar />

            <main class="main-content">
                <h1>"Change order"</h1>

                <For
                    each=move || collection_refs.get()
                    key=|(id, _)| *id
                    children=move |(id, kind)| {
                        match kind {
                            CollectionKind::List => view! { <SortableList collection_id=id /> }.into_any(),
                            CollectionKind::Table => view! { <SortableTable collection_id=id /> }.into_any(),
                        }
                    }
                />

                <p class="collection-count">
                    {move || format!("{} sortable collections", collection_refs.get().len())}
                </p>
            </main>
        </div>
    }
}
