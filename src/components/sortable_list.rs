//! Sortable List Component
//!
//! A vertical list whose items can be dragged into a new order, with
//! explicit drop slots between items. Drops are persisted through the
//! reorder notifier.

use leptos::prelude::*;

use leptos_sortable::*;

use crate::context::AdminContext;
use crate::notifier::make_on_drop;
use crate::store::{use_admin_store, AdminStateStoreFields};

/// Sortable list view for one collection
#[component]
pub fn SortableList(collection_id: u32) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let store = use_admin_store();

    // Per-collection drag state
    let sort = create_sort_signals();
    let (highlight, set_highlight) = signal(None::<usize>);

    // Bind global mouseup handler for dropping
    bind_global_mouseup(sort, make_on_drop(store, ctx, collection_id, sort, set_highlight));

    let items = Memo::new(move |_| {
        store
            .collections()
            .read()
            .iter()
            .find(|c| c.id == collection_id)
            .map(|c| c.items.clone())
            .unwrap_or_default()
    });
    let title = Memo::new(move |_| {
        store
            .collections()
            .read()
            .iter()
            .find(|c| c.id == collection_id)
            .map(|c| c.title.clone())
            .unwrap_or_default()
    });

    view! {
        <section class="sortable-collection">
            <h2>{move || title.get()}</h2>
            <ul class="sortable">
                // Initial drop slot at the top
                <ListDropSlot sort=sort slot=0 />

                <For
                    each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, item)| (*index, item.pk.clone(), item.label.clone())
                    children=move |(index, item)| {
                        let on_mousedown = make_on_mousedown(sort, index);
                        let is_dragging = move || sort.dragging_read.get() == Some(index);
                        let is_highlighted = move || highlight.get() == Some(index);

                        let item_class = move || {
                            let mut c = String::from("sortable-item");
                            if is_dragging() { c.push_str(" dragging"); }
                            if is_highlighted() { c.push_str(" highlight"); }
                            c
                        };

                        view! {
                            <li
                                class=item_class
                                class:pending-delete=item.pending_delete
                                on:mousedown=on_mousedown
                            >
                                {item.label.clone()}
                            </li>

                            // Drop slot after this item
                            <ListDropSlot sort=sort slot=index + 1 />
                        }
                    }
                />
            </ul>
        </section>
    }
}

/// Drop slot component - the gap between two list items
#[component]
fn ListDropSlot(sort: SortSignals, slot: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(sort, slot);
    let on_mouseleave = make_on_mouseleave(sort);

    let is_active = move || sort.drop_slot_read.get() == Some(slot);
    let is_dragging = move || sort.dragging_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <li
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
