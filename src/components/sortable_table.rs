//! Sortable Table Component
//!
//! Table rows that can be dragged into a new order. After a persisted
//! reorder the alternating-row striping and the first/middle/last
//! sort-direction icons recompute from the new order.

use leptos::prelude::*;

use leptos_sortable::*;

use crate::context::AdminContext;
use crate::notifier::make_on_drop;
use crate::reorder::{position_marker, stripe_class};
use crate::store::{use_admin_store, AdminStateStoreFields};

/// Sortable table view for one collection
#[component]
pub fn SortableTable(collection_id: u32) -> impl IntoView {
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
            <table class="sortable-table">
                <tbody>
                    // Initial drop slot above the first row
                    <RowDropSlot sort=sort slot=0 />

                    <For
                        each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, item)| (*index, item.pk.clone(), item.label.clone())
                        children=move |(index, item)| {
                            let on_mousedown = make_on_mousedown(sort, index);
                            let is_dragging = move || sort.dragging_read.get() == Some(index);
                            let is_highlighted = move || highlight.get() == Some(index);
                            let row_count = move || items.get().len();

                            let row_class = move || {
                                let mut c = String::from(stripe_class(index));
                                if is_dragging() { c.push_str(" dragging"); }
                                if is_highlighted() { c.push_str(" highlight"); }
                                c
                            };
                            let icon_class = move || position_marker(index, row_count()).icon_class();

                            view! {
                                <tr
                                    class=row_class
                                    class:pending-delete=item.pending_delete
                                    on:mousedown=on_mousedown
                                >
                                    <td class="sort-indicator">
                                        <i class=icon_class></i>
                                    </td>
                                    <td class="row-label">{item.label.clone()}</td>
                                </tr>

                                // Drop slot below this row
                                <RowDropSlot sort=sort slot=index + 1 />
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

/// Drop slot component - the gap between two table rows
#[component]
fn RowDropSlot(sort: SortSignals, slot: usize) -> impl IntoView {
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
        <tr
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <td colspan="2"></td>
        </tr>
    }
}
