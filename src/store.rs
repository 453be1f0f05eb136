//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Collection, OrderableItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Sortable collections on the current page, in render order
    pub collections: Vec<Collection>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace all collections (page bootstrap / reload)
pub fn store_set_collections(store: &AdminStore, collections: Vec<Collection>) {
    store.collections().set(collections);
}

/// Snapshot a collection by ID
pub fn store_collection(store: &AdminStore, collection_id: u32) -> Option<Collection> {
    store
        .collections()
        .get_untracked()
        .into_iter()
        .find(|c| c.id == collection_id)
}

/// Replace a collection's item order by ID
pub fn store_apply_order(store: &AdminStore, collection_id: u32, items: Vec<OrderableItem>) {
    store
        .collections()
        .write()
        .iter_mut()
        .find(|c| c.id == collection_id)
        .map(|c| c.items = items);
}
