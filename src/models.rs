//! Frontend Models
//!
//! Data structures matching the admin backend's sortable-collection payloads.

use serde::{Deserialize, Serialize};

/// One orderable record in a collection (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderableItem {
    /// Server-assigned primary key; empty for rows not yet saved
    #[serde(default)]
    pub pk: String,
    pub label: String,
    /// Row has a pending delete checked; blocks reordering
    #[serde(default)]
    pub pending_delete: bool,
}

impl OrderableItem {
    /// Unsaved rows have no pk and are excluded from persisted order
    pub fn is_saved(&self) -> bool {
        !self.pk.is_empty()
    }
}

/// How a collection renders (plain list vs. striped table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    List,
    Table,
}

/// A sortable collection bound to one sorting endpoint (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: u32,
    pub title: String,
    pub kind: CollectionKind,
    /// Where to POST the new order for this collection
    pub sorting_url: String,
    /// Localized guard notice; falls back to a default when absent
    #[serde(default)]
    pub save_before_reorder_message: Option<String>,
    /// Items in current visual order
    pub items: Vec<OrderableItem>,
}

/// Sorting endpoint response body
#[derive(Debug, Clone, Deserialize)]
pub struct SortResponse {
    pub objects_sorted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_deserialize() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Categories",
            "kind": "table",
            "sorting_url": "/admin/app/category/sort/",
            "items": [
                { "pk": "12", "label": "First" },
                { "label": "Unsaved row" },
                { "pk": "9", "label": "Marked", "pending_delete": true }
            ]
        });
        let collection: Collection = serde_json::from_value(json).expect("deserialize");
        assert_eq!(collection.kind, CollectionKind::Table);
        assert_eq!(collection.save_before_reorder_message, None);
        assert_eq!(collection.items.len(), 3);
        assert!(collection.items[0].is_saved());
        assert!(!collection.items[1].is_saved());
        assert!(collection.items[2].pending_delete);
    }

    #[test]
    fn test_sort_response_deserialize() {
        let ok: SortResponse = serde_json::from_str(r#"{"objects_sorted": true}"#).expect("deserialize");
        assert!(ok.objects_sorted);
    }
}
