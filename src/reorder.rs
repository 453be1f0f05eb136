//! Reorder Protocol Logic
//!
//! Pure helpers for the ordering protocol: payload construction, the
//! guarded-state check, and the order-dependent visual indicators. No DOM
//! or network access here so everything is host-testable.

use crate::models::OrderableItem;

/// Shown when a collection with a pending delete is reordered and the
/// backend supplied no localized message
pub const DEFAULT_SAVE_BEFORE_REORDER_MESSAGE: &str =
    "You have pending deletions. Save your changes before reordering.";

/// Form-encoded body for the sorting endpoint: `indexes=<pk>,<pk>,...`
/// in current visual order, skipping unsaved rows.
pub fn ordering_payload(items: &[OrderableItem]) -> String {
    let pks: Vec<&str> = items
        .iter()
        .filter(|item| item.is_saved())
        .map(|item| item.pk.as_str())
        .collect();
    format!("indexes={}", pks.join(","))
}

/// A pending delete anywhere in the collection blocks reordering until
/// the user saves
pub fn reorder_blocked(items: &[OrderableItem]) -> bool {
    items.iter().any(|item| item.pending_delete)
}

/// A reorder that passed the guard: the new item order, the moved item's
/// final index, and the payload to submit
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPlan {
    pub items: Vec<OrderableItem>,
    pub moved_to: usize,
    pub payload: String,
}

/// Guard, then apply the drop to a copy of the collection's order.
/// `None` when a pending delete blocks the reorder; the source order is
/// never touched either way.
pub fn plan_reorder(items: &[OrderableItem], from: usize, slot: usize) -> Option<ReorderPlan> {
    if reorder_blocked(items) {
        return None;
    }
    let mut items = items.to_vec();
    let moved_to = leptos_sortable::apply_move(&mut items, from, slot);
    let payload = ordering_payload(&items);
    Some(ReorderPlan { items, moved_to, payload })
}

/// Position of a row within its collection, for the sort-direction icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMarker {
    First,
    Middle,
    Last,
}

impl PositionMarker {
    pub fn icon_class(self) -> &'static str {
        match self {
            PositionMarker::First => "fa fa-sort-desc",
            PositionMarker::Middle => "fa fa-sort",
            PositionMarker::Last => "fa fa-sort-asc",
        }
    }
}

/// Marker for the row at `index` in a collection of `len` rows.
/// A single row counts as first.
pub fn position_marker(index: usize, len: usize) -> PositionMarker {
    if index == 0 {
        PositionMarker::First
    } else if index + 1 == len {
        PositionMarker::Last
    } else {
        PositionMarker::Middle
    }
}

/// Alternating-row class: even rows `row1`, odd rows `row2`
pub fn stripe_class(index: usize) -> &'static str {
    if index % 2 == 0 { "row1" } else { "row2" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_sortable::apply_move;

    fn item(pk: &str, label: &str) -> OrderableItem {
        OrderableItem {
            pk: pk.to_string(),
            label: label.to_string(),
            pending_delete: false,
        }
    }

    #[test]
    fn test_payload_preserves_visual_order() {
        let mut items = vec![item("1", "A"), item("2", "B"), item("3", "C")];
        // Drag B into the gap before A
        apply_move(&mut items, 1, 0);
        assert_eq!(ordering_payload(&items), "indexes=2,1,3");
    }

    #[test]
    fn test_payload_skips_unsaved_rows() {
        let items = vec![item("4", "A"), item("", "new row"), item("7", "B")];
        assert_eq!(ordering_payload(&items), "indexes=4,7");
    }

    #[test]
    fn test_payload_unsaved_row_position_is_irrelevant() {
        for at in 0..4 {
            let mut items = vec![item("1", "A"), item("2", "B"), item("3", "C")];
            items.insert(at, item("", "new row"));
            assert_eq!(ordering_payload(&items), "indexes=1,2,3");
        }
    }

    #[test]
    fn test_payload_empty_collection() {
        assert_eq!(ordering_payload(&[]), "indexes=");
    }

    #[test]
    fn test_idempotent_resubmission() {
        let items = vec![item("9", "A"), item("12", "B")];
        // Dropping an item back where it was still produces the same request
        assert_eq!(ordering_payload(&items), ordering_payload(&items));
        assert_eq!(ordering_payload(&items), "indexes=9,12");
    }

    #[test]
    fn test_reorder_blocked_by_pending_delete() {
        let mut items = vec![item("1", "A"), item("2", "B")];
        assert!(!reorder_blocked(&items));
        items[1].pending_delete = true;
        assert!(reorder_blocked(&items));
    }

    #[test]
    fn test_plan_reorder_moves_and_builds_payload() {
        let items = vec![item("1", "A"), item("2", "B"), item("3", "C")];
        let plan = plan_reorder(&items, 1, 0).expect("not blocked");
        assert_eq!(plan.payload, "indexes=2,1,3");
        assert_eq!(plan.moved_to, 0);
        assert_eq!(plan.items[0].pk, "2");
        // Source order is untouched; the plan owns the new order
        assert_eq!(ordering_payload(&items), "indexes=1,2,3");
    }

    #[test]
    fn test_plan_reorder_refused_when_blocked() {
        let mut items = vec![item("1", "A"), item("2", "B"), item("3", "C")];
        items[0].pending_delete = true;
        let before = items.clone();
        assert_eq!(plan_reorder(&items, 2, 0), None);
        assert_eq!(items, before);
    }

    #[test]
    fn test_position_markers() {
        assert_eq!(position_marker(0, 4), PositionMarker::First);
        assert_eq!(position_marker(1, 4), PositionMarker::Middle);
        assert_eq!(position_marker(2, 4), PositionMarker::Middle);
        assert_eq!(position_marker(3, 4), PositionMarker::Last);
        // Single row counts as first
        assert_eq!(position_marker(0, 1), PositionMarker::First);
    }

    #[test]
    fn test_marker_icon_classes() {
        assert_eq!(PositionMarker::First.icon_class(), "fa fa-sort-desc");
        assert_eq!(PositionMarker::Middle.icon_class(), "fa fa-sort");
        assert_eq!(PositionMarker::Last.icon_class(), "fa fa-sort-asc");
    }

    #[test]
    fn test_stripe_classes_alternate() {
        assert_eq!(stripe_class(0), "row1");
        assert_eq!(stripe_class(1), "row2");
        assert_eq!(stripe_class(2), "row1");
    }
}
