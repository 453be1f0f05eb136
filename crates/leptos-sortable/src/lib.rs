//! Leptos Sortable Utilities
//!
//! Mouse-event drag-and-drop reordering for linear collections (lists,
//! table rows). Uses a movement threshold to distinguish click from drag.
//! Drops target the gaps ("slots") between items rather than the items
//! themselves.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag-reorder state signals for one sortable collection
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Index of the item currently being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Slot (gap index, 0..=len) currently hovered as drop target
    pub drop_slot_read: ReadSignal<Option<usize>>,
    pub drop_slot_write: WriteSignal<Option<usize>>,
    /// Pending item index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Set while an order submission is in flight; blocks new drags
    pub locked_read: ReadSignal<bool>,
    pub locked_write: WriteSignal<bool>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_slot_read, drop_slot_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (locked_read, locked_write) = signal(false);
    SortSignals {
        dragging_read,
        dragging_write,
        drop_slot_read,
        drop_slot_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        locked_read,
        locked_write,
    }
}

/// Move the item at `from` into the gap `slot` (0..=len).
///
/// Returns the item's index after the move. Out-of-range inputs leave the
/// sequence untouched and return `from`.
pub fn apply_move<T>(items: &mut Vec<T>, from: usize, slot: usize) -> usize {
    if from >= items.len() || slot > items.len() {
        return from;
    }
    let to = if slot > from { slot - 1 } else { slot };
    let item = items.remove(from);
    items.insert(to, item);
    to
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_write.set(None);
    sort.drop_slot_write.set(None);
    sort.pending_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position; ignored while locked
pub fn make_on_mousedown(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 && !sort.locked_read.get_untracked() {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            sort.pending_write.set(Some(index));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();

        if pending.is_some() && sort.dragging_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop slots (gaps between items)
pub fn make_on_slot_mouseenter(sort: SortSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.drop_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(from, slot)` fires when an actual drag (not a click) ends over
/// a slot.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = sort.dragging_read.get_untracked();
        let slot = sort.drop_slot_read.get_untracked();

        // Clear pending state first
        sort.pending_write.set(None);

        if let (Some(from), Some(slot)) = (dragging, slot) {
            end_drag(&sort);
            on_drop(from, slot);
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(sort);
}

#[cfg(test)]
mod tests {
    use super::apply_move;

    #[test]
    fn test_move_forward() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "a" into the gap after "c" (slot 3)
        let to = apply_move(&mut items, 0, 3);
        assert_eq!(items, vec!["b", "c", "a", "d"]);
        assert_eq!(to, 2);
    }

    #[test]
    fn test_move_backward() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "d" into the gap before "b" (slot 1)
        let to = apply_move(&mut items, 3, 1);
        assert_eq!(items, vec!["a", "d", "b", "c"]);
        assert_eq!(to, 1);
    }

    #[test]
    fn test_move_to_end() {
        let mut items = vec![1, 2, 3];
        let to = apply_move(&mut items, 0, 3);
        assert_eq!(items, vec![2, 3, 1]);
        assert_eq!(to, 2);
    }

    #[test]
    fn test_drop_in_place() {
        // Adjacent slots are a no-op move
        let mut items = vec![1, 2, 3];
        assert_eq!(apply_move(&mut items, 1, 1), 1);
        assert_eq!(items, vec![1, 2, 3]);
        let mut items = vec![1, 2, 3];
        assert_eq!(apply_move(&mut items, 1, 2), 1);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut items = vec![1, 2];
        assert_eq!(apply_move(&mut items, 5, 0), 5);
        assert_eq!(apply_move(&mut items, 0, 9), 0);
        assert_eq!(items, vec![1, 2]);
    }
}
