//! UI Components
//!
//! Reusable Leptos components.

mod notice_bar;
mod sortable_list;
mod sortable_table;

pub use notice_bar::NoticeBar;
pub use sortable_list::SortableList;
pub use sortable_table::SortableTable;
