//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Trigger to reload collections from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload collections from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Failure notice shown in the notice bar - read
    pub notice: ReadSignal<Option<String>>,
    /// Failure notice - write
    set_notice: WriteSignal<Option<String>>,
}

impl AdminContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Trigger a reload of collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a failure notice
    pub fn notify(&self, message: String) {
        self.set_notice.set(Some(message));
    }

    /// Dismiss the current notice
    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}
