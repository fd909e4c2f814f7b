//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Grid must fetch while this is true - read
    pub reload: ReadSignal<bool>,
    /// Grid must fetch while this is true - write
    set_reload: WriteSignal<bool>,
    /// Search keyword, empty for the full listing - read
    pub keyword: ReadSignal<String>,
    /// Search keyword, empty for the full listing - write
    set_keyword: WriteSignal<String>,
}

impl AppContext {
    pub fn new(
        reload: (ReadSignal<bool>, WriteSignal<bool>),
        keyword: (ReadSignal<String>, WriteSignal<String>),
    ) -> Self {
        Self {
            reload: reload.0,
            set_reload: reload.1,
            keyword: keyword.0,
            set_keyword: keyword.1,
        }
    }

    /// Ask the grid to fetch again
    pub fn request_reload(&self) {
        self.set_reload.set(true);
    }

    /// Grid finished a load
    pub fn mark_loaded(&self) {
        self.set_reload.set(false);
    }

    /// Switch the grid to `keyword` and reload
    pub fn search(&self, keyword: String) {
        self.set_keyword.set(keyword);
        self.request_reload();
    }
}
