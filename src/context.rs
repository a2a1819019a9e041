//! Application Context
//!
//! Store handle shared via Leptos Context API. All mutations go through `dispatch`.

use leptos::prelude::*;

use crate::store::{TimestampIds, TodoAction, TodoState, TodoStore, Transition};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Apply a user action to the store. Rejected actions only log.
    pub fn dispatch(&self, action: TodoAction) {
        let result = self
            .store
            .try_update(|state: &mut TodoState| state.reduce(action, &TimestampIds));

        match result {
            Some(Ok(Transition::Created(id))) => {
                web_sys::console::debug_1(&format!("[TODO] Created #{}", id).into());
            }
            Some(Ok(Transition::Deleted(item))) => {
                web_sys::console::debug_1(&format!("[TODO] Deleted #{} {:?}", item.id, item.title).into());
            }
            Some(Ok(_)) => {}
            Some(Err(err)) => {
                web_sys::console::warn_1(&format!("[TODO] Ignored: {}", err).into());
            }
            None => {
                web_sys::console::warn_1(&"[TODO] Store disposed, action dropped".into());
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
