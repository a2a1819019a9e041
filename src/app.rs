//! Priority Todo App
//!
//! Root component: draft form on top, item list below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList};
use crate::context::AppContext;
use crate::models::PriorityCounts;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::new());
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    let todos = Memo::new(move |_| store.todos().get());
    // Recounted only when the list changes
    let counts = Memo::new(move |_| todos.with(|todos| PriorityCounts::tally(todos)));

    view! {
        <div class="container">
            <div class="row justify-content-center">
                <div class="col-lg-6 col-md-8">
                    <TodoForm />
                </div>
            </div>
            <div class="row justify-content-center">
                <div class="col-lg-6 col-md-8">
                    <TodoList todos=todos counts=counts />
                </div>
            </div>
        </div>
    }
}
