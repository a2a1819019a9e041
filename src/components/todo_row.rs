//! Todo Row Component
//!
//! A single item in the list: badge, title and delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::labels;
use crate::listing::TodoRow;
use crate::store::TodoAction;

/// A single item row
#[component]
pub fn TodoRowView(row: TodoRow) -> impl IntoView {
    let ctx = use_app_context();
    let index = row.index;

    view! {
        <li class="list-group-item align-middle">
            <span class=row.badge_class>{row.label}</span>
            {row.title}
            <button
                class="btn btn-sm btn-danger float-right"
                on:click=move |_| ctx.dispatch(TodoAction::Delete(index))
            >
                {labels::DELETE_BUTTON}
            </button>
        </li>
    }
}
