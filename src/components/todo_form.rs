//! Todo Form Component
//!
//! Title input, priority selector and create button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::PrioritySelector;
use crate::context::use_app_context;
use crate::labels;
use crate::lifecycle::OneShot;
use crate::store::{DraftStoreFields, TodoAction, TodoStateStoreFields};

/// Form for drafting and creating a new item
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let title = Memo::new(move |_| ctx.store.draft().title().get());
    let priority = Memo::new(move |_| ctx.store.draft().priority().get());
    let disabled = move || title.with(String::is_empty);

    // Log the title input's value once, at first mount
    let title_ref = NodeRef::<leptos::html::Input>::new();
    let mount_log = StoredValue::new(OneShot::new());
    Effect::new(move |_| {
        let Some(input) = title_ref.get() else { return };
        mount_log.update_value(|once| {
            once.fire(|| web_sys::console::log_1(&input.value().into()));
        });
    });

    view! {
        <div class="form-group">
            <label>{labels::TITLE_FIELD}</label>
            <input
                node_ref=title_ref
                class="form-control"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        ctx.dispatch(TodoAction::EditTitle(input.value()));
                    }
                }
            />
        </div>
        <div class="form-group">
            <label>{labels::PRIORITY_FIELD}</label>
            <PrioritySelector
                current=priority
                on_change=move |raw| ctx.dispatch(TodoAction::EditPriority(raw))
            />
        </div>
        <div class="form-group text-center">
            <button
                class=move || if disabled() { "btn btn-primary px-5 btn-disabled" } else { "btn btn-primary px-5" }
                disabled=disabled
                on:click=move |_| ctx.dispatch(TodoAction::Submit)
            >
                {labels::CREATE_BUTTON}
            </button>
        </div>
    }
}
