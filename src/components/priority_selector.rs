//! Priority Selector Component
//!
//! `<select>` over the three priorities.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Priority;

/// Priority dropdown. Emits the raw option value; validation happens in the reducer.
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="form-control"
            on:change=move |ev| {
                let select = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok());
                if let Some(select) = select {
                    on_change(select.value());
                }
            }
        >
            {Priority::ALL.iter().map(|&priority| {
                view! {
                    <option
                        value=priority.code().to_string()
                        prop:selected=move || current.get() == priority
                    >
                        {priority.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
