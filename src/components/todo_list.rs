//! Todo List Component
//!
//! Count summary and item rows, or the empty-state prompt.

use leptos::prelude::*;

use crate::components::{CountSummary, TodoRowView};
use crate::listing::ListView;
use crate::models::{PriorityCounts, TodoItem};

/// List area. Renders the placeholder instead of summary and rows when empty.
#[component]
pub fn TodoList(todos: Memo<Vec<TodoItem>>, counts: Memo<PriorityCounts>) -> impl IntoView {
    let list_view = move || todos.with(|todos| ListView::build(todos, &counts.get()));

    move || match list_view() {
        ListView::Placeholder(prompt) => view! { <div>{prompt}</div> }.into_any(),
        ListView::Populated { summary, rows } => view! {
            <CountSummary summary=summary />
            <ul class="list-group">
                // Rebuilt on every list change so each row's delete index stays current
                {rows.into_iter().map(|row| view! { <TodoRowView row=row /> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
