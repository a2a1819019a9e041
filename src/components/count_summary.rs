//! Count Summary Component

use leptos::prelude::*;

use crate::listing::SummaryEntry;

/// Per-priority counts shown above the list
#[component]
pub fn CountSummary(summary: Vec<SummaryEntry>) -> impl IntoView {
    summary
        .into_iter()
        .map(|entry| view! { <span class="mx-2">{entry.text()}</span> })
        .collect_view()
}
