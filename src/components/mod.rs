//! UI Components
//!
//! Leptos components for the form and the list.

mod count_summary;
mod priority_selector;
mod todo_form;
mod todo_list;
mod todo_row;

pub use count_summary::CountSummary;
pub use priority_selector::PrioritySelector;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRowView;
