//! Application State Store
//!
//! Draft form + todo list, mutated only through `TodoState::reduce`.
//! The UI holds it in a `reactive_stores::Store` for field-level reactivity.

use reactive_stores::Store;

use crate::models::{Priority, PriorityError, TodoId, TodoItem};

/// Unsubmitted form contents
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Draft {
    /// Title as typed, never trimmed
    pub title: String,
    /// Kept across submissions
    pub priority: Priority,
}

/// Whole application state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    pub draft: Draft,
    /// Insertion order
    pub todos: Vec<TodoItem>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// User input events
#[derive(Clone, Debug, PartialEq)]
pub enum TodoAction {
    EditTitle(String),
    /// Raw `<select>` value
    EditPriority(String),
    Submit,
    /// Zero-based position captured when the row was rendered
    Delete(usize),
}

/// Result of an applied action
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    TitleEdited,
    PriorityChanged(Priority),
    Created(TodoId),
    Deleted(TodoItem),
}

/// Action rejected; state left untouched
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("invalid priority selection: {0}")]
    InvalidPriority(#[from] PriorityError),
    #[error("cannot create an item with an empty title")]
    EmptyTitle,
    #[error("no item at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Source of fresh item ids
pub trait IdSource {
    fn next_id(&self) -> TodoId;
}

/// Ids from the browser clock. Two items created in the same millisecond share an id.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&self) -> TodoId {
        TodoId::new(format!("{}", js_sys::Date::now() as u64))
    }
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create is enabled only for a non-empty title. Whitespace counts.
    pub fn can_submit(&self) -> bool {
        !self.draft.title.is_empty()
    }

    /// Applies one action atomically.
    pub fn reduce(
        &mut self,
        action: TodoAction,
        ids: &impl IdSource,
    ) -> Result<Transition, TransitionError> {
        match action {
            TodoAction::EditTitle(text) => {
                self.draft.title = text;
                Ok(Transition::TitleEdited)
            }
            TodoAction::EditPriority(raw) => {
                let priority: Priority = raw.parse()?;
                self.draft.priority = priority;
                Ok(Transition::PriorityChanged(priority))
            }
            TodoAction::Submit => {
                if !self.can_submit() {
                    return Err(TransitionError::EmptyTitle);
                }
                let id = ids.next_id();
                let title = std::mem::take(&mut self.draft.title);
                self.todos.push(TodoItem {
                    id: id.clone(),
                    title,
                    priority: self.draft.priority,
                });
                Ok(Transition::Created(id))
            }
            TodoAction::Delete(index) => {
                let len = self.todos.len();
                if index >= len {
                    return Err(TransitionError::IndexOutOfRange { index, len });
                }
                Ok(Transition::Deleted(self.todos.remove(index)))
            }
        }
    }
}
