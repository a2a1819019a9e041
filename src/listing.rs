//! Listing Utilities
//!
//! Pure mapping from the todo list to what the list area renders.

use crate::labels;
use crate::models::{Priority, PriorityCounts, TodoId, TodoItem};

/// One rendered list row
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    /// Position in the list at render time, used by the delete button
    pub index: usize,
    pub id: TodoId,
    pub title: String,
    pub label: &'static str,
    pub badge_class: String,
}

impl TodoRow {
    fn new(index: usize, item: &TodoItem) -> Self {
        Self {
            index,
            id: item.id.clone(),
            title: item.title.clone(),
            label: item.priority.label(),
            badge_class: format!("badge m-1 {}", item.priority.badge_class()),
        }
    }
}

/// "高: 2" style summary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryEntry {
    pub priority: Priority,
    pub count: usize,
}

impl SummaryEntry {
    pub fn text(&self) -> String {
        format!("{}: {}", self.priority.label(), self.count)
    }
}

/// List area contents. Empty and populated are exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Placeholder(&'static str),
    Populated {
        summary: Vec<SummaryEntry>,
        rows: Vec<TodoRow>,
    },
}

impl ListView {
    pub fn build(todos: &[TodoItem], counts: &PriorityCounts) -> Self {
        if todos.is_empty() {
            return ListView::Placeholder(labels::EMPTY_PROMPT);
        }
        debug_assert_eq!(counts.total(), todos.len());
        ListView::Populated {
            summary: summary(counts),
            rows: rows(todos),
        }
    }
}

/// One entry per priority in display order, zero included
pub fn summary(counts: &PriorityCounts) -> Vec<SummaryEntry> {
    Priority::ALL
        .iter()
        .map(|&priority| SummaryEntry {
            priority,
            count: counts.get(priority),
        })
        .collect()
}

pub fn rows(todos: &[TodoItem]) -> Vec<TodoRow> {
    todos
        .iter()
        .enumerate()
        .map(|(index, item)| TodoRow::new(index, item))
        .collect()
}
