//! Frontend Models
//!
//! Priority, todo items and per-priority counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a todo item.
///
/// Serialized as its numeric code (High = 1, Mid = 2, Low = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    High,
    #[default]
    Mid,
    Low,
}

/// Rejected priority input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriorityError {
    #[error("unknown priority code {0}")]
    UnknownCode(u8),
    #[error("unrecognized priority value {0:?}")]
    Unknown(String),
}

impl Priority {
    /// All priorities in display order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Mid, Priority::Low];

    pub fn code(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Mid => 2,
            Priority::Low => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, PriorityError> {
        match code {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Mid),
            3 => Ok(Priority::Low),
            other => Err(PriorityError::UnknownCode(other)),
        }
    }

    /// Display label shown in badges, the selector and the summary
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Mid => "中",
            Priority::Low => "低",
        }
    }

    /// Bootstrap badge variant for the severity color
    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "badge-danger",
            Priority::Mid => "badge-warning",
            Priority::Low => "badge-success",
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.code()
    }
}

impl TryFrom<u8> for Priority {
    type Error = PriorityError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Priority::from_code(code)
    }
}

/// Parses a `<select>` option value such as `"2"`.
impl FromStr for Priority {
    type Err = PriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s
            .trim()
            .parse()
            .map_err(|_| PriorityError::Unknown(s.to_string()))?;
        Priority::from_code(code).map_err(|_| PriorityError::Unknown(s.to_string()))
    }
}

/// Opaque item identifier (creation timestamp in milliseconds)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Todo item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub priority: Priority,
}

/// Number of items per priority, derived from the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityCounts {
    high: usize,
    mid: usize,
    low: usize,
}

impl PriorityCounts {
    pub fn tally(todos: &[TodoItem]) -> Self {
        todos.iter().fold(Self::default(), |mut counts, todo| {
            *counts.slot(todo.priority) += 1;
            counts
        })
    }

    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Mid => self.mid,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.mid + self.low
    }

    fn slot(&mut self, priority: Priority) -> &mut usize {
        match priority {
            Priority::High => &mut self.high,
            Priority::Mid => &mut self.mid,
            Priority::Low => &mut self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, priority: Priority) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            title: format!("Item {}", id),
            priority,
        }
    }

    #[test]
    fn test_priority_codes() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_code(priority.code()), Ok(priority));
        }
        assert_eq!(Priority::from_code(0), Err(PriorityError::UnknownCode(0)));
        assert_eq!(Priority::from_code(4), Err(PriorityError::UnknownCode(4)));
    }

    #[test]
    fn test_parse_select_values() {
        assert_eq!("1".parse(), Ok(Priority::High));
        assert_eq!(" 3 ".parse(), Ok(Priority::Low));
        assert!("".parse::<Priority>().is_err());
        assert!("4".parse::<Priority>().is_err());
        assert!("high".parse::<Priority>().is_err());
        assert!("-1".parse::<Priority>().is_err());
        assert!("2.5".parse::<Priority>().is_err());
    }

    #[test]
    fn test_labels_and_badges() {
        assert_eq!(Priority::High.label(), "高");
        assert_eq!(Priority::Mid.label(), "中");
        assert_eq!(Priority::Low.label(), "低");
        assert_eq!(Priority::High.badge_class(), "badge-danger");
        assert_eq!(Priority::Mid.badge_class(), "badge-warning");
        assert_eq!(Priority::Low.badge_class(), "badge-success");
        assert_eq!(Priority::default(), Priority::Mid);
    }

    #[test]
    fn test_priority_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "3");
        let parsed: Priority = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Priority::High);
        assert!(serde_json::from_str::<Priority>("7").is_err());
    }

    #[test]
    fn test_tally() {
        let items = vec![
            make_item("1", Priority::High),
            make_item("2", Priority::Low),
            make_item("3", Priority::High),
        ];

        let counts = PriorityCounts::tally(&items);

        assert_eq!(counts.get(Priority::High), 2);
        assert_eq!(counts.get(Priority::Mid), 0);
        assert_eq!(counts.get(Priority::Low), 1);
        assert_eq!(counts.total(), items.len());
    }

    #[test]
    fn test_tally_empty() {
        let counts = PriorityCounts::tally(&[]);
        assert_eq!(counts, PriorityCounts::default());
        assert_eq!(counts.total(), 0);
    }
}
