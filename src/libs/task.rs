//! Task domain types: the task entity, its priority scale, and the input
//! shapes for creation, filtering, and partial updates.

use crate::db::tags::Tag;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority scale.
///
/// A closed set: values outside `low`/`medium`/`high` are unrepresentable,
/// both on the CLI (`ValueEnum`) and in JSON payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A stored task together with its resolved tag set.
///
/// Serializes to the wire shape used by list/export output:
/// `{id, title, description|null, due_date|null, priority, completed, tags}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub tags: Vec<Tag>,
}

/// Input for task creation.
///
/// Tag ids are resolved against existing tags at insert time; ids that match
/// nothing are dropped silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            tag_ids: Vec::new(),
        }
    }
}

/// Conjunctive task list filter. `None` fields impose no constraint;
/// `tag_id` matches tasks whose tag set contains that id.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub tag_id: Option<i64>,
}

/// Partial update for a task.
///
/// Every field distinguishes "absent" from "present". For the clearable
/// fields (`description`, `due_date`) the payload value is doubly optional:
/// `None` leaves the field untouched, `Some(None)` clears it, and
/// `Some(Some(v))` replaces it. A present `tag_ids` replaces the whole tag
/// set, so `Some(vec![])` detaches every tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub tag_ids: Option<Vec<i64>>,
}

impl TaskUpdate {
    /// An update with no fields present applies nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
            && self.tag_ids.is_none()
    }
}

/// Maps a present-but-null JSON field to `Some(None)` instead of `None`,
/// preserving the unset-vs-cleared distinction through serde.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null() {
        let update: TaskUpdate = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(update.description, Some(None));
        assert!(update.due_date.is_none());

        let update: TaskUpdate = serde_json::from_str(r#"{"title": "renamed"}"#).unwrap();
        assert!(update.description.is_none());
        assert_eq!(update.title.as_deref(), Some("renamed"));
    }

    #[test]
    fn priority_rejects_unknown_values() {
        assert!("urgent".parse::<Priority>().is_err());
        assert!(serde_json::from_str::<Priority>(r#""urgent""#).is_err());
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(TaskUpdate::default().is_empty());
        let update: TaskUpdate = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert!(!update.is_empty());
    }
}
