//! Service layer: validation invariants and the operation surface the
//! commands (or any embedding API) call into.
//!
//! Each service instance acquires its own store handle on construction and
//! releases it on drop, so one service per logical unit of work gives the
//! scoped acquire/release lifecycle the store expects. Validation happens
//! here, before anything reaches the repositories; the repositories enforce
//! only what the schema itself can express.

use crate::db::tags::{Tag, Tags};
use crate::db::tasks::Tasks;
use crate::libs::error::{Error, Result};
use crate::libs::task::{NewTask, Task, TaskFilter, TaskUpdate};

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const TAG_NAME_MAX_LEN: usize = 50;

pub struct TaskService {
    tasks: Tasks,
}

impl TaskService {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { tasks: Tasks::new()? })
    }

    /// Create a task from validated input. Unresolvable tag ids are dropped
    /// from the resulting tag set, not errored.
    pub fn create(&mut self, new: &NewTask) -> Result<Task> {
        validate_title(&new.title)?;
        if let Some(description) = &new.description {
            validate_description(description)?;
        }
        self.tasks.create(new)
    }

    /// Tasks matching every present filter field, ordered by due date
    /// ascending (no due date last) with newest first among equals.
    pub fn list(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        self.tasks.fetch(filter)
    }

    pub fn get(&mut self, id: i64) -> Result<Task> {
        self.tasks.get_by_id(id)?.ok_or(Error::TaskNotFound(id))
    }

    /// Partial update: absent fields stay untouched, present-but-null
    /// clears, and a present `tag_ids` replaces the whole tag set.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Task> {
        if let Some(title) = &update.title {
            validate_title(title)?;
        }
        if let Some(Some(description)) = &update.description {
            validate_description(description)?;
        }
        self.tasks.update(id, update)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.tasks.delete(id)
    }
}

pub struct TagService {
    tags: Tags,
}

impl TagService {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { tags: Tags::new()? })
    }

    pub fn list(&mut self) -> Result<Vec<Tag>> {
        self.tags.list()
    }

    /// Create a tag; duplicate names surface as `Error::TagExists`.
    pub fn create(&mut self, name: &str, color: Option<&str>) -> Result<Tag> {
        validate_tag_name(name)?;
        if let Some(color) = color {
            validate_color(color)?;
        }
        self.tags.create(name, color)
    }

    /// Delete a tag, detaching it from every task that carries it.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.tags.delete(id)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Tag>> {
        self.tags.get_by_id(id)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Tag>> {
        self.tags.get_by_name(name)
    }

    /// Ids of tasks carrying the tag, for the `tag tasks` listing.
    pub fn tasks_with_tag(&mut self, tag_id: i64) -> Result<Vec<i64>> {
        self.tags.get_tasks_with_tag(tag_id)
    }
}

fn validate_title(title: &str) -> Result<()> {
    let len = title.chars().count();
    if title.trim().is_empty() {
        return Err(Error::Validation("title must not be empty".to_string()));
    }
    if len > TITLE_MAX_LEN {
        return Err(Error::Validation(format!("title exceeds {} characters", TITLE_MAX_LEN)));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(Error::Validation(format!("description exceeds {} characters", DESCRIPTION_MAX_LEN)));
    }
    Ok(())
}

fn validate_tag_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if name.trim().is_empty() {
        return Err(Error::Validation("tag name must not be empty".to_string()));
    }
    if len > TAG_NAME_MAX_LEN {
        return Err(Error::Validation(format!("tag name exceeds {} characters", TAG_NAME_MAX_LEN)));
    }
    Ok(())
}

/// Accepts `#rgb` and `#rrggbb` hex color codes.
fn validate_color(color: &str) -> Result<()> {
    let digits = color.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(Error::Validation(format!("'{}' is not a hex color code", color)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_validation() {
        assert!(validate_color("#6366f1").is_ok());
        assert!(validate_color("#f00").is_ok());
        assert!(validate_color("red").is_err());
        assert!(validate_color("#12345").is_err());
        assert!(validate_color("#gggggg").is_err());
    }

    #[test]
    fn title_validation() {
        assert!(validate_title("Buy milk").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
        assert!(validate_title(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn tag_name_validation() {
        assert!(validate_tag_name("urgent").is_ok());
        assert!(validate_tag_name("").is_err());
        assert!(validate_tag_name(&"x".repeat(51)).is_err());
    }
}
