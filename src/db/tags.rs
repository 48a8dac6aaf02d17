use crate::db::db::Db;
use crate::libs::error::{Error, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_COLOR: &str = "#6366f1";

const INSERT_TAG: &str = "INSERT INTO tags (name, color) VALUES (?1, ?2)";
const DELETE_TAG: &str = "DELETE FROM tags WHERE id = ?1";
const DELETE_TAG_ASSOCIATIONS: &str = "DELETE FROM task_tags WHERE tag_id = ?1";
const SELECT_ALL_TAGS: &str = "SELECT id, name, color FROM tags ORDER BY id";
const SELECT_TAG_BY_NAME: &str = "SELECT id, name, color FROM tags WHERE name = ?1";
const SELECT_TAG_BY_ID: &str = "SELECT id, name, color FROM tags WHERE id = ?1";
const SELECT_TAGS_BY_TASK: &str = "
    SELECT t.id, t.name, t.color FROM tags t
    JOIN task_tags tt ON t.id = tt.tag_id
    WHERE tt.task_id = ?1
    ORDER BY tt.rowid
";
const SELECT_TASKS_BY_TAG: &str = "SELECT task_id FROM task_tags WHERE tag_id = ?1 ORDER BY task_id";

/// A named, colored label attachable to any number of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new() -> anyhow::Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new tag; a missing color falls back to the default.
    ///
    /// Returns `Error::TagExists` when the UNIQUE constraint on the name
    /// fires.
    pub fn create(&mut self, name: &str, color: Option<&str>) -> Result<Tag> {
        let color = color.unwrap_or(DEFAULT_TAG_COLOR);
        self.conn.execute(INSERT_TAG, params![name, color]).map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _) if err.code == rusqlite::ErrorCode::ConstraintViolation => {
                Error::TagExists(name.to_string())
            }
            other => Error::Db(other),
        })?;
        let id = self.conn.last_insert_rowid();
        Ok(Tag {
            id,
            name: name.to_string(),
            color: color.to_string(),
        })
    }

    /// Delete a tag and every association row that references it.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_TAG_ASSOCIATIONS, params![id])?;
        let affected = tx.execute(DELETE_TAG, params![id])?;
        if affected == 0 {
            return Err(Error::TagNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    /// All tags in insertion order.
    pub fn list(&mut self) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TAGS)?;
        let tag_iter = stmt.query_map([], Self::map_row)?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Tag>> {
        self.conn
            .query_row(SELECT_TAG_BY_NAME, params![name], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Tag>> {
        self.conn
            .query_row(SELECT_TAG_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Tags attached to a task, in join (association insertion) order.
    pub fn get_task_tags(&mut self, task_id: i64) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_TAGS_BY_TASK)?;
        let tag_iter = stmt.query_map(params![task_id], Self::map_row)?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Ids of tasks carrying a specific tag.
    pub fn get_tasks_with_tag(&mut self, tag_id: i64) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_TAG)?;
        let task_iter = stmt.query_map(params![tag_id], |row| row.get(0))?;

        let mut task_ids = Vec::new();
        for task_id in task_iter {
            task_ids.push(task_id?);
        }
        Ok(task_ids)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tag> {
        Ok(Tag {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
        })
    }
}
