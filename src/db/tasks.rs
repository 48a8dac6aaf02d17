//! Task repository: filtered, ordered queries and transactional writes.
//!
//! Every multi-statement write (task row plus its `task_tags` association
//! rows) runs inside one transaction, so a failure never leaves a task with
//! a half-replaced tag set. Tag ids that match no existing tag are dropped
//! silently during association writes, never reported as errors.

use crate::db::db::Db;
use crate::db::tags::Tag;
use crate::libs::error::{Error, Result};
use crate::libs::task::{NewTask, Priority, Task, TaskFilter, TaskUpdate};
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Transaction};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, priority, completed) VALUES (?1, ?2, ?3, ?4, FALSE)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority, completed FROM tasks";
// Due dates ascending with NULLs last, newest id first among equals.
const ORDER_TASKS: &str = "ORDER BY due_date IS NULL, due_date ASC, id DESC";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const TASK_EXISTS: &str = "SELECT 1 FROM tasks WHERE id = ?1";
// Resolving insert: the SELECT matches at most one existing tag, so ids
// that reference nothing insert nothing.
const ATTACH_EXISTING_TAG: &str = "INSERT OR IGNORE INTO task_tags (task_id, tag_id) SELECT ?1, id FROM tags WHERE id = ?2";
const DETACH_ALL_TAGS: &str = "DELETE FROM task_tags WHERE task_id = ?1";
const SELECT_TAGS_BY_TASK: &str = "
    SELECT t.id, t.name, t.color FROM tags t
    JOIN task_tags tt ON t.id = tt.tag_id
    WHERE tt.task_id = ?1
    ORDER BY tt.rowid
";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> anyhow::Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a task with its resolved tag set in one transaction.
    pub fn create(&mut self, new: &NewTask) -> Result<Task> {
        let tx = self.conn.transaction()?;
        tx.execute(
            INSERT_TASK,
            params![new.title, new.description, new.due_date, new.priority.as_str()],
        )?;
        let id = tx.last_insert_rowid();
        Self::attach_tags(&tx, id, &new.tag_ids)?;
        tx.commit()?;

        self.get_by_id(id)?.ok_or(Error::TaskNotFound(id))
    }

    /// Fetch tasks matching the filter, ordered by due date (ascending,
    /// NULLs last) and then id descending.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(completed) = filter.completed {
            clauses.push("completed = ?");
            params.push(Box::new(completed));
        }
        if let Some(priority) = filter.priority {
            clauses.push("priority = ?");
            params.push(Box::new(priority.as_str()));
        }
        if let Some(tag_id) = filter.tag_id {
            clauses.push("EXISTS (SELECT 1 FROM task_tags tt WHERE tt.task_id = tasks.id AND tt.tag_id = ?)");
            params.push(Box::new(tag_id));
        }

        let sql = if clauses.is_empty() {
            format!("{} {}", SELECT_TASKS, ORDER_TASKS)
        } else {
            format!("{} WHERE {} {}", SELECT_TASKS, clauses.join(" AND "), ORDER_TASKS)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(params.iter().map(|p| p.as_ref())), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        for task in &mut tasks {
            task.tags = Self::tags_for(&self.conn, task.id)?;
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::map_row)
            .optional()?;

        match task {
            Some(mut task) => {
                task.tags = Self::tags_for(&self.conn, task.id)?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Apply a partial update: only fields present in `update` change, and a
    /// present `tag_ids` replaces the whole tag set. Runs in one
    /// transaction and fails with `TaskNotFound` before touching anything
    /// when the id does not exist.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Task> {
        let tx = self.conn.transaction()?;

        let exists: Option<i64> = tx.query_row(TASK_EXISTS, params![id], |row| row.get(0)).optional()?;
        if exists.is_none() {
            return Err(Error::TaskNotFound(id));
        }

        let mut sets: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &update.title {
            sets.push("title = ?");
            params.push(Box::new(title.clone()));
        }
        if let Some(description) = &update.description {
            // Present-but-null clears the column
            sets.push("description = ?");
            params.push(Box::new(description.clone()));
        }
        if let Some(due_date) = &update.due_date {
            sets.push("due_date = ?");
            params.push(Box::new(*due_date));
        }
        if let Some(priority) = update.priority {
            sets.push("priority = ?");
            params.push(Box::new(priority.as_str()));
        }
        if let Some(completed) = update.completed {
            sets.push("completed = ?");
            params.push(Box::new(completed));
        }

        if !sets.is_empty() {
            let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
            params.push(Box::new(id));
            tx.execute(&sql, params_from_iter(params.iter().map(|p| p.as_ref())))?;
        }

        if let Some(tag_ids) = &update.tag_ids {
            tx.execute(DETACH_ALL_TAGS, params![id])?;
            Self::attach_tags(&tx, id, tag_ids)?;
        }

        tx.commit()?;

        self.get_by_id(id)?.ok_or(Error::TaskNotFound(id))
    }

    /// Delete a task and its association rows.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DETACH_ALL_TAGS, params![id])?;
        let affected = tx.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(Error::TaskNotFound(id));
        }
        tx.commit()?;
        Ok(())
    }

    /// Inserts association rows for every id that resolves to an existing
    /// tag; ids without a match insert nothing.
    fn attach_tags(tx: &Transaction, task_id: i64, tag_ids: &[i64]) -> Result<()> {
        for tag_id in tag_ids {
            tx.execute(ATTACH_EXISTING_TAG, params![task_id, tag_id])?;
        }
        Ok(())
    }

    fn tags_for(conn: &Connection, task_id: i64) -> Result<Vec<Tag>> {
        let mut stmt = conn.prepare(SELECT_TAGS_BY_TASK)?;
        let tag_iter = stmt.query_map(params![task_id], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
            })
        })?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        let priority: String = row.get(4)?;
        let priority = priority
            .parse::<Priority>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, e.into()))?;

        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            priority,
            completed: row.get(5)?,
            tags: Vec::new(),
        })
    }
}
