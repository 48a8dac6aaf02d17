//! Database layer for the taskdeck application.
//!
//! A SQLite persistence layer with a versioned migration system and one
//! repository module per entity. Tasks and tags relate many-to-many through
//! the `task_tags` junction table; both repositories keep that table
//! consistent as part of their write transactions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//! use taskdeck::libs::task::{NewTask, TaskFilter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = tasks.create(&NewTask::new("Review PR"))?;
//! let all = tasks.fetch(&TaskFilter::default())?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file, enables foreign
/// keys, and applies pending migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// Tag repository and the task-tag association maintenance.
pub mod tags;

/// Task repository: CRUD, filtered queries, and partial updates.
pub mod tasks;
