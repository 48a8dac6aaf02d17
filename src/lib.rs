//! # Taskdeck - Personal Task Manager
//!
//! A command-line task manager: tasks with titles, descriptions, due dates,
//! priorities, and completion tracking, organized through colored tags.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, update, complete, and delete tasks
//! - **Tag System**: Colored labels with many-to-many task assignment
//! - **Filtering**: Combine completion, priority, and tag filters
//! - **Partial Updates**: Change exactly the fields you name, clear the
//!   ones you explicitly null out
//! - **JSON Output**: Machine-readable list output for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
