//! Terminal table rendering for tasks and tags.

use crate::db::tags::Tag;
use crate::libs::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DUE", "PRIORITY", "DONE", "TAGS"]);
        for task in tasks {
            let due = task.due_date.map(|d| d.to_string()).unwrap_or_default();
            let tags = task.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ");
            table.add_row(row![
                task.id,
                task.title,
                due,
                task.priority,
                if task.completed { "✓" } else { "" },
                tags
            ]);
        }
        table.printstd();
    }

    pub fn tags(tags: &[Tag]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for tag in tags {
            table.add_row(row![tag.id, tag.name, tag.color]);
        }
        table.printstd();
    }
}
