use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks<'a, I>(tasks: I)
    where
        I: IntoIterator<Item = &'a Task>,
    {
        Self::table(tasks).printstd();
    }

    /// One header row plus one row per task, in the order given.
    pub fn table<'a, I>(tasks: I) -> Table
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CATEGORY", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.category, task.priority, task.status]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;

    #[test]
    fn test_table_has_header_and_rows() {
        let tasks = vec![Task::new(1, "Buy milk", "Personal", Priority::Low), Task::new(2, "Ship release", "Work", Priority::High)];

        let table = View::table(&tasks);

        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Ship release"));
        assert!(rendered.contains("Pending"));
    }
}
