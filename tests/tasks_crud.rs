#[cfg(test)]
mod tests {
    use todo_list::libs::store::TaskStore;
    use todo_list::libs::task::{FieldUpdates, Priority, Status, Task, TaskUpdate};

    fn ids(tasks: &[&Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    fn all_ids(store: &TaskStore) -> Vec<u32> {
        store.get_all().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_and_complete_scenario() {
        let mut store = TaskStore::new();
        store.add("Buy milk", "Personal", Priority::Low);
        store.add("Ship release", "Work", Priority::High);

        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
        assert!(all.iter().all(|t| t.status == Status::Pending));

        assert!(store.mark_completed(1));
        let completed = store.get_completed();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 1);
        assert_eq!(completed[0].name, "Buy milk");
    }

    #[test]
    fn test_add_returns_created_task() {
        let mut store = TaskStore::new();
        let task = store.add("Test Task", "Work", Priority::High).unwrap().clone();

        assert_eq!(task.id, 1);
        assert_eq!(task.name, "Test Task");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(store.get_all(), &[task]);
    }

    #[test]
    fn test_task_delete_keeps_relative_order() {
        let mut store = TaskStore::new();
        for i in 1..=5 {
            store.add(&format!("Task {}", i), "Work", Priority::Medium);
        }

        assert!(store.delete(4));
        assert!(store.delete(1));
        assert_eq!(all_ids(&store), vec![2, 3, 5]);

        // Absent ids leave the collection untouched.
        assert!(!store.delete(4));
        assert!(!store.delete(99));
        assert_eq!(all_ids(&store), vec![2, 3, 5]);
    }

    #[test]
    fn test_deleted_ids_are_never_reissued() {
        let mut store = TaskStore::new();
        store.add("a", "Work", Priority::Low);
        store.add("b", "Work", Priority::Low);
        assert!(store.delete(2));

        let id = store.add("c", "Work", Priority::Low).unwrap().id;

        assert_eq!(id, 3);
        assert_eq!(all_ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_mark_completed_twice() {
        let mut store = TaskStore::new();
        store.add("a", "Work", Priority::Low);
        store.add("b", "Work", Priority::Low);

        assert!(store.mark_completed(2));
        assert!(store.mark_completed(2));
        assert_eq!(store.get(2).unwrap().status, Status::Completed);
        assert_eq!(store.get(1).unwrap().status, Status::Pending);
    }

    #[test]
    fn test_task_update_from_user_fields() {
        let mut store = TaskStore::new();
        store.add("Original name", "Personal", Priority::High);
        store.add("Other", "Work", Priority::Medium);

        let fields = FieldUpdates::from([("name", "Updated name"), ("status", "Completed"), ("owner", "me")]);
        assert!(store.validate(&fields));
        let update = TaskUpdate::try_from(&fields).unwrap();
        assert!(store.edit(1, &update));

        let updated = store.get(1).unwrap();
        assert_eq!(updated.name, "Updated name");
        assert_eq!(updated.category, "Personal");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.status, Status::Completed);
        assert_eq!(store.get(2).unwrap().name, "Other");
    }

    #[test]
    fn test_edit_priority_only() {
        let mut store = TaskStore::new();
        store.add("Buy milk", "Personal", Priority::High);
        store.mark_completed(1);
        let before = store.get(1).unwrap().clone();

        let update = TaskUpdate::try_from(&FieldUpdates::from([("priority", "Low")])).unwrap();
        assert!(store.edit(1, &update));

        let after = store.get(1).unwrap();
        assert_eq!(after.priority, Priority::Low);
        assert_eq!(after.name, before.name);
        assert_eq!(after.category, before.category);
        assert_eq!(after.status, before.status);
        assert!(!store.edit(2, &update));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut store = TaskStore::new();
        store.add("Write report", "Work", Priority::High);
        store.add("Buy milk", "Personal", Priority::Low);
        store.add("Fix bike", "Weekend", Priority::Medium);
        store.mark_completed(2);

        assert_eq!(ids(&store.search("WORK")), ids(&store.search("work")));
        assert_eq!(ids(&store.search("work")), vec![1]);
        assert_eq!(ids(&store.search("completed")), vec![2]);
        assert_eq!(ids(&store.search("MEDIUM")), vec![3]);
        assert_eq!(ids(&store.search("")), vec![1, 2, 3]);
        assert!(store.search("garden").is_empty());
    }

    #[test]
    fn test_validation_boundary() {
        let store = TaskStore::new();
        assert!(!store.validate(&FieldUpdates::from([("priority", "Urgent")])));
        assert!(store.validate(&FieldUpdates::from([("priority", "High")])));
        assert!(!store.validate(&FieldUpdates::from([("name", "")])));
        assert!(!store.validate(&FieldUpdates::from([("category", "")])));
        assert!(store.validate(&FieldUpdates::from([("name", "Buy milk"), ("category", "Personal")])));
    }

    #[test]
    fn test_independent_stores() {
        let mut first = TaskStore::new();
        let mut second = TaskStore::new();
        first.add("a", "Work", Priority::Low);
        first.add("b", "Work", Priority::Low);

        assert_eq!(second.add("c", "Work", Priority::Low).unwrap().id, 1);
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
    }
}
