#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use serial_test::serial;
    use taskheap::commands::import::replace_stored;
    use taskheap::db::db::DB_FILE_NAME;
    use taskheap::db::tasks::Tasks;
    use taskheap::libs::context::AppContext;
    use taskheap::libs::data_storage::DataStorage;
    use taskheap::libs::task::{Task, TaskDraft, TaskFilter, TaskStatus, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    fn draft(title: &str, priority: i64) -> TaskDraft {
        TaskDraft::new(title, "", Some(NaiveDate::from_ymd_opt(2032, 1, 1).unwrap()), priority)
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_database_lives_in_data_dir(_ctx: &mut StorageTestContext) {
        let _store = Tasks::new().unwrap();
        let path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        assert!(path.exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_context_survives_reload(_ctx: &mut StorageTestContext) {
        let now = Local::now().naive_local();
        {
            let mut store = Tasks::new().unwrap();
            let mut context = AppContext::load(&mut store).unwrap();
            assert!(context.is_empty());

            context.add(draft("Low", PRIORITY_LOW), now).unwrap();
            let high = context.add(draft("High", PRIORITY_HIGH), now).unwrap();
            context.add(draft("Medium", PRIORITY_MEDIUM), now).unwrap();
            context.toggle_status(high);
            context.save(&mut store).unwrap();
        }

        let mut store = Tasks::new().unwrap();
        let context = AppContext::load(&mut store).unwrap();

        assert_eq!(context.len(), 3);
        assert_eq!(context.next_id(), 4);
        assert!(context.queue().is_valid_heap());

        let titles: Vec<&str> = context.list(&TaskFilter::default()).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["High", "Medium", "Low"]);
        assert_eq!(context.next().map(|t| t.status), Some(TaskStatus::Completed));
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_deleted_ids_are_not_reused(_ctx: &mut StorageTestContext) {
        let now = Local::now().naive_local();
        let mut store = Tasks::new().unwrap();
        let mut context = AppContext::load(&mut store).unwrap();

        context.add(draft("one", PRIORITY_MEDIUM), now).unwrap();
        let two = context.add(draft("two", PRIORITY_MEDIUM), now).unwrap();
        assert!(context.delete(two).is_some());
        context.save(&mut store).unwrap();

        let mut store = Tasks::new().unwrap();
        let mut context = AppContext::load(&mut store).unwrap();
        assert_eq!(context.add(draft("three", PRIORITY_MEDIUM), now).unwrap(), 3);
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_snapshot_preserves_heap_layout(_ctx: &mut StorageTestContext) {
        let now = Local::now().naive_local();
        let mut store = Tasks::new().unwrap();
        let mut context = AppContext::new();
        for (title, priority) in [("a", 3), ("b", 2), ("c", 1), ("d", 2), ("e", 1)] {
            context.add(draft(title, priority), now).unwrap();
        }
        context.set_priority(1, 0);
        context.save(&mut store).unwrap();

        let layout: Vec<i64> = context.queue().iter().map(|t| t.id).collect();
        let (stored, next_id) = store.load_snapshot().unwrap();
        assert_eq!(stored.iter().map(|t| t.id).collect::<Vec<_>>(), layout);
        assert_eq!(next_id, 6);
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_rejected_import_keeps_stored_rows(_ctx: &mut StorageTestContext) {
        let now = Local::now().naive_local();
        let mut store = Tasks::new().unwrap();
        let mut context = AppContext::new();
        context.add(draft("Pay rent", PRIORITY_HIGH), now).unwrap();
        context.add(draft("Book dentist", PRIORITY_LOW), now).unwrap();
        context.save(&mut store).unwrap();
        let (before, _) = store.load_snapshot().unwrap();

        let due = NaiveDate::from_ymd_opt(2032, 1, 1).unwrap();
        let duplicated = vec![Task::new(8, "one", "", due, 1), Task::new(8, "two", "", due, 2)];
        let err = replace_stored(&mut context, &mut store, duplicated).unwrap_err();
        assert!(err.to_string().starts_with("Import failed"));

        let mut reopened = Tasks::new().unwrap();
        let (after, next_id) = reopened.load_snapshot().unwrap();
        assert_eq!(after, before);
        assert_eq!(next_id, 3);
    }

    #[test_context(StorageTestContext)]
    #[test]
    #[serial]
    fn test_accepted_import_replaces_stored_rows(_ctx: &mut StorageTestContext) {
        let now = Local::now().naive_local();
        let mut store = Tasks::new().unwrap();
        let mut context = AppContext::new();
        context.add(draft("Old task", PRIORITY_MEDIUM), now).unwrap();
        context.save(&mut store).unwrap();

        let due = NaiveDate::from_ymd_opt(2032, 1, 1).unwrap();
        let incoming = vec![Task::new(10, "later", "", due, 3), Task::new(11, "sooner", "", due, 1)];
        replace_stored(&mut context, &mut store, incoming).unwrap();

        let mut reopened = Tasks::new().unwrap();
        let reloaded = AppContext::load(&mut reopened).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.next().map(|t| t.id), Some(11));
        assert_eq!(reloaded.next_id(), 12);
    }
}
