#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use taskdeck::db::db::Db;
    use taskdeck::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct MigrationTestContext;

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            MigrationTestContext
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_lifecycle(_ctx: &mut MigrationTestContext) {
        // Opening the database applies every registered migration
        let mut db = Db::new().unwrap();
        let manager = MigrationManager::new();

        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        assert!(!needs_migration(&db.conn).unwrap());
        assert!(manager.is_migration_applied(&db.conn, 1).unwrap());
        assert!(manager.is_migration_applied(&db.conn, 2).unwrap());
        assert!(!manager.is_migration_applied(&db.conn, 3).unwrap());

        let history = manager.get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_tasks_table");
        assert_eq!(history[1].0, 2);
        assert_eq!(history[1].1, "add_tags_system");

        // Schema objects exist after migration
        let count: i64 = db
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('tasks', 'tags', 'task_tags')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);

        #[cfg(debug_assertions)]
        {
            // Rolling back rewinds the tracking table; re-running catches up
            manager.rollback_to(&mut db.conn, 1).unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 1);
            assert!(needs_migration(&db.conn).unwrap());

            manager.run_migrations(&mut db.conn).unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 2);
            assert!(!needs_migration(&db.conn).unwrap());
        }
    }
}
