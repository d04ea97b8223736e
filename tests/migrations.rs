#[cfg(test)]
mod tests {
    use classwork::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use rusqlite::Connection;

    #[test]
    fn test_fresh_database_is_migrated_to_latest() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let latest = MigrationManager::new().latest_version();
        assert_eq!(get_db_version(&conn).unwrap(), latest);
        assert!(!needs_migration(&conn).unwrap());

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unmigrated_database_needs_migration() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        let versions: Vec<u32> = history.iter().map(|(version, _, _)| *version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(history[0].1, "create_books_table");
    }
}
