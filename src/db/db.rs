use super::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskheap.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the application data directory and brings its
    /// schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        Self::with_connection(conn)
    }

    /// Runs migrations on an already opened connection.
    pub fn with_connection(mut conn: Connection) -> Result<Db> {
        MigrationManager::new().run_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
