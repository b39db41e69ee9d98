use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

use crate::version::error::CacheError;
use crate::version::types::VersionTimes;

/// Current schema version, stored in the `user_version` pragma
const SCHEMA_VERSION: i32 = 1;

/// Trait for storing and retrieving raw release-time histories
#[cfg_attr(test, automock)]
pub trait TimesStorer: Send + Sync + 'static {
    /// Get the cached times for a package if they were saved within the refresh interval
    fn get_fresh_times(&self, package_name: &str) -> Result<Option<VersionTimes>, CacheError>;

    /// Replace all cached times for a package
    fn replace_times(&self, package_name: &str, times: &VersionTimes) -> Result<(), CacheError>;
}

pub struct Cache {
    conn: Mutex<Connection>,
    refresh_interval: i64,
}

impl Cache {
    pub fn new(db_path: &Path, refresh_interval: i64) -> Result<Self, CacheError> {
        info!("Initializing history cache at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let cache = Self {
            conn: Mutex::new(conn),
            refresh_interval,
        };

        cache.create_schema()?;
        debug!("History cache initialized");

        Ok(cache)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    fn current_timestamp_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    fn create_schema(&self) -> Result<(), CacheError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS packages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                package_name TEXT NOT NULL UNIQUE,
                updated_at INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS version_times (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                package_id INTEGER NOT NULL,
                version TEXT NOT NULL,
                published_at TEXT NOT NULL,
                FOREIGN KEY (package_id) REFERENCES packages(id) ON DELETE CASCADE,
                UNIQUE(package_id, version)
            )
            "#,
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_version_times_package_id ON version_times(package_id)",
            [],
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(())
    }

    /// Get the cached times for a package regardless of age
    pub fn get_times(&self, package_name: &str) -> Result<VersionTimes, CacheError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t.version, t.published_at FROM version_times t
            JOIN packages p ON t.package_id = p.id
            WHERE p.package_name = ?1
            "#,
        )?;

        let times = stmt
            .query_map([package_name], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<VersionTimes, _>>()?;

        Ok(times)
    }

    /// Remove every cached package
    pub fn clear(&self) -> Result<(), CacheError> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM version_times", [])?;
        tx.execute("DELETE FROM packages", [])?;
        tx.commit()?;
        info!("History cache cleared");
        Ok(())
    }
}

impl TimesStorer for Cache {
    fn get_fresh_times(&self, package_name: &str) -> Result<Option<VersionTimes>, CacheError> {
        let threshold = Self::current_timestamp_ms() - self.refresh_interval;

        let updated_at: Option<i64> = {
            let conn = self.lock_conn()?;
            conn.query_row(
                "SELECT updated_at FROM packages WHERE package_name = ?1",
                [package_name],
                |row| row.get(0),
            )
            .optional()?
        };

        match updated_at {
            Some(updated_at) if updated_at > threshold => {
                debug!("Cache hit for {}", package_name);
                Ok(Some(self.get_times(package_name)?))
            }
            Some(_) => {
                debug!("Cache entry for {} is stale", package_name);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn replace_times(&self, package_name: &str, times: &VersionTimes) -> Result<(), CacheError> {
        debug!("Saving {} release times for {}", times.len(), package_name);

        let now = Self::current_timestamp_ms();

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO packages (package_name, updated_at)
            VALUES (?1, ?2)
            ON CONFLICT(package_name) DO UPDATE SET updated_at = excluded.updated_at
            "#,
            (package_name, now),
        )?;

        let package_id: i64 = tx.query_row(
            "SELECT id FROM packages WHERE package_name = ?1",
            [package_name],
            |row| row.get(0),
        )?;

        tx.execute(
            "DELETE FROM version_times WHERE package_id = ?1",
            [package_id],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO version_times (package_id, version, published_at) VALUES (?1, ?2, ?3)",
            )?;
            for (version, published_at) in times {
                stmt.execute((package_id, version, published_at))?;
            }
        }

        tx.commit()?;

        Ok(())
    }
}
