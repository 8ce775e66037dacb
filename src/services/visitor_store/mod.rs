//! Visitor persistence
//!
//! A single SQLite table of visitors. Named visitors are matched exactly and
//! have their visit count bumped; anonymous visitors always get a new row.
//! Every call commits immediately.

mod error;
mod schema;

pub use error::StoreError;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use tracing::{info, instrument};

/// One row of the visitors table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorRecord {
    pub id: i64,
    pub name: Option<String>,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
    pub visit_count: i64,
}

impl VisitorRecord {
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

/// Storage seam used by the session controller.
pub trait VisitorStore {
    /// Record a visit. `Some(name)` updates the matching row or creates it;
    /// `None` always creates a fresh anonymous row.
    fn upsert(&self, name: Option<&str>) -> Result<VisitorRecord, StoreError>;

    /// Number of rows, regardless of their visit counts.
    fn count(&self) -> Result<i64, StoreError>;
}

/// SQLite-backed store.
pub struct SqliteVisitorStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteVisitorStore {
    /// Open or create the database at `path`, creating parent directories.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Init(format!("create dir {}: {e}", parent.display())))?;
        }

        let conn = Connection::open(path)
            .map_err(|e| StoreError::Init(format!("open {}: {e}", path.display())))?;
        Self::prepare(&conn)?;

        info!(path = %path.display(), "visitor store opened");

        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_owned(),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Init(e.to_string()))?;
        Self::prepare(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: PathBuf::from(":memory:"),
        })
    }

    fn prepare(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(schema::PRAGMAS)
            .map_err(|e| StoreError::Init(format!("pragmas: {e}")))?;
        conn.execute_batch(schema::CREATE_TABLES)
            .map_err(|e| StoreError::Init(format!("schema: {e}")))?;

        let indexed: bool = conn
            .query_row(schema::NAME_INDEX_EXISTS, [], |row| row.get(0))
            .map_err(|e| StoreError::Init(format!("schema: {e}")))?;
        if !indexed {
            Self::add_name_index(conn)
                .map_err(|e| StoreError::Init(format!("name index migration: {e}")))?;
        }
        Ok(())
    }

    /// One-time migration: merge duplicate names, then add the unique index.
    fn add_name_index(conn: &Connection) -> rusqlite::Result<()> {
        let tx = conn.unchecked_transaction()?;
        tx.execute(schema::MERGE_DUPLICATE_NAMES, [])?;
        let removed = tx.execute(schema::DELETE_DUPLICATE_NAMES, [])?;
        tx.execute_batch(schema::CREATE_NAME_INDEX)?;
        tx.commit()?;

        if removed > 0 {
            info!(removed, "merged duplicate visitor names");
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `upsert` with an explicit timestamp.
    #[instrument(skip(self), fields(anonymous = name.is_none()))]
    pub fn upsert_at(
        &self,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<VisitorRecord, StoreError> {
        let conn = self.conn.lock();
        let secs = now.timestamp();
        let record = match name {
            Some(name) => conn.query_row(schema::UPSERT_NAMED, params![name, secs], row_to_record),
            None => conn.query_row(schema::INSERT_ANONYMOUS, params![secs], row_to_record),
        }
        .map_err(|e| StoreError::Write(e.to_string()))?;

        tracing::debug!(id = record.id, visits = record.visit_count, "visit recorded");
        Ok(record)
    }
}

impl VisitorStore for SqliteVisitorStore {
    fn upsert(&self, name: Option<&str>) -> Result<VisitorRecord, StoreError> {
        self.upsert_at(name, Utc::now())
    }

    fn count(&self) -> Result<i64, StoreError> {
        self.conn
            .lock()
            .query_row(schema::COUNT, [], |row| row.get(0))
            .map_err(|e| StoreError::Read(e.to_string()))
    }
}

impl std::fmt::Debug for SqliteVisitorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteVisitorStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<VisitorRecord> {
    Ok(VisitorRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        first_visit: timestamp(row, 2)?,
        last_visit: timestamp(row, 3)?,
        visit_count: row.get(4)?,
    })
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("timestamp out of range: {secs}").into(),
        )
    })
}
