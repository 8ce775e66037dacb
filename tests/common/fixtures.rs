// Visitor store doubles

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use termfolio::services::visitor_store::{StoreError, VisitorRecord, VisitorStore};

/// Call counters shared between a store double and the test that boxed it.
#[derive(Debug, Default)]
pub struct StoreCalls {
    pub upserts: AtomicUsize,
    pub counts: AtomicUsize,
}

impl StoreCalls {
    pub fn upserts(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }

    pub fn counts(&self) -> usize {
        self.counts.load(Ordering::SeqCst)
    }
}

/// In-memory store with the same name-matching rules as the SQLite one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<VisitorRecord>>,
    pub calls: Arc<StoreCalls>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<VisitorRecord> {
        self.rows.lock().clone()
    }
}

impl VisitorStore for MemoryStore {
    fn upsert(&self, name: Option<&str>) -> Result<VisitorRecord, StoreError> {
        self.calls.upserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock();
        let now = Utc.timestamp_opt(1_700_000_000 + rows.len() as i64, 0).unwrap();

        if let Some(name) = name {
            if let Some(row) = rows.iter_mut().find(|r| r.name.as_deref() == Some(name)) {
                row.visit_count += 1;
                row.last_visit = now;
                return Ok(row.clone());
            }
        }

        let record = VisitorRecord {
            id: rows.len() as i64 + 1,
            name: name.map(str::to_string),
            first_visit: now,
            last_visit: now,
            visit_count: 1,
        };
        rows.push(record.clone());
        Ok(record)
    }

    fn count(&self) -> Result<i64, StoreError> {
        self.calls.counts.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().len() as i64)
    }
}

/// Which operation a `FailingStore` should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Upsert,
    Count,
}

/// Store whose chosen operation always fails.
#[derive(Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_on: FailOn,
    pub calls: Arc<StoreCalls>,
}

impl FailingStore {
    pub fn new(fail_on: FailOn) -> Self {
        let inner = MemoryStore::new();
        let calls = inner.calls.clone();
        Self {
            inner,
            fail_on,
            calls,
        }
    }
}

impl VisitorStore for FailingStore {
    fn upsert(&self, name: Option<&str>) -> Result<VisitorRecord, StoreError> {
        if self.fail_on == FailOn::Upsert {
            self.calls.upserts.fetch_add(1, Ordering::SeqCst);
            return Err(StoreError::Write("disk I/O error".to_string()));
        }
        self.inner.upsert(name)
    }

    fn count(&self) -> Result<i64, StoreError> {
        if self.fail_on == FailOn::Count {
            self.calls.counts.fetch_add(1, Ordering::SeqCst);
            return Err(StoreError::Read("database is locked".to_string()));
        }
        self.inner.count()
    }
}
