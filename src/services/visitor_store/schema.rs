//! SQL for the visitor table.

/// Applied on every open.
pub const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;
PRAGMA synchronous = NORMAL;
"#;

/// Idempotent table definition.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS visitors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NULL,
    first_visit INTEGER NOT NULL,
    last_visit INTEGER NOT NULL,
    visit_count INTEGER NOT NULL DEFAULT 1
);
"#;

pub const NAME_INDEX_EXISTS: &str =
    "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = 'idx_visitors_name')";

/// Fold duplicate named rows into the lowest id. Databases written before the
/// unique index existed may hold several rows per name.
pub const MERGE_DUPLICATE_NAMES: &str = r#"
UPDATE visitors SET
    visit_count = (SELECT SUM(v.visit_count) FROM visitors v WHERE v.name = visitors.name),
    first_visit = (SELECT MIN(v.first_visit) FROM visitors v WHERE v.name = visitors.name),
    last_visit = (SELECT MAX(v.last_visit) FROM visitors v WHERE v.name = visitors.name)
WHERE name IS NOT NULL
  AND id = (SELECT MIN(v.id) FROM visitors v WHERE v.name = visitors.name)
  AND EXISTS (SELECT 1 FROM visitors v WHERE v.name = visitors.name AND v.id <> visitors.id)
"#;

pub const DELETE_DUPLICATE_NAMES: &str = r#"
DELETE FROM visitors
WHERE name IS NOT NULL
  AND id > (SELECT MIN(v.id) FROM visitors v WHERE v.name = visitors.name)
"#;

/// Named visitors are unique; anonymous rows (NULL name) are left out of the
/// index so every guest gets a fresh row.
pub const CREATE_NAME_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS idx_visitors_name
    ON visitors(name) WHERE name IS NOT NULL;
"#;

pub const UPSERT_NAMED: &str = r#"
INSERT INTO visitors (name, first_visit, last_visit, visit_count)
VALUES (?1, ?2, ?2, 1)
ON CONFLICT(name) WHERE name IS NOT NULL DO UPDATE SET
    last_visit = excluded.last_visit,
    visit_count = visit_count + 1
RETURNING id, name, first_visit, last_visit, visit_count
"#;

pub const INSERT_ANONYMOUS: &str = r#"
INSERT INTO visitors (name, first_visit, last_visit, visit_count)
VALUES (NULL, ?1, ?1, 1)
RETURNING id, name, first_visit, last_visit, visit_count
"#;

pub const COUNT: &str = "SELECT COUNT(*) FROM visitors";
