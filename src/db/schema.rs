pub const SCHEMA_VERSION: i32 = 2;

/// Base tables. projectId columns carry no REFERENCES clause: links are
/// advisory and a dangling id resolves to an empty section.
pub const SCHEMA_V1: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS Visits (
    id TEXT PRIMARY KEY,
    locationName TEXT,
    date DATE,
    appointmentNote TEXT,
    photo BLOB,
    projectId TEXT
);

CREATE TABLE IF NOT EXISTS Projects (
    id TEXT PRIMARY KEY,
    name TEXT,
    description TEXT
);

-- Early layout; projectId arrives in V2
CREATE TABLE IF NOT EXISTS Contacts (
    id TEXT PRIMARY KEY,
    name TEXT,
    phone TEXT,
    email TEXT
);
"#;

/// V2 migration: link contacts to projects.
/// Databases written by the lazy-upgrade builds may already have the column,
/// so the ALTER is only issued when `PRAGMA table_info` lacks it.
pub const MIGRATION_V2_ADD_COLUMN: &str = r#"
ALTER TABLE Contacts ADD COLUMN projectId TEXT;
"#;

pub const MIGRATION_V2_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_visit_project ON Visits(projectId);
CREATE INDEX IF NOT EXISTS idx_contact_project ON Contacts(projectId);
"#;
