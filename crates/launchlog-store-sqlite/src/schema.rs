//! SQL schema for the launchlog SQLite store.
//!
//! Run at connection startup only while `PRAGMA user_version` is below
//! [`SCHEMA_VERSION`]; an already-stamped file is opened without taking the
//! write lock. Future migrations will be gated the same way.

use std::time::Duration;

/// Value stamped into `PRAGMA user_version` by [`SCHEMA`].
pub const SCHEMA_VERSION: i64 = 1;

/// How long a connection waits on another writer before failing with
/// "database is locked".
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per (launch_tag, piece). Rows are inserted by ingestion only and
-- never updated or deleted.
CREATE TABLE IF NOT EXISTS launches (
    id                  INTEGER PRIMARY KEY,
    source              TEXT    NOT NULL DEFAULT 'gcat',
    launch_tag          TEXT,
    piece               TEXT,
    launch_datetime_utc TEXT,            -- RFC 3339 UTC, fixed width; NULL if unparseable
    launch_date_raw     TEXT,
    lv_type             TEXT,
    launch_site         TEXT,
    launch_agency       TEXT,
    lv_state            TEXT,
    launch_code         TEXT,
    name                TEXT,
    plname              TEXT,
    sat_owner           TEXT,
    sat_state           TEXT,
    is_orbital          INTEGER NOT NULL DEFAULT 1,
    is_launch_attempt   INTEGER NOT NULL DEFAULT 1,
    raw                 TEXT,            -- JSON object, verbatim feed row
    created_at          TEXT    NOT NULL,
    updated_at          TEXT    NOT NULL
);

-- NULL-safe natural key: empty strings never reach the table, so '' stands
-- in for NULL without colliding with a real value.
CREATE UNIQUE INDEX IF NOT EXISTS uq_launch_tag_piece
    ON launches (ifnull(launch_tag, ''), ifnull(piece, ''));

CREATE INDEX IF NOT EXISTS ix_launches_launch_tag          ON launches(launch_tag);
CREATE INDEX IF NOT EXISTS ix_launches_launch_datetime_utc ON launches(launch_datetime_utc);
CREATE INDEX IF NOT EXISTS ix_launches_launch_agency       ON launches(launch_agency);
CREATE INDEX IF NOT EXISTS ix_launches_lv_state            ON launches(lv_state);
CREATE INDEX IF NOT EXISTS ix_launches_launch_site         ON launches(launch_site);
CREATE INDEX IF NOT EXISTS ix_launches_lv_type             ON launches(lv_type);
CREATE INDEX IF NOT EXISTS ix_launches_launch_code         ON launches(launch_code);

PRAGMA user_version = 1;
";
