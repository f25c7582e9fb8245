//! SQL schema for the Intake SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Leads are strictly insert-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS leads (
    lead_id         TEXT PRIMARY KEY,
    full_name       TEXT NOT NULL CHECK (full_name != ''),
    phone           TEXT,
    email_address   TEXT NOT NULL CHECK (email_address != ''),
    project_details TEXT,
    submitted_at    TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

-- Written by the external visit tracker; only read here.
CREATE TABLE IF NOT EXISTS visitors (
    ip_address TEXT NOT NULL,
    visited_at TEXT NOT NULL,
    path       TEXT NOT NULL,
    country    TEXT,
    city       TEXT,
    latitude   REAL,
    longitude  REAL
);

CREATE INDEX IF NOT EXISTS leads_submitted_idx   ON leads(submitted_at);
CREATE INDEX IF NOT EXISTS visitors_visited_idx  ON visitors(visited_at);

PRAGMA user_version = 1;
";
