//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use intake_core::{lead::Lead, visitor::Visitor};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `leads` row.
pub struct RawLead {
  pub lead_id:         String,
  pub full_name:       String,
  pub phone:           Option<String>,
  pub email_address:   String,
  pub project_details: Option<String>,
  pub submitted_at:    String,
}

impl RawLead {
  pub fn decode(self) -> Result<Lead> {
    Ok(Lead {
      lead_id:         decode_uuid(&self.lead_id)?,
      full_name:       self.full_name,
      phone:           self.phone,
      email_address:   self.email_address,
      project_details: self.project_details,
      submitted_at:    decode_dt(&self.submitted_at)?,
    })
  }
}

/// Raw strings read directly from a `visitors` row.
pub struct RawVisitor {
  pub ip_address: String,
  pub visited_at: String,
  pub path:       String,
  pub country:    Option<String>,
  pub city:       Option<String>,
  pub latitude:   Option<f64>,
  pub longitude:  Option<f64>,
}

impl RawVisitor {
  pub fn decode(self) -> Result<Visitor> {
    Ok(Visitor {
      ip_address: self.ip_address,
      visited_at: decode_dt(&self.visited_at)?,
      path:       self.path,
      country:    self.country,
      city:       self.city,
      latitude:   self.latitude,
      longitude:  self.longitude,
    })
  }
}
