//! [`SqliteStore`] — the SQLite implementation of [`LeadStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use intake_core::{
  lead::{Lead, NewLead},
  store::LeadStore,
  visitor::Visitor,
};

use crate::{
  Error, Result,
  encode::{RawLead, RawVisitor, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A lead store backed by a single SQLite file.
///
/// The connection is opened once and held for the process lifetime; cloning
/// is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Seed a visitor row. Production rows come from the external tracker;
  /// this exists for tests and backfills.
  pub async fn insert_visitor(&self, visitor: &Visitor) -> Result<()> {
    let ip_address = visitor.ip_address.clone();
    let visited_at = encode_dt(visitor.visited_at);
    let path       = visitor.path.clone();
    let country    = visitor.country.clone();
    let city       = visitor.city.clone();
    let latitude   = visitor.latitude;
    let longitude  = visitor.longitude;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO visitors (
             ip_address, visited_at, path, country, city, latitude, longitude
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            ip_address, visited_at, path, country, city, latitude, longitude,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── LeadStore impl ──────────────────────────────────────────────────────────

impl LeadStore for SqliteStore {
  type Error = Error;

  async fn record_lead(&self, input: NewLead) -> Result<Lead> {
    let lead = Lead {
      lead_id:         Uuid::new_v4(),
      full_name:       input.full_name,
      phone:           input.phone,
      email_address:   input.email_address,
      project_details: input.project_details,
      submitted_at:    input.submitted_at.unwrap_or_else(Utc::now),
    };

    let id_str          = encode_uuid(lead.lead_id);
    let full_name       = lead.full_name.clone();
    let phone           = lead.phone.clone();
    let email_address   = lead.email_address.clone();
    let project_details = lead.project_details.clone();
    let at_str          = encode_dt(lead.submitted_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO leads (
             lead_id, full_name, phone, email_address,
             project_details, submitted_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            id_str,
            full_name,
            phone,
            email_address,
            project_details,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(lead)
  }

  async fn list_leads(&self) -> Result<Vec<Lead>> {
    // rowid tiebreak keeps equal timestamps in stable insertion order.
    let raws: Vec<RawLead> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT lead_id, full_name, phone, email_address,
                  project_details, submitted_at
           FROM leads
           ORDER BY submitted_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |r| {
            Ok(RawLead {
              lead_id:         r.get(0)?,
              full_name:       r.get(1)?,
              phone:           r.get(2)?,
              email_address:   r.get(3)?,
              project_details: r.get(4)?,
              submitted_at:    r.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLead::decode).collect()
  }

  async fn count_leads(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM leads", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }

  async fn list_visitors(&self) -> Result<Vec<Visitor>> {
    let raws: Vec<RawVisitor> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT ip_address, visited_at, path, country, city,
                  latitude, longitude
           FROM visitors
           ORDER BY visited_at DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |r| {
            Ok(RawVisitor {
              ip_address: r.get(0)?,
              visited_at: r.get(1)?,
              path:       r.get(2)?,
              country:    r.get(3)?,
              city:       r.get(4)?,
              latitude:   r.get(5)?,
              longitude:  r.get(6)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVisitor::decode).collect()
  }
}
