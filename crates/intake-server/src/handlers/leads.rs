//! `GET /api/leads` — the leads read API.
//!
//! Returns every stored lead, most recent first, in the JSON shape the
//! leads-listing page renders client-side.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use intake_core::{lead::Lead, store::LeadStore};
use serde::Serialize;
use uuid::Uuid;

use crate::{AppState, error::Error};

/// One lead as serialised to API callers. `tel` is sentinel-filled when the
/// submitter left no phone number; `submission_date` serialises as an
/// ISO-8601 string.
#[derive(Debug, Serialize)]
pub struct LeadRecord {
  pub id:              Uuid,
  pub full_name:       String,
  pub tel:             String,
  pub email_address:   String,
  pub project_details: Option<String>,
  pub submission_date: DateTime<Utc>,
}

impl From<Lead> for LeadRecord {
  fn from(lead: Lead) -> Self {
    let tel = lead.phone_display().to_owned();
    Self {
      id:              lead.lead_id,
      full_name:       lead.full_name,
      tel,
      email_address:   lead.email_address,
      project_details: lead.project_details,
      submission_date: lead.submitted_at,
    }
  }
}

/// `GET /api/leads`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<LeadRecord>>, Error>
where
  S: LeadStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let leads = state
    .store
    .list_leads()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Json(leads.into_iter().map(LeadRecord::from).collect()))
}
