//! `POST /submit_contact` — the contact-form submission handler.
//!
//! Accepts the form-encoded fields the static HTML form posts (`name`,
//! `email`, `message`, optional `tel`) and redirects to the configured
//! success or error page. Exactly one lead is stored per valid call; any
//! validation or persistence failure stores nothing.

use axum::{
  Form,
  extract::State,
  response::Redirect,
};
use intake_core::{lead::NewLead, store::LeadStore};
use serde::Deserialize;

use crate::AppState;

/// Form-encoded body, in the wire vocabulary of the HTML form.
///
/// Every field is optional at the extractor level so that an absent field
/// and an empty one take the same path: validation, then the error-page
/// redirect. The extractor never rejects a submission on its own.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub message: Option<String>,
  pub tel:     Option<String>,
}

impl SubmitBody {
  /// The single place where wire field names map to domain field names
  /// (`name` → `full_name`, `email` → `email_address`,
  /// `message` → `project_details`, `tel` → `phone`).
  fn into_new_lead(self) -> NewLead {
    NewLead {
      full_name:       self.name.unwrap_or_default(),
      phone:           self.tel.filter(|t| !t.trim().is_empty()),
      email_address:   self.email.unwrap_or_default(),
      project_details: self.message.filter(|m| !m.is_empty()),
      submitted_at:    None,
    }
  }
}

/// `POST /submit_contact`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Form(body): Form<SubmitBody>,
) -> Redirect
where
  S: LeadStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = body.into_new_lead();

  if let Err(e) = input.validate(&state.config.policy()) {
    tracing::warn!(error = %e, "rejected contact submission");
    return Redirect::to(&state.config.error_page);
  }

  match state.store.record_lead(input).await {
    Ok(lead) => {
      tracing::info!(lead_id = %lead.lead_id, "stored contact submission");
      Redirect::to(&state.config.success_page)
    }
    Err(e) => {
      tracing::error!(error = %e, "failed to store contact submission");
      Redirect::to(&state.config.error_page)
    }
  }
}
