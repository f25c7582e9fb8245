//! Lead — one contact-form submission.
//!
//! A lead is written exactly once per valid submission and never updated or
//! deleted by any code path in this workspace. The store assigns `lead_id`
//! and defaults `submitted_at` at insert time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// Shown in place of a phone number the submitter did not provide.
/// Substituted at the read boundary; the stored column stays NULL.
pub const PHONE_NOT_AVAILABLE: &str = "not available";

/// A persisted contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
  pub lead_id:         Uuid,
  pub full_name:       String,
  pub phone:           Option<String>,
  pub email_address:   String,
  pub project_details: Option<String>,
  pub submitted_at:    DateTime<Utc>,
}

impl Lead {
  /// The phone number as shown to readers, sentinel-filled when absent.
  pub fn phone_display(&self) -> &str {
    self.phone.as_deref().unwrap_or(PHONE_NOT_AVAILABLE)
  }
}

/// Input shape for [`LeadStore::record_lead`](crate::store::LeadStore).
///
/// `submitted_at` is `None` in the normal submission path; the store fills in
/// the insert time. Callers run [`NewLead::validate`] before persisting.
#[derive(Debug, Clone)]
pub struct NewLead {
  pub full_name:       String,
  pub phone:           Option<String>,
  pub email_address:   String,
  pub project_details: Option<String>,
  pub submitted_at:    Option<DateTime<Utc>>,
}

impl NewLead {
  pub fn new(
    full_name: impl Into<String>,
    email_address: impl Into<String>,
    project_details: impl Into<String>,
  ) -> Self {
    Self {
      full_name:       full_name.into(),
      phone:           None,
      email_address:   email_address.into(),
      project_details: Some(project_details.into()),
      submitted_at:    None,
    }
  }

  /// Reject the submission if any required field is absent or empty.
  ///
  /// Errors name the wire field (`name`, `email`, `message`, `tel`), since
  /// that is the vocabulary the submitter sees.
  pub fn validate(&self, policy: &SubmissionPolicy) -> Result<()> {
    if self.full_name.trim().is_empty() {
      return Err(Error::MissingField("name"));
    }
    if self.email_address.trim().is_empty() {
      return Err(Error::MissingField("email"));
    }
    if self
      .project_details
      .as_deref()
      .is_none_or(|d| d.trim().is_empty())
    {
      return Err(Error::MissingField("message"));
    }
    if policy.require_phone
      && self.phone.as_deref().is_none_or(|p| p.trim().is_empty())
    {
      return Err(Error::MissingField("tel"));
    }
    Ok(())
  }
}

/// Which submission fields are mandatory beyond the baseline
/// (name, email, message are always required).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SubmissionPolicy {
  /// When `true`, a submission without a phone number is rejected.
  #[serde(default)]
  pub require_phone: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid() -> NewLead {
    NewLead::new("Ann", "a@x.com", "hello")
  }

  #[test]
  fn valid_lead_passes_default_policy() {
    assert!(valid().validate(&SubmissionPolicy::default()).is_ok());
  }

  #[test]
  fn empty_name_rejected() {
    let mut lead = valid();
    lead.full_name = "  ".into();
    assert_eq!(
      lead.validate(&SubmissionPolicy::default()),
      Err(Error::MissingField("name"))
    );
  }

  #[test]
  fn empty_email_rejected() {
    let mut lead = valid();
    lead.email_address = String::new();
    assert_eq!(
      lead.validate(&SubmissionPolicy::default()),
      Err(Error::MissingField("email"))
    );
  }

  #[test]
  fn missing_message_rejected() {
    let mut lead = valid();
    lead.project_details = None;
    assert_eq!(
      lead.validate(&SubmissionPolicy::default()),
      Err(Error::MissingField("message"))
    );
  }

  #[test]
  fn phone_optional_by_default() {
    let lead = valid();
    assert!(lead.phone.is_none());
    assert!(lead.validate(&SubmissionPolicy::default()).is_ok());
  }

  #[test]
  fn phone_required_under_strict_policy() {
    let policy = SubmissionPolicy { require_phone: true };

    let mut lead = valid();
    assert_eq!(lead.validate(&policy), Err(Error::MissingField("tel")));

    lead.phone = Some("+1 555 0100".into());
    assert!(lead.validate(&policy).is_ok());
  }

  #[test]
  fn phone_display_sentinel() {
    let lead = Lead {
      lead_id:         Uuid::new_v4(),
      full_name:       "Ann".into(),
      phone:           None,
      email_address:   "a@x.com".into(),
      project_details: Some("hello".into()),
      submitted_at:    Utc::now(),
    };
    assert_eq!(lead.phone_display(), PHONE_NOT_AVAILABLE);
  }
}
