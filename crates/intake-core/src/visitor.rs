//! Visitor — one recorded page visit.
//!
//! Visitor rows are written by an external tracking mechanism; this workspace
//! only reads them for the offline analytics report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single page visit, as recorded by the out-of-scope tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
  pub ip_address: String,
  pub visited_at: DateTime<Utc>,
  pub path:       String,
  pub country:    Option<String>,
  pub city:       Option<String>,
  pub latitude:   Option<f64>,
  pub longitude:  Option<f64>,
}
