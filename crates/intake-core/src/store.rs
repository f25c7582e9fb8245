//! The `LeadStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `intake-store-sqlite`). Higher layers (`intake-server`,
//! `intake-report`) depend on this abstraction, not on any concrete
//! backend, so handlers stay testable against a substitute store.

use std::future::Future;

use crate::{
  lead::{Lead, NewLead},
  visitor::Visitor,
};

/// Abstraction over a lead store backend.
///
/// Leads are insert-only: there is no update or delete operation, and none
/// will be added. Every call goes to the backing store; implementations do
/// no caching of their own.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LeadStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new lead and return the stored [`Lead`].
  ///
  /// The store assigns `lead_id` and, when `input.submitted_at` is `None`,
  /// stamps the insert time. On error the caller must not assume the record
  /// exists.
  fn record_lead(
    &self,
    input: NewLead,
  ) -> impl Future<Output = Result<Lead, Self::Error>> + Send + '_;

  /// All leads, most recent `submitted_at` first. Ties are broken by stable
  /// store insertion order. An empty collection yields an empty vector.
  fn list_leads(
    &self,
  ) -> impl Future<Output = Result<Vec<Lead>, Self::Error>> + Send + '_;

  /// Total number of stored leads.
  fn count_leads(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// All visitor rows, most recent `visited_at` first. Read-only here; the
  /// rows are written by an external tracker.
  fn list_visitors(
    &self,
  ) -> impl Future<Output = Result<Vec<Visitor>, Self::Error>> + Send + '_;
}
