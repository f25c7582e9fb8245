//! HTTP layer for the Intake lead-capture service.
//!
//! Exposes an axum [`Router`] backed by any [`LeadStore`]: the contact-form
//! submission endpoint, the leads read API, and static asset serving for the
//! pre-built front-end pages.

pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use intake_core::{lead::SubmissionPolicy, store::LeadStore};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `INTAKE_*` environment variables.
///
/// Only `db_path` is required; its absence is a startup failure, never a
/// per-request error.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:          String,
  #[serde(default = "default_port")]
  pub port:          u16,
  pub db_path:       PathBuf,
  #[serde(default = "default_assets_dir")]
  pub assets_dir:    PathBuf,
  #[serde(default = "default_success_page")]
  pub success_page:  String,
  #[serde(default = "default_error_page")]
  pub error_page:    String,
  #[serde(default)]
  pub require_phone: bool,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8080 }
fn default_assets_dir() -> PathBuf { "public".into() }
fn default_success_page() -> String { "/thanks.html".into() }
fn default_error_page() -> String { "/error.html".into() }

impl ServerConfig {
  /// The submission-validation policy this deployment runs with.
  pub fn policy(&self) -> SubmissionPolicy {
    SubmissionPolicy {
      require_phone: self.require_phone,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// The store is injected at construction time so handlers can be exercised
/// against a substitute backend in tests.
#[derive(Clone)]
pub struct AppState<S: LeadStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the service.
///
/// Anything outside the two dynamic routes falls through to the static asset
/// directory (landing form, thank-you page, leads listing page).
pub fn router<S>(state: AppState<S>) -> Router
where
  S: LeadStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let assets = ServeDir::new(&state.config.assets_dir);

  Router::new()
    .route("/submit_contact", post(handlers::submit::handler::<S>))
    .route("/api/leads", get(handlers::leads::handler::<S>))
    .fallback_service(assets)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
