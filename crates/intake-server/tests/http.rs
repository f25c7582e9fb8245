//! Router-level tests: real axum router, in-memory SQLite store.
//!
//! The failure-path tests swap in a store whose every operation fails, via
//! the same `AppState` seam the binary uses.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use intake_core::{
  lead::{Lead, NewLead},
  store::LeadStore,
  visitor::Visitor,
};
use intake_server::{AppState, ServerConfig};
use intake_store_sqlite::SqliteStore;
use tower::util::ServiceExt;

// ─── Harness ─────────────────────────────────────────────────────────────────

fn test_config(require_phone: bool) -> ServerConfig {
  // db_path is unused by the handlers; the store is injected directly.
  let raw = serde_json::json!({
    "db_path": ":memory:",
    "require_phone": require_phone,
  });
  serde_json::from_value(raw).expect("test config")
}

async fn app(require_phone: bool) -> (Router, Arc<SqliteStore>) {
  let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
  let state = AppState {
    store:  store.clone(),
    config: Arc::new(test_config(require_phone)),
  };
  (intake_server::router(state), store)
}

fn form_post(body: &'static str) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/submit_contact")
    .header(
      header::CONTENT_TYPE,
      "application/x-www-form-urlencoded",
    )
    .body(Body::from(body))
    .unwrap()
}

fn get_leads() -> Request<Body> {
  Request::builder()
    .method("GET")
    .uri("/api/leads")
    .body(Body::empty())
    .unwrap()
}

fn location(response: &axum::http::Response<Body>) -> &str {
  response
    .headers()
    .get(header::LOCATION)
    .expect("Location header")
    .to_str()
    .unwrap()
}

async fn json_body(response: axum::http::Response<Body>) -> serde_json::Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_stores_one_lead_and_redirects() {
  let (app, store) = app(false).await;

  let before = Utc::now();
  let response = app
    .oneshot(form_post("name=Ann&email=a%40x.com&message=hello"))
    .await
    .unwrap();
  let after = Utc::now();

  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&response), "/thanks.html");

  let leads = store.list_leads().await.unwrap();
  assert_eq!(leads.len(), 1);
  assert_eq!(leads[0].full_name, "Ann");
  assert_eq!(leads[0].email_address, "a@x.com");
  assert_eq!(leads[0].project_details.as_deref(), Some("hello"));
  assert!(leads[0].phone.is_none());
  assert!(
    leads[0].submitted_at >= before && leads[0].submitted_at <= after
  );
}

#[tokio::test]
async fn empty_name_stores_nothing() {
  let (app, store) = app(false).await;

  let response = app
    .oneshot(form_post("name=&email=a%40x.com&message=hello"))
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&response), "/error.html");
  assert_eq!(store.count_leads().await.unwrap(), 0);
}

#[tokio::test]
async fn absent_message_stores_nothing() {
  let (app, store) = app(false).await;

  let response = app
    .oneshot(form_post("name=Ann&email=a%40x.com"))
    .await
    .unwrap();

  assert_eq!(location(&response), "/error.html");
  assert_eq!(store.count_leads().await.unwrap(), 0);
}

#[tokio::test]
async fn tel_optional_under_default_policy() {
  let (app, store) = app(false).await;

  let response = app
    .oneshot(form_post(
      "name=Ann&email=a%40x.com&message=hello&tel=%2B1%20555%200100",
    ))
    .await
    .unwrap();

  assert_eq!(location(&response), "/thanks.html");
  let leads = store.list_leads().await.unwrap();
  assert_eq!(leads[0].phone.as_deref(), Some("+1 555 0100"));
}

#[tokio::test]
async fn tel_required_when_policy_says_so() {
  let (app, store) = app(true).await;

  let response = app
    .clone()
    .oneshot(form_post("name=Ann&email=a%40x.com&message=hello"))
    .await
    .unwrap();
  assert_eq!(location(&response), "/error.html");
  assert_eq!(store.count_leads().await.unwrap(), 0);

  let response = app
    .oneshot(form_post(
      "name=Ann&email=a%40x.com&message=hello&tel=555",
    ))
    .await
    .unwrap();
  assert_eq!(location(&response), "/thanks.html");
  assert_eq!(store.count_leads().await.unwrap(), 1);
}

// ─── Read API ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn leads_api_empty_collection_is_empty_array() {
  let (app, _store) = app(false).await;

  let response = app.oneshot(get_leads()).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn submitted_lead_round_trips_through_api() {
  let (app, _store) = app(false).await;

  app
    .clone()
    .oneshot(form_post("name=Ann&email=a%40x.com&message=hello"))
    .await
    .unwrap();

  let body = json_body(app.oneshot(get_leads()).await.unwrap()).await;
  let first = &body[0];

  assert_eq!(first["full_name"], "Ann");
  assert_eq!(first["email_address"], "a@x.com");
  assert_eq!(first["project_details"], "hello");
  assert_eq!(first["tel"], "not available");
  assert!(first["id"].as_str().is_some());
  assert!(first["submission_date"].as_str().is_some());
}

#[tokio::test]
async fn leads_api_orders_newest_first() {
  let (app, store) = app(false).await;
  let base = Utc::now();

  for (i, name) in ["oldest", "middle", "newest"].iter().enumerate() {
    let mut input = NewLead::new(*name, "a@x.com", "hi");
    input.submitted_at = Some(base + Duration::minutes(i as i64));
    store.record_lead(input).await.unwrap();
  }

  let body = json_body(app.oneshot(get_leads()).await.unwrap()).await;
  let names: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|l| l["full_name"].as_str().unwrap())
    .collect();
  assert_eq!(names, ["newest", "middle", "oldest"]);

  let dates: Vec<&str> = body
    .as_array()
    .unwrap()
    .iter()
    .map(|l| l["submission_date"].as_str().unwrap())
    .collect();
  assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

// ─── Store failure ───────────────────────────────────────────────────────────

/// A store whose every operation fails, standing in for an unreachable
/// backend.
#[derive(Clone)]
struct DownStore;

impl LeadStore for DownStore {
  type Error = std::io::Error;

  async fn record_lead(&self, _input: NewLead) -> std::io::Result<Lead> {
    Err(std::io::Error::other("store unreachable"))
  }

  async fn list_leads(&self) -> std::io::Result<Vec<Lead>> {
    Err(std::io::Error::other("store unreachable"))
  }

  async fn count_leads(&self) -> std::io::Result<u64> {
    Err(std::io::Error::other("store unreachable"))
  }

  async fn list_visitors(&self) -> std::io::Result<Vec<Visitor>> {
    Err(std::io::Error::other("store unreachable"))
  }
}

fn down_app() -> Router {
  intake_server::router(AppState {
    store:  Arc::new(DownStore),
    config: Arc::new(test_config(false)),
  })
}

#[tokio::test]
async fn leads_api_store_failure_is_generic_500() {
  let response = down_app().oneshot(get_leads()).await.unwrap();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body = json_body(response).await;
  assert_eq!(body["error"], "internal error");
}

#[tokio::test]
async fn submission_store_failure_redirects_to_error_page() {
  let response = down_app()
    .oneshot(form_post("name=Ann&email=a%40x.com&message=hello"))
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::SEE_OTHER);
  assert_eq!(location(&response), "/error.html");
}
