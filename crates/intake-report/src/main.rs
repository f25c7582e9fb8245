//! `intake-report` — offline console reports over the Intake store.
//!
//! # Usage
//!
//! ```
//! intake-report --db intake.sqlite leads
//! intake-report --db intake.sqlite visitors
//! INTAKE_DB_PATH=intake.sqlite intake-report leads
//! ```

use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intake_core::{lead::Lead, store::LeadStore, visitor::Visitor};
use intake_store_sqlite::SqliteStore;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "intake-report", about = "Offline reports over the Intake store")]
struct Args {
  /// Path to the SQLite store file.
  #[arg(long, env = "INTAKE_DB_PATH")]
  db: std::path::PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print every stored lead, newest first.
  Leads,
  /// Print visitor rows, newest first, with per-country visit totals.
  Visitors,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let store = SqliteStore::open(&args.db)
    .await
    .with_context(|| format!("failed to open store at {:?}", args.db))?;

  match args.command {
    Command::Leads => print_leads(&store).await,
    Command::Visitors => print_visitors(&store).await,
  }
}

async fn print_leads(store: &SqliteStore) -> Result<()> {
  let leads = store.list_leads().await.context("listing leads")?;

  for lead in &leads {
    print_lead(lead);
  }
  println!("{} lead(s) total", leads.len());
  Ok(())
}

fn print_lead(lead: &Lead) {
  println!(
    "[{}] {} <{}>  tel: {}",
    lead.submitted_at.format("%Y-%m-%d %H:%M UTC"),
    lead.full_name,
    lead.email_address,
    lead.phone_display(),
  );
  if let Some(details) = &lead.project_details {
    println!("    {details}");
  }
}

async fn print_visitors(store: &SqliteStore) -> Result<()> {
  let visitors = store.list_visitors().await.context("listing visitors")?;

  for v in &visitors {
    print_visitor(v);
  }
  println!("{} visit(s) total", visitors.len());

  // Per-country totals, largest first.
  let mut by_country: HashMap<&str, usize> = HashMap::new();
  for v in &visitors {
    let key = v.country.as_deref().unwrap_or("unknown");
    *by_country.entry(key).or_default() += 1;
  }
  let mut counts: Vec<(&str, usize)> = by_country.into_iter().collect();
  counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

  println!();
  println!("visits by country:");
  for (country, count) in counts {
    println!("  {country}: {count}");
  }
  Ok(())
}

fn print_visitor(v: &Visitor) {
  let place = match (&v.city, &v.country) {
    (Some(city), Some(country)) => format!("{city}, {country}"),
    (None, Some(country)) => country.clone(),
    _ => "unknown location".into(),
  };
  println!(
    "[{}] {}  {}  ({place})",
    v.visited_at.format("%Y-%m-%d %H:%M UTC"),
    v.ip_address,
    v.path,
  );
}
