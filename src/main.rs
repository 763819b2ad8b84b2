//! runplan - personalized running plan generator
//!
//! CLI entry point. Plans and listings are printed to stdout as JSON; logs go
//! to stderr.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use runplan_lib::commands;
use runplan_lib::config::AppConfig;
use runplan_lib::db::{self, AppState};
use runplan_lib::engine::{monday_of, plan_start_for_race, PlanRequest, RaceDistance};

#[derive(Parser)]
#[command(name = "runplan", about = "Generate periodized running training plans", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Build a plan and print it without storing anything
  Preview(RequestArgs),

  /// Store a plan request and print its plan id
  Create {
    #[command(flatten)]
    request: RequestArgs,

    /// Recipient for the finished plan
    #[arg(long)]
    email: Option<String>,
  },

  /// Print the plan for a stored request
  Show {
    plan_id: String,
  },

  /// List stored plan requests
  List,
}

#[derive(Args)]
struct RequestArgs {
  /// First week of the plan (normalized to its Monday)
  #[arg(long, value_name = "YYYY-MM-DD", required_unless_present = "race_date", conflicts_with = "race_date")]
  start: Option<NaiveDate>,

  /// Race date; the plan ends in the week containing it
  #[arg(long, value_name = "YYYY-MM-DD")]
  race_date: Option<NaiveDate>,

  /// Number of weeks
  #[arg(long)]
  weeks: u32,

  /// Sessions per week (3, 4 or 5)
  #[arg(long)]
  sessions: u8,

  /// Weekly volume of week 1 in km
  #[arg(long)]
  start_volume: f64,

  /// Volume added each week in km
  #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
  increase: f64,

  /// Reference distance: 5K, 10K, 15K or HM
  #[arg(long)]
  reference_distance: String,

  /// Reference time as mm:ss or h:mm:ss
  #[arg(long)]
  reference_time: String,

  /// Target race distance for Race Day (defaults to a half marathon)
  #[arg(long)]
  race_distance: Option<RaceDistance>,
}

impl RequestArgs {
  fn into_request(self) -> Result<PlanRequest, String> {
    let start_monday = match (self.start, self.race_date) {
      (Some(start), _) => monday_of(start),
      (None, Some(race_date)) => plan_start_for_race(race_date, self.weeks),
      (None, None) => return Err("Either --start or --race-date is required".to_string()),
    };

    Ok(PlanRequest {
      start_monday,
      number_of_weeks: self.weeks,
      sessions_per_week: self.sessions,
      start_week_volume: self.start_volume,
      weekly_increase: self.increase,
      reference_distance: self.reference_distance,
      reference_time: self.reference_time,
      race_distance: self.race_distance,
    })
  }
}

fn setup_logging(filter: &str) {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
    .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

async fn open_state(config: &AppConfig) -> Result<Arc<AppState>, Box<dyn std::error::Error>> {
  let pool = db::initialize_db(config).await?;
  Ok(Arc::new(AppState { db: pool }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  let config = AppConfig::from_env()?;
  setup_logging(&config.log_filter);
  debug!("Loaded config: {:?}", config);

  match cli.command {
    Command::Preview(args) => {
      let plan = commands::preview_plan(args.into_request()?)?;
      print_json(&plan)?;
    }
    Command::Create { request, email } => {
      let state = open_state(&config).await?;
      let plan_id = commands::create_plan(state, request.into_request()?, email).await?;
      println!("{}", plan_id);
    }
    Command::Show { plan_id } => {
      let state = open_state(&config).await?;
      let plan = commands::get_plan(state, plan_id).await?;
      print_json(&plan)?;
    }
    Command::List => {
      let state = open_state(&config).await?;
      let plans = commands::list_plans(state).await?;
      print_json(&plans)?;
    }
  }

  Ok(())
}
