//! Command-line interface definitions.

pub mod grade;
pub mod pending;
pub mod record;
pub mod stats;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::store::db::{create_pool, run_migrations};
use crate::store::SqliteWagerStore;

/// Betledger - wager settlement and track-record bookkeeping.
#[derive(Parser, Debug)]
#[command(name = "betledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a model prediction as a pending wager
    Record(RecordArgs),

    /// Grade a wager against a final score
    Grade(GradeArgs),

    /// Show the aggregated track record
    Stats(ConfigPathArg),

    /// List wagers still awaiting a result
    Pending(ConfigPathArg),
}

impl Commands {
    pub fn config_path(&self) -> &Path {
        match self {
            Commands::Record(args) => &args.config,
            Commands::Grade(args) => &args.config,
            Commands::Stats(args) | Commands::Pending(args) => &args.config,
        }
    }
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `record` subcommand.
#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Sport the matchup belongs to (e.g. BASKETBALL)
    #[arg(long)]
    pub sport: String,

    /// Calendar day of the pick (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Away team name as the feed spells it
    #[arg(long)]
    pub away: String,

    /// Home team name as the feed spells it
    #[arg(long)]
    pub home: String,

    /// Path to the prediction payload JSON
    #[arg(long)]
    pub prediction: PathBuf,
}

/// Arguments for the `grade` subcommand.
#[derive(Parser, Debug)]
pub struct GradeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Calendar day the wager was recorded for (YYYY-MM-DD); defaults to today
    #[arg(long, default_value_t = chrono::Utc::now().date_naive())]
    pub date: NaiveDate,

    /// Away team name
    #[arg(long)]
    pub away: String,

    /// Home team name
    #[arg(long)]
    pub home: String,

    /// Final away score
    #[arg(long)]
    pub away_score: u32,

    /// Final home score
    #[arg(long)]
    pub home_score: u32,

    /// Where the score came from
    #[arg(long, default_value = "MANUAL")]
    pub source: String,
}

/// Open the configured SQLite store, running migrations first.
pub fn open_store(config: &Config) -> Result<SqliteWagerStore> {
    let pool = create_pool(&config.database.path)?;
    run_migrations(&pool)?;
    Ok(SqliteWagerStore::new(pool))
}
