//! Handler for the `record` command.

use std::fs;

use tracing::info;

use crate::cli::{open_store, RecordArgs};
use crate::config::Config;
use crate::domain::PredictionPayload;
use crate::error::Result;
use crate::settle::{BetRecorder, GameContext};
use crate::sizing::UnitSizingTable;

pub async fn execute(config: &Config, args: &RecordArgs) -> Result<()> {
    let store = open_store(config)?;
    let sizing = UnitSizingTable::recommended();
    let recorder = BetRecorder::new(&store, &sizing);

    let raw = fs::read_to_string(&args.prediction)?;
    let payload: PredictionPayload = serde_json::from_str(&raw)?;

    let game = GameContext {
        sport: args.sport.clone(),
        date: args.date,
        away_team: args.away.clone(),
        home_team: args.home.clone(),
        scheduled_at: None,
    };

    let id = recorder.record(&game, &payload).await?;
    info!(id = %id, "Record complete");
    println!("{id}");

    Ok(())
}
