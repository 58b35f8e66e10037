//! Handler for the `pending` command.

use tabled::{Table, Tabled};

use crate::cli::open_store;
use crate::config::Config;
use crate::error::Result;
use crate::store::WagerStore;

#[derive(Tabled)]
struct PendingRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Matchup")]
    matchup: String,
    #[tabled(rename = "Pick")]
    pick: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

pub async fn execute(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let mut wagers = store.list_pending().await?;
    wagers.sort_by(|a, b| a.date.cmp(&b.date));

    if wagers.is_empty() {
        println!("No pending wagers");
        return Ok(());
    }

    let rows: Vec<PendingRow> = wagers
        .iter()
        .map(|w| PendingRow {
            date: w.date.to_string(),
            matchup: format!("{} @ {}", w.game.away_team, w.game.home_team),
            pick: w.bet.pick.clone(),
            odds: w.bet.odds.to_string(),
            units: w.bet.units.to_string(),
            grade: w.prediction.grade.clone(),
        })
        .collect();

    for line in Table::new(rows).to_string().lines() {
        println!("  {line}");
    }

    Ok(())
}
