//! Handler for the `stats` command.

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::cli::open_store;
use crate::config::Config;
use crate::domain::Stats;
use crate::error::Result;
use crate::stats::{StatsCache, StatsService};

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "Sport")]
    sport: String,
    #[tabled(rename = "Record")]
    record: String,
    #[tabled(rename = "Win %")]
    win_rate: String,
    #[tabled(rename = "Units")]
    units: String,
    #[tabled(rename = "Unit ROI %")]
    unit_roi: String,
}

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "W-L")]
    record: String,
    #[tabled(rename = "Units")]
    units: String,
}

pub async fn execute(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let cache = StatsCache::new(config.cache.stats_ttl_secs);
    let service = StatsService::new(&store, &cache, config.bankroll.clone());
    let stats = service.stats().await?;

    print_summary(&stats);
    print_sports(&stats);
    print_recent_days(&stats);

    Ok(())
}

fn print_summary(stats: &Stats) {
    println!();
    println!("═══════════════════════════════════════════════");
    println!("  Track Record");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("  Wagers");
    println!("  ─────────────────────────────────────────────");
    println!("    Total:        {:>8}", stats.total_wagers);
    println!("    Graded:       {:>8}", stats.graded);
    println!("    Pending:      {:>8}", stats.pending);
    println!("    Actual bets:  {:>8}", stats.actual_bets);
    println!("    Tracked only: {:>8}", stats.tracked_picks);
    println!();
    println!("  Results");
    println!("  ─────────────────────────────────────────────");
    println!(
        "    Record:       {:>8}",
        format!("{}-{}", stats.wins, stats.losses)
    );
    println!("    Win rate:     {:>7}%", round2(stats.win_rate));
    println!("    Streak:       {:>8}", stats.streak);
    println!();
    println!("  Performance");
    println!("  ─────────────────────────────────────────────");
    println!("    Units won:    {:>8}", round2(stats.units_won));
    println!("    Risked:       {:>8}", round2(stats.total_risked));
    println!("    Unit ROI:     {:>7}%", round2(stats.unit_roi));
    println!("    Bankroll ROI: {:>7}%", round2(stats.bankroll_roi));
    println!();
}

fn print_sports(stats: &Stats) {
    if stats.sports.is_empty() {
        return;
    }

    let rows: Vec<SportRow> = stats
        .sports
        .iter()
        .map(|(sport, s)| SportRow {
            sport: sport.clone(),
            record: format!("{}-{}", s.wins, s.losses),
            win_rate: round2(s.win_rate).to_string(),
            units: round2(s.units_won).to_string(),
            unit_roi: round2(s.unit_roi).to_string(),
        })
        .collect();

    for line in Table::new(rows).to_string().lines() {
        println!("  {line}");
    }
    println!();
}

fn print_recent_days(stats: &Stats) {
    if stats.daily.is_empty() {
        return;
    }

    // Most recent first, capped so a long history stays readable.
    let rows: Vec<DailyRow> = stats
        .daily
        .iter()
        .rev()
        .take(7)
        .map(|(date, bucket)| DailyRow {
            date: date.to_string(),
            record: format!("{}-{}", bucket.wins, bucket.losses),
            units: round2(bucket.units_won).to_string(),
        })
        .collect();

    for line in Table::new(rows).to_string().lines() {
        println!("  {line}");
    }
    println!();
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}
