//! Performance statistics types.
//!
//! DTOs produced by the aggregator for dashboards and the CLI. The two ROI
//! conventions are separately named fields on purpose: they answer different
//! questions and must never be merged under one `roi`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wager::Outcome;

/// Aggregated track record over a set of wagers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Everything in the input, graded or not.
    pub total_wagers: usize,
    pub graded: usize,
    pub pending: usize,

    /// Graded wagers staked above the tracked-only threshold.
    pub actual_bets: usize,
    /// Graded wagers carried at the placeholder stake, tracked for model
    /// accuracy but excluded from every stake-weighted metric.
    pub tracked_picks: usize,

    /// Win/loss/push counts over actual bets only.
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,

    /// `wins / (wins + losses) * 100`, actual bets only.
    pub win_rate: Decimal,
    /// Net profit in units over actual bets.
    pub units_won: Decimal,
    /// Total units staked on actual bets.
    pub total_risked: Decimal,

    /// Risk-normalized return: `units_won / total_risked * 100`.
    pub unit_roi: Decimal,
    /// Return against a fixed nominal bankroll under flat staking:
    /// `(units_won * flat_stake) / starting_bankroll * 100`.
    pub bankroll_roi: Decimal,

    /// Graded wagers bucketed by pick date for calendar trend views.
    pub daily: BTreeMap<NaiveDate, DailyBucket>,
    /// Run of identical outcomes starting from the most recent graded wager.
    pub streak: Streak,
    /// Per-sport slices of the same metrics.
    pub sports: BTreeMap<String, SportStats>,
}

/// One calendar day of graded wagers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub wins: u32,
    pub losses: u32,
    pub units_won: Decimal,
}

/// Per-sport breakdown. Covers actual bets only, like the stake-weighted
/// top-level metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportStats {
    pub actual_bets: usize,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: Decimal,
    pub units_won: Decimal,
    pub total_risked: Decimal,
    pub unit_roi: Decimal,
}

/// Current outcome streak, e.g. `W5` or `L2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub outcome: Option<Outcome>,
    pub length: u32,
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => {
                let letter = &outcome.as_str()[..1];
                write!(f, "{}{}", letter, self.length)
            }
            None => f.write_str("N/A"),
        }
    }
}
