//! Exactly-once grading of wagers against final scores.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{
    normalize_team, AmericanOdds, FinalScore, Market, Outcome, Side, Wager, WagerId, WagerResult,
    WagerStatus,
};
use crate::error::Result;
use crate::store::{SettleOutcome, WagerStore};

/// Profit in units for a settled wager, from the stored odds and the stored
/// stake.
///
/// - WIN at positive odds: `units * odds / 100`
/// - WIN at negative odds: `units * 100 / |odds|`
/// - LOSS: `-units`
/// - PUSH: `0` (reserved; the moneyline path never produces it)
#[must_use]
pub fn settlement_profit(outcome: Outcome, odds: AmericanOdds, units: Decimal) -> Decimal {
    match outcome {
        Outcome::Win => odds.win_profit(units),
        Outcome::Loss => -units,
        Outcome::Push => Decimal::ZERO,
    }
}

/// Grades wagers when their game goes final.
///
/// Every benign path returns `Ok(false)`: not-final games (polled
/// repeatedly before they end), games that were never recommended, and
/// wagers already settled. Store failures propagate, permission faults
/// especially: swallowing those would leave a pick silently stuck PENDING
/// and corrupt the public track record.
pub struct BetGrader<'a, S> {
    store: &'a S,
}

impl<'a, S: WagerStore> BetGrader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Grade the wager for this matchup, if one exists. Returns `true` only
    /// when this call settled it.
    pub async fn grade(
        &self,
        date: NaiveDate,
        away_team: &str,
        home_team: &str,
        score: &FinalScore,
    ) -> Result<bool> {
        let (Some(away_score), Some(home_score)) = (score.away_score, score.home_score) else {
            return Ok(false);
        };
        if !score.is_gradable() {
            return Ok(false);
        }

        // The pick could have been on either side; enumerate both candidate
        // identities and take whichever one exists.
        let candidates = WagerId::candidates(date, away_team, home_team, Market::Moneyline);
        let Some(wager) = self.find_wager(&candidates).await? else {
            debug!(away = away_team, home = home_team, "No wager for game");
            return Ok(false);
        };

        if wager.status == WagerStatus::Completed {
            debug!(id = %wager.id, "Wager already graded");
            return Ok(false);
        }

        if away_score == home_score {
            // The moneyline market has no tie outcome. Leave the wager
            // pending for manual audit instead of fabricating a winner.
            warn!(
                id = %wager.id,
                away_score,
                home_score,
                "Tied final score, leaving wager ungraded"
            );
            return Ok(false);
        }

        let (winner, winner_team) = if away_score > home_score {
            (Side::Away, away_team)
        } else {
            (Side::Home, home_team)
        };

        let outcome = if normalize_team(&wager.bet.pick) == normalize_team(winner_team) {
            Outcome::Win
        } else {
            Outcome::Loss
        };

        // Stake comes from the stored wager, never from the sizing table:
        // historical ROI must survive retroactive sizing-policy changes.
        let profit = settlement_profit(outcome, wager.bet.odds, wager.bet.units);

        let now = Utc::now();
        let result = WagerResult {
            away_score,
            home_score,
            winner,
            winner_team: winner_team.to_string(),
            outcome,
            profit,
            fetched: true,
            fetched_at: now,
            source: score.source.clone(),
        };

        match self.store.settle(&wager.id, &result, now).await? {
            SettleOutcome::Settled => {
                info!(
                    id = %wager.id,
                    outcome = %outcome,
                    profit = %profit,
                    score = format!("{away_score}-{home_score}"),
                    "Graded wager"
                );
                Ok(true)
            }
            SettleOutcome::AlreadyCompleted => {
                debug!(id = %wager.id, "Lost settle race, wager already completed");
                Ok(false)
            }
            SettleOutcome::NotFound => Ok(false),
        }
    }

    async fn find_wager(&self, candidates: &[WagerId; 2]) -> Result<Option<Wager>> {
        for id in candidates {
            if let Some(wager) = self.store.get(id).await? {
                return Ok(Some(wager));
            }
        }
        Ok(None)
    }
}
