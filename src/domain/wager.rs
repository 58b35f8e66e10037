//! The wager record and its deterministic identity.
//!
//! A [`Wager`] is the append-only audit record of one recommended bet. It is
//! created exactly once (PENDING), settled exactly once (COMPLETED with a
//! full [`WagerResult`]), and never deleted. Every ROI claim downstream is
//! backed by these rows.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::odds::AmericanOdds;

/// Bet market. Only moneyline picks flow through this engine today; the
/// identity format carries the market name so other markets can coexist in
/// the same store without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Market {
    Moneyline,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Moneyline => "MONEYLINE",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the matchup a pick is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Away => "AWAY",
            Side::Home => "HOME",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a team name for use inside a wager identity: uppercase with
/// every whitespace run collapsed to a single underscore.
///
/// This is the only defense against duplicate wagers caused by inconsistent
/// casing or spacing in upstream feeds, so it is load-bearing and must not
/// drift.
#[must_use]
pub fn normalize_ident(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// Normalize a team name for outcome comparison: lowercase, alphanumerics
/// only. Tolerates punctuation differences between the pick feed and the
/// score feed ("St. Mary's" vs "St Marys").
#[must_use]
pub fn normalize_team(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Deterministic wager identity.
///
/// Bit-exact format, load-bearing for lookups (external tooling constructs
/// these directly):
///
/// ```text
/// {YYYY-MM-DD}_{AWAY_NORM}_{HOME_NORM}_{MARKET}_{PICK_NORM}_({SIDE})
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WagerId(String);

impl WagerId {
    /// Derive the identity for a pick. The side is computed by comparing the
    /// normalized picked team against the normalized away team.
    #[must_use]
    pub fn derive(
        date: NaiveDate,
        away_team: &str,
        home_team: &str,
        market: Market,
        pick: &str,
    ) -> (WagerId, Side) {
        let away_norm = normalize_ident(away_team);
        let home_norm = normalize_ident(home_team);
        let pick_norm = normalize_ident(pick);
        let side = if pick_norm == away_norm {
            Side::Away
        } else {
            Side::Home
        };
        let id = format!(
            "{}_{}_{}_{}_{}_({})",
            date.format("%Y-%m-%d"),
            away_norm,
            home_norm,
            market,
            pick_norm,
            side
        );
        (WagerId(id), side)
    }

    /// Enumerate both candidate identities for a game: the pick could be on
    /// either side, and grading must check both explicitly.
    #[must_use]
    pub fn candidates(
        date: NaiveDate,
        away_team: &str,
        home_team: &str,
        market: Market,
    ) -> [WagerId; 2] {
        let (away_id, _) = WagerId::derive(date, away_team, home_team, market, away_team);
        let (home_id, _) = WagerId::derive(date, away_team, home_team, market, home_team);
        [away_id, home_id]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WagerId {
    fn from(s: String) -> Self {
        WagerId(s)
    }
}

impl fmt::Display for WagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The matchup a wager was placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub away_team: String,
    pub home_team: String,
    /// Scheduled start, when the odds feed supplied one.
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// The bet itself: market, side, price and stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSlip {
    pub market: Market,
    /// Picked team, as named by the upstream feed.
    pub pick: String,
    /// Odds in effect when the wager was recorded.
    pub odds: AmericanOdds,
    /// Stake in units, fixed at creation. Grading must never recompute this
    /// from the sizing table; retroactive sizing-policy changes would
    /// otherwise rewrite historical ROI.
    pub units: Decimal,
}

/// Opaque payload from the upstream prediction model.
///
/// The engine interprets only `grade`, `best_odds` and `best_team`; every
/// other model-specific field rides along untouched for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    pub best_team: String,
    pub best_odds: AmericanOdds,
    /// Expected value percentage claimed by the model.
    pub best_ev: Decimal,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Decimal>,
    /// Model-specific probability/score breakdown, carried as-is.
    #[serde(flatten)]
    pub model_fields: serde_json::Map<String, serde_json::Value>,
}

/// Final outcome of a settled wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Loss,
    /// Voided against the line. Reserved in the data model; the moneyline
    /// grading path never produces it.
    Push,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
            Outcome::Push => "PUSH",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement result. All fields are written together in one transaction;
/// a wager either has a complete result or none at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerResult {
    pub away_score: u32,
    pub home_score: u32,
    pub winner: Side,
    pub winner_team: String,
    pub outcome: Outcome,
    /// Profit in units, sign and magnitude fully determined by outcome,
    /// stored odds and stored stake.
    pub profit: Decimal,
    pub fetched: bool,
    pub fetched_at: DateTime<Utc>,
    /// Which score feed settled this wager.
    pub source: String,
}

/// Wager lifecycle status. Monotonic: PENDING → COMPLETED, exactly once,
/// never reverting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WagerStatus {
    Pending,
    Completed,
}

impl WagerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WagerStatus::Pending => "PENDING",
            WagerStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for WagerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommended bet, durably recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    pub id: WagerId,
    pub sport: String,
    /// Calendar day the pick was made; part of the identity.
    pub date: NaiveDate,
    pub game: GameInfo,
    pub bet: BetSlip,
    pub prediction: PredictionPayload,
    pub result: Option<WagerResult>,
    pub status: WagerStatus,
    pub recorded_at: DateTime<Utc>,
    pub graded_at: Option<DateTime<Utc>>,
    /// Odds snapshot at first recommendation, for line-movement comparison
    /// against the odds used at grading time. Written once, never touched.
    pub initial_odds: AmericanOdds,
    /// EV snapshot at first recommendation.
    pub initial_ev: Decimal,
}

impl Wager {
    /// True once a settlement result has been written.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
    }

    #[test]
    fn identity_format_is_bit_exact() {
        let (id, side) = WagerId::derive(date(), "Toledo", "Troy", Market::Moneyline, "Troy");
        assert_eq!(id.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TROY_(HOME)");
        assert_eq!(side, Side::Home);
    }

    #[test]
    fn away_pick_side() {
        let (id, side) = WagerId::derive(date(), "Toledo", "Troy", Market::Moneyline, "Toledo");
        assert_eq!(id.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TOLEDO_(AWAY)");
        assert_eq!(side, Side::Away);
    }

    #[test]
    fn ident_normalization_collapses_whitespace_and_case() {
        assert_eq!(normalize_ident("  Ohio   State "), "OHIO_STATE");
        assert_eq!(normalize_ident("ohio state"), "OHIO_STATE");
    }

    #[test]
    fn inconsistent_feed_casing_yields_same_identity() {
        let (a, _) = WagerId::derive(date(), "Ohio State", "Duke", Market::Moneyline, "Duke");
        let (b, _) = WagerId::derive(date(), "OHIO  STATE", "duke", Market::Moneyline, "DUKE");
        assert_eq!(a, b);
    }

    #[test]
    fn candidates_cover_both_sides() {
        let [away, home] = WagerId::candidates(date(), "Toledo", "Troy", Market::Moneyline);
        assert_eq!(away.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TOLEDO_(AWAY)");
        assert_eq!(home.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TROY_(HOME)");
    }

    #[test]
    fn team_normalization_strips_punctuation() {
        assert_eq!(normalize_team("St. Mary's"), "stmarys");
        assert_eq!(normalize_team("St Marys"), "stmarys");
    }
}
