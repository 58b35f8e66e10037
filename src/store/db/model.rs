//! Row types mapped to the `wagers` table.
//!
//! Money columns (`units`, `profit`, `initial_ev`) are stored as decimal
//! text, not floats: the ledger backs the public track record and must
//! round-trip exactly.

use diesel::prelude::*;

use super::schema::wagers;

/// One persisted wager. Result columns are all null until settlement, then
/// all written together.
#[derive(Debug, Clone, Queryable, Insertable, Identifiable, Selectable)]
#[diesel(table_name = wagers)]
pub struct WagerRow {
    pub id: String,
    pub sport: String,
    pub wager_date: String,
    pub away_team: String,
    pub home_team: String,
    pub scheduled_at: Option<String>,
    pub market: String,
    pub pick: String,
    pub odds: i32,
    pub units: String,
    pub prediction: String,
    pub away_score: Option<i32>,
    pub home_score: Option<i32>,
    pub winner: Option<String>,
    pub winner_team: Option<String>,
    pub outcome: Option<String>,
    pub profit: Option<String>,
    pub fetched: i32,
    pub fetched_at: Option<String>,
    pub result_source: Option<String>,
    pub status: String,
    pub recorded_at: String,
    pub graded_at: Option<String>,
    pub initial_odds: i32,
    pub initial_ev: String,
}
