//! SQLite store implementation using Diesel.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::db::model::WagerRow;
use super::db::schema::wagers;
use super::db::DbPool;
use super::{SettleOutcome, WagerStore};
use crate::domain::{
    BetSlip, GameInfo, Market, Outcome, Side, Wager, WagerId, WagerResult, WagerStatus,
};
use crate::domain::AmericanOdds;
use crate::error::{Error, Result, StoreError};

/// SQLite-backed wager store.
pub struct SqliteWagerStore {
    pool: DbPool,
}

impl SqliteWagerStore {
    /// Create a new SQLite wager store.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(wager: &Wager) -> Result<WagerRow> {
        let prediction = serde_json::to_string(&wager.prediction)?;
        let result = wager.result.as_ref();
        Ok(WagerRow {
            id: wager.id.to_string(),
            sport: wager.sport.clone(),
            wager_date: wager.date.format("%Y-%m-%d").to_string(),
            away_team: wager.game.away_team.clone(),
            home_team: wager.game.home_team.clone(),
            scheduled_at: wager.game.scheduled_at.map(|t| t.to_rfc3339()),
            market: wager.bet.market.as_str().to_string(),
            pick: wager.bet.pick.clone(),
            odds: wager.bet.odds.value(),
            units: wager.bet.units.to_string(),
            prediction,
            away_score: result.map(|r| r.away_score as i32),
            home_score: result.map(|r| r.home_score as i32),
            winner: result.map(|r| r.winner.as_str().to_string()),
            winner_team: result.map(|r| r.winner_team.clone()),
            outcome: result.map(|r| r.outcome.as_str().to_string()),
            profit: result.map(|r| r.profit.to_string()),
            fetched: i32::from(result.map(|r| r.fetched).unwrap_or(false)),
            fetched_at: result.map(|r| r.fetched_at.to_rfc3339()),
            result_source: result.map(|r| r.source.clone()),
            status: wager.status.as_str().to_string(),
            recorded_at: wager.recorded_at.to_rfc3339(),
            graded_at: wager.graded_at.map(|t| t.to_rfc3339()),
            initial_odds: wager.initial_odds.value(),
            initial_ev: wager.initial_ev.to_string(),
        })
    }

    fn from_row(row: WagerRow) -> Result<Wager> {
        let corrupt = |reason: String| -> Error {
            StoreError::Corrupt {
                id: row.id.clone(),
                reason,
            }
            .into()
        };

        let date = NaiveDate::parse_from_str(&row.wager_date, "%Y-%m-%d")
            .map_err(|e| corrupt(format!("bad wager_date: {e}")))?;
        let market = match row.market.as_str() {
            "MONEYLINE" => Market::Moneyline,
            other => return Err(corrupt(format!("unknown market '{other}'"))),
        };
        let status = match row.status.as_str() {
            "PENDING" => WagerStatus::Pending,
            "COMPLETED" => WagerStatus::Completed,
            other => return Err(corrupt(format!("unknown status '{other}'"))),
        };
        let units: Decimal = row
            .units
            .parse()
            .map_err(|e| corrupt(format!("bad units: {e}")))?;
        let initial_ev: Decimal = row
            .initial_ev
            .parse()
            .map_err(|e| corrupt(format!("bad initial_ev: {e}")))?;
        let prediction = serde_json::from_str(&row.prediction)
            .map_err(|e| corrupt(format!("bad prediction payload: {e}")))?;

        let parse_ts = |value: &str| -> Result<DateTime<Utc>> {
            DateTime::parse_from_rfc3339(value)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| corrupt(format!("bad timestamp: {e}")))
        };

        let recorded_at = parse_ts(&row.recorded_at)?;
        let graded_at = row.graded_at.as_deref().map(parse_ts).transpose()?;
        let scheduled_at = row.scheduled_at.as_deref().map(parse_ts).transpose()?;

        // Result columns are written all-or-nothing; the outcome column is
        // the marker for the whole group.
        let result = match row.outcome.as_deref() {
            None => None,
            Some(outcome_str) => {
                let outcome = match outcome_str {
                    "WIN" => Outcome::Win,
                    "LOSS" => Outcome::Loss,
                    "PUSH" => Outcome::Push,
                    other => return Err(corrupt(format!("unknown outcome '{other}'"))),
                };
                let winner = match row.winner.as_deref() {
                    Some("AWAY") => Side::Away,
                    Some("HOME") => Side::Home,
                    other => return Err(corrupt(format!("bad winner '{other:?}'"))),
                };
                let profit: Decimal = row
                    .profit
                    .as_deref()
                    .ok_or_else(|| corrupt("settled wager missing profit".into()))?
                    .parse()
                    .map_err(|e| corrupt(format!("bad profit: {e}")))?;
                let fetched_at = row
                    .fetched_at
                    .as_deref()
                    .ok_or_else(|| corrupt("settled wager missing fetched_at".into()))
                    .and_then(|v| parse_ts(v))?;
                Some(WagerResult {
                    away_score: row
                        .away_score
                        .ok_or_else(|| corrupt("settled wager missing away_score".into()))?
                        as u32,
                    home_score: row
                        .home_score
                        .ok_or_else(|| corrupt("settled wager missing home_score".into()))?
                        as u32,
                    winner,
                    winner_team: row.winner_team.clone().unwrap_or_default(),
                    outcome,
                    profit,
                    fetched: row.fetched != 0,
                    fetched_at,
                    source: row.result_source.clone().unwrap_or_default(),
                })
            }
        };

        Ok(Wager {
            id: WagerId::from(row.id.clone()),
            sport: row.sport,
            date,
            game: GameInfo {
                away_team: row.away_team,
                home_team: row.home_team,
                scheduled_at,
            },
            bet: BetSlip {
                market,
                pick: row.pick,
                odds: AmericanOdds::new(row.odds),
                units,
            },
            prediction,
            result,
            status,
            recorded_at,
            graded_at,
            initial_odds: AmericanOdds::new(row.initial_odds),
            initial_ev,
        })
    }
}

/// Map a Diesel error, surfacing write-permission faults as their own
/// variant so callers never retry them blindly.
fn map_db_error(err: diesel::result::Error) -> Error {
    let message = err.to_string();
    if message.contains("readonly") || message.contains("access") {
        StoreError::PermissionDenied(message).into()
    } else {
        StoreError::Database(message).into()
    }
}

impl WagerStore for SqliteWagerStore {
    async fn create_if_absent(&self, wager: &Wager) -> Result<bool> {
        let row = Self::to_row(wager)?;
        let mut conn = self
            .pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        // Single conditional write: INSERT OR IGNORE makes the
        // read-if-exists / write-if-absent pair one atomic statement.
        let inserted = diesel::insert_or_ignore_into(wagers::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(map_db_error)?;

        Ok(inserted == 1)
    }

    async fn get(&self, id: &WagerId) -> Result<Option<Wager>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let row: Option<WagerRow> = wagers::table
            .find(id.as_str())
            .first(&mut conn)
            .optional()
            .map_err(map_db_error)?;

        row.map(Self::from_row).transpose()
    }

    async fn settle(
        &self,
        id: &WagerId,
        result: &WagerResult,
        graded_at: DateTime<Utc>,
    ) -> Result<SettleOutcome> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        // Completed-check and result write in one transaction, so two
        // concurrent graders cannot both settle the same wager.
        let outcome = conn
            .transaction::<SettleOutcome, diesel::result::Error, _>(|conn| {
                let status: Option<String> = wagers::table
                    .find(id.as_str())
                    .select(wagers::status)
                    .first(conn)
                    .optional()?;

                match status.as_deref() {
                    None => Ok(SettleOutcome::NotFound),
                    Some("COMPLETED") => Ok(SettleOutcome::AlreadyCompleted),
                    Some(_) => {
                        diesel::update(wagers::table.find(id.as_str()))
                            .set((
                                wagers::away_score.eq(Some(result.away_score as i32)),
                                wagers::home_score.eq(Some(result.home_score as i32)),
                                wagers::winner.eq(Some(result.winner.as_str())),
                                wagers::winner_team.eq(Some(result.winner_team.as_str())),
                                wagers::outcome.eq(Some(result.outcome.as_str())),
                                wagers::profit.eq(Some(result.profit.to_string())),
                                wagers::fetched.eq(i32::from(result.fetched)),
                                wagers::fetched_at.eq(Some(result.fetched_at.to_rfc3339())),
                                wagers::result_source.eq(Some(result.source.as_str())),
                                wagers::status.eq(WagerStatus::Completed.as_str()),
                                wagers::graded_at.eq(Some(graded_at.to_rfc3339())),
                            ))
                            .execute(conn)?;
                        Ok(SettleOutcome::Settled)
                    }
                }
            })
            .map_err(map_db_error)?;

        Ok(outcome)
    }

    async fn list(&self) -> Result<Vec<Wager>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let rows: Vec<WagerRow> = wagers::table.load(&mut conn).map_err(map_db_error)?;
        rows.into_iter().map(Self::from_row).collect()
    }

    async fn list_pending(&self) -> Result<Vec<Wager>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let rows: Vec<WagerRow> = wagers::table
            .filter(wagers::status.eq(WagerStatus::Pending.as_str()))
            .load(&mut conn)
            .map_err(map_db_error)?;
        rows.into_iter().map(Self::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::db::{create_pool, run_migrations, DbPool};
    use crate::testkit::wagers::pending_wager;
    use rust_decimal_macros::dec;

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        pool
    }

    fn sample_result() -> WagerResult {
        WagerResult {
            away_score: 85,
            home_score: 80,
            winner: Side::Away,
            winner_team: "Toledo".into(),
            outcome: Outcome::Win,
            profit: dec!(1.5),
            fetched: true,
            fetched_at: Utc::now(),
            source: "TEST".into(),
        }
    }

    #[tokio::test]
    async fn sqlite_wager_roundtrip() {
        let store = SqliteWagerStore::new(setup_test_db());
        let wager = pending_wager("Toledo", "Troy", "Toledo");

        assert!(store.create_if_absent(&wager).await.unwrap());
        let loaded = store.get(&wager.id).await.unwrap().unwrap();

        assert_eq!(loaded.id, wager.id);
        assert_eq!(loaded.bet.units, wager.bet.units);
        assert_eq!(loaded.bet.odds, wager.bet.odds);
        assert_eq!(loaded.status, WagerStatus::Pending);
        assert!(loaded.result.is_none());
        assert_eq!(loaded.initial_odds, wager.initial_odds);
    }

    #[tokio::test]
    async fn duplicate_create_is_ignored() {
        let store = SqliteWagerStore::new(setup_test_db());
        let wager = pending_wager("Toledo", "Troy", "Toledo");

        assert!(store.create_if_absent(&wager).await.unwrap());
        assert!(!store.create_if_absent(&wager).await.unwrap());

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn settle_writes_all_result_fields_once() {
        let store = SqliteWagerStore::new(setup_test_db());
        let wager = pending_wager("Toledo", "Troy", "Toledo");
        store.create_if_absent(&wager).await.unwrap();

        let result = sample_result();
        let graded_at = Utc::now();
        assert_eq!(
            store.settle(&wager.id, &result, graded_at).await.unwrap(),
            SettleOutcome::Settled
        );

        let loaded = store.get(&wager.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, WagerStatus::Completed);
        let stored = loaded.result.unwrap();
        assert_eq!(stored.outcome, Outcome::Win);
        assert_eq!(stored.profit, dec!(1.5));
        assert_eq!(stored.away_score, 85);
        assert_eq!(stored.source, "TEST");

        // Second settle attempt is a no-op.
        assert_eq!(
            store.settle(&wager.id, &result, graded_at).await.unwrap(),
            SettleOutcome::AlreadyCompleted
        );
    }

    #[test]
    fn readonly_write_maps_to_permission_denied() {
        let err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::Unknown,
            Box::new("attempt to write a readonly database".to_string()),
        );
        assert!(map_db_error(err).is_permission_denied());
    }

    #[test]
    fn other_database_errors_stay_database_errors() {
        let mapped = map_db_error(diesel::result::Error::NotFound);
        assert!(!mapped.is_permission_denied());
        assert!(matches!(mapped, Error::Store(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn list_pending_excludes_settled() {
        let store = SqliteWagerStore::new(setup_test_db());
        let a = pending_wager("Toledo", "Troy", "Toledo");
        let b = pending_wager("Duke", "Kansas", "Duke");
        store.create_if_absent(&a).await.unwrap();
        store.create_if_absent(&b).await.unwrap();
        store
            .settle(&a.id, &sample_result(), Utc::now())
            .await
            .unwrap();

        let pending = store.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, b.id);
    }
}
