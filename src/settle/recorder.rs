//! Wager recording with at-most-once persistence.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::domain::{BetSlip, GameInfo, Market, PredictionPayload, Wager, WagerId, WagerStatus};
use crate::error::Result;
use crate::sizing::UnitSizingTable;
use crate::store::WagerStore;

/// The matchup a prediction was made for.
#[derive(Debug, Clone)]
pub struct GameContext {
    pub sport: String,
    /// Calendar day of the pick; part of the wager identity.
    pub date: NaiveDate,
    pub away_team: String,
    pub home_team: String,
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Records predictions as PENDING wagers, exactly once per identity.
///
/// Safe to call repeatedly for the same logical pick: the identity is
/// deterministic and the store write is conditional, so retries and
/// concurrent callers collapse onto a single persisted record.
pub struct BetRecorder<'a, S> {
    store: &'a S,
    sizing: &'a UnitSizingTable,
}

impl<'a, S: WagerStore> BetRecorder<'a, S> {
    pub fn new(store: &'a S, sizing: &'a UnitSizingTable) -> Self {
        Self { store, sizing }
    }

    /// Record a prediction as a wager. Returns the derived identity whether
    /// or not this call created the record; only a genuine store failure is
    /// an error.
    pub async fn record(
        &self,
        game: &GameContext,
        prediction: &PredictionPayload,
    ) -> Result<WagerId> {
        let (id, side) = WagerId::derive(
            game.date,
            &game.away_team,
            &game.home_team,
            Market::Moneyline,
            &prediction.best_team,
        );

        // Stake is fixed here, at creation. Grading reads it back from the
        // store; later sizing-table versions never touch existing wagers.
        let units = self
            .sizing
            .units_for_raw(&prediction.grade, prediction.best_odds);

        let wager = Wager {
            id: id.clone(),
            sport: game.sport.clone(),
            date: game.date,
            game: GameInfo {
                away_team: game.away_team.clone(),
                home_team: game.home_team.clone(),
                scheduled_at: game.scheduled_at,
            },
            bet: BetSlip {
                market: Market::Moneyline,
                pick: prediction.best_team.clone(),
                odds: prediction.best_odds,
                units,
            },
            prediction: prediction.clone(),
            result: None,
            status: WagerStatus::Pending,
            recorded_at: Utc::now(),
            graded_at: None,
            // Line-movement snapshot: the odds and EV in effect at first
            // recommendation, written once and never updated.
            initial_odds: prediction.best_odds,
            initial_ev: prediction.best_ev,
        };

        let created = self.store.create_if_absent(&wager).await?;
        if created {
            info!(
                id = %id,
                side = %side,
                odds = %prediction.best_odds,
                units = %units,
                grade = %prediction.grade,
                "Recorded new wager"
            );
        } else {
            debug!(id = %id, "Wager already recorded, skipping");
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StoreError};
    use crate::store::MemoryWagerStore;
    use crate::testkit::store::DeniedStore;
    use crate::testkit::wagers::prediction;
    use rust_decimal_macros::dec;

    fn context() -> GameContext {
        GameContext {
            sport: "BASKETBALL".into(),
            date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            away_team: "Toledo".into(),
            home_team: "Troy".into(),
            scheduled_at: None,
        }
    }

    #[tokio::test]
    async fn record_persists_pending_wager() {
        let store = MemoryWagerStore::new();
        let sizing = UnitSizingTable::recommended();
        let recorder = BetRecorder::new(&store, &sizing);

        let id = recorder
            .record(&context(), &prediction("Troy", -120, "A"))
            .await
            .unwrap();

        assert_eq!(id.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TROY_(HOME)");
        let wager = store.get(&id).await.unwrap().unwrap();
        assert_eq!(wager.status, WagerStatus::Pending);
        assert!(wager.result.is_none());
        // Grade A at -120 is the pick'em band.
        assert_eq!(wager.bet.units, dec!(1.066666666666665));
        assert_eq!(wager.initial_odds.value(), -120);
    }

    #[tokio::test]
    async fn record_twice_is_single_wager() {
        let store = MemoryWagerStore::new();
        let sizing = UnitSizingTable::recommended();
        let recorder = BetRecorder::new(&store, &sizing);

        let p = prediction("Troy", -120, "A");
        let first = recorder.record(&context(), &p).await.unwrap();
        let second = recorder.record(&context(), &p).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn messy_feed_casing_still_deduplicates() {
        let store = MemoryWagerStore::new();
        let sizing = UnitSizingTable::recommended();
        let recorder = BetRecorder::new(&store, &sizing);

        recorder
            .record(&context(), &prediction("Troy", -120, "A"))
            .await
            .unwrap();

        let mut shouty = context();
        shouty.away_team = "  TOLEDO ".into();
        shouty.home_team = "troy".into();
        recorder
            .record(&shouty, &prediction("TROY", -120, "A"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn store_permission_fault_propagates() {
        let sizing = UnitSizingTable::recommended();
        let recorder = BetRecorder::new(&DeniedStore, &sizing);

        let err = recorder
            .record(&context(), &prediction("Troy", -120, "A"))
            .await
            .unwrap_err();

        assert!(err.is_permission_denied());
        assert!(matches!(
            err,
            Error::Store(StoreError::PermissionDenied(_))
        ));
    }

    #[tokio::test]
    async fn unknown_grade_still_records_with_default_stake() {
        let store = MemoryWagerStore::new();
        let sizing = UnitSizingTable::recommended();
        let recorder = BetRecorder::new(&store, &sizing);

        let id = recorder
            .record(&context(), &prediction("Troy", -120, "X?"))
            .await
            .unwrap();

        let wager = store.get(&id).await.unwrap().unwrap();
        assert_eq!(wager.bet.units, crate::sizing::DEFAULT_UNITS);
    }
}
