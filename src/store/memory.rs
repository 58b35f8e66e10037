//! In-memory store implementation for testing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::{SettleOutcome, WagerStore};
use crate::domain::{Wager, WagerId, WagerResult, WagerStatus};
use crate::error::Result;

/// In-memory wager store. The write lock makes each operation atomic,
/// matching the transactional semantics of the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryWagerStore {
    wagers: RwLock<HashMap<WagerId, Wager>>,
}

impl MemoryWagerStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored wagers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wagers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wagers.read().is_empty()
    }
}

impl WagerStore for MemoryWagerStore {
    async fn create_if_absent(&self, wager: &Wager) -> Result<bool> {
        let mut wagers = self.wagers.write();
        if wagers.contains_key(&wager.id) {
            return Ok(false);
        }
        wagers.insert(wager.id.clone(), wager.clone());
        Ok(true)
    }

    async fn get(&self, id: &WagerId) -> Result<Option<Wager>> {
        Ok(self.wagers.read().get(id).cloned())
    }

    async fn settle(
        &self,
        id: &WagerId,
        result: &WagerResult,
        graded_at: DateTime<Utc>,
    ) -> Result<SettleOutcome> {
        let mut wagers = self.wagers.write();
        let Some(wager) = wagers.get_mut(id) else {
            return Ok(SettleOutcome::NotFound);
        };
        if wager.status == WagerStatus::Completed {
            return Ok(SettleOutcome::AlreadyCompleted);
        }
        wager.result = Some(result.clone());
        wager.status = WagerStatus::Completed;
        wager.graded_at = Some(graded_at);
        Ok(SettleOutcome::Settled)
    }

    async fn list(&self) -> Result<Vec<Wager>> {
        Ok(self.wagers.read().values().cloned().collect())
    }

    async fn list_pending(&self) -> Result<Vec<Wager>> {
        Ok(self
            .wagers
            .read()
            .values()
            .filter(|w| w.status == WagerStatus::Pending)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::wagers::pending_wager;
    use rust_decimal_macros::dec;

    use crate::domain::{Outcome, Side};

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
    async fn create_is_idempotent() {
        let store = MemoryWagerStore::new();
        let wager = pending_wager("Toledo", "Troy", "Toledo");

        assert!(store.create_if_absent(&wager).await.unwrap());
        assert!(!store.create_if_absent(&wager).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn settle_transitions_once() {
        let store = MemoryWagerStore::new();
        let wager = pending_wager("Toledo", "Troy", "Toledo");
        store.create_if_absent(&wager).await.unwrap();

        let result = sample_result();
        let now = Utc::now();

        assert_eq!(
            store.settle(&wager.id, &result, now).await.unwrap(),
            SettleOutcome::Settled
        );
        assert_eq!(
            store.settle(&wager.id, &result, now).await.unwrap(),
            SettleOutcome::AlreadyCompleted
        );

        let stored = store.get(&wager.id).await.unwrap().unwrap();
        assert_eq!(stored.status, WagerStatus::Completed);
        assert_eq!(stored.result.unwrap().profit, dec!(1.5));
    }

    #[tokio::test]
    async fn settle_unknown_id_is_not_found() {
        let store = MemoryWagerStore::new();
        let wager = pending_wager("Toledo", "Troy", "Toledo");
        let outcome = store
            .settle(&wager.id, &sample_result(), Utc::now())
            .await
            .unwrap();
        assert_eq!(outcome, SettleOutcome::NotFound);
    }

    #[tokio::test]
    async fn list_pending_filters_settled() {
        let store = MemoryWagerStore::new();
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

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
