//! Track-record aggregation and its read cache.

mod aggregator;
mod cache;

pub use aggregator::compute_stats;
pub use cache::{Clock, StatsCache, SystemClock};

use tracing::debug;

use crate::config::BankrollConfig;
use crate::domain::Stats;
use crate::error::Result;
use crate::store::WagerStore;

/// Cached read path over the full wager set.
pub struct StatsService<'a, S> {
    store: &'a S,
    cache: &'a StatsCache,
    bankroll: BankrollConfig,
}

impl<'a, S: WagerStore> StatsService<'a, S> {
    pub fn new(store: &'a S, cache: &'a StatsCache, bankroll: BankrollConfig) -> Self {
        Self {
            store,
            cache,
            bankroll,
        }
    }

    /// The current track record, memoized until TTL expiry or an explicit
    /// invalidation.
    pub async fn stats(&self) -> Result<Stats> {
        if let Some(stats) = self.cache.get() {
            debug!("Serving stats from cache");
            return Ok(stats);
        }

        let wagers = self.store.list().await?;
        let stats = compute_stats(&wagers, &self.bankroll);
        self.cache.put(stats.clone());
        Ok(stats)
    }

    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}
