//! TTL memoization for the stats fold.
//!
//! Time is injected so expiry is testable without sleeping.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use crate::domain::Stats;

/// Source of "now" for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry {
    stats: Stats,
    computed_at: DateTime<Utc>,
}

/// Single-slot cache for the computed track record.
///
/// Mutations (recording, grading) invalidate explicitly rather than
/// waiting out the TTL, so a freshly settled wager shows up in the next
/// read.
pub struct StatsCache {
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl StatsCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_clock(ttl_secs, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
        }
    }

    /// The memoized stats, if present and younger than the TTL.
    pub fn get(&self) -> Option<Stats> {
        let slot = self.slot.read();
        let entry = slot.as_ref()?;
        if self.clock.now() - entry.computed_at < self.ttl {
            Some(entry.stats.clone())
        } else {
            None
        }
    }

    pub fn put(&self, stats: Stats) {
        *self.slot.write() = Some(CacheEntry {
            stats,
            computed_at: self.clock.now(),
        });
    }

    pub fn invalidate(&self) {
        let had_entry = self.slot.write().take().is_some();
        if had_entry {
            debug!("Stats cache invalidated");
        }
    }
}
