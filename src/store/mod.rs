//! Persistence layer with pluggable storage backends.
//!
//! Recorder and grader are invoked concurrently and without coordination
//! (scheduled jobs, polling loops, multiple sessions), so the store carries
//! the atomicity guarantees: creation is a single conditional write, and
//! settlement is one check-then-write transaction.

pub mod db;
mod memory;
mod sqlite;

pub use memory::MemoryWagerStore;
pub use sqlite::SqliteWagerStore;

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{Wager, WagerId, WagerResult};
use crate::error::Result;

/// What an atomic settle attempt observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Result written, status transitioned PENDING → COMPLETED.
    Settled,
    /// Another caller settled this wager first; nothing was written.
    AlreadyCompleted,
    /// No wager with this identity exists.
    NotFound,
}

/// Storage operations for wagers.
pub trait WagerStore: Send + Sync {
    /// Persist a wager if its identity is absent. Returns `true` when this
    /// call created the record, `false` when it already existed. Never
    /// overwrites: the existence conflict is the idempotence mechanism, not
    /// an error.
    fn create_if_absent(&self, wager: &Wager) -> impl Future<Output = Result<bool>> + Send;

    /// Get a wager by identity.
    fn get(&self, id: &WagerId) -> impl Future<Output = Result<Option<Wager>>> + Send;

    /// Write the settlement result and complete the wager in one atomic
    /// transaction. The completed-check and the write happen together, so
    /// concurrent graders cannot both settle the same wager.
    fn settle(
        &self,
        id: &WagerId,
        result: &WagerResult,
        graded_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<SettleOutcome>> + Send;

    /// List every wager, settled or not.
    fn list(&self) -> impl Future<Output = Result<Vec<Wager>>> + Send;

    /// List wagers still awaiting a result, for grading sweeps.
    fn list_pending(&self) -> impl Future<Output = Result<Vec<Wager>>> + Send;
}
