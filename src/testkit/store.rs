//! A store that refuses every operation.

use chrono::{DateTime, Utc};

use crate::domain::{Wager, WagerId, WagerResult};
use crate::error::{Result, StoreError};
use crate::store::{SettleOutcome, WagerStore};

/// Denies every operation with a permission error. Recorder and grader
/// must surface these instead of treating them as benign skips.
#[derive(Debug, Default)]
pub struct DeniedStore;

impl WagerStore for DeniedStore {
    async fn create_if_absent(&self, _wager: &Wager) -> Result<bool> {
        Err(StoreError::PermissionDenied("write denied".into()).into())
    }

    async fn get(&self, _id: &WagerId) -> Result<Option<Wager>> {
        Err(StoreError::PermissionDenied("read denied".into()).into())
    }

    async fn settle(
        &self,
        _id: &WagerId,
        _result: &WagerResult,
        _graded_at: DateTime<Utc>,
    ) -> Result<SettleOutcome> {
        Err(StoreError::PermissionDenied("write denied".into()).into())
    }

    async fn list(&self) -> Result<Vec<Wager>> {
        Err(StoreError::PermissionDenied("read denied".into()).into())
    }

    async fn list_pending(&self) -> Result<Vec<Wager>> {
        Err(StoreError::PermissionDenied("read denied".into()).into())
    }
}
