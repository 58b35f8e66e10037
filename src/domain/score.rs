//! Final-score feed types consumed by the grader.

use serde::{Deserialize, Serialize};

/// Reported game state from the live score feed.
///
/// Games are polled repeatedly before they end; everything short of
/// [`GameStatus::Final`] is a benign skip for grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
}

/// One game's score snapshot from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub status: GameStatus,
    /// Absent until the feed has reported a score.
    pub away_score: Option<u32>,
    pub home_score: Option<u32>,
    /// Feed identifier, stored on the settled wager for auditing.
    pub source: String,
}

impl FinalScore {
    /// True only when the game is final and both scores are populated,
    /// which is the precondition for grading.
    #[must_use]
    pub fn is_gradable(&self) -> bool {
        self.status == GameStatus::Final
            && self.away_score.is_some()
            && self.home_score.is_some()
    }
}
