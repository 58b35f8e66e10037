//! Settlement services: durable wager recording and exactly-once grading.

mod grader;
mod recorder;

pub use grader::{settlement_profit, BetGrader};
pub use recorder::{BetRecorder, GameContext};
