//! Exchange- and sport-agnostic domain types: wagers, odds, grades,
//! scores and aggregate statistics.

pub mod grade;
pub mod odds;
pub mod score;
pub mod stats;
pub mod wager;

pub use grade::Grade;
pub use odds::{AmericanOdds, OddsCategory};
pub use score::{FinalScore, GameStatus};
pub use stats::{DailyBucket, SportStats, Stats, Streak};
pub use wager::{
    normalize_ident, normalize_team, BetSlip, GameInfo, Market, Outcome, PredictionPayload, Side,
    Wager, WagerId, WagerResult, WagerStatus,
};
