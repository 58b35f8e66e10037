//! Wager and prediction builders with sensible defaults.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{
    AmericanOdds, BetSlip, GameInfo, Market, Outcome, PredictionPayload, Side, Wager, WagerId,
    WagerResult, WagerStatus,
};

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
}

pub fn prediction(team: &str, odds: i32, grade: &str) -> PredictionPayload {
    PredictionPayload {
        best_team: team.to_string(),
        best_odds: AmericanOdds::new(odds),
        best_ev: dec!(5.5),
        grade: grade.to_string(),
        confidence: Some(dec!(0.62)),
        model_fields: serde_json::Map::new(),
    }
}

/// A PENDING moneyline wager at -110 for 1 unit.
pub fn pending_wager(away: &str, home: &str, pick: &str) -> Wager {
    pending_wager_with(away, home, pick, -110, dec!(1))
}

pub fn pending_wager_with(
    away: &str,
    home: &str,
    pick: &str,
    odds: i32,
    units: Decimal,
) -> Wager {
    let (id, _side) = WagerId::derive(test_date(), away, home, Market::Moneyline, pick);
    let p = prediction(pick, odds, "B");
    Wager {
        id,
        sport: "BASKETBALL".to_string(),
        date: test_date(),
        game: GameInfo {
            away_team: away.to_string(),
            home_team: home.to_string(),
            scheduled_at: None,
        },
        bet: BetSlip {
            market: Market::Moneyline,
            pick: pick.to_string(),
            odds: AmericanOdds::new(odds),
            units,
        },
        prediction: p,
        result: None,
        status: WagerStatus::Pending,
        recorded_at: Utc.with_ymd_and_hms(2025, 11, 24, 9, 0, 0).unwrap(),
        graded_at: None,
        initial_odds: AmericanOdds::new(odds),
        initial_ev: dec!(5.5),
    }
}

/// A settled wager whose outcome and profit are set directly, bypassing
/// the grader. Handy for aggregation tests.
pub fn graded_wager(sport: &str, outcome: Outcome, profit: Decimal, units: Decimal) -> Wager {
    let mut wager = graded_wager_on(test_date(), sport, outcome, profit, units);
    wager.sport = sport.to_string();
    wager
}

pub fn graded_wager_on(
    date: NaiveDate,
    tag: &str,
    outcome: Outcome,
    profit: Decimal,
    units: Decimal,
) -> Wager {
    let away = format!("Away {tag}");
    let home = format!("Home {tag}");
    let mut wager = pending_wager_with(&away, &home, &home, -110, units);
    wager.date = date;
    let (id, _side) = WagerId::derive(date, &away, &home, Market::Moneyline, &home);
    wager.id = id;

    let graded_at = Utc.with_ymd_and_hms(2025, 11, 24, 23, 0, 0).unwrap();
    // The pick is the home team, so the winning side follows the outcome.
    let (away_score, home_score, winner, winner_team) = match outcome {
        Outcome::Win | Outcome::Push => (70, 80, Side::Home, home),
        Outcome::Loss => (80, 70, Side::Away, away),
    };
    wager.result = Some(WagerResult {
        away_score,
        home_score,
        winner,
        winner_team,
        outcome,
        profit,
        fetched: true,
        fetched_at: graded_at,
        source: "TEST_FEED".to_string(),
    });
    wager.status = WagerStatus::Completed;
    wager.graded_at = Some(graded_at);
    wager
}
