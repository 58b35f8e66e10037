//! End-to-end settlement flow against a real SQLite store.

use betledger::domain::{FinalScore, GameStatus, Outcome, Side, WagerStatus};
use betledger::settle::{BetGrader, BetRecorder, GameContext};
use betledger::sizing::UnitSizingTable;
use betledger::store::db::{create_pool, run_migrations, DbPool};
use betledger::store::{SqliteWagerStore, WagerStore};
use betledger::testkit::wagers::prediction;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn open_pool(dir: &TempDir) -> DbPool {
    let path = dir.path().join("wagers.db");
    let pool = create_pool(path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    pool
}

fn game() -> GameContext {
    GameContext {
        sport: "BASKETBALL".into(),
        date: NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
        away_team: "Toledo".into(),
        home_team: "Troy".into(),
        scheduled_at: None,
    }
}

fn final_score(away: u32, home: u32) -> FinalScore {
    FinalScore {
        status: GameStatus::Final,
        away_score: Some(away),
        home_score: Some(home),
        source: "SCORE_FEED".into(),
    }
}

#[tokio::test]
async fn record_then_grade_home_win() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteWagerStore::new(open_pool(&dir));
    let sizing = UnitSizingTable::recommended();

    let recorder = BetRecorder::new(&store, &sizing);
    let id = recorder
        .record(&game(), &prediction("Troy", -120, "A"))
        .await
        .unwrap();
    assert_eq!(id.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TROY_(HOME)");

    let grader = BetGrader::new(&store);
    let graded = grader
        .grade(game().date, "Toledo", "Troy", &final_score(80, 85))
        .await
        .unwrap();
    assert!(graded);

    let settled = store.get(&id).await.unwrap().unwrap();
    assert_eq!(settled.status, WagerStatus::Completed);
    let result = settled.result.unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.winner, Side::Home);
    assert_eq!(result.away_score, 80);
    assert_eq!(result.home_score, 85);
    // Stake came from the grade-A pick'em cell; profit at -120 follows it.
    let expected = settled.bet.units * (dec!(100) / dec!(120));
    assert!((result.profit - expected).abs() < dec!(0.0001));
}

#[tokio::test]
async fn regrading_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteWagerStore::new(open_pool(&dir));
    let sizing = UnitSizingTable::recommended();

    let recorder = BetRecorder::new(&store, &sizing);
    let id = recorder
        .record(&game(), &prediction("Troy", -120, "A"))
        .await
        .unwrap();

    let grader = BetGrader::new(&store);
    assert!(grader
        .grade(game().date, "Toledo", "Troy", &final_score(80, 85))
        .await
        .unwrap());

    let before = store.get(&id).await.unwrap().unwrap();
    // A flipped score on the retry must not rewrite the settled record.
    assert!(!grader
        .grade(game().date, "Toledo", "Troy", &final_score(85, 80))
        .await
        .unwrap());
    let after = store.get(&id).await.unwrap().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn record_is_idempotent_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let sizing = UnitSizingTable::recommended();

    {
        let store = SqliteWagerStore::new(open_pool(&dir));
        let recorder = BetRecorder::new(&store, &sizing);
        recorder
            .record(&game(), &prediction("Troy", -120, "A"))
            .await
            .unwrap();
    }

    // Same pick after a process restart lands on the existing row.
    let store = SqliteWagerStore::new(open_pool(&dir));
    let recorder = BetRecorder::new(&store, &sizing);
    recorder
        .record(&game(), &prediction("Troy", -120, "A"))
        .await
        .unwrap();

    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn losing_away_pick_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteWagerStore::new(open_pool(&dir));
    let sizing = UnitSizingTable::recommended();

    let recorder = BetRecorder::new(&store, &sizing);
    let id = recorder
        .record(&game(), &prediction("Toledo", 150, "C"))
        .await
        .unwrap();
    assert_eq!(id.as_str(), "2025-11-24_TOLEDO_TROY_MONEYLINE_TOLEDO_(AWAY)");

    let grader = BetGrader::new(&store);
    assert!(grader
        .grade(game().date, "Toledo", "Troy", &final_score(70, 90))
        .await
        .unwrap());

    let settled = store.get(&id).await.unwrap().unwrap();
    let result = settled.result.unwrap();
    assert_eq!(result.outcome, Outcome::Loss);
    assert_eq!(result.profit, -settled.bet.units);
    assert_eq!(result.source, "SCORE_FEED");
}

#[tokio::test]
async fn live_game_grades_later() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteWagerStore::new(open_pool(&dir));
    let sizing = UnitSizingTable::recommended();

    let recorder = BetRecorder::new(&store, &sizing);
    let id = recorder
        .record(&game(), &prediction("Troy", -120, "A"))
        .await
        .unwrap();

    let grader = BetGrader::new(&store);
    let mut live = final_score(40, 44);
    live.status = GameStatus::Live;
    assert!(!grader
        .grade(game().date, "Toledo", "Troy", &live)
        .await
        .unwrap());
    assert_eq!(store.list_pending().await.unwrap().len(), 1);

    assert!(grader
        .grade(game().date, "Toledo", "Troy", &final_score(80, 85))
        .await
        .unwrap());
    assert!(store.list_pending().await.unwrap().is_empty());
    assert!(store.get(&id).await.unwrap().unwrap().graded_at.is_some());
}
