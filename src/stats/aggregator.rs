//! Performance aggregation over settled wagers.
//!
//! This is a display-layer fold: it never fails on partial or malformed
//! records, defaulting missing numerics to zero. The settlement path is
//! the one that must stay exact.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::BankrollConfig;
use crate::domain::{DailyBucket, Outcome, Stats, Streak, Wager};
use crate::sizing::is_actual_stake;

/// Compute the full track record for a set of wagers.
///
/// Win rate and both ROI conventions are taken over actual bets only;
/// tracked-only picks (placeholder stake) are counted but excluded from
/// every stake-weighted metric.
#[must_use]
pub fn compute_stats(wagers: &[Wager], bankroll: &BankrollConfig) -> Stats {
    let mut stats = Stats {
        total_wagers: wagers.len(),
        ..Stats::default()
    };

    let graded: Vec<&Wager> = wagers.iter().filter(|w| w.is_graded()).collect();
    stats.graded = graded.len();
    stats.pending = wagers.len() - graded.len();

    for wager in &graded {
        let profit = wager
            .result
            .as_ref()
            .map(|r| r.profit)
            .unwrap_or(Decimal::ZERO);
        let outcome = wager.result.as_ref().map(|r| r.outcome);

        // Calendar buckets cover every graded wager, tracked picks included.
        let bucket = stats.daily.entry(wager.date).or_insert_with(DailyBucket::default);
        match outcome {
            Some(Outcome::Win) => bucket.wins += 1,
            Some(Outcome::Loss) => bucket.losses += 1,
            _ => {}
        }
        bucket.units_won += profit;

        if !is_actual_stake(wager.bet.units) {
            stats.tracked_picks += 1;
            continue;
        }

        stats.actual_bets += 1;
        match outcome {
            Some(Outcome::Win) => stats.wins += 1,
            Some(Outcome::Loss) => stats.losses += 1,
            Some(Outcome::Push) => stats.pushes += 1,
            None => {}
        }
        stats.units_won += profit;
        stats.total_risked += wager.bet.units;

        let sport = stats.sports.entry(wager.sport.clone()).or_default();
        sport.actual_bets += 1;
        match outcome {
            Some(Outcome::Win) => sport.wins += 1,
            Some(Outcome::Loss) => sport.losses += 1,
            _ => {}
        }
        sport.units_won += profit;
        sport.total_risked += wager.bet.units;
    }

    stats.win_rate = percentage(Decimal::from(stats.wins), Decimal::from(stats.wins + stats.losses));
    stats.unit_roi = percentage(stats.units_won, stats.total_risked);
    stats.bankroll_roi = percentage(
        stats.units_won * bankroll.flat_stake_dollars,
        bankroll.starting_bankroll_dollars,
    );

    for sport in stats.sports.values_mut() {
        sport.win_rate = percentage(
            Decimal::from(sport.wins),
            Decimal::from(sport.wins + sport.losses),
        );
        sport.unit_roi = percentage(sport.units_won, sport.total_risked);
    }

    stats.streak = current_streak(&graded);

    stats
}

/// `numerator / denominator * 100`, zero when the denominator is zero.
fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator * dec!(100)
    }
}

/// Run length of identical outcomes starting from the most recently dated
/// graded wager.
fn current_streak(graded: &[&Wager]) -> Streak {
    let mut sorted: Vec<&&Wager> = graded.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = Streak::default();
    for wager in sorted {
        let Some(outcome) = wager.result.as_ref().map(|r| r.outcome) else {
            continue;
        };
        match streak.outcome {
            None => {
                streak.outcome = Some(outcome);
                streak.length = 1;
            }
            Some(current) if current == outcome => streak.length += 1,
            Some(_) => break,
        }
    }
    streak
}
