//! Handler for the `grade` command.

use crate::cli::{open_store, GradeArgs};
use crate::config::Config;
use crate::domain::{FinalScore, GameStatus};
use crate::error::Result;
use crate::settle::BetGrader;

pub async fn execute(config: &Config, args: &GradeArgs) -> Result<()> {
    let store = open_store(config)?;
    let grader = BetGrader::new(&store);

    let score = FinalScore {
        status: GameStatus::Final,
        away_score: Some(args.away_score),
        home_score: Some(args.home_score),
        source: args.source.clone(),
    };

    let graded = grader
        .grade(args.date, &args.away, &args.home, &score)
        .await?;

    if graded {
        println!(
            "Graded {} @ {} ({}-{})",
            args.away, args.home, args.away_score, args.home_score
        );
    } else {
        println!("Nothing to grade for {} @ {}", args.away, args.home);
    }

    Ok(())
}
