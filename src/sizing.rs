//! Unit sizing table: (grade, odds category) → stake in units.
//!
//! The matrix is a versioned artifact produced by offline optimization over
//! the historical ledger; this module only consumes it. Sizing happens once,
//! at wager creation; grading reads the stored stake and never looks here
//! again, so re-tuning the table can never rewrite historical ROI.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{AmericanOdds, Grade, OddsCategory};

/// Stake used for picks the model wants tracked for accuracy but does not
/// consider an actual bet. Stakes at or below this are excluded from all
/// stake-weighted metrics.
pub const TRACKED_ONLY_STAKE: Decimal = dec!(0.1);

/// Fallback stake when the upstream grade string is unrecognized. Wager
/// creation must never be blocked by a lookup miss.
pub const DEFAULT_UNITS: Decimal = dec!(1);

/// True when a stake counts toward win-rate and ROI.
#[must_use]
pub fn is_actual_stake(units: Decimal) -> bool {
    units > TRACKED_ONLY_STAKE
}

/// Row order follows [`Grade::ALL`]; column order follows
/// [`OddsCategory::ALL`]. Values are carried verbatim from the optimizer
/// output, float artifacts included, so stored stakes match the published
/// allocation exactly.
#[rustfmt::skip]
const RECOMMENDED_MATRIX: [[Decimal; 6]; 11] = [
    // EXTREME_FAV  BIG_FAV   MOD_FAV    SLIGHT_FAV                  PICKEM                       DOG
    [dec!(0.1),     dec!(5),  dec!(0.1), dec!(2.224000000000001),    dec!(1.684911550468262),     dec!(0.45651650204769906)], // A+
    [dec!(1),       dec!(1),  dec!(5),   dec!(1),                    dec!(1.066666666666665),     dec!(1)],                   // A
    [dec!(1),       dec!(1),  dec!(1),   dec!(1),                    dec!(1),                     dec!(1)],                   // A-
    [dec!(1),       dec!(1),  dec!(5),   dec!(1),                    dec!(1),                     dec!(1)],                   // B+
    [dec!(1),       dec!(1),  dec!(0.1), dec!(1),                    dec!(1),                     dec!(1)],                   // B
    [dec!(1),       dec!(1),  dec!(1),   dec!(1),                    dec!(1),                     dec!(1)],                   // B-
    [dec!(1),       dec!(1),  dec!(1),   dec!(1),                    dec!(1),                     dec!(1)],                   // C+
    [dec!(1),       dec!(1),  dec!(1),   dec!(1),                    dec!(0.1),                   dec!(1)],                   // C
    [dec!(1),       dec!(1),  dec!(1),   dec!(1),                    dec!(1),                     dec!(1)],                   // C-
    [dec!(1),       dec!(1),  dec!(1),   dec!(1.4062499999999996),   dec!(1),                     dec!(1)],                   // D
    [dec!(5),       dec!(5),  dec!(0.1), dec!(0.1),                  dec!(0.1),                   dec!(1)],                   // F
];

/// Pure lookup table over the fixed 11 × 6 grade/odds matrix.
#[derive(Debug, Clone)]
pub struct UnitSizingTable {
    version: &'static str,
    matrix: &'static [[Decimal; 6]; 11],
}

impl UnitSizingTable {
    /// The shipped allocation ("inverted current" strategy from the
    /// historical optimization run).
    #[must_use]
    pub fn recommended() -> Self {
        Self {
            version: "inverted-current-v1",
            matrix: &RECOMMENDED_MATRIX,
        }
    }

    #[must_use]
    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Stake in units for a grade/odds-category pair. Total over both enums;
    /// no error path.
    #[must_use]
    pub fn units_for(&self, grade: Grade, category: OddsCategory) -> Decimal {
        self.matrix[grade_index(grade)][category_index(category)]
    }

    /// Stake for a raw upstream grade string at the given odds. Unknown
    /// grades resolve to [`DEFAULT_UNITS`] so wager creation never fails on
    /// a lookup miss.
    #[must_use]
    pub fn units_for_raw(&self, grade: &str, odds: AmericanOdds) -> Decimal {
        match Grade::parse(grade) {
            Some(g) => self.units_for(g, odds.category()),
            None => DEFAULT_UNITS,
        }
    }
}

impl Default for UnitSizingTable {
    fn default() -> Self {
        Self::recommended()
    }
}

fn grade_index(grade: Grade) -> usize {
    match grade {
        Grade::APlus => 0,
        Grade::A => 1,
        Grade::AMinus => 2,
        Grade::BPlus => 3,
        Grade::B => 4,
        Grade::BMinus => 5,
        Grade::CPlus => 6,
        Grade::C => 7,
        Grade::CMinus => 8,
        Grade::D => 9,
        Grade::F => 10,
    }
}

fn category_index(category: OddsCategory) -> usize {
    match category {
        OddsCategory::ExtremeFav => 0,
        OddsCategory::BigFav => 1,
        OddsCategory::ModFav => 2,
        OddsCategory::SlightFav => 3,
        OddsCategory::Pickem => 4,
        OddsCategory::Dog => 5,
    }
}
