//! American odds and payout math.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signed American odds.
///
/// Positive values state payout per 100 staked on an underdog; negative
/// values state the stake required per 100 won on a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmericanOdds(pub i32);

impl AmericanOdds {
    #[must_use]
    pub fn new(odds: i32) -> Self {
        Self(odds)
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Profit in units for a winning wager of `units` at these odds.
    ///
    /// `+150` at 1u pays 1.5u; `-150` at 1u pays 100/150 ≈ 0.6667u. The
    /// division is exact Decimal arithmetic, never floating point: these
    /// numbers back the public track record.
    #[must_use]
    pub fn win_profit(&self, units: Decimal) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        if self.0 < 0 {
            units * (hundred / Decimal::from(self.0.unsigned_abs()))
        } else {
            units * (Decimal::from(self.0) / hundred)
        }
    }

    /// Classify odds into the band used by the unit sizing matrix.
    #[must_use]
    pub fn category(&self) -> OddsCategory {
        match self.0 {
            o if o < -1000 => OddsCategory::ExtremeFav,
            o if o < -500 => OddsCategory::BigFav,
            o if o < -200 => OddsCategory::ModFav,
            o if o < -150 => OddsCategory::SlightFav,
            o if o < 150 => OddsCategory::Pickem,
            _ => OddsCategory::Dog,
        }
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Odds band for the grade × odds sizing matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OddsCategory {
    ExtremeFav,
    BigFav,
    ModFav,
    SlightFav,
    Pickem,
    Dog,
}

impl OddsCategory {
    pub const ALL: [OddsCategory; 6] = [
        OddsCategory::ExtremeFav,
        OddsCategory::BigFav,
        OddsCategory::ModFav,
        OddsCategory::SlightFav,
        OddsCategory::Pickem,
        OddsCategory::Dog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OddsCategory::ExtremeFav => "EXTREME_FAV",
            OddsCategory::BigFav => "BIG_FAV",
            OddsCategory::ModFav => "MOD_FAV",
            OddsCategory::SlightFav => "SLIGHT_FAV",
            OddsCategory::Pickem => "PICKEM",
            OddsCategory::Dog => "DOG",
        }
    }
}

impl fmt::Display for OddsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn underdog_win_profit() {
        let profit = AmericanOdds::new(150).win_profit(dec!(1));
        assert_eq!(profit, dec!(1.5));
    }

    #[test]
    fn favorite_win_profit() {
        let profit = AmericanOdds::new(-150).win_profit(dec!(1));
        assert!((profit - dec!(0.6667)).abs() < dec!(0.0001));
    }

    #[test]
    fn favorite_win_profit_scales_with_units() {
        let profit = AmericanOdds::new(-120).win_profit(dec!(2));
        assert!((profit - dec!(1.6667)).abs() < dec!(0.0001));
    }

    #[test]
    fn category_band_boundaries() {
        assert_eq!(AmericanOdds::new(-1001).category(), OddsCategory::ExtremeFav);
        assert_eq!(AmericanOdds::new(-1000).category(), OddsCategory::BigFav);
        assert_eq!(AmericanOdds::new(-501).category(), OddsCategory::BigFav);
        assert_eq!(AmericanOdds::new(-500).category(), OddsCategory::ModFav);
        assert_eq!(AmericanOdds::new(-201).category(), OddsCategory::ModFav);
        assert_eq!(AmericanOdds::new(-200).category(), OddsCategory::SlightFav);
        assert_eq!(AmericanOdds::new(-151).category(), OddsCategory::SlightFav);
        assert_eq!(AmericanOdds::new(-150).category(), OddsCategory::Pickem);
        assert_eq!(AmericanOdds::new(149).category(), OddsCategory::Pickem);
        assert_eq!(AmericanOdds::new(150).category(), OddsCategory::Dog);
    }

    #[test]
    fn display_signs() {
        assert_eq!(AmericanOdds::new(150).to_string(), "+150");
        assert_eq!(AmericanOdds::new(-110).to_string(), "-110");
    }
}
