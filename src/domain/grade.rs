//! Letter-grade quality tiers assigned by the prediction model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prediction quality tier, `A+` (best) through `F`.
///
/// Grades drive stake sizing at wager creation; the settlement path treats
/// them as opaque after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl Grade {
    /// All tiers, best first.
    pub const ALL: [Grade; 11] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::D,
        Grade::F,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Parse an upstream grade string, tolerating casing and whitespace.
    ///
    /// Returns `None` for unrecognized grades; sizing falls back to its
    /// documented default rather than failing wager creation.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Grade> {
        match raw.trim().to_uppercase().as_str() {
            "A+" => Some(Grade::APlus),
            "A" => Some(Grade::A),
            "A-" => Some(Grade::AMinus),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "B-" => Some(Grade::BMinus),
            "C+" => Some(Grade::CPlus),
            "C" => Some(Grade::C),
            "C-" => Some(Grade::CMinus),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::parse(s).ok_or_else(|| format!("unknown grade '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tolerates_case_and_whitespace() {
        assert_eq!(Grade::parse(" a+ "), Some(Grade::APlus));
        assert_eq!(Grade::parse("b-"), Some(Grade::BMinus));
        assert_eq!(Grade::parse("F"), Some(Grade::F));
    }

    #[test]
    fn unknown_grade_is_none() {
        assert_eq!(Grade::parse("S"), None);
        assert_eq!(Grade::parse(""), None);
    }

    #[test]
    fn display_round_trips() {
        for grade in Grade::ALL {
            assert_eq!(Grade::parse(grade.as_str()), Some(grade));
        }
    }
}
