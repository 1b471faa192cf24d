//! Fixed individual and population attributes.
//!
//! Both enums are closed: the infection table is keyed by `(Sex, Sex)` and
//! the sentence sampler by `Race`, and neither has a fallback entry.

use std::fmt;
use std::str::FromStr;

use crate::CcError;

// ── Sex ───────────────────────────────────────────────────────────────────────

/// Sex of an individual.  Drawn uniformly at construction and never changed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Row/column index into 2×2 tables keyed by sex.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Sex::Male   => 0,
            Sex::Female => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male   => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Race ──────────────────────────────────────────────────────────────────────

/// Race category of the simulated community.  Selects the sentence
/// distribution shared by the whole population.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Race {
    Black,
    White,
}

impl Race {
    pub const ALL: [Race; 2] = [Race::Black, Race::White];

    /// Lowercase label, the only accepted spelling when parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            Race::Black => "black",
            Race::White => "white",
        }
    }
}

impl FromStr for Race {
    type Err = CcError;

    /// Parse `"black"` or `"white"`.  Anything else is a configuration error;
    /// there is no default category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Race::Black),
            "white" => Ok(Race::White),
            other   => Err(CcError::UnsupportedRace(other.to_owned())),
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
