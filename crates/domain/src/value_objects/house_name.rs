//! The four houses of Castle Kilmere

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// House affiliation of a member.
///
/// Eligibility rules compare houses by variant, so a misspelled house can
/// never slip past the Slytherin checks the way a free-form string would.
///
/// # Examples
///
/// ```
/// use kilmere_domain::HouseName;
///
/// let house: HouseName = "slytherin".parse().unwrap();
/// assert!(house.is_slytherin());
/// assert_eq!(house.to_string(), "Slytherin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseName {
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl HouseName {
    pub fn all() -> &'static [HouseName] {
        &[
            HouseName::Gryffindor,
            HouseName::Hufflepuff,
            HouseName::Ravenclaw,
            HouseName::Slytherin,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HouseName::Gryffindor => "Gryffindor",
            HouseName::Hufflepuff => "Hufflepuff",
            HouseName::Ravenclaw => "Ravenclaw",
            HouseName::Slytherin => "Slytherin",
        }
    }

    #[inline]
    pub fn is_slytherin(self) -> bool {
        matches!(self, HouseName::Slytherin)
    }
}

impl fmt::Display for HouseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HouseName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gryffindor" => Ok(HouseName::Gryffindor),
            "hufflepuff" => Ok(HouseName::Hufflepuff),
            "ravenclaw" => Ok(HouseName::Ravenclaw),
            "slytherin" => Ok(HouseName::Slytherin),
            _ => Err(DomainError::parse(format!("Unknown house: {}", s))),
        }
    }
}
