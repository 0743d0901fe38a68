//! Pupil-related domain events

use serde::{Deserialize, Serialize};

use crate::aggregates::MemberRef;
use crate::value_objects::{Grade, Subject};

/// Which rule let a pupil learn a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LearnRoute {
    /// The pupil's year meets the spell's minimum year
    YearRequirementMet,
    /// Too young, but "Highly Intelligent"
    HighlyIntelligent,
    /// A hex or curse, learned by a Slytherin
    HouseSanctioned,
    /// No year gate and not dark magic
    OpenCurriculum,
}

/// Why a pupil may not learn a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LearnRejection {
    /// Below the spell's minimum year
    TooYoung { current_year: i32, min_year: i32 },
    /// Hexes and curses are for Slytherins only
    DarkMagicForbidden,
}

/// Outcome of a pupil trying to learn a spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnOutcome {
    /// Spell added to the known-spell set
    Learned { spell_name: String, route: LearnRoute },
    /// Eligible, but the spell was already known; the set is unchanged
    AlreadyKnown { spell_name: String },
    /// Not eligible; nothing changed
    Rejected {
        spell_name: String,
        reason: LearnRejection,
    },
}

impl LearnOutcome {
    pub fn is_learned(&self) -> bool {
        matches!(self, LearnOutcome::Learned { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, LearnOutcome::Rejected { .. })
    }
}

/// Why a pupil may not cast a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CastRejection {
    DarkMagicForbidden,
    /// Not in the known-spell set
    NotStudied,
}

/// Outcome of a pupil trying to cast a spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastOutcome {
    Cast {
        spell_name: String,
        incantation: String,
    },
    Rejected {
        spell_name: String,
        reason: CastRejection,
    },
}

impl CastOutcome {
    pub fn is_cast(&self) -> bool {
        matches!(self, CastOutcome::Cast { .. })
    }
}

/// Outcome of befriending another member. Befriending is never blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BefriendOutcome {
    pub friend: MemberRef,
    /// A non-Slytherin befriended a Slytherin
    pub cautioned: bool,
}

/// Outcome of recording an exam grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElmOutcome {
    /// Subject flag is now `true`
    Passed { subject: Subject, grade: Grade },
    /// Failing or unrecognised grade; the flag was not touched
    Failed { subject: Subject, grade: String },
}

impl ElmOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, ElmOutcome::Passed { .. })
    }
}

/// Outcome of wiping a pupil's ELMs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElmClearOutcome {
    pub passes_wiped: usize,
}
