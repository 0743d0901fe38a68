//! ELMs - the fixed set of subjects a pupil has to pass, and the grading scale

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A subject that counts towards a pupil's ELMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    BroomstickFlying,
    Art,
    MagicalTheory,
    ForeignMagicalSystems,
    Charms,
    DefenceAgainstDarkMagic,
    Divination,
    Herbology,
    HistoryOfMagic,
    Potions,
    Transfiguration,
}

impl Subject {
    pub const COUNT: usize = 11;

    pub fn all() -> &'static [Subject; Subject::COUNT] {
        &[
            Subject::BroomstickFlying,
            Subject::Art,
            Subject::MagicalTheory,
            Subject::ForeignMagicalSystems,
            Subject::Charms,
            Subject::DefenceAgainstDarkMagic,
            Subject::Divination,
            Subject::Herbology,
            Subject::HistoryOfMagic,
            Subject::Potions,
            Subject::Transfiguration,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::BroomstickFlying => "Broomstick Flying",
            Subject::Art => "Art",
            Subject::MagicalTheory => "Magical Theory",
            Subject::ForeignMagicalSystems => "Foreign Magical Systems",
            Subject::Charms => "Charms",
            Subject::DefenceAgainstDarkMagic => "Defence Against Dark Magic",
            Subject::Divination => "Divination",
            Subject::Herbology => "Herbology",
            Subject::HistoryOfMagic => "History of Magic",
            Subject::Potions => "Potions",
            Subject::Transfiguration => "Transfiguration",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Matches the display name, ignoring case and surrounding whitespace.
impl FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Subject::all()
            .iter()
            .copied()
            .find(|subject| subject.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown subject: {}", s)))
    }
}

/// Exam grade. Exceptional, Good and Acceptable pass; Poor and Horrible fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Exceptional,
    Good,
    Acceptable,
    Poor,
    Horrible,
}

impl Grade {
    /// Look up a grade by its full name or single-letter code (exact case).
    pub fn from_label(label: &str) -> Option<Grade> {
        match label {
            "E" | "Exceptional" => Some(Grade::Exceptional),
            "G" | "Good" => Some(Grade::Good),
            "A" | "Acceptable" => Some(Grade::Acceptable),
            "P" | "Poor" => Some(Grade::Poor),
            "H" | "Horrible" => Some(Grade::Horrible),
            _ => None,
        }
    }

    #[inline]
    pub fn is_passing(self) -> bool {
        matches!(self, Grade::Exceptional | Grade::Good | Grade::Acceptable)
    }

    /// Whether a raw grade label passes. Unrecognised labels fail.
    pub fn label_passes(label: &str) -> bool {
        Grade::from_label(label).is_some_and(Grade::is_passing)
    }
}

/// Per-subject completion flags, all seeded `false`.
///
/// Flags only move from `false` to `true`; the single way back is
/// [`ElmRecord::clear`], which resets every subject at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElmRecord {
    passed: [bool; Subject::COUNT],
}

impl ElmRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_passed(&self, subject: Subject) -> bool {
        self.passed[subject.index()]
    }

    /// Mark a subject passed. Returns `true` if the flag changed.
    pub fn mark_passed(&mut self, subject: Subject) -> bool {
        let slot = &mut self.passed[subject.index()];
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Reset every subject. Returns how many passes were wiped.
    pub fn clear(&mut self) -> usize {
        let wiped = self.passed_count();
        self.passed = [false; Subject::COUNT];
        wiped
    }

    pub fn passed_count(&self) -> usize {
        self.passed.iter().filter(|passed| **passed).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, bool)> + '_ {
        Subject::all()
            .iter()
            .map(move |subject| (*subject, self.is_passed(*subject)))
    }
}
