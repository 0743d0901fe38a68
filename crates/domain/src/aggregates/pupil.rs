//! Pupil aggregate - house, year, ELMs, known spells and friends
//!
//! # Invariants
//!
//! - ELM flags only move `false -> true`; `clear_elms` is the single reset.
//! - The known-spell set holds each `SpellId` at most once.
//! - Friends are `MemberRef`s: befriending never takes ownership of the friend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::eligibility;
use crate::entities::Spell;
use crate::error::DomainError;
use crate::events::{BefriendOutcome, CastOutcome, ElmClearOutcome, ElmOutcome, LearnOutcome};
use crate::value_objects::{ElmRecord, Grade, HouseName, Pet, Sex, Subject};

use super::member::{Member, MemberKind, MemberRef, SchoolMember};

/// A pupil of Castle Kilmere.
///
/// # Example
///
/// ```
/// use kilmere_domain::{catalog, HouseName, Pupil, Sex};
///
/// let mut pupil = Pupil::new("Ronald Weasley", 1990, Sex::Male, HouseName::Gryffindor, 2018);
/// assert_eq!(pupil.current_year(2023), 6);
///
/// let outcome = pupil.learn_spell(&catalog::lumos(), 2023);
/// assert!(outcome.is_learned());
/// assert_eq!(pupil.known_spells().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pupil {
    member: SchoolMember,
    house: HouseName,
    start_year: i32,
    pet: Option<Pet>,
    elms: ElmRecord,
    known_spells: Vec<Spell>,
    friends: Vec<MemberRef>,
}

impl Pupil {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn new(
        name: impl Into<String>,
        birth_year: i32,
        sex: Sex,
        house: HouseName,
        start_year: i32,
    ) -> Self {
        Self {
            member: SchoolMember::new(name, birth_year, sex),
            house,
            start_year,
            pet: None,
            elms: ElmRecord::new(),
            known_spells: Vec::new(),
            friends: Vec::new(),
        }
    }

    pub fn with_pet(mut self, pet: Pet) -> Self {
        self.pet = Some(pet);
        self
    }

    pub fn ron() -> Self {
        Self::new("Ronald Weasley", 1990, Sex::Male, HouseName::Gryffindor, 2018)
    }

    pub fn hermione() -> Self {
        Self::new("Flynn Gibbs", 1990, Sex::Female, HouseName::Gryffindor, 2018)
            .with_pet(Pet::new("Twiggles", "owl"))
    }

    pub fn cassidy() -> Self {
        Self::new("Cassidy", 1991, Sex::Female, HouseName::Gryffindor, 2018)
            .with_pet(Pet::new("Ramses", "cat"))
    }

    pub fn adrien() -> Self {
        Self::new("Adrien Fulford", 1992, Sex::Male, HouseName::Slytherin, 2018)
            .with_pet(Pet::new("Unnamed", "owl"))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    #[inline]
    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    #[inline]
    pub fn elms(&self) -> &ElmRecord {
        &self.elms
    }

    #[inline]
    pub fn known_spells(&self) -> &[Spell] {
        &self.known_spells
    }

    #[inline]
    pub fn friends(&self) -> &[MemberRef] {
        &self.friends
    }

    /// Academic year as of the given calendar year; the enrollment year is year 1.
    #[inline]
    pub fn current_year(&self, as_of_year: i32) -> i32 {
        (as_of_year - self.start_year) + 1
    }

    /// Whether the spell (by identity) is in the known-spell set.
    pub fn knows(&self, spell: &Spell) -> bool {
        self.known_spells.iter().any(|known| known.id() == spell.id())
    }

    pub fn friends_summary(&self) -> String {
        let names: Vec<&str> = self.friends.iter().map(|f| f.name.as_str()).collect();
        format!(
            "{}'s current friends are: [{}]",
            self.member.name(),
            names.join(", ")
        )
    }

    // =========================================================================
    // Spells
    // =========================================================================

    /// Try to learn a spell as of the given calendar year.
    ///
    /// Eligibility is decided by [`eligibility::learn_eligibility`]; learning
    /// an already-known spell leaves the set unchanged.
    pub fn learn_spell(&mut self, spell: &Spell, as_of_year: i32) -> LearnOutcome {
        let spell_name = spell.name().to_string();
        match eligibility::learn_eligibility(self, spell, as_of_year) {
            Err(reason) => LearnOutcome::Rejected { spell_name, reason },
            Ok(_) if self.knows(spell) => LearnOutcome::AlreadyKnown { spell_name },
            Ok(route) => {
                self.known_spells.push(spell.clone());
                LearnOutcome::Learned { spell_name, route }
            }
        }
    }

    pub fn cast_spell(&self, spell: &Spell) -> CastOutcome {
        let spell_name = spell.name().to_string();
        match eligibility::cast_eligibility(self, spell) {
            Ok(()) => CastOutcome::Cast {
                spell_name,
                incantation: spell.cast(),
            },
            Err(reason) => CastOutcome::Rejected { spell_name, reason },
        }
    }

    // =========================================================================
    // Friends
    // =========================================================================

    /// Add another member to the friend list. Never refused; a non-Slytherin
    /// befriending a Slytherin is flagged with `cautioned`.
    pub fn befriend<M: Member + ?Sized>(&mut self, other: &M) -> BefriendOutcome {
        let friend = MemberRef::of(other);
        let cautioned = eligibility::befriend_warrants_caution(self.house, &friend);
        self.friends.push(friend.clone());
        BefriendOutcome { friend, cautioned }
    }

    // =========================================================================
    // ELMs
    // =========================================================================

    /// Record an exam result. A passing grade sets the subject's flag; a
    /// failing or unrecognised grade leaves it untouched.
    pub fn record_grade(&mut self, subject: Subject, grade: &str) -> ElmOutcome {
        match Grade::from_label(grade).filter(|g| g.is_passing()) {
            Some(grade) => {
                self.elms.mark_passed(subject);
                ElmOutcome::Passed { subject, grade }
            }
            None => ElmOutcome::Failed {
                subject,
                grade: grade.to_string(),
            },
        }
    }

    /// Record an exam result given as a raw `[subject, grade]` pair.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the entry is not exactly two
    /// values or names an unknown subject. Nothing is mutated in that case.
    pub fn set_elms<S: AsRef<str>>(&mut self, entry: &[S]) -> Result<ElmOutcome, DomainError> {
        let [subject, grade] = entry else {
            return Err(DomainError::invalid_argument(format!(
                "Insert the subject and grade as such (Subject, Grade); got {} value(s)",
                entry.len()
            )));
        };
        let subject: Subject = subject
            .as_ref()
            .parse()
            .map_err(|e: DomainError| DomainError::invalid_argument(e.to_string()))?;
        Ok(self.record_grade(subject, grade.as_ref()))
    }

    /// Wipe every ELM, e.g. when a pupil dropped out without passing any exam.
    pub fn clear_elms(&mut self) -> ElmClearOutcome {
        ElmClearOutcome {
            passes_wiped: self.elms.clear(),
        }
    }
}

impl Member for Pupil {
    fn profile(&self) -> &SchoolMember {
        &self.member
    }

    fn profile_mut(&mut self) -> &mut SchoolMember {
        &mut self.member
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Pupil
    }

    fn house(&self) -> Option<HouseName> {
        Some(self.house)
    }
}

impl fmt::Display for Pupil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class: Pupil, Name: {}, Birthyear: {}, House: {}",
            self.member.name(),
            self.member.birth_year(),
            self.house
        )
    }
}
