//! School member - the identity, age and traits every member of the school shares
//!
//! # Design
//!
//! - **Composition over inheritance**: `Pupil`, `Professor` and `Ghost` each
//!   own a `SchoolMember` and implement [`Member`] to expose it.
//! - **Explicit as-of year**: ages are computed against a year handed in by
//!   the caller, never against the wall clock.
//! - **Tri-state traits**: `exhibits_trait` answers `Present(bool)` or
//!   `Unknown`; `require_trait` turns `Unknown` into an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::MemberId;
use crate::value_objects::{HouseName, Sex, TraitMap, TraitQuery};

/// The specialisation of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    /// A plain member with no specialisation (e.g. the headmaster)
    Member,
    Pupil,
    Professor,
    Ghost,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Member => "SchoolMember",
            MemberKind::Pupil => "Pupil",
            MemberKind::Professor => "Professor",
            MemberKind::Ghost => "Ghost",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-owning reference to a member.
///
/// Holds a snapshot of what relationships need to know about the other
/// side (who they are, what they are, which house) so that nobody owns a
/// friend's or a head's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub id: MemberId,
    pub name: String,
    pub kind: MemberKind,
    pub house: Option<HouseName>,
}

impl MemberRef {
    pub fn of<M: Member + ?Sized>(member: &M) -> Self {
        Self {
            id: member.id(),
            name: member.name().to_string(),
            kind: member.kind(),
            house: member.house(),
        }
    }
}

/// Capability shared by every kind of school member.
///
/// Implementors only provide `profile`, `profile_mut` and `kind`; everything
/// else is derived from the embedded [`SchoolMember`].
pub trait Member {
    fn profile(&self) -> &SchoolMember;

    fn profile_mut(&mut self) -> &mut SchoolMember;

    fn kind(&self) -> MemberKind;

    /// House affiliation, if the member has one.
    fn house(&self) -> Option<HouseName> {
        None
    }

    fn id(&self) -> MemberId {
        self.profile().id()
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn age(&self, as_of_year: i32) -> i32 {
        self.profile().age(as_of_year)
    }

    fn add_trait(&mut self, name: &str, value: bool) {
        self.profile_mut().add_trait(name, value);
    }

    fn exhibits_trait(&self, name: &str) -> TraitQuery {
        self.profile().exhibits_trait(name)
    }

    fn to_ref(&self) -> MemberRef {
        MemberRef::of(self)
    }
}

/// A member of Castle Kilmere.
///
/// # Example
///
/// ```
/// use kilmere_domain::{SchoolMember, Sex, TraitQuery};
///
/// let mut member = SchoolMember::new("Albus Dumbledore", 1881, Sex::Male);
/// member.add_trait("wise", true);
///
/// assert_eq!(member.age(1993), 112);
/// assert_eq!(member.exhibits_trait("wise"), TraitQuery::Present(true));
/// assert_eq!(member.exhibits_trait("tidy"), TraitQuery::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolMember {
    id: MemberId,
    name: String,
    birth_year: i32,
    sex: Sex,
    traits: TraitMap,
}

impl SchoolMember {
    pub fn new(name: impl Into<String>, birth_year: i32, sex: Sex) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            birth_year,
            sex,
            traits: TraitMap::new(),
        }
    }

    /// The headmaster of the school.
    pub fn school_headmaster() -> Self {
        Self::new("Albus Dumbledore", 1881, Sex::Male)
    }

    pub fn with_id(mut self, id: MemberId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> MemberId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    #[inline]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    #[inline]
    pub fn traits(&self) -> &TraitMap {
        &self.traits
    }

    /// Age in whole years as of the given calendar year.
    #[inline]
    pub fn age(&self, as_of_year: i32) -> i32 {
        as_of_year - self.birth_year
    }

    // =========================================================================
    // Traits
    // =========================================================================

    pub fn add_trait(&mut self, name: impl Into<String>, value: bool) {
        self.traits.insert(name, value);
    }

    /// Record a trait the member has.
    pub fn add_positive_trait(&mut self, name: impl Into<String>) {
        self.add_trait(name, true);
    }

    pub fn exhibits_trait(&self, name: &str) -> TraitQuery {
        self.traits.query(name)
    }

    /// Like [`exhibits_trait`](Self::exhibits_trait) but treats a never-set
    /// trait as an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTrait` if the trait was never recorded.
    pub fn require_trait(&self, name: &str) -> Result<bool, DomainError> {
        match self.exhibits_trait(name) {
            TraitQuery::Present(value) => Ok(value),
            TraitQuery::Unknown => Err(DomainError::unknown_trait(&self.name, name)),
        }
    }

    pub fn positive_traits(&self) -> Vec<&str> {
        self.traits.positive().collect()
    }

    pub fn negative_traits(&self) -> Vec<&str> {
        self.traits.negative().collect()
    }

    /// One-line report of the positive and negative traits.
    pub fn traits_summary(&self) -> String {
        format!(
            "{}'s positive traits are: {} and the negative traits are: {}",
            self.name,
            self.positive_traits().join(", "),
            self.negative_traits().join(", ")
        )
    }

    pub fn says(&self, words: &str) -> String {
        format!("{} says {}", self.name, words)
    }
}

impl Member for SchoolMember {
    fn profile(&self) -> &SchoolMember {
        self
    }

    fn profile_mut(&mut self) -> &mut SchoolMember {
        self
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Member
    }
}

impl fmt::Display for SchoolMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class: SchoolMember, Name: {}, Birthyear: {}",
            self.name, self.birth_year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_derived_from_the_as_of_year() {
        let member = SchoolMember::new("Miranda", 1963, Sex::Female);
        assert_eq!(member.age(2023), 60);
        assert_eq!(member.age(1993), 30);
    }

    #[test]
    fn headmaster_factory() {
        let headmaster = SchoolMember::school_headmaster();
        assert_eq!(headmaster.name(), "Albus Dumbledore");
        assert_eq!(headmaster.birth_year(), 1881);
        assert_eq!(headmaster.sex(), Sex::Male);
        assert_eq!(headmaster.kind(), MemberKind::Member);
    }

    #[test]
    fn add_trait_defaults_and_overwrites() {
        let mut member = SchoolMember::new("Cassidy", 1991, Sex::Female);
        member.add_positive_trait("brave");
        member.add_trait("tidy", false);

        assert_eq!(member.exhibits_trait("brave"), TraitQuery::Present(true));
        assert_eq!(member.exhibits_trait("tidy"), TraitQuery::Present(false));

        member.add_trait("brave", false);
        assert_eq!(member.exhibits_trait("brave"), TraitQuery::Present(false));
    }

    #[test]
    fn require_trait_errors_on_unknown() {
        let mut member = SchoolMember::new("Cassidy", 1991, Sex::Female);
        member.add_trait("tidy", false);

        assert_eq!(member.require_trait("tidy"), Ok(false));
        assert!(matches!(
            member.require_trait("brave"),
            Err(DomainError::UnknownTrait { .. })
        ));
    }

    #[test]
    fn traits_summary_lists_both_sides() {
        let mut member = SchoolMember::new("Cassidy", 1991, Sex::Female);
        member.add_positive_trait("kind");
        member.add_positive_trait("brave");
        member.add_trait("punctual", false);

        assert_eq!(
            member.traits_summary(),
            "Cassidy's positive traits are: kind, brave and the negative traits are: punctual"
        );
    }

    #[test]
    fn says_prefixes_the_name() {
        let member = SchoolMember::school_headmaster();
        assert_eq!(member.says("Welcome!"), "Albus Dumbledore says Welcome!");
    }

    #[test]
    fn member_ref_snapshots_identity() {
        let member = SchoolMember::school_headmaster();
        let reference = member.to_ref();

        assert_eq!(reference.id, member.id());
        assert_eq!(reference.name, "Albus Dumbledore");
        assert_eq!(reference.kind, MemberKind::Member);
        assert_eq!(reference.house, None);
    }
}
