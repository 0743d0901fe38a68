//! Professor aggregate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{HouseName, Sex};

use super::member::{Member, MemberKind, SchoolMember};

/// A professor: the subject they teach and, optionally, the house they head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    member: SchoolMember,
    subject: String,
    house: Option<HouseName>,
}

impl Professor {
    pub fn new(
        name: impl Into<String>,
        birth_year: i32,
        sex: Sex,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            member: SchoolMember::new(name, birth_year, sex),
            subject: subject.into(),
            house: None,
        }
    }

    pub fn with_house(mut self, house: HouseName) -> Self {
        self.house = Some(house);
        self
    }

    pub fn mirren() -> Self {
        Self::new("Miranda Mirren", 1963, Sex::Female, "Transfiguration")
            .with_house(HouseName::Gryffindor)
    }

    pub fn blade() -> Self {
        Self::new("Blade Bardock", 1988, Sex::Male, "Potions").with_house(HouseName::Slytherin)
    }

    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Member for Professor {
    fn profile(&self) -> &SchoolMember {
        &self.member
    }

    fn profile_mut(&mut self) -> &mut SchoolMember {
        &mut self.member
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Professor
    }

    fn house(&self) -> Option<HouseName> {
        self.house
    }
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Class: Professor, Name: {}, Birthyear: {}, Subject: {}",
            self.member.name(),
            self.member.birth_year(),
            self.subject
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories() {
        let mirren = Professor::mirren();
        assert_eq!(mirren.subject(), "Transfiguration");
        assert_eq!(mirren.house(), Some(HouseName::Gryffindor));
        assert_eq!(mirren.kind(), MemberKind::Professor);

        assert_eq!(Professor::blade().house(), Some(HouseName::Slytherin));
    }

    #[test]
    fn house_is_optional() {
        let professor = Professor::new("Visiting Lecturer", 1970, Sex::Unspecified, "Art");
        assert_eq!(professor.house(), None);
    }

    #[test]
    fn display_includes_subject() {
        assert_eq!(
            Professor::mirren().to_string(),
            "Class: Professor, Name: Miranda Mirren, Birthyear: 1963, Subject: Transfiguration"
        );
    }
}
