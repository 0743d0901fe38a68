//! Ghost aggregate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{HouseName, Sex};

use super::member::{Member, MemberKind, SchoolMember};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ghost {
    member: SchoolMember,
    year_of_death: i32,
    house: Option<HouseName>,
}

impl Ghost {
    pub fn new(name: impl Into<String>, birth_year: i32, sex: Sex, year_of_death: i32) -> Self {
        Self {
            member: SchoolMember::new(name, birth_year, sex),
            year_of_death,
            house: None,
        }
    }

    pub fn with_house(mut self, house: HouseName) -> Self {
        self.house = Some(house);
        self
    }

    pub fn mocking() -> Self {
        Self::new("Mocking Jay", 1956, Sex::Male, 1997).with_house(HouseName::Gryffindor)
    }

    #[inline]
    pub fn year_of_death(&self) -> i32 {
        self.year_of_death
    }

    pub fn age_at_death(&self) -> i32 {
        self.member.age(self.year_of_death)
    }

    pub fn years_since_death(&self, as_of_year: i32) -> i32 {
        as_of_year - self.year_of_death
    }
}

impl Member for Ghost {
    fn profile(&self) -> &SchoolMember {
        &self.member
    }

    fn profile_mut(&mut self) -> &mut SchoolMember {
        &mut self.member
    }

    fn kind(&self) -> MemberKind {
        MemberKind::Ghost
    }

    fn house(&self) -> Option<HouseName> {
        self.house
    }
}

impl fmt::Display for Ghost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ghost, Name: {}, Birthyear: {}, Year of Death: {}",
            self.member.name(),
            self.member.birth_year(),
            self.year_of_death
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn death_arithmetic() {
        let ghost = Ghost::mocking();
        assert_eq!(ghost.age_at_death(), 41);
        assert_eq!(ghost.years_since_death(2023), 26);
        assert_eq!(ghost.house(), Some(HouseName::Gryffindor));
    }

    #[test]
    fn display() {
        assert_eq!(
            Ghost::mocking().to_string(),
            "Ghost, Name: Mocking Jay, Birthyear: 1956, Year of Death: 1997"
        );
    }
}
