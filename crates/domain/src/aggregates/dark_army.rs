use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Sex;

use super::member::SchoolMember;

/// A follower of Lord Odon. Not a member of the school, just a name and a
/// birth year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkArmyMember {
    pub name: String,
    pub birth_year: i32,
}

impl DarkArmyMember {
    pub fn new(name: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            birth_year,
        }
    }

    /// Every dark army member answers to the same leader.
    pub fn leader(&self) -> SchoolMember {
        SchoolMember::new("Lord Odon", 1939, Sex::Male)
    }
}

impl fmt::Display for DarkArmyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} and birthyear is {}", self.name, self.birth_year)
    }
}
