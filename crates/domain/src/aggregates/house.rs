//! House aggregate - founding year, traits, and references to its head and ghost

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::HouseId;
use crate::value_objects::HouseName;

use super::ghost::Ghost;
use super::member::{Member, MemberRef};
use super::professor::Professor;

/// A house of Castle Kilmere.
///
/// The head and the resident ghost are held as [`MemberRef`]s; the house
/// does not own them.
///
/// # Example
///
/// ```
/// use kilmere_domain::{Ghost, House, HouseName, Professor};
///
/// let house = House::new(
///     HouseName::Gryffindor,
///     vec!["bravery".into(), "courage".into()],
///     991,
///     &Professor::mirren(),
///     &Ghost::mocking(),
/// );
/// assert_eq!(house.age_report(2023), "Gryffindor is 1033 years old");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    id: HouseId,
    name: HouseName,
    traits: Vec<String>,
    year_founded: i32,
    head: MemberRef,
    ghost: MemberRef,
}

impl House {
    pub fn new(
        name: HouseName,
        traits: Vec<String>,
        year_founded: i32,
        head: &Professor,
        ghost: &Ghost,
    ) -> Self {
        Self {
            id: HouseId::new(),
            name,
            traits,
            year_founded,
            head: head.to_ref(),
            ghost: ghost.to_ref(),
        }
    }

    #[inline]
    pub fn id(&self) -> HouseId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> HouseName {
        self.name
    }

    #[inline]
    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    #[inline]
    pub fn year_founded(&self) -> i32 {
        self.year_founded
    }

    #[inline]
    pub fn head(&self) -> &MemberRef {
        &self.head
    }

    #[inline]
    pub fn ghost(&self) -> &MemberRef {
        &self.ghost
    }

    /// Age counting the founding year itself as year one.
    pub fn age(&self, as_of_year: i32) -> i32 {
        as_of_year - self.year_founded + 1
    }

    pub fn age_report(&self, as_of_year: i32) -> String {
        format!("{} is {} years old", self.name, self.age(as_of_year))
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House: {}, Founded: {}, Head: {}, Ghost: {}",
            self.name, self.year_founded, self.head.name, self.ghost.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::MemberKind;

    fn gryffindor() -> House {
        House::new(
            HouseName::Gryffindor,
            vec!["bravery".into(), "gryffindor".into()],
            991,
            &Professor::mirren(),
            &Ghost::mocking(),
        )
    }

    #[test]
    fn age_counts_founding_year() {
        let house = gryffindor();
        assert_eq!(house.age(2023), 1033);
        assert_eq!(house.age(991), 1);
    }

    #[test]
    fn holds_references_not_members() {
        let mirren = Professor::mirren();
        let house = House::new(
            HouseName::Gryffindor,
            Vec::new(),
            991,
            &mirren,
            &Ghost::mocking(),
        );

        assert_eq!(house.head().id, mirren.id());
        assert_eq!(house.head().kind, MemberKind::Professor);
        assert_eq!(house.ghost().kind, MemberKind::Ghost);
    }

    #[test]
    fn age_report_text() {
        assert_eq!(gryffindor().age_report(1993), "Gryffindor is 1003 years old");
    }
}
