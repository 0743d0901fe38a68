//! Spell-eligibility rules
//!
//! Pure functions: they read a pupil and a spell and return a decision.
//! Applying the decision (adding to the known-spell set) is the aggregate's
//! job, reporting it is the engine's.
//!
//! # Learning, in precedence order
//!
//! ```text
//! Hex / Curse          -> Slytherin only (the spell's min year is not consulted)
//! has a min year       -> current year >= min year
//!                         else "Highly Intelligent" == true
//!                         else too young
//! anything else        -> open to everyone
//! ```
//!
//! # Casting
//!
//! ```text
//! Hex / Curse          -> Slytherin only, learned or not
//! known (by SpellId)   -> cast
//! otherwise            -> must study first
//! ```

use crate::aggregates::{Member, MemberKind, MemberRef, Pupil};
use crate::entities::Spell;
use crate::events::{CastRejection, LearnRejection, LearnRoute};
use crate::value_objects::{HouseName, HIGHLY_INTELLIGENT};

/// Decide whether `pupil` may learn `spell` as of the given calendar year.
pub fn learn_eligibility(
    pupil: &Pupil,
    spell: &Spell,
    as_of_year: i32,
) -> Result<LearnRoute, LearnRejection> {
    if spell.is_dark() {
        return if pupil_is_slytherin(pupil) {
            Ok(LearnRoute::HouseSanctioned)
        } else {
            Err(LearnRejection::DarkMagicForbidden)
        };
    }

    let Some(min_year) = spell.min_year() else {
        return Ok(LearnRoute::OpenCurriculum);
    };

    let current_year = pupil.current_year(as_of_year);
    if current_year >= min_year {
        Ok(LearnRoute::YearRequirementMet)
    } else if pupil.exhibits_trait(HIGHLY_INTELLIGENT).is_exhibited() {
        Ok(LearnRoute::HighlyIntelligent)
    } else {
        Err(LearnRejection::TooYoung {
            current_year,
            min_year,
        })
    }
}

/// Decide whether `pupil` may cast `spell`.
pub fn cast_eligibility(pupil: &Pupil, spell: &Spell) -> Result<(), CastRejection> {
    if spell.is_dark() {
        return if pupil_is_slytherin(pupil) {
            Ok(())
        } else {
            Err(CastRejection::DarkMagicForbidden)
        };
    }

    if pupil.knows(spell) {
        Ok(())
    } else {
        Err(CastRejection::NotStudied)
    }
}

/// A non-Slytherin befriending a specialised member who is a Slytherin.
///
/// Plain school members carry no house and never trigger the caution.
pub fn befriend_warrants_caution(initiator_house: HouseName, other: &MemberRef) -> bool {
    other.kind != MemberKind::Member
        && !initiator_house.is_slytherin()
        && other.house.is_some_and(HouseName::is_slytherin)
}

fn pupil_is_slytherin(pupil: &Pupil) -> bool {
    pupil.house().is_some_and(HouseName::is_slytherin)
}
