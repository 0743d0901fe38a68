//! Aggregate roots - the members of the school and the houses they belong to
//!
//! Members are built by composition: every specialised record owns a
//! [`SchoolMember`] and exposes it through the [`Member`] capability trait.
//!
//! | Concern | Where it lives |
//! |---------|----------------|
//! | Inherited attributes | `Member::profile()` |
//! | Back-references to friends, heads, ghosts | `MemberRef` snapshots (ids, not pointers) |
//! | Printed reports | Outcome enums from `crate::events` |

mod dark_army;
mod ghost;
mod house;
mod member;
mod professor;
mod pupil;

pub use dark_army::DarkArmyMember;
pub use ghost::Ghost;
pub use house::House;
pub use member::{Member, MemberKind, MemberRef, SchoolMember};
pub use professor::Professor;
pub use pupil::Pupil;
