//! Use cases - school operations.
//!
//! Each one reads the as-of year from the clock when it needs one, calls into
//! the domain, announces the outcome and logs it. The domain decides; use
//! cases only report.

pub mod elms;
pub mod error;
pub mod houses;
pub mod members;
pub mod spells;

pub use elms::{ClearElms, ElmUseCases, RecordElm};
pub use error::SchoolError;
pub use houses::{HouseAge, HouseUseCases};
pub use members::{Befriend, DescribeMember, InspectTrait, MemberUseCases};
pub use spells::{CastSpell, DefineSpell, DefineSpellInput, LearnSpell, SpellUseCases};
