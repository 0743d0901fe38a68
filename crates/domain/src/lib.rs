extern crate self as kilmere_domain;

pub mod aggregates;
pub mod eligibility;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    DarkArmyMember, Ghost, House, Member, MemberKind, MemberRef, Professor, Pupil, SchoolMember,
};

pub use entities::{catalog, Spell, SpellCategory, SpellKind};

pub use error::DomainError;

pub use events::{
    BefriendOutcome, CastOutcome, CastRejection, ElmClearOutcome, ElmOutcome, LearnOutcome,
    LearnRejection, LearnRoute,
};

pub use ids::{HouseId, MemberId, SpellId};

pub use value_objects::{
    ElmRecord, Grade, HouseName, Pet, Sex, Subject, TraitMap, TraitQuery, HIGHLY_INTELLIGENT,
};
