//! Domain events
//!
//! Mutations on the aggregates return these enums instead of printing, so
//! callers branch on what happened and the engine decides how to report it.

mod pupil_events;

pub use pupil_events::{
    BefriendOutcome, CastOutcome, CastRejection, ElmClearOutcome, ElmOutcome, LearnOutcome,
    LearnRejection, LearnRoute,
};
