//! Member use cases - friendships and character traits.

use std::sync::Arc;

use kilmere_domain::{BefriendOutcome, Member, Pupil, SchoolMember, TraitQuery};

use crate::infrastructure::ports::AnnouncerPort;

/// Container for member use cases.
pub struct MemberUseCases {
    pub befriend: Arc<Befriend>,
    pub inspect_trait: Arc<InspectTrait>,
    pub describe: Arc<DescribeMember>,
}

impl MemberUseCases {
    pub fn new(
        befriend: Arc<Befriend>,
        inspect_trait: Arc<InspectTrait>,
        describe: Arc<DescribeMember>,
    ) -> Self {
        Self {
            befriend,
            inspect_trait,
            describe,
        }
    }
}

/// A pupil befriends another member. Never refused, sometimes cautioned.
pub struct Befriend {
    announcer: Arc<dyn AnnouncerPort>,
}

impl Befriend {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    pub fn execute<M: Member + ?Sized>(&self, pupil: &mut Pupil, other: &M) -> BefriendOutcome {
        let outcome = pupil.befriend(other);

        if outcome.cautioned {
            tracing::warn!(
                pupil = %pupil.name(),
                friend = %outcome.friend.name,
                "Befriending a Slytherin"
            );
            self.announcer
                .announce("Are you sure you want to be friends with someone from Slytherin?");
        }

        tracing::info!(
            pupil = %pupil.name(),
            friend = %outcome.friend.name,
            friend_kind = %outcome.friend.kind,
            friend_count = pupil.friends().len(),
            "Friend added"
        );
        self.announcer
            .announce(&format!("{} is now your friend!", outcome.friend.name));

        outcome
    }
}

/// Ask whether a member exhibits a trait, and say so.
pub struct InspectTrait {
    announcer: Arc<dyn AnnouncerPort>,
}

impl InspectTrait {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    pub fn execute<M: Member + ?Sized>(&self, member: &M, trait_name: &str) -> TraitQuery {
        let answer = member.exhibits_trait(trait_name);
        tracing::debug!(member = %member.name(), trait_name, answer = ?answer, "Trait queried");

        let message = match answer {
            TraitQuery::Present(true) => format!("Yes, {} is {}!", member.name(), trait_name),
            TraitQuery::Present(false) => format!("No, {} is not {}!", member.name(), trait_name),
            TraitQuery::Unknown => format!(
                "{} does not have a character trait with the name '{}'",
                member.name(),
                trait_name
            ),
        };
        self.announcer.announce(&message);

        answer
    }
}

/// Read-only reports about a member.
pub struct DescribeMember {
    announcer: Arc<dyn AnnouncerPort>,
}

impl DescribeMember {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    /// Announce and return the positive/negative trait summary.
    pub fn traits(&self, member: &SchoolMember) -> String {
        let summary = member.traits_summary();
        self.announcer.announce(&summary);
        summary
    }

    /// Announce and return the pupil's friend list.
    pub fn friends(&self, pupil: &Pupil) -> String {
        let summary = pupil.friends_summary();
        self.announcer.announce(&summary);
        summary
    }
}
