//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::clock::as_of_year;
use crate::infrastructure::ports::{AnnouncerPort, ClockPort};
use crate::use_cases;

/// Main application state.
///
/// Holds the injected ports and every use case, wired once.
pub struct App {
    pub clock: Arc<dyn ClockPort>,
    pub announcer: Arc<dyn AnnouncerPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub spells: use_cases::SpellUseCases,
    pub members: use_cases::MemberUseCases,
    pub elms: use_cases::ElmUseCases,
    pub houses: use_cases::HouseUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(clock: Arc<dyn ClockPort>, announcer: Arc<dyn AnnouncerPort>) -> Self {
        let spells = use_cases::SpellUseCases::new(
            Arc::new(use_cases::LearnSpell::new(clock.clone(), announcer.clone())),
            Arc::new(use_cases::CastSpell::new(announcer.clone())),
            Arc::new(use_cases::DefineSpell::new()),
        );

        let members = use_cases::MemberUseCases::new(
            Arc::new(use_cases::Befriend::new(announcer.clone())),
            Arc::new(use_cases::InspectTrait::new(announcer.clone())),
            Arc::new(use_cases::DescribeMember::new(announcer.clone())),
        );

        let elms = use_cases::ElmUseCases::new(
            Arc::new(use_cases::RecordElm::new(announcer.clone())),
            Arc::new(use_cases::ClearElms::new(announcer.clone())),
        );

        let houses = use_cases::HouseUseCases::new(Arc::new(use_cases::HouseAge::new(
            clock.clone(),
            announcer.clone(),
        )));

        Self {
            clock,
            announcer,
            use_cases: UseCases {
                spells,
                members,
                elms,
                houses,
            },
        }
    }

    /// The calendar year every derived age is computed against right now.
    pub fn as_of_year(&self) -> i32 {
        as_of_year(self.clock.as_ref())
    }
}
