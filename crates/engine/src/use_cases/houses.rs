//! House use cases.

use std::sync::Arc;

use kilmere_domain::House;

use crate::infrastructure::clock::as_of_year;
use crate::infrastructure::ports::{AnnouncerPort, ClockPort};

/// Container for house use cases.
pub struct HouseUseCases {
    pub age: Arc<HouseAge>,
}

impl HouseUseCases {
    pub fn new(age: Arc<HouseAge>) -> Self {
        Self { age }
    }
}

/// Report how old a house is as of the clock's current year.
pub struct HouseAge {
    clock: Arc<dyn ClockPort>,
    announcer: Arc<dyn AnnouncerPort>,
}

impl HouseAge {
    pub fn new(clock: Arc<dyn ClockPort>, announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { clock, announcer }
    }

    /// Returns the age in years, founding year counted as year one.
    pub fn execute(&self, house: &House) -> i32 {
        let as_of = as_of_year(self.clock.as_ref());
        let age = house.age(as_of);
        tracing::debug!(house = %house.name(), as_of, age, "House age computed");
        self.announcer.announce(&house.age_report(as_of));
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::announcer::RecordingAnnouncer;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockClockPort;
    use chrono::{TimeZone, Utc};
    use kilmere_domain::{Ghost, HouseName, Professor};

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
    fn gryffindor_is_1033_in_2023() {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2023, 3, 14, 8, 0, 0).unwrap());
        let announcer = Arc::new(RecordingAnnouncer::new());
        let age = HouseAge::new(Arc::new(clock), announcer.clone());

        assert_eq!(age.execute(&gryffindor()), 1033);
        assert_eq!(announcer.messages(), vec!["Gryffindor is 1033 years old"]);
    }

    #[test]
    fn founding_year_counts_as_one() {
        let clock = Arc::new(FixedClock::in_year(991).unwrap());
        let age = HouseAge::new(clock, Arc::new(RecordingAnnouncer::new()));

        assert_eq!(age.execute(&gryffindor()), 1);
    }
}
