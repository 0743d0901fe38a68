//! Spell use cases - learning, casting and defining spells.

use std::sync::Arc;

use kilmere_domain::{
    CastOutcome, CastRejection, LearnOutcome, LearnRejection, Member, Pupil, Spell,
};

use crate::infrastructure::clock::as_of_year;
use crate::infrastructure::ports::{AnnouncerPort, ClockPort};

use super::SchoolError;

/// Container for spell use cases.
pub struct SpellUseCases {
    pub learn: Arc<LearnSpell>,
    pub cast: Arc<CastSpell>,
    pub define: Arc<DefineSpell>,
}

impl SpellUseCases {
    pub fn new(learn: Arc<LearnSpell>, cast: Arc<CastSpell>, define: Arc<DefineSpell>) -> Self {
        Self {
            learn,
            cast,
            define,
        }
    }
}

/// A pupil studies a spell as of the clock's current year.
pub struct LearnSpell {
    clock: Arc<dyn ClockPort>,
    announcer: Arc<dyn AnnouncerPort>,
}

impl LearnSpell {
    pub fn new(clock: Arc<dyn ClockPort>, announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { clock, announcer }
    }

    pub fn execute(&self, pupil: &mut Pupil, spell: &Spell) -> LearnOutcome {
        let as_of = as_of_year(self.clock.as_ref());
        let outcome = pupil.learn_spell(spell, as_of);

        match &outcome {
            LearnOutcome::Learned { spell_name, route } => {
                tracing::info!(
                    pupil = %pupil.name(),
                    spell = %spell_name,
                    route = ?route,
                    as_of,
                    "Spell learned"
                );
                self.announcer.announce(&format!(
                    "{} now knows the spell {}",
                    pupil.name(),
                    spell_name
                ));
            }
            LearnOutcome::AlreadyKnown { spell_name } => {
                tracing::debug!(pupil = %pupil.name(), spell = %spell_name, "Spell already known");
                self.announcer.announce(&format!(
                    "{} already knows the spell {}",
                    pupil.name(),
                    spell_name
                ));
            }
            LearnOutcome::Rejected { spell_name, reason } => {
                tracing::warn!(
                    pupil = %pupil.name(),
                    spell = %spell_name,
                    reason = ?reason,
                    as_of,
                    "Spell not learned"
                );
                let message = match reason {
                    LearnRejection::TooYoung { .. } => format!(
                        "{} is too young to learn this type of magic!",
                        pupil.name()
                    ),
                    LearnRejection::DarkMagicForbidden => {
                        "How dare you study a hex or curse?!".to_string()
                    }
                };
                self.announcer.announce(&message);
            }
        }

        outcome
    }
}

/// A pupil casts a spell.
pub struct CastSpell {
    announcer: Arc<dyn AnnouncerPort>,
}

impl CastSpell {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    pub fn execute(&self, pupil: &Pupil, spell: &Spell) -> CastOutcome {
        let outcome = pupil.cast_spell(spell);

        match &outcome {
            CastOutcome::Cast {
                spell_name,
                incantation,
            } => {
                tracing::info!(pupil = %pupil.name(), spell = %spell_name, "Spell cast");
                self.announcer.announce(&format!(
                    "{} has cast {}: {}",
                    pupil.name(),
                    spell_name,
                    incantation
                ));
            }
            CastOutcome::Rejected { spell_name, reason } => {
                tracing::warn!(
                    pupil = %pupil.name(),
                    spell = %spell_name,
                    reason = ?reason,
                    "Spell not cast"
                );
                let message = match reason {
                    CastRejection::DarkMagicForbidden => {
                        "How dare you cast a hex or a curse".to_string()
                    }
                    CastRejection::NotStudied => format!(
                        "You can't cast the {} spell correctly - you have to study it first!",
                        spell_name
                    ),
                };
                self.announcer.announce(&message);
            }
        }

        outcome
    }
}

/// Input for defining a spell from loosely-typed data (a catalog file, a form).
#[derive(Debug, Clone, Default)]
pub struct DefineSpellInput {
    pub category: String,
    pub name: String,
    pub incantation: String,
    pub effect: String,
    pub min_year: Option<i32>,
    pub difficulty: Option<String>,
}

/// Build a spell from a category name.
pub struct DefineSpell;

impl DefineSpell {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: DefineSpellInput) -> Result<Spell, SchoolError> {
        let mut spell = Spell::from_category(
            &input.category,
            input.name,
            input.incantation,
            input.effect,
        )?;
        if let Some(year) = input.min_year {
            spell = spell.with_min_year(year);
        }
        if let Some(difficulty) = input.difficulty {
            spell = spell.with_difficulty(difficulty);
        }

        tracing::debug!(
            spell = %spell.name(),
            category = %spell.category().as_str(),
            "Spell defined"
        );
        Ok(spell)
    }
}

impl Default for DefineSpell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::announcer::RecordingAnnouncer;
    use crate::infrastructure::ports::{MockAnnouncerPort, MockClockPort};
    use chrono::{TimeZone, Utc};
    use kilmere_domain::{catalog, DomainError, HouseName, LearnRoute, Sex, SpellCategory};

    fn clock_in(year: i32) -> Arc<dyn ClockPort> {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(move || Utc.with_ymd_and_hms(year, 9, 1, 9, 0, 0).unwrap());
        Arc::new(clock)
    }

    fn gryffindor() -> Pupil {
        Pupil::new("Ronald Weasley", 1990, Sex::Male, HouseName::Gryffindor, 2018)
    }

    mod learn {
        use super::*;

        #[test]
        fn sixth_year_learns_fifth_year_charm() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let learn = LearnSpell::new(clock_in(2023), announcer.clone());
            let mut ron = gryffindor();
            let charm = catalog::tickling_charm();

            let outcome = learn.execute(&mut ron, &charm);

            assert_eq!(
                outcome,
                LearnOutcome::Learned {
                    spell_name: "Tickling Charm".into(),
                    route: LearnRoute::YearRequirementMet,
                }
            );
            assert!(ron.knows(&charm));
            assert_eq!(
                announcer.messages(),
                vec!["Ronald Weasley now knows the spell Tickling Charm"]
            );
        }

        #[test]
        fn first_year_is_too_young() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let learn = LearnSpell::new(clock_in(2018), announcer.clone());
            let mut ron = gryffindor();

            let outcome = learn.execute(&mut ron, &catalog::tickling_charm());

            assert!(outcome.is_rejected());
            assert!(ron.known_spells().is_empty());
            assert_eq!(
                announcer.messages(),
                vec!["Ronald Weasley is too young to learn this type of magic!"]
            );
        }

        #[test]
        fn gryffindor_cannot_study_hex_but_slytherin_can() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let learn = LearnSpell::new(clock_in(2023), announcer.clone());
            let hex = catalog::stickfast_hex();

            let mut ron = gryffindor();
            let mut adrien = Pupil::adrien();

            assert!(learn.execute(&mut ron, &hex).is_rejected());
            assert!(learn.execute(&mut adrien, &hex).is_learned());
            assert_eq!(
                announcer.messages(),
                vec![
                    "How dare you study a hex or curse?!",
                    "Adrien Fulford now knows the spell Stickfast Hex",
                ]
            );
        }

        #[test]
        fn learning_twice_keeps_one_copy() {
            let mut announcer = MockAnnouncerPort::new();
            announcer.expect_announce().times(2).return_const(());
            let learn = LearnSpell::new(clock_in(2023), Arc::new(announcer));
            let mut ron = gryffindor();
            let lumos = catalog::lumos();

            learn.execute(&mut ron, &lumos);
            let second = learn.execute(&mut ron, &lumos);

            assert_eq!(
                second,
                LearnOutcome::AlreadyKnown {
                    spell_name: "Lumos".into()
                }
            );
            assert_eq!(ron.known_spells().len(), 1);
        }

        #[test]
        fn reads_the_clock_once_per_attempt() {
            let mut clock = MockClockPort::new();
            clock
                .expect_now()
                .times(1)
                .returning(|| Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
            let learn = LearnSpell::new(Arc::new(clock), Arc::new(RecordingAnnouncer::new()));

            learn.execute(&mut gryffindor(), &catalog::stuporus_ratiato());
        }
    }

    mod cast {
        use super::*;

        #[test]
        fn learned_charm_is_cast_with_exclamation() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let learn = LearnSpell::new(clock_in(2023), announcer.clone());
            let cast = CastSpell::new(announcer.clone());
            let mut ron = gryffindor();
            let spell = catalog::stuporus_ratiato();

            learn.execute(&mut ron, &spell);
            let outcome = cast.execute(&ron, &spell);

            assert!(outcome.is_cast());
            assert_eq!(
                announcer.take().last().map(String::as_str),
                Some("Ronald Weasley has cast Stuporus Ratatio: Stuporus Ratatio!")
            );
        }

        #[test]
        fn unstudied_spell_is_refused() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let cast = CastSpell::new(announcer.clone());

            let outcome = cast.execute(&gryffindor(), &catalog::lumos());

            assert!(!outcome.is_cast());
            assert_eq!(
                announcer.messages(),
                vec!["You can't cast the Lumos spell correctly - you have to study it first!"]
            );
        }

        #[test]
        fn hex_depends_on_house_only() {
            let announcer = Arc::new(RecordingAnnouncer::new());
            let cast = CastSpell::new(announcer.clone());
            let hex = catalog::stickfast_hex();

            assert!(!cast.execute(&gryffindor(), &hex).is_cast());
            assert!(cast.execute(&Pupil::adrien(), &hex).is_cast());
            assert_eq!(
                announcer.messages(),
                vec![
                    "How dare you cast a hex or a curse",
                    "Adrien Fulford has cast Stickfast Hex: Colloshoo",
                ]
            );
        }
    }

    mod define {
        use super::*;

        #[test]
        fn builds_spell_from_category_name() {
            let spell = DefineSpell::new()
                .execute(DefineSpellInput {
                    category: "healing spell".into(),
                    name: "Episkey".into(),
                    incantation: "Episkey".into(),
                    effect: "Heals minor injuries".into(),
                    min_year: Some(2),
                    ..Default::default()
                })
                .unwrap();

            assert_eq!(spell.category(), SpellCategory::HealingSpell);
            assert_eq!(spell.min_year(), Some(2));
        }

        #[test]
        fn unknown_category_is_rejected() {
            let err = DefineSpell::new()
                .execute(DefineSpellInput {
                    category: "Hexagram".into(),
                    name: "Nope".into(),
                    ..Default::default()
                })
                .unwrap_err();

            assert!(matches!(
                err,
                SchoolError::Domain(DomainError::UnsupportedSpellCategory(_))
            ));
        }
    }
}
