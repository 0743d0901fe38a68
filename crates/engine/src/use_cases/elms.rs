//! ELM use cases - recording exam grades and wiping a pupil's record.

use std::sync::Arc;

use kilmere_domain::{ElmClearOutcome, ElmOutcome, Member, Pupil};

use crate::infrastructure::ports::AnnouncerPort;

use super::SchoolError;

/// Container for ELM use cases.
pub struct ElmUseCases {
    pub record: Arc<RecordElm>,
    pub clear: Arc<ClearElms>,
}

impl ElmUseCases {
    pub fn new(record: Arc<RecordElm>, clear: Arc<ClearElms>) -> Self {
        Self { record, clear }
    }
}

/// Record an exam result given as a raw `[subject, grade]` entry.
pub struct RecordElm {
    announcer: Arc<dyn AnnouncerPort>,
}

impl RecordElm {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    pub fn execute<S: AsRef<str>>(
        &self,
        pupil: &mut Pupil,
        entry: &[S],
    ) -> Result<ElmOutcome, SchoolError> {
        let outcome = pupil.set_elms(entry).inspect_err(|e| {
            tracing::warn!(pupil = %pupil.name(), error = %e, "Malformed ELM entry");
        })?;

        match &outcome {
            ElmOutcome::Passed { subject, grade } => {
                tracing::info!(
                    pupil = %pupil.name(),
                    subject = %subject.display_name(),
                    grade = ?grade,
                    "ELM passed"
                );
            }
            ElmOutcome::Failed { subject, grade } => {
                tracing::info!(
                    pupil = %pupil.name(),
                    subject = %subject.display_name(),
                    grade = %grade,
                    "ELM not passed"
                );
                self.announcer.announce("Exam not passed, didn't get the ELM");
            }
        }

        Ok(outcome)
    }
}

/// Wipe a pupil's ELMs. Meant for pupils who left without passing anything.
pub struct ClearElms {
    announcer: Arc<dyn AnnouncerPort>,
}

impl ClearElms {
    pub fn new(announcer: Arc<dyn AnnouncerPort>) -> Self {
        Self { announcer }
    }

    pub fn execute(&self, pupil: &mut Pupil) -> ElmClearOutcome {
        self.announcer.announce(
            "Caution, you are deleting this pupil's ELMs! \
             You should only do that if they dropped out of school without passing any exam!",
        );
        let outcome = pupil.clear_elms();
        tracing::warn!(
            pupil = %pupil.name(),
            passes_wiped = outcome.passes_wiped,
            "ELMs cleared"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::announcer::RecordingAnnouncer;
    use crate::infrastructure::ports::MockAnnouncerPort;
    use kilmere_domain::{DomainError, Grade, Subject};

    #[test]
    fn exceptional_sets_the_flag_silently() {
        let mut announcer = MockAnnouncerPort::new();
        announcer.expect_announce().never();
        let record = RecordElm::new(Arc::new(announcer));
        let mut pupil = Pupil::hermione();

        let outcome = record.execute(&mut pupil, &["Potions", "Exceptional"]).unwrap();

        assert_eq!(
            outcome,
            ElmOutcome::Passed {
                subject: Subject::Potions,
                grade: Grade::Exceptional,
            }
        );
        assert!(pupil.elms().is_passed(Subject::Potions));
    }

    #[test]
    fn poor_is_reported_and_leaves_flag_false() {
        let announcer = Arc::new(RecordingAnnouncer::new());
        let record = RecordElm::new(announcer.clone());
        let mut pupil = Pupil::hermione();

        let outcome = record.execute(&mut pupil, &["Potions", "Poor"]).unwrap();

        assert!(!outcome.is_passed());
        assert!(!pupil.elms().is_passed(Subject::Potions));
        assert_eq!(announcer.messages(), vec!["Exam not passed, didn't get the ELM"]);
    }

    #[test]
    fn single_value_is_invalid_argument() {
        let record = RecordElm::new(Arc::new(RecordingAnnouncer::new()));
        let mut pupil = Pupil::hermione();

        let err = record.execute(&mut pupil, &["Potions"]).unwrap_err();

        assert!(matches!(
            err,
            SchoolError::Domain(DomainError::InvalidArgument(_))
        ));
        assert_eq!(pupil.elms().passed_count(), 0);
    }

    #[test]
    fn unknown_subject_is_invalid_argument() {
        let record = RecordElm::new(Arc::new(RecordingAnnouncer::new()));
        let mut pupil = Pupil::hermione();

        let err = record
            .execute(&mut pupil, &["Quidditch".to_string(), "E".to_string()])
            .unwrap_err();

        assert!(err.is_invalid_input());
    }

    #[test]
    fn clear_warns_then_wipes() {
        let announcer = Arc::new(RecordingAnnouncer::new());
        let record = RecordElm::new(announcer.clone());
        let clear = ClearElms::new(announcer.clone());
        let mut pupil = Pupil::cassidy();
        record.execute(&mut pupil, &["Charms", "Good"]).unwrap();
        record.execute(&mut pupil, &["Herbology", "A"]).unwrap();

        let outcome = clear.execute(&mut pupil);

        assert_eq!(outcome.passes_wiped, 2);
        assert_eq!(pupil.elms().passed_count(), 0);
        assert!(announcer.messages()[0].starts_with("Caution, you are deleting"));
    }
}
