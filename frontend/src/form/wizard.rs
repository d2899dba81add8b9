use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::info;
use yew::Reducible;

use crate::form::error::FormError;
use crate::form::model::{ApplicationData, ApplicationPayload, Field};
use crate::form::validation::{validate_family, validate_participant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStep {
    #[default]
    Participant,
    Family,
    Submitted,
}

impl FormStep {
    pub fn number(self) -> u8 {
        match self {
            FormStep::Participant => 1,
            FormStep::Family => 2,
            FormStep::Submitted => 3,
        }
    }
}

/// Two-step application controller. Moves forward only through the
/// validating transitions below; `Submitted` is terminal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationWizard {
    pub step: FormStep,
    pub data: ApplicationData,
    pub error: Option<FormError>,
    pub submitting: bool,
}

impl ApplicationWizard {
    pub fn edit(&mut self, change: impl FnOnce(&mut ApplicationData)) {
        if self.step != FormStep::Submitted {
            change(&mut self.data);
        }
    }

    /// Participant -> Family, guarded by step 1 validation.
    pub fn advance(&mut self) -> Result<(), FormError> {
        if self.step != FormStep::Participant {
            return Ok(());
        }
        match validate_participant(&self.data) {
            Ok(()) => {
                self.step = FormStep::Family;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Family -> Participant. Keeps every entered value.
    pub fn back(&mut self) {
        if self.step == FormStep::Family {
            self.step = FormStep::Participant;
            self.error = None;
        }
    }

    /// Validate step 2 and build the request body.
    ///
    /// `Ok(None)` means there is nothing to send: the form is not on step 2,
    /// a submission is already in flight, or it already went through.
    pub fn prepare_submission(&self, now: DateTime<Utc>) -> Result<Option<ApplicationPayload>, FormError> {
        if self.step != FormStep::Family || self.submitting {
            return Ok(None);
        }
        validate_family(&self.data)?;
        Ok(Some(ApplicationPayload::new(self.data.clone(), now)))
    }

    pub fn reject(&mut self, err: FormError) {
        if self.step != FormStep::Submitted {
            self.error = Some(err);
        }
    }

    pub fn submission_started(&mut self) {
        if self.step == FormStep::Family {
            self.submitting = true;
            self.error = None;
        }
    }

    /// Returns true the one time the form becomes `Submitted`.
    pub fn submission_succeeded(&mut self) -> bool {
        if !self.submitting || self.step == FormStep::Submitted {
            return false;
        }
        self.step = FormStep::Submitted;
        self.submitting = false;
        self.error = None;
        self.data = ApplicationData::default();
        true
    }

    pub fn submission_failed(&mut self, err: FormError) {
        if self.submitting {
            self.submitting = false;
            self.error = Some(err);
        }
    }
}

pub enum FormAction {
    SetText(Field, String),
    ToggleMedicalCondition,
    SetPassportConfirmation(bool),
    Next,
    Back,
    Rejected(FormError),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(FormError),
}

impl Reducible for ApplicationWizard {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetText(field, value) => next.edit(|data| data.set_text(field, value)),
            FormAction::ToggleMedicalCondition => next.edit(|data| data.toggle_medical_condition()),
            FormAction::SetPassportConfirmation(confirmed) => {
                next.edit(|data| data.set_passport_confirmation(confirmed))
            }
            FormAction::Next => {
                if next.advance().is_ok() && next.step == FormStep::Family {
                    info!("Application moved to step 2");
                }
            }
            FormAction::Back => next.back(),
            FormAction::Rejected(err) => next.reject(err),
            FormAction::SubmitStarted => next.submission_started(),
            FormAction::SubmitSucceeded => {
                if next.submission_succeeded() {
                    info!("Application submitted");
                }
            }
            FormAction::SubmitFailed(err) => next.submission_failed(err),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::tests::{complete, participant};

    fn on_family_step() -> ApplicationWizard {
        let mut wizard = ApplicationWizard { data: complete(), ..Default::default() };
        wizard.advance().unwrap();
        wizard
    }

    fn dispatch(wizard: ApplicationWizard, action: FormAction) -> ApplicationWizard {
        (*Rc::new(wizard).reduce(action)).clone()
    }

    #[test]
    fn empty_step_one_stays_put_with_error() {
        let mut wizard = ApplicationWizard::default();
        assert_eq!(wizard.advance(), Err(FormError::MissingRequired));
        assert_eq!(wizard.step, FormStep::Participant);
        assert_eq!(wizard.error, Some(FormError::MissingRequired));
    }

    #[test]
    fn invalid_email_stays_on_step_one() {
        let mut wizard = ApplicationWizard { data: participant(), ..Default::default() };
        wizard.data.set_text(Field::ParticipantEmail, "not-an-email");
        assert_eq!(wizard.advance(), Err(FormError::InvalidEmail));
        assert_eq!(wizard.step, FormStep::Participant);
    }

    #[test]
    fn valid_step_one_advances_and_clears_error() {
        let mut wizard = ApplicationWizard::default();
        let _ = wizard.advance();
        wizard.data = participant();
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard.step, FormStep::Family);
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn back_keeps_values_and_clears_error() {
        let mut wizard = on_family_step();
        wizard.reject(FormError::TravelDocumentsUnconfirmed);
        wizard.back();
        assert_eq!(wizard.step, FormStep::Participant);
        assert_eq!(wizard.error, None);
        assert_eq!(wizard.data, complete());
    }

    #[test]
    fn nothing_to_submit_from_step_one() {
        let wizard = ApplicationWizard { data: complete(), ..Default::default() };
        assert_eq!(wizard.prepare_submission(Utc::now()), Ok(None));
    }

    #[test]
    fn medical_toggle_without_details_blocks_submission() {
        let mut wizard = on_family_step();
        wizard.data.toggle_medical_condition();
        assert_eq!(wizard.prepare_submission(Utc::now()), Err(FormError::MissingMedicalDetails));

        wizard.data.set_text(Field::MedicalConditionDetails, "Asthma, inhaler");
        let payload = wizard.prepare_submission(Utc::now()).unwrap().expect("payload");
        assert!(payload.application.has_medical_condition);
    }

    #[test]
    fn other_payment_contact_without_follow_up_blocks_submission() {
        let mut wizard = on_family_step();
        wizard.data.set_text(Field::PaymentContact, "Other");
        assert_eq!(wizard.prepare_submission(Utc::now()), Err(FormError::MissingPaymentContact));

        wizard.data.set_text(Field::PaymentContactOther, "Aunt Rivka");
        assert!(matches!(wizard.prepare_submission(Utc::now()), Ok(Some(_))));
    }

    #[test]
    fn successful_submission_is_terminal_and_happens_once() {
        let mut wizard = on_family_step();
        // Advancing again from step 2 changes nothing.
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard.step, FormStep::Family);
        assert!(wizard.prepare_submission(Utc::now()).unwrap().is_some());
        wizard.submission_started();
        assert!(wizard.submitting);
        // In flight: a second click has nothing to send.
        assert_eq!(wizard.prepare_submission(Utc::now()), Ok(None));

        assert!(wizard.submission_succeeded());
        assert_eq!(wizard.step, FormStep::Submitted);
        assert_eq!(wizard.data, ApplicationData::default());

        assert!(!wizard.submission_succeeded());
        assert_eq!(wizard.prepare_submission(Utc::now()), Ok(None));
        wizard.submission_started();
        assert!(!wizard.submitting);
        wizard.back();
        assert_eq!(wizard.step, FormStep::Submitted);
        assert_eq!(wizard.advance(), Ok(()));
        assert_eq!(wizard.step, FormStep::Submitted);
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn transport_failure_keeps_step_two_for_retry() {
        let mut wizard = on_family_step();
        wizard.submission_started();
        wizard.submission_failed(FormError::Transport("offline".into()));
        assert_eq!(wizard.step, FormStep::Family);
        assert!(!wizard.submitting);
        assert_eq!(wizard.error, Some(FormError::Transport("offline".into())));
        assert_eq!(wizard.data, complete());

        // Retry clears the banner and can go through.
        assert!(wizard.prepare_submission(Utc::now()).unwrap().is_some());
        wizard.submission_started();
        assert_eq!(wizard.error, None);
        assert!(wizard.submission_succeeded());
    }

    #[test]
    fn reducer_drives_the_whole_flow() {
        let mut wizard = ApplicationWizard::default();
        for field in crate::form::validation::PARTICIPANT_REQUIRED {
            let value = participant().get(field).to_string();
            wizard = dispatch(wizard, FormAction::SetText(field, value));
        }
        wizard = dispatch(wizard, FormAction::Next);
        assert_eq!(wizard.step, FormStep::Family);

        wizard = dispatch(wizard, FormAction::ToggleMedicalCondition);
        assert!(wizard.data.has_medical_condition);
        wizard = dispatch(wizard, FormAction::SetPassportConfirmation(true));
        assert!(wizard.data.passport_confirmation);

        wizard = dispatch(wizard, FormAction::Rejected(FormError::MissingRequired));
        assert_eq!(wizard.error, Some(FormError::MissingRequired));

        wizard = dispatch(wizard, FormAction::SubmitStarted);
        wizard = dispatch(wizard, FormAction::SubmitSucceeded);
        assert_eq!(wizard.step, FormStep::Submitted);

        wizard = dispatch(wizard, FormAction::SetText(Field::FirstName, "Late".into()));
        assert!(wizard.data.first_name.is_empty());
        wizard = dispatch(wizard, FormAction::SubmitFailed(FormError::Transport("late".into())));
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn step_numbers() {
        assert_eq!(FormStep::Participant.number(), 1);
        assert_eq!(FormStep::Family.number(), 2);
        assert_eq!(FormStep::default(), FormStep::Participant);
    }
}
