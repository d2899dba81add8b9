use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::error::FormError;
use crate::form::model::{ApplicationData, Field};

pub const PARTICIPANT_REQUIRED: [Field; 9] = [
    Field::FirstName,
    Field::LastName,
    Field::HebrewName,
    Field::DateOfBirth,
    Field::ParticipantPhone,
    Field::ParticipantEmail,
    Field::Weight,
    Field::Height,
    Field::TshirtSize,
];

pub const FAMILY_REQUIRED: [Field; 12] = [
    Field::FatherName,
    Field::FatherPhone,
    Field::MotherName,
    Field::MotherPhone,
    Field::ParentsEmail,
    Field::PaymentContact,
    Field::HomeAddress,
    Field::EmergencyContact,
    Field::PastYearDetails,
    Field::HowDidYouHear,
    Field::PaymentMethod,
    Field::SponsorInterest,
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn require(data: &ApplicationData, fields: &[Field]) -> Result<(), FormError> {
    match fields.iter().find(|field| data.get(**field).is_empty()) {
        Some(_) => Err(FormError::MissingRequired),
        None => Ok(()),
    }
}

/// Step 1 guard: participant details.
pub fn validate_participant(data: &ApplicationData) -> Result<(), FormError> {
    require(data, &PARTICIPANT_REQUIRED)?;
    if !is_valid_email(&data.participant_email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Step 2 guard: family, background, payment and travel documents.
pub fn validate_family(data: &ApplicationData) -> Result<(), FormError> {
    require(data, &FAMILY_REQUIRED)?;
    if data.wants_other_payment_contact() && data.payment_contact_other.is_empty() {
        return Err(FormError::MissingPaymentContact);
    }
    if data.has_medical_condition && data.medical_condition_details.is_empty() {
        return Err(FormError::MissingMedicalDetails);
    }
    if !data.passport_confirmation {
        return Err(FormError::TravelDocumentsUnconfirmed);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn participant() -> ApplicationData {
        let mut data = ApplicationData::default();
        for (field, value) in [
            (Field::FirstName, "John"),
            (Field::LastName, "Doe"),
            (Field::HebrewName, "Yochanan ben David"),
            (Field::DateOfBirth, "2008-04-12"),
            (Field::ParticipantPhone, "+1 555 000 0000"),
            (Field::ParticipantEmail, "john@example.com"),
            (Field::Weight, "160"),
            (Field::Height, "5'10\""),
            (Field::TshirtSize, "L"),
        ] {
            data.set_text(field, value);
        }
        data
    }

    pub(crate) fn complete() -> ApplicationData {
        let mut data = participant();
        for (field, value) in [
            (Field::FatherName, "David Doe"),
            (Field::FatherPhone, "+1 555 000 0001"),
            (Field::MotherName, "Sarah Doe"),
            (Field::MotherPhone, "+1 555 000 0002"),
            (Field::ParentsEmail, "parents@example.com"),
            (Field::PaymentContact, "Father"),
            (Field::HomeAddress, "123 Main St, City, NY 10001"),
            (Field::EmergencyContact, "Uncle Moshe 555 000 0003"),
            (Field::PastYearDetails, "Yeshiva, Sep-Jun, reference R. Levi"),
            (Field::HowDidYouHear, "Friend"),
            (Field::PaymentMethod, "PayPal"),
            (Field::SponsorInterest, "No"),
        ] {
            data.set_text(field, value);
        }
        data.set_passport_confirmation(true);
        data
    }

    #[test]
    fn empty_participant_step_is_rejected() {
        assert_eq!(validate_participant(&ApplicationData::default()), Err(FormError::MissingRequired));
    }

    #[test]
    fn filled_participant_step_passes() {
        assert_eq!(validate_participant(&participant()), Ok(()));
    }

    #[test]
    fn horseback_experience_is_optional() {
        let data = participant();
        assert!(data.horseback_experience.is_empty());
        assert!(validate_participant(&data).is_ok());
    }

    #[test]
    fn each_missing_participant_field_blocks() {
        for field in PARTICIPANT_REQUIRED {
            let mut data = participant();
            data.set_text(field, "");
            assert_eq!(validate_participant(&data), Err(FormError::MissingRequired), "{}", field);
        }
    }

    #[test]
    fn malformed_email_blocks_step_one() {
        let mut data = participant();
        data.set_text(Field::ParticipantEmail, "not-an-email");
        assert_eq!(validate_participant(&data), Err(FormError::InvalidEmail));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+camp@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email("a@@c.de"));
    }

    #[test]
    fn complete_family_step_passes() {
        assert_eq!(validate_family(&complete()), Ok(()));
    }

    #[test]
    fn each_missing_family_field_blocks() {
        for field in FAMILY_REQUIRED {
            let mut data = complete();
            data.set_text(field, "");
            assert_eq!(validate_family(&data), Err(FormError::MissingRequired), "{}", field);
        }
    }

    #[test]
    fn other_payment_contact_needs_follow_up() {
        let mut data = complete();
        data.set_text(Field::PaymentContact, "Other");
        assert_eq!(validate_family(&data), Err(FormError::MissingPaymentContact));

        data.set_text(Field::PaymentContactOther, "Grandfather, 555 000 0004");
        assert_eq!(validate_family(&data), Ok(()));
    }

    #[test]
    fn medical_condition_needs_details() {
        let mut data = complete();
        data.toggle_medical_condition();
        assert_eq!(validate_family(&data), Err(FormError::MissingMedicalDetails));

        data.set_text(Field::MedicalConditionDetails, "Peanut allergy, carries epipen");
        assert_eq!(validate_family(&data), Ok(()));
    }

    #[test]
    fn stale_medical_details_do_not_matter_when_toggled_off() {
        let mut data = complete();
        data.toggle_medical_condition();
        data.toggle_medical_condition();
        assert!(!data.has_medical_condition);
        assert_eq!(validate_family(&data), Ok(()));
    }

    #[test]
    fn travel_documents_must_be_confirmed() {
        let mut data = complete();
        data.set_passport_confirmation(false);
        assert_eq!(validate_family(&data), Err(FormError::TravelDocumentsUnconfirmed));
    }

    #[test]
    fn required_fields_are_checked_before_conditionals() {
        let mut data = complete();
        data.set_text(Field::FatherName, "");
        data.set_passport_confirmation(false);
        data.toggle_medical_condition();
        assert_eq!(validate_family(&data), Err(FormError::MissingRequired));
    }
}
