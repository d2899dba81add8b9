use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

pub const TSHIRT_SIZES: &[&str] = &["S", "M", "L", "XL", "XXL"];
pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "Cash / Check", "PayPal", "Other"];
pub const PAYMENT_CONTACT_OPTIONS: &[&str] = &["Father", "Mother", "Other"];
pub const YES_NO: &[&str] = &["Yes", "No"];

/// Payment contact choice that requires a free-text follow-up.
pub const PAYMENT_CONTACT_OTHER: &str = "Other";

/// Every free-text or select field of the application, named as on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    HebrewName,
    DateOfBirth,
    ParticipantPhone,
    ParticipantEmail,
    Weight,
    Height,
    HorsebackExperience,
    TshirtSize,
    FatherName,
    FatherPhone,
    MotherName,
    MotherPhone,
    ParentsEmail,
    PaymentContact,
    PaymentContactOther,
    HomeAddress,
    EmergencyContact,
    MedicalConditionDetails,
    PastYearDetails,
    HowDidYouHear,
    FurtherComments,
    PaymentMethod,
    SponsorInterest,
}

impl Field {
    #[cfg(test)]
    pub const ALL: [Field; 25] = [
        Field::FirstName,
        Field::LastName,
        Field::HebrewName,
        Field::DateOfBirth,
        Field::ParticipantPhone,
        Field::ParticipantEmail,
        Field::Weight,
        Field::Height,
        Field::HorsebackExperience,
        Field::TshirtSize,
        Field::FatherName,
        Field::FatherPhone,
        Field::MotherName,
        Field::MotherPhone,
        Field::ParentsEmail,
        Field::PaymentContact,
        Field::PaymentContactOther,
        Field::HomeAddress,
        Field::EmergencyContact,
        Field::MedicalConditionDetails,
        Field::PastYearDetails,
        Field::HowDidYouHear,
        Field::FurtherComments,
        Field::PaymentMethod,
        Field::SponsorInterest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::HebrewName => "hebrewName",
            Field::DateOfBirth => "dateOfBirth",
            Field::ParticipantPhone => "participantPhone",
            Field::ParticipantEmail => "participantEmail",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::HorsebackExperience => "horsebackExperience",
            Field::TshirtSize => "tshirtSize",
            Field::FatherName => "fatherName",
            Field::FatherPhone => "fatherPhone",
            Field::MotherName => "motherName",
            Field::MotherPhone => "motherPhone",
            Field::ParentsEmail => "parentsEmail",
            Field::PaymentContact => "paymentContact",
            Field::PaymentContactOther => "paymentContactOther",
            Field::HomeAddress => "homeAddress",
            Field::EmergencyContact => "emergencyContact",
            Field::MedicalConditionDetails => "medicalConditionDetails",
            Field::PastYearDetails => "pastYearDetails",
            Field::HowDidYouHear => "howDidYouHear",
            Field::FurtherComments => "furtherComments",
            Field::PaymentMethod => "paymentMethod",
            Field::SponsorInterest => "sponsorInterest",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn yes_no<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

fn confirmed_no<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Confirmed" } else { "No" })
}

/// The flat application record shared by both steps.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    pub first_name: String,
    pub last_name: String,
    pub hebrew_name: String,
    pub date_of_birth: String,
    pub participant_phone: String,
    pub participant_email: String,
    pub weight: String,
    pub height: String,
    pub horseback_experience: String,
    pub tshirt_size: String,
    pub father_name: String,
    pub father_phone: String,
    pub mother_name: String,
    pub mother_phone: String,
    pub parents_email: String,
    pub payment_contact: String,
    pub payment_contact_other: String,
    pub home_address: String,
    pub emergency_contact: String,
    #[serde(serialize_with = "yes_no")]
    pub has_medical_condition: bool,
    pub medical_condition_details: String,
    pub past_year_details: String,
    pub how_did_you_hear: String,
    pub further_comments: String,
    pub payment_method: String,
    pub sponsor_interest: String,
    #[serde(serialize_with = "confirmed_no")]
    pub passport_confirmation: bool,
}

impl ApplicationData {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::HebrewName => &mut self.hebrew_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::ParticipantPhone => &mut self.participant_phone,
            Field::ParticipantEmail => &mut self.participant_email,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::HorsebackExperience => &mut self.horseback_experience,
            Field::TshirtSize => &mut self.tshirt_size,
            Field::FatherName => &mut self.father_name,
            Field::FatherPhone => &mut self.father_phone,
            Field::MotherName => &mut self.mother_name,
            Field::MotherPhone => &mut self.mother_phone,
            Field::ParentsEmail => &mut self.parents_email,
            Field::PaymentContact => &mut self.payment_contact,
            Field::PaymentContactOther => &mut self.payment_contact_other,
            Field::HomeAddress => &mut self.home_address,
            Field::EmergencyContact => &mut self.emergency_contact,
            Field::MedicalConditionDetails => &mut self.medical_condition_details,
            Field::PastYearDetails => &mut self.past_year_details,
            Field::HowDidYouHear => &mut self.how_did_you_hear,
            Field::FurtherComments => &mut self.further_comments,
            Field::PaymentMethod => &mut self.payment_method,
            Field::SponsorInterest => &mut self.sponsor_interest,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::HebrewName => &self.hebrew_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::ParticipantPhone => &self.participant_phone,
            Field::ParticipantEmail => &self.participant_email,
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::HorsebackExperience => &self.horseback_experience,
            Field::TshirtSize => &self.tshirt_size,
            Field::FatherName => &self.father_name,
            Field::FatherPhone => &self.father_phone,
            Field::MotherName => &self.mother_name,
            Field::MotherPhone => &self.mother_phone,
            Field::ParentsEmail => &self.parents_email,
            Field::PaymentContact => &self.payment_contact,
            Field::PaymentContactOther => &self.payment_contact_other,
            Field::HomeAddress => &self.home_address,
            Field::EmergencyContact => &self.emergency_contact,
            Field::MedicalConditionDetails => &self.medical_condition_details,
            Field::PastYearDetails => &self.past_year_details,
            Field::HowDidYouHear => &self.how_did_you_hear,
            Field::FurtherComments => &self.further_comments,
            Field::PaymentMethod => &self.payment_method,
            Field::SponsorInterest => &self.sponsor_interest,
        }
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn toggle_medical_condition(&mut self) {
        self.has_medical_condition = !self.has_medical_condition;
    }

    pub fn set_passport_confirmation(&mut self, confirmed: bool) {
        self.passport_confirmation = confirmed;
    }

    pub fn wants_other_payment_contact(&self) -> bool {
        self.payment_contact == PAYMENT_CONTACT_OTHER
    }
}

/// Request body sent to the form endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    #[serde(flatten)]
    pub application: ApplicationData,
    pub submitted_at: String,
}

impl ApplicationPayload {
    pub fn new(application: ApplicationData, submitted_at: DateTime<Utc>) -> Self {
        Self {
            application,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    #[test]
    fn set_text_updates_only_the_named_field() {
        let mut data = ApplicationData::default();
        data.set_text(Field::HebrewName, "Yochanan ben David");
        assert_eq!(data.get(Field::HebrewName), "Yochanan ben David");
        assert!(Field::ALL
            .iter()
            .filter(|f| **f != Field::HebrewName)
            .all(|f| data.get(*f).is_empty()));
    }

    #[test]
    fn payload_normalizes_booleans_and_stamps_time() {
        let mut data = ApplicationData::default();
        data.set_text(Field::FirstName, "John");
        data.set_text(Field::TshirtSize, "XL");
        data.toggle_medical_condition();

        let at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_value(ApplicationPayload::new(data, at)).unwrap();

        assert_eq!(json["firstName"], "John");
        assert_eq!(json["tshirtSize"], "XL");
        assert_eq!(json["hasMedicalCondition"], "Yes");
        assert_eq!(json["passportConfirmation"], "No");
        assert_eq!(json["submittedAt"], "2026-02-01T12:30:00.000Z");
    }

    #[test]
    fn payload_carries_every_field() {
        let mut data = ApplicationData::default();
        data.set_passport_confirmation(true);
        let json = serde_json::to_value(ApplicationPayload::new(data, Utc::now())).unwrap();
        let Value::Object(map) = json else { panic!("payload is not an object") };

        for field in Field::ALL {
            assert!(map.contains_key(field.as_str()), "missing {}", field);
        }
        assert_eq!(map["passportConfirmation"], "Confirmed");
        assert_eq!(map["hasMedicalCondition"], "No");
        // 25 text fields, 2 booleans, the timestamp
        assert_eq!(map.len(), 28);
    }
}
