use thiserror::Error;

/// Why the application could not move forward. The `Display` text is what
/// the applicant sees in the error banner.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please specify who to contact regarding payment.")]
    MissingPaymentContact,
    #[error("Please describe the medical condition.")]
    MissingMedicalDetails,
    #[error("Please confirm that you will submit the required travel documents.")]
    TravelDocumentsUnconfirmed,

    #[error("Something went wrong. Please try again or contact us directly.")]
    EndpointNotConfigured,
    #[error("Something went wrong. Please try again or contact us directly.")]
    Encode(String),
    #[error("Something went wrong. Please try again or contact us directly.")]
    Transport(String),
    #[error("Something went wrong. Please try again or contact us directly.")]
    Rejected(u16),
}

impl FormError {
    /// Network-side failures; the form stays editable and can be resubmitted.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FormError::EndpointNotConfigured
                | FormError::Encode(_)
                | FormError::Transport(_)
                | FormError::Rejected(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_share_one_message() {
        let transport = [
            FormError::EndpointNotConfigured,
            FormError::Encode("bad".into()),
            FormError::Transport("offline".into()),
            FormError::Rejected(500),
        ];
        for err in &transport {
            assert!(err.is_transport());
            assert_eq!(
                err.to_string(),
                "Something went wrong. Please try again or contact us directly."
            );
        }
    }

    #[test]
    fn validation_errors_are_not_transport() {
        assert!(!FormError::MissingRequired.is_transport());
        assert!(!FormError::TravelDocumentsUnconfirmed.is_transport());
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address.");
    }
}
