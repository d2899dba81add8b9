use gloo_net::http::Request;
use log::{info, warn};
use web_sys::RequestMode;

use crate::form::error::FormError;
use crate::form::model::ApplicationPayload;

/// How the endpoint's answer is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// `no-cors` request. The response is opaque, so anything that does not
    /// throw counts as delivered.
    #[default]
    Opaque,
    /// `cors` request. Only a 2xx status counts as delivered; the endpoint
    /// has to send CORS headers.
    Acknowledged,
}

impl DeliveryMode {
    fn request_mode(self) -> RequestMode {
        match self {
            DeliveryMode::Opaque => RequestMode::NoCors,
            DeliveryMode::Acknowledged => RequestMode::Cors,
        }
    }

    /// Interpret the status of a completed request.
    pub fn outcome(self, status: u16) -> Result<(), FormError> {
        match self {
            DeliveryMode::Opaque => Ok(()),
            DeliveryMode::Acknowledged if (200..300).contains(&status) => Ok(()),
            DeliveryMode::Acknowledged => Err(FormError::Rejected(status)),
        }
    }
}

pub fn encode_payload(payload: &ApplicationPayload) -> Result<String, FormError> {
    serde_json::to_string(payload).map_err(|e| FormError::Encode(e.to_string()))
}

/// POST the application once. No retry and no timeout.
pub async fn send_application(
    endpoint: &str,
    mode: DeliveryMode,
    payload: &ApplicationPayload,
) -> Result<(), FormError> {
    if endpoint.is_empty() {
        warn!("FORM_ENDPOINT_URL was not set at build time, cannot submit");
        return Err(FormError::EndpointNotConfigured);
    }
    let body = encode_payload(payload)?;

    info!("Submitting application ({:?} delivery)", mode);
    let response = Request::post(endpoint)
        .mode(mode.request_mode())
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!("Application request failed: {}", e);
            FormError::Transport(e.to_string())
        })?;

    mode.outcome(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::model::ApplicationData;
    use chrono::Utc;
    use std::future::Future;
    use std::task::{Context, Poll, Waker};

    #[test]
    fn opaque_mode_ignores_status() {
        // no-cors responses always report status 0
        assert_eq!(DeliveryMode::Opaque.outcome(0), Ok(()));
        assert_eq!(DeliveryMode::Opaque.outcome(500), Ok(()));
    }

    #[test]
    fn acknowledged_mode_requires_success_status() {
        assert_eq!(DeliveryMode::Acknowledged.outcome(200), Ok(()));
        assert_eq!(DeliveryMode::Acknowledged.outcome(204), Ok(()));
        assert_eq!(DeliveryMode::Acknowledged.outcome(0), Err(FormError::Rejected(0)));
        assert_eq!(DeliveryMode::Acknowledged.outcome(302), Err(FormError::Rejected(302)));
        assert_eq!(DeliveryMode::Acknowledged.outcome(503), Err(FormError::Rejected(503)));
    }

    #[test]
    fn default_mode_is_opaque() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::Opaque);
    }

    #[test]
    fn missing_endpoint_fails_without_a_request() {
        let payload = ApplicationPayload::new(ApplicationData::default(), Utc::now());
        let mut send = Box::pin(send_application("", DeliveryMode::Opaque, &payload));
        let mut cx = Context::from_waker(Waker::noop());

        let Poll::Ready(result) = send.as_mut().poll(&mut cx) else {
            panic!("an empty endpoint must resolve on the first poll");
        };
        assert_eq!(result, Err(FormError::EndpointNotConfigured));
        assert!(result.unwrap_err().is_transport());
    }

    #[test]
    fn encoded_payload_is_a_json_object() {
        let payload = ApplicationPayload::new(ApplicationData::default(), Utc::now());
        let body = encode_payload(&payload).unwrap();
        assert!(body.starts_with('{') && body.ends_with('}'));
        assert!(body.contains("\"submittedAt\""));
    }
}
