//! Form relay contract.
//!
//! The relay is a third-party service that forwards the submitted form as a
//! message. Only the HTTP status of its answer matters; the body is never
//! read.

use serde::Serialize;

use crate::error::RelayResult;
use crate::form::FormState;
use crate::schema::FormSchema;

/// Headers sent with every relay post.
pub const RELAY_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Flat JSON object posted to the relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayPayload {
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_replyto", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(flatten)]
    pub fields: FormState,
}

impl RelayPayload {
    /// Subject, reply-to and flattened fields for the current form.
    pub fn build(schema: &FormSchema, form: &FormState, product: &str) -> Self {
        Self {
            subject: schema.subject_line(product, form.identity_name(), form.platform),
            reply_to: form.reply_to().map(str::to_string),
            fields: form.clone(),
        }
    }

    /// Serialized request body.
    pub fn to_json(&self) -> RelayResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What came back from the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayResponse {
    /// HTTP status code.
    pub status: u16,
}

impl RelayResponse {
    /// Any 2xx.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can deliver a payload to the relay endpoint.
#[allow(async_fn_in_trait)]
pub trait Relay {
    /// Post once. Non-2xx statuses are returned, not raised.
    async fn post(&self, payload: &RelayPayload) -> RelayResult<RelayResponse>;
}
