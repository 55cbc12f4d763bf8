//! Out-of-band `WEBHOOK_EVENT` envelope that patches the ambient event.
//!
//! Each envelope field overrides independently; omitted fields keep the
//! ambient value. A malformed envelope never aborts the run.

use serde_json::Value;

use crate::{AmbientEventSource, Repository};

pub const WEBHOOK_EVENT_ENV: &str = "WEBHOOK_EVENT";

#[derive(Debug, Clone, PartialEq, Default)]
/// Parsed `{event?, payload?}` override envelope.
pub struct WebhookOverrideEnvelope {
    pub event: Option<String>,
    pub payload: Option<Value>,
}

impl WebhookOverrideEnvelope {
    /// Parse envelope text; `Ok(None)` when the text is empty.
    pub fn parse(raw: &str) -> Result<Option<Self>, String> {
        if raw.is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(raw).map_err(|error| error.to_string())?;
        let Value::Object(mut object) = value else {
            return Err("envelope is not a JSON object".to_string());
        };

        let event = object
            .get("event")
            .and_then(Value::as_str)
            .filter(|event| !event.is_empty())
            .map(str::to_string);
        let payload = object.remove("payload").filter(|payload| !payload.is_null());
        Ok(Some(Self { event, payload }))
    }

    fn repository(&self) -> Option<Repository> {
        self.payload
            .as_ref()?
            .get("repository")
            .and_then(Repository::from_payload_repository)
    }

    fn sender_login(&self) -> Option<&str> {
        self.payload
            .as_ref()?
            .pointer("/sender/login")
            .and_then(Value::as_str)
            .filter(|login| !login.is_empty())
    }

    /// Produce the patched event source.
    pub fn apply(self, ambient: AmbientEventSource) -> AmbientEventSource {
        let repository = self.repository();
        let actor = self.sender_login().map(str::to_string);
        let mut patched = ambient;

        if let Some(event) = self.event {
            tracing::debug!(event_name = %event, "eventName overridden from webhook event");
            patched.event_name = event;
        }
        if let Some(payload) = self.payload {
            if payload.get("repository").is_some() && repository.is_none() {
                tracing::debug!("webhook payload repository lacks owner.login or name; keeping ambient repository");
            }
            tracing::debug!("payload overridden from webhook event");
            patched.payload = payload;
        }
        if let Some(repository) = repository {
            tracing::debug!(
                repository = repository.full_name(),
                "repository overridden from webhook event"
            );
            patched.repository = repository;
        }
        if let Some(actor) = actor {
            tracing::debug!(actor = %actor, "actor overridden from webhook event");
            patched.actor = actor;
        }
        patched
    }
}

/// Apply an optional `WEBHOOK_EVENT` envelope to the ambient event source.
///
/// Absent or empty text leaves the source untouched; unparseable text logs a
/// warning and leaves it untouched.
pub fn apply_webhook_override(
    ambient: AmbientEventSource,
    envelope_text: Option<&str>,
) -> AmbientEventSource {
    let Some(raw) = envelope_text else {
        return ambient;
    };
    match WebhookOverrideEnvelope::parse(raw) {
        Ok(Some(envelope)) => envelope.apply(ambient),
        Ok(None) => ambient,
        Err(error) => {
            tracing::warn!(error = %error, "Failed to parse WEBHOOK_EVENT");
            ambient
        }
    }
}
