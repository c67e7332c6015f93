use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One submission-lifecycle event, serialized as a JSONL line.
///
/// Stages: `submit_started`, `outcome`, `popup_opened`, `popup_closed`.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: String,

    pub form_id: Option<String>,
    /// Fingerprint of the payload, correlating all events of one submission.
    pub fingerprint: Option<String>,

    pub outcome: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            stage: stage.to_string(),
            form_id: None,
            fingerprint: None,
            outcome: None,
            detail: None,
        }
    }

    pub fn with_form(mut self, form_id: &str) -> Self {
        self.form_id = Some(form_id.to_string());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }

    pub fn with_outcome(mut self, outcome: impl ToString) -> Self {
        self.outcome = Some(outcome.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
