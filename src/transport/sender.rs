use serde_json::Value;

use crate::controller::payload::SubmissionPayload;
use crate::transport::fetch::{HttpBackend, RequestMode, ReqwestBackend};

/// Classified result of one submission. Produced once; the two-attempt
/// fallback inside `send` is the only retry there is.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered {
        /// Parsed response body, present only when the readable attempt
        /// returned an explicit success indicator.
        data: Option<Value>,
        /// True when delivery was concluded from the opaque fallback and
        /// the server-side outcome could not be verified.
        opaque: bool,
    },
    Failed {
        message: String,
    },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}

/// Posts a payload to the remote script endpoint, readable mode first,
/// opaque mode as the one scripted fallback. Attempts are strictly
/// sequential; there is no other retry and no explicit timeout.
pub struct Transport {
    endpoint: String,
    backend: Box<dyn HttpBackend>,
}

impl Transport {
    pub fn new(endpoint: &str) -> Self {
        Transport {
            endpoint: endpoint.to_string(),
            backend: Box::new(ReqwestBackend::new()),
        }
    }

    pub fn with_backend(endpoint: &str, backend: Box<dyn HttpBackend>) -> Self {
        Transport {
            endpoint: endpoint.to_string(),
            backend,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the payload.
    ///
    /// Any 2xx readable response counts as delivered: the body is parsed
    /// leniently, and only an explicit `result`/`status == "success"`
    /// marker promotes it to delivered-with-data. An unparseable or
    /// failure-shaped body under a 2xx status is still delivered with no
    /// data. A non-2xx status or a wire failure triggers the opaque
    /// fallback; the first attempt's error is never surfaced.
    pub fn send(&self, payload: &SubmissionPayload) -> DeliveryOutcome {
        match self
            .backend
            .post(&self.endpoint, payload, RequestMode::Readable)
        {
            Ok(response) if response.is_success() => {
                let data = response
                    .body
                    .as_deref()
                    .and_then(|body| serde_json::from_str::<Value>(body).ok());

                match data {
                    Some(value) if indicates_success(&value) => DeliveryOutcome::Delivered {
                        data: Some(value),
                        opaque: false,
                    },
                    _ => DeliveryOutcome::Delivered {
                        data: None,
                        opaque: false,
                    },
                }
            }
            Ok(_) | Err(_) => self.send_fallback(payload),
        }
    }

    /// The opaque fallback attempt. An opaque (unreadable) response is
    /// optimistically treated as delivered: the endpoint's policy is not
    /// ours to control, and observability is traded for reliability here.
    fn send_fallback(&self, payload: &SubmissionPayload) -> DeliveryOutcome {
        match self
            .backend
            .post(&self.endpoint, payload, RequestMode::Opaque)
        {
            Ok(response) if response.is_success() || response.opaque => {
                DeliveryOutcome::Delivered {
                    data: None,
                    opaque: true,
                }
            }
            Ok(response) => DeliveryOutcome::Failed {
                message: format!("Fallback request rejected with HTTP {}", response.status),
            },
            Err(e) => DeliveryOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}

/// Best-effort success indicator in a parsed response body.
pub fn indicates_success(value: &Value) -> bool {
    ["result", "status"]
        .iter()
        .any(|key| value.get(key).and_then(Value::as_str) == Some("success"))
}
