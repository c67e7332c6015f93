use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::controller::payload::SubmissionPayload;
use crate::transport::error::TransportError;

/// How a request is issued against the remote endpoint.
///
/// `Readable` corresponds to a cross-origin request whose response status
/// and body are inspectable. `Opaque` is the best-effort fallback: the
/// request is sent but the response is not inspectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    Readable,
    Opaque,
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMode::Readable => write!(f, "readable"),
            RequestMode::Opaque => write!(f, "opaque"),
        }
    }
}

/// What came back from one POST attempt.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code; 0 when the response is opaque.
    pub status: u16,
    /// True when the response cannot be inspected at all.
    pub opaque: bool,
    /// Response body text, when readable.
    pub body: Option<String>,
}

impl FetchResponse {
    pub fn readable(status: u16, body: Option<&str>) -> Self {
        FetchResponse {
            status,
            opaque: false,
            body: body.map(str::to_string),
        }
    }

    pub fn opaque() -> Self {
        FetchResponse {
            status: 0,
            opaque: true,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the fallback policy and the actual HTTP stack.
/// Production uses `ReqwestBackend`; tests script a `MockBackend`.
pub trait HttpBackend {
    fn post(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
        mode: RequestMode,
    ) -> Result<FetchResponse, TransportError>;
}

// ============================================================================
// Reqwest backend
// ============================================================================

/// Blocking reqwest backend posting the payload as a multipart form.
pub struct ReqwestBackend {
    client: reqwest::blocking::Client,
}

impl ReqwestBackend {
    pub fn new() -> Self {
        ReqwestBackend {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBackend for ReqwestBackend {
    fn post(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
        mode: RequestMode,
    ) -> Result<FetchResponse, TransportError> {
        let mut form = reqwest::blocking::multipart::Form::new();
        for (name, value) in payload.entries() {
            form = form.text(name.to_string(), value.to_string());
        }

        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .map_err(|e| TransportError::Network {
                mode,
                message: e.to_string(),
            })?;

        match mode {
            RequestMode::Readable => {
                let status = response.status().as_u16();
                // Body read failures are tolerated; a missing body never
                // turns a 2xx into a failure
                let body = response.text().ok();
                Ok(FetchResponse {
                    status,
                    opaque: false,
                    body,
                })
            }
            // The response is deliberately not inspected in opaque mode
            RequestMode::Opaque => Ok(FetchResponse::opaque()),
        }
    }
}

// ============================================================================
// Mock backend (for testing without a network)
// ============================================================================

#[derive(Default)]
struct MockState {
    responses: RefCell<VecDeque<Result<FetchResponse, TransportError>>>,
    calls: RefCell<Vec<RequestMode>>,
}

/// Scripted backend: pops one pre-loaded result per `post` call and records
/// the mode of every call, so tests can assert the attempt order. Clones
/// share the same script and call log, letting a test keep a handle while
/// the transport owns the boxed backend.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Rc<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: FetchResponse) -> Self {
        self.state.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub fn with_error(self, mode: RequestMode, message: &str) -> Self {
        self.state
            .responses
            .borrow_mut()
            .push_back(Err(TransportError::Network {
                mode,
                message: message.to_string(),
            }));
        self
    }

    /// Modes of all `post` calls made so far, in order.
    pub fn calls(&self) -> Vec<RequestMode> {
        self.state.calls.borrow().clone()
    }
}

impl HttpBackend for MockBackend {
    fn post(
        &self,
        _endpoint: &str,
        _payload: &SubmissionPayload,
        mode: RequestMode,
    ) -> Result<FetchResponse, TransportError> {
        self.state.calls.borrow_mut().push(mode);
        self.state
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network {
                    mode,
                    message: "mock backend exhausted".to_string(),
                })
            })
    }
}
