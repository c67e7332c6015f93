use std::fmt;

use crate::transport::fetch::RequestMode;

#[derive(Debug)]
pub enum TransportError {
    /// The request could not be built (bad endpoint URL, body encoding)
    RequestBuild { context: String, message: String },

    /// The request failed on the wire (DNS, connect, TLS, broken transfer)
    Network { mode: RequestMode, message: String },
}

impl TransportError {
    /// The request mode the error occurred under, when known.
    pub fn mode(&self) -> Option<RequestMode> {
        match self {
            TransportError::Network { mode, .. } => Some(*mode),
            TransportError::RequestBuild { .. } => None,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestBuild { context, message } => {
                write!(f, "Failed to build request ({}): {}", context, message)
            }
            // The raw message is what ends up in the error popup
            TransportError::Network { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for TransportError {}
