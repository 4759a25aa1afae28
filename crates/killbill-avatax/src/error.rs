//! Error types for AvaTax client operations.

use thiserror::Error;

/// Boxed error type for failures with arbitrary underlying causes.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for AvaTax operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Bytes of a rejected response body kept for diagnostics.
const BODY_SNIPPET_LIMIT: usize = 512;

/// Error type for AvaTax client operations.
///
/// Every failure a call can produce is collapsed into this one type, with
/// the underlying cause preserved as the error source. Responses that carry
/// an HTTP error status but still parse as a transaction document are not
/// errors: [`create_transaction`] returns those as `Ok` and leaves result
/// inspection to the caller.
///
/// [`create_transaction`]: crate::AvaTaxClient::create_transaction
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP transport could not be built (TLS context, proxy).
    #[error("failed to initialize the HTTP transport: {0}")]
    Initialization(#[source] reqwest::Error),

    /// The client is missing configuration required for the call.
    #[error("configuration error: {message}")]
    Config {
        /// What is missing or inconsistent.
        message: String,
    },

    /// The request payload could not be encoded as JSON.
    #[error("failed to serialize the request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The service URL and endpoint path do not form a valid URL.
    #[error("invalid request URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The exchange failed before a response body could be read.
    #[error("transport error: {0}")]
    Transport(#[source] BoxedError),

    /// A response body could not be parsed as a transaction document.
    #[error("response is not a transaction document{}", status.as_ref().map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    InvalidResponse {
        /// HTTP status of the response, when one was received.
        status: Option<u16>,
        /// Leading bytes of the offending body.
        body: String,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a transport error from any boxable cause.
    pub fn transport(source: impl Into<BoxedError>) -> Self {
        Self::Transport(source.into())
    }

    /// Creates an unparseable-response error, keeping a bounded body snippet.
    pub(crate) fn invalid_response(
        status: Option<u16>,
        body: &str,
        source: serde_json::Error,
    ) -> Self {
        Self::InvalidResponse {
            status,
            body: snippet(body),
            source,
        }
    }

    /// HTTP status attached to the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status, .. } => *status,
            _ => None,
        }
    }
}

/// Truncates `body` to the snippet limit without splitting a code point.
fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LIMIT {
        return body.to_owned();
    }
    let mut end = BODY_SNIPPET_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_failure() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("url is not set");
        assert_eq!(err.to_string(), "configuration error: url is not set");
    }

    #[test]
    fn test_invalid_response_display_includes_status() {
        let err = Error::invalid_response(Some(502), "Bad Gateway", parse_failure());
        assert_eq!(
            err.to_string(),
            "response is not a transaction document (HTTP 502)"
        );
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_invalid_response_display_without_status() {
        let err = Error::invalid_response(None, "", parse_failure());
        assert_eq!(err.to_string(), "response is not a transaction document");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_body_snippet_is_bounded() {
        let body = "é".repeat(BODY_SNIPPET_LIMIT);
        let err = Error::invalid_response(Some(500), &body, parse_failure());
        let Error::InvalidResponse { body: kept, .. } = err else {
            unreachable!();
        };
        assert!(kept.len() <= BODY_SNIPPET_LIMIT);
        assert!(kept.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_transport_error_preserves_source() {
        let err = Error::transport(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "transport error: connection reset");
        assert!(std::error::Error::source(&err).is_some());
    }
}
