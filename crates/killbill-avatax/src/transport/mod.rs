//! HTTP transport seam for the AvaTax client.
//!
//! The client composes a transport instead of extending an HTTP base class.
//! A transport runs one prepared exchange and reports how far it got, so
//! the caller can branch on the outcome tag rather than on error types.

use url::Url;

use crate::error::BoxedError;

mod reqwest;

pub use self::reqwest::{DEFAULT_USER_AGENT, ReqwestTransport};

/// A prepared HTTP exchange: everything the transport needs to run it.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Target URL.
    pub url: Url,
    /// Basic-auth credentials, when the endpoint requires them.
    pub basic_auth: Option<(String, String)>,
    /// Additional headers sent verbatim.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: String,
}

impl TransportRequest {
    /// Creates a request for `url` carrying `body`.
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            basic_auth: None,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Adds a header to the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches basic-auth credentials.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }
}

/// How far a single HTTP exchange got.
#[derive(Debug)]
pub enum TransportOutcome {
    /// A 2xx response arrived and its body was captured.
    Success {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// A non-2xx response arrived and its body was captured.
    ErrorWithBody {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// The exchange failed before a body could be read.
    Failed {
        /// The connection, timeout, or read failure.
        source: BoxedError,
    },
}

/// A transport that can perform one JSON POST exchange.
///
/// Implementations must not collapse HTTP error statuses into failures:
/// the service reports business rejections as HTTP errors with a document
/// body, and the caller decides what those mean.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes the exchange described by `request`.
    async fn post(&self, request: TransportRequest) -> TransportOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_accumulates_headers() {
        let url = Url::parse("https://rest.avatax.com/api/v2/transactions/create").unwrap();
        let request = TransportRequest::new(url, "{}")
            .with_header("X-Avalara-Client", "test")
            .with_header("X-Correlation-Id", "abc-123")
            .with_basic_auth("2000000000", "license");

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.headers[0].0, "X-Avalara-Client");
        assert_eq!(
            request.basic_auth,
            Some(("2000000000".to_owned(), "license".to_owned()))
        );
        assert_eq!(request.body, "{}");
    }
}
