//! AvaTax REST client.

use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use crate::TRACING_TARGET_CLIENT;
use crate::error::{Error, Result};
use crate::model::{CreateTransactionRequest, Transaction};
use crate::transport::{HttpTransport, ReqwestTransport, TransportOutcome, TransportRequest};

use super::AvaTaxConfig;

/// Client identifier sent on every request, as registered with Avalara.
pub const KILL_BILL_CLIENT_HEADER: &str = "Kill Bill; 2.0; killbill-avatax; 2.0; NA";

/// Header carrying the client identifier.
const AVALARA_CLIENT_HEADER: &str = "X-Avalara-Client";

/// Create-transaction endpoint, relative to the service URL.
const CREATE_TRANSACTION_PATH: &str = "/transactions/create";

/// REST client for the AvaTax transaction service.
///
/// The client is generic over its [`HttpTransport`] so tests can script the
/// exchange; production code uses the default [`ReqwestTransport`].
///
/// # Examples
///
/// ```ignore
/// use killbill_avatax::{AvaTaxClient, AvaTaxConfig};
///
/// let config = AvaTaxConfig::default()
///     .with_url("https://sandbox-rest.avatax.com/api/v2")
///     .with_account_id("2000000000")
///     .with_license_key("1A2B3C4D5E6F7G8H");
/// let client = AvaTaxClient::new(config)?;
/// let transaction = client.create_transaction(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AvaTaxClient<T = ReqwestTransport> {
    transport: T,
    config: AvaTaxConfig,
}

impl AvaTaxClient {
    /// Creates a client backed by a reqwest transport.
    ///
    /// Fails when the TLS context or proxy cannot be initialized.
    pub fn new(config: AvaTaxConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&config)?;
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            configured = config.is_configured(),
            "AvaTax client created"
        );
        Ok(Self { transport, config })
    }

    /// Creates a client from a Kill Bill property map.
    ///
    /// See [`AvaTaxConfig::from_properties`] for the parsing rules.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        Self::new(AvaTaxConfig::from_properties(properties))
    }
}

impl<T> AvaTaxClient<T>
where
    T: HttpTransport,
{
    /// Creates a client over a custom transport.
    pub fn with_transport(transport: T, config: AvaTaxConfig) -> Self {
        Self { transport, config }
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &AvaTaxConfig {
        &self.config
    }

    /// Gets the company code documents are filed under.
    pub fn company_code(&self) -> Option<&str> {
        self.config.company_code()
    }

    /// True when created invoice documents should be committed.
    pub fn should_commit_documents(&self) -> bool {
        self.config.commit_documents()
    }

    /// True when the service URL and credentials are configured.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Sends `request` to the create-transaction endpoint.
    ///
    /// Business rejections that the service reports with an HTTP error
    /// status but a parseable transaction body are returned as `Ok`; check
    /// [`Transaction::is_success`] and the attached messages for those.
    /// Everything else surfaces as an [`Error`] carrying its cause.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction> {
        self.post_json(CREATE_TRANSACTION_PATH, request).await
    }

    /// Serializes `payload` and POSTs it to `path` under the service URL.
    async fn post_json<P>(&self, path: &str, payload: &P) -> Result<Transaction>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let body = serde_json::to_string(payload).map_err(Error::Serialization)?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            body_bytes = body.len(),
            "posting transaction document"
        );

        let mut request = TransportRequest::new(url, body)
            .with_header(AVALARA_CLIENT_HEADER, KILL_BILL_CLIENT_HEADER);
        if let (Some(account_id), Some(license_key)) =
            (self.config.account_id(), self.config.license_key())
        {
            request = request.with_basic_auth(account_id, license_key);
        }

        match self.transport.post(request).await {
            TransportOutcome::Success { status, body } => {
                let transaction = serde_json::from_str(&body)
                    .map_err(|source| Error::invalid_response(Some(status), &body, source))?;
                tracing::debug!(target: TRACING_TARGET_CLIENT, status, "transaction created");
                Ok(transaction)
            }
            // The service reports business rejections as HTTP errors while
            // still returning a transaction document; surface those as
            // documents and let the caller inspect the messages.
            TransportOutcome::ErrorWithBody { status, body } => {
                let transaction = serde_json::from_str(&body)
                    .map_err(|source| Error::invalid_response(Some(status), &body, source))?;
                tracing::warn!(
                    target: TRACING_TARGET_CLIENT,
                    status,
                    "service returned an error document"
                );
                Ok(transaction)
            }
            TransportOutcome::Failed { source } => Err(Error::Transport(source)),
        }
    }

    /// Joins `path` onto the configured service URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.url().ok_or_else(|| {
            Error::config(
                "AvaTax URL is not set: configure the url, accountId and licenseKey properties",
            )
        })?;
        let full = format!("{}{}", base.trim_end_matches('/'), path);
        Ok(Url::parse(&full)?)
    }
}
