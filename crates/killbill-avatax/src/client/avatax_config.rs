//! Configuration for the AvaTax client.

use std::collections::HashMap;
use std::time::Duration;

/// Prefix shared by every plugin configuration property.
pub const PROPERTY_PREFIX: &str = "org.killbill.billing.plugin.avatax.";

/// Connect timeout applied when the property is absent.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Read timeout applied when the property is absent.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Configuration for the AvaTax client.
///
/// Usually read from the Kill Bill plugin properties with
/// [`from_properties`](Self::from_properties); the fluent setters exist for
/// tests and direct embedding.
///
/// # Examples
///
/// ```ignore
/// use killbill_avatax::AvaTaxConfig;
///
/// let config = AvaTaxConfig::default()
///     .with_url("https://sandbox-rest.avatax.com/api/v2")
///     .with_account_id("2000000000")
///     .with_license_key("1A2B3C4D5E6F7G8H")
///     .with_company_code("DEFAULT");
/// assert!(config.is_configured());
/// ```
#[derive(Clone)]
pub struct AvaTaxConfig {
    /// Base URL of the AvaTax REST endpoint
    url: Option<String>,

    /// Avalara account ID, the basic-auth username
    account_id: Option<String>,

    /// Avalara license key, the basic-auth password
    license_key: Option<String>,

    /// Company code documents are filed under
    company_code: Option<String>,

    /// Whether created invoice documents should be committed
    commit_documents: bool,

    /// Whether to verify TLS certificates
    strict_ssl: bool,

    /// Timeout for establishing connections
    connect_timeout: Duration,

    /// Timeout for reading a response
    read_timeout: Duration,

    /// Proxy host, used only together with the port
    proxy_host: Option<String>,

    /// Proxy port, used only together with the host
    proxy_port: Option<u16>,
}

impl AvaTaxConfig {
    /// Reads configuration from a Kill Bill property map.
    ///
    /// Every key is looked up under [`PROPERTY_PREFIX`]. Empty values count
    /// as missing, unparseable numbers fall back to their defaults, and
    /// booleans are true only for a case-insensitive `"true"`.
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            properties
                .get(&format!("{PROPERTY_PREFIX}{key}"))
                .filter(|value| !value.is_empty())
                .cloned()
        };

        Self {
            url: get("url"),
            account_id: get("accountId"),
            license_key: get("licenseKey"),
            company_code: get("companyCode"),
            commit_documents: get("commitDocuments")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            strict_ssl: get("strictSSL")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            connect_timeout: get("connectTimeout")
                .and_then(|value| value.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: get("readTimeout")
                .and_then(|value| value.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_READ_TIMEOUT),
            proxy_host: get("proxyHost"),
            proxy_port: get("proxyPort").and_then(|value| value.parse().ok()),
        }
    }

    /// Gets the base URL of the AvaTax REST endpoint.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Gets the Avalara account ID.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Gets the Avalara license key.
    pub fn license_key(&self) -> Option<&str> {
        self.license_key.as_deref()
    }

    /// Gets the company code documents are filed under.
    pub fn company_code(&self) -> Option<&str> {
        self.company_code.as_deref()
    }

    /// Gets whether created invoice documents should be committed.
    pub fn commit_documents(&self) -> bool {
        self.commit_documents
    }

    /// Gets whether TLS certificates are verified.
    pub fn strict_ssl(&self) -> bool {
        self.strict_ssl
    }

    /// Gets the connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Gets the read timeout.
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Gets the proxy host.
    pub fn proxy_host(&self) -> Option<&str> {
        self.proxy_host.as_deref()
    }

    /// Gets the proxy port.
    pub fn proxy_port(&self) -> Option<u16> {
        self.proxy_port
    }

    /// Proxy URL assembled from host and port, when both are set.
    pub fn proxy_url(&self) -> Option<String> {
        match (&self.proxy_host, self.proxy_port) {
            (Some(host), Some(port)) => Some(format!("http://{host}:{port}")),
            _ => None,
        }
    }

    /// True when the service URL and both credentials are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.account_id.is_some() && self.license_key.is_some()
    }

    /// Sets the base URL of the AvaTax REST endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the Avalara account ID.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Sets the Avalara license key.
    pub fn with_license_key(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = Some(license_key.into());
        self
    }

    /// Sets the company code.
    pub fn with_company_code(mut self, company_code: impl Into<String>) -> Self {
        self.company_code = Some(company_code.into());
        self
    }

    /// Sets whether created invoice documents should be committed.
    pub fn with_commit_documents(mut self, commit_documents: bool) -> Self {
        self.commit_documents = commit_documents;
        self
    }

    /// Sets whether to verify TLS certificates.
    pub fn with_strict_ssl(mut self, strict_ssl: bool) -> Self {
        self.strict_ssl = strict_ssl;
        self
    }

    /// Sets the connect timeout.
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Sets the read timeout.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Sets the proxy host and port.
    pub fn with_proxy(mut self, host: impl Into<String>, port: u16) -> Self {
        self.proxy_host = Some(host.into());
        self.proxy_port = Some(port);
        self
    }
}

impl Default for AvaTaxConfig {
    fn default() -> Self {
        Self {
            url: None,
            account_id: None,
            license_key: None,
            company_code: None,
            commit_documents: false,
            strict_ssl: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            proxy_host: None,
            proxy_port: None,
        }
    }
}

impl std::fmt::Debug for AvaTaxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvaTaxConfig")
            .field("url", &self.url)
            .field("account_id", &self.account_id)
            .field("license_key", &self.license_key.as_deref().map(|_| "***"))
            .field("company_code", &self.company_code)
            .field("commit_documents", &self.commit_documents)
            .field("strict_ssl", &self.strict_ssl)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("proxy_host", &self.proxy_host)
            .field("proxy_port", &self.proxy_port)
            .finish()
    }
}
