// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration shared by both transports.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ConstructionError;
use crate::protocol::{QueryTransport, RpcTransport};

/// Configuration for reaching one Shelly device over HTTP.
///
/// Every call is an independent request: no session, no connection kept
/// between calls.
///
/// # Examples
///
/// ```
/// use shelly_rpc::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.100");
/// assert_eq!(config.base_url().unwrap(), "http://192.168.1.100");
///
/// let config = HttpConfig::new("192.168.1.100")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(config.base_url().unwrap(), "http://192.168.1.100:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default per-call timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a configuration for the given host.
    ///
    /// # Arguments
    ///
    /// * `host` - IP address or hostname, optionally prefixed with `http://`
    ///   and optionally followed by `:port`
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the port. A port given inside the host string takes precedence.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host as given.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the configured port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds and validates the base URL, without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::InvalidAddress` if the host is empty,
    /// uses a scheme other than `http`, carries a path, query or
    /// credentials, or is otherwise not a valid host.
    pub fn base_url(&self) -> Result<String, ConstructionError> {
        let invalid = |why: &str| ConstructionError::InvalidAddress(format!("{:?}: {why}", self.host));

        let host = self.host.trim();
        if host.is_empty() {
            return Err(invalid("host is required"));
        }

        let with_scheme = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        let mut url = Url::parse(&with_scheme).map_err(|e| invalid(&e.to_string()))?;

        if url.scheme() != "http" {
            return Err(invalid("only http is supported"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("host is required"));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("address must not contain a path or query"));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("address must not contain credentials"));
        }
        if url.port().is_none() {
            url.set_port(Some(self.port))
                .map_err(|()| invalid("cannot set port"))?;
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// Builds the HTTP client used by both transports.
    fn build_client(&self) -> Result<Client, ConstructionError> {
        Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ConstructionError::Client)
    }

    /// Returns the timeout in milliseconds for error reporting.
    pub(crate) fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Creates a JSON-RPC transport from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError` if the address is invalid or the HTTP
    /// client cannot be created.
    pub fn into_rpc_transport(self) -> Result<RpcTransport, ConstructionError> {
        let base_url = self.base_url()?;
        let client = self.build_client()?;
        Ok(RpcTransport::new(base_url, client, self.timeout_ms()))
    }

    /// Creates a legacy query transport from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError` if the address is invalid or the HTTP
    /// client cannot be created.
    pub fn into_query_transport(self) -> Result<QueryTransport, ConstructionError> {
        let base_url = self.base_url()?;
        let client = self.build_client()?;
        Ok(QueryTransport::new(base_url, client, self.timeout_ms()))
    }
}
