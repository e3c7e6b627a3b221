// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Legacy HTTP GET transport.

use reqwest::{Client, StatusCode};

use crate::error::TransportError;
use crate::operation::{Params, query_path};
use crate::protocol::{Reply, Transport, read_body};

/// Transport issuing `GET /rpc/<Method>?<query>` requests.
///
/// Parameters are rendered in declaration order; the reply body is the bare
/// result record. Only HTTP 200 counts as success.
///
/// The URL goes through `reqwest::Url`, which percent-encodes quotes in the
/// query, so `type=['aenergy']` travels as `type=[%27aenergy%27]`. The device
/// decodes it back to the literal.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::Params;
/// use shelly_rpc::protocol::HttpConfig;
///
/// let transport = HttpConfig::new("192.168.1.100").into_query_transport().unwrap();
/// let params = Params::new().with("id", 1u16).with("on", true).with("toggle_after", 10u32);
/// assert_eq!(
///     transport.request_url("Switch.Set", &params),
///     "http://192.168.1.100/rpc/Switch.Set?id=1&on=true&toggle_after=10"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct QueryTransport {
    base_url: String,
    client: Client,
    timeout_ms: u64,
}

impl QueryTransport {
    pub(crate) fn new(base_url: String, client: Client, timeout_ms: u64) -> Self {
        Self {
            base_url,
            client,
            timeout_ms,
        }
    }

    /// Builds the full request URL for a call.
    #[must_use]
    pub fn request_url(&self, method: &str, params: &Params) -> String {
        format!("{}/rpc/{}", self.base_url, query_path(method, params))
    }
}

impl Transport for QueryTransport {
    async fn execute(&self, method: &str, params: &Params) -> Result<Reply, TransportError> {
        let url = self.request_url(method, params);

        tracing::debug!(url = %url, "Sending RPC query");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout_ms))?;

        let body = read_body(response, |status| status == StatusCode::OK, self.timeout_ms).await?;

        Ok(Reply::bare(body))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
