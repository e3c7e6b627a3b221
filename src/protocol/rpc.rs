// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-RPC over HTTP transport.

use reqwest::Client;

use crate::error::TransportError;
use crate::operation::Params;
use crate::protocol::envelope::RpcRequest;
use crate::protocol::{Framing, Reply, Transport, read_body};

/// Request id used for every call.
///
/// Each exchange runs on its own request, so there is nothing to correlate
/// across calls and a constant id keeps encoding deterministic.
const REQUEST_ID: u64 = 1;

/// Transport sending JSON-RPC 2.0 frames to the device's `/rpc` endpoint.
///
/// # Examples
///
/// ```no_run
/// use shelly_rpc::operation::Params;
/// use shelly_rpc::protocol::{HttpConfig, Transport};
/// use shelly_rpc::response::SwitchStatus;
///
/// # async fn example() -> shelly_rpc::Result<()> {
/// let transport = HttpConfig::new("192.168.1.100").into_rpc_transport()?;
/// let reply = transport
///     .execute("Switch.GetStatus", &Params::new().with("id", 0u16))
///     .await?;
/// let status: SwitchStatus = reply.decode()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RpcTransport {
    base_url: String,
    endpoint: String,
    client: Client,
    timeout_ms: u64,
}

impl RpcTransport {
    pub(crate) fn new(base_url: String, client: Client, timeout_ms: u64) -> Self {
        let endpoint = format!("{base_url}/rpc");
        Self {
            base_url,
            endpoint,
            client,
            timeout_ms,
        }
    }

    /// Returns the URL calls are POSTed to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for RpcTransport {
    async fn execute(&self, method: &str, params: &Params) -> Result<Reply, TransportError> {
        let request = RpcRequest::new(REQUEST_ID, method, params);

        tracing::debug!(url = %self.endpoint, method, params = ?request.params, "Sending RPC call");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, self.timeout_ms))?;

        let body = read_body(response, |status| status.is_success(), self.timeout_ms).await?;

        Ok(Reply::new(body, Framing::Envelope { id: REQUEST_ID }))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
