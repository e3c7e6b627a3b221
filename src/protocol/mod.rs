// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for talking to Shelly devices.
//!
//! A transport performs exactly one request/reply exchange per call and knows
//! nothing about result shapes. Decoding happens afterwards through
//! [`Reply::decode`].
//!
//! # Transports
//!
//! - [`RpcTransport`]: JSON-RPC 2.0 frames POSTed to `/rpc`
//! - [`QueryTransport`]: legacy `GET /rpc/<Method>?<query>` requests
//!
//! Both apply the per-call timeout from [`HttpConfig`], never retry, and do
//! not keep idle connections around between calls.

mod config;
pub mod envelope;
mod query;
mod rpc;

pub use config::HttpConfig;
pub use query::QueryTransport;
pub use rpc::RpcTransport;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ProtocolError, TransportError};
use crate::operation::Params;

/// How a reply body is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// The body is a JSON-RPC response frame answering the given request id.
    Envelope {
        /// Id of the request this reply answers.
        id: u64,
    },
    /// The body is the result record itself.
    Bare,
}

/// Raw reply from one exchange.
#[derive(Debug, Clone)]
pub struct Reply {
    body: String,
    framing: Framing,
}

impl Reply {
    /// Creates a reply with the given body and framing.
    #[must_use]
    pub fn new(body: impl Into<String>, framing: Framing) -> Self {
        Self {
            body: body.into(),
            framing,
        }
    }

    /// Creates a reply whose body is the record itself.
    #[must_use]
    pub fn bare(body: impl Into<String>) -> Self {
        Self::new(body, Framing::Bare)
    }

    /// Returns the raw reply body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns how the body is framed.
    #[must_use]
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Decodes the reply into a result record.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the body is not valid JSON, does not match
    /// the record shape, or is a JSON-RPC frame carrying a device error.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ProtocolError> {
        match self.framing {
            Framing::Bare => serde_json::from_str(&self.body).map_err(Into::into),
            Framing::Envelope { id } => {
                let frame: envelope::RpcResponse = serde_json::from_str(&self.body)?;
                frame.into_result(id)
            }
        }
    }
}

/// A transport that can execute one Shelly RPC call.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends one call and returns the raw reply.
    ///
    /// # Arguments
    ///
    /// * `method` - The wire method name, e.g. `"Switch.Set"`
    /// * `params` - The call parameters in declaration order
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on connection failure, timeout or a
    /// non-success HTTP status.
    async fn execute(&self, method: &str, params: &Params) -> Result<Reply, TransportError>;

    /// Returns the base URL of the device.
    fn base_url(&self) -> &str;
}

/// Reads the body of a response, turning unaccepted statuses into errors.
async fn read_body(
    response: Response,
    accept: impl Fn(StatusCode) -> bool,
    timeout_ms: u64,
) -> Result<String, TransportError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::from_reqwest(e, timeout_ms))?;

    if !accept(status) {
        tracing::warn!(status = status.as_u16(), body = %body, "Device rejected request");
        let reason = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown").to_string()
        } else {
            body.trim().to_string()
        };
        return Err(TransportError::Status {
            status: status.as_u16(),
            reason,
        });
    }

    tracing::debug!(body = %body, "Received reply");
    Ok(body)
}
