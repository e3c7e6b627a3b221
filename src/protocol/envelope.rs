// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-RPC 2.0 frames as spoken by Shelly Gen2 firmware.
//!
//! Requests carry `jsonrpc`, `id`, `method` and an optional `params` object.
//! Replies carry the request `id`, the device id in `src`, and either a
//! `result` or an `error` object. Replies from some firmware versions omit
//! `jsonrpc`, so it is not required when decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::operation::Params;

/// Protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC request frame.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::Params;
/// use shelly_rpc::protocol::envelope::RpcRequest;
///
/// let params = Params::new().with("id", 0u16).with("on", true);
/// let request = RpcRequest::new(1, "Switch.Set", &params);
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"jsonrpc":"2.0","id":1,"method":"Switch.Set","params":{"id":0,"on":true}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest<'a> {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// Request id echoed by the device.
    pub id: u64,
    /// Method name.
    pub method: &'a str,
    /// Parameter object, omitted when the call has no parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl<'a> RpcRequest<'a> {
    /// Builds a request frame for a method call.
    #[must_use]
    pub fn new(id: u64, method: &'a str, params: &Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params: (!params.is_empty()).then(|| params.to_json()),
        }
    }
}

/// Error object of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorData {
    /// Error code, e.g. `-103` for an invalid argument.
    pub code: i64,
    /// Error message.
    #[serde(default)]
    pub message: String,
}

/// A JSON-RPC response frame.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    /// Id of the request this frame answers.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Id of the replying device.
    #[serde(default)]
    pub src: Option<String>,
    /// Result object of a successful call.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error object of a failed call.
    #[serde(default)]
    pub error: Option<RpcErrorData>,
}

impl RpcResponse {
    /// Extracts the typed result of this frame.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::IdMismatch` if the frame answers another request
    /// - `ProtocolError::Device` if the device reported an error
    /// - `ProtocolError::MissingResult` if there is neither result nor error
    /// - `ProtocolError::Json` if the result does not match the record shape
    pub fn into_result<T: DeserializeOwned>(self, expected_id: u64) -> Result<T, ProtocolError> {
        if let Some(id) = &self.id
            && *id != serde_json::Value::from(expected_id)
        {
            return Err(ProtocolError::IdMismatch {
                expected: expected_id,
                actual: id.to_string(),
            });
        }

        if let Some(error) = self.error {
            return Err(ProtocolError::Device {
                code: error.code,
                message: error.message,
            });
        }

        let result = self.result.ok_or(ProtocolError::MissingResult)?;
        serde_json::from_value(result).map_err(Into::into)
    }
}
