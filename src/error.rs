// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `shelly_rpc` library.
//!
//! Failures are classified by where they happen:
//!
//! - [`ConstructionError`]: the client could not be built (bad address)
//! - [`ValueError`]: a caller argument is outside its valid range
//! - [`TransportError`]: the exchange itself failed (connection, status, timeout)
//! - [`ProtocolError`]: the reply arrived but could not be turned into a record,
//!   or the device reported a failure
//!
//! A transport failure always wins over a decode failure: no bytes exist to
//! decode when the exchange did not complete.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The client could not be constructed.
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// A caller-supplied value was rejected before any request was sent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request/reply exchange failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The reply could not be decoded, or the device reported a failure.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Returns `true` if the error came from the transport layer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` if the error came from decoding or a device-reported failure.
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

/// Errors raised while building a client.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The device address cannot be turned into a base URL.
    #[error("invalid device address: {0}")]
    InvalidAddress(String),

    /// The underlying HTTP client could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A toggle delay must be a positive number of seconds.
    #[error("toggle delay must be positive, got {0} s")]
    NonPositiveDelay(i64),
}

/// Errors raised by a transport while performing one exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The device answered with a non-success HTTP status.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Canonical reason phrase, or the reply body when the device sent one.
        reason: String,
    },

    /// No reply arrived within the per-call timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The device could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other HTTP client failure.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),
}

impl TransportError {
    /// Classifies a `reqwest` failure.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::Http(err)
        }
    }

    /// Returns the HTTP status code if the device answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while decoding a reply.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The body is not well-formed JSON or does not match the record shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The device reported an operation-level failure.
    #[error("device error {code}: {message}")]
    Device {
        /// Error code reported by the device.
        code: i64,
        /// Human-readable message reported by the device.
        message: String,
    },

    /// A JSON-RPC reply carried neither a result nor an error.
    #[error("reply carries neither result nor error")]
    MissingResult,

    /// A JSON-RPC reply answered a different request.
    #[error("reply id {actual} does not match request id {expected}")]
    IdMismatch {
        /// The id that was sent.
        expected: u64,
        /// The id found in the reply.
        actual: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
