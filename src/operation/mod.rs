// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelly RPC operation definitions.
//!
//! Every operation the library can issue is a small value type implementing
//! [`Operation`]. It names the wire method, lists its parameters in the order
//! the device expects them, and declares the record its reply decodes into.
//!
//! # Available Operations
//!
//! | Operation | Method | Result |
//! |-----------|--------|--------|
//! | [`SwitchSet`] | `Switch.Set` | [`WasOnResponse`](crate::response::WasOnResponse) |
//! | [`SwitchToggle`] | `Switch.Toggle` | [`WasOnResponse`](crate::response::WasOnResponse) |
//! | [`SwitchGetStatus`] | `Switch.GetStatus` | [`SwitchStatus`](crate::response::SwitchStatus) |
//! | [`SwitchGetConfig`] | `Switch.GetConfig` | [`SwitchConfig`](crate::response::SwitchConfig) |
//! | [`SwitchResetCounters`] | `Switch.ResetCounters` | [`ResetCountersResponse`](crate::response::ResetCountersResponse) |
//! | [`GetDeviceInfo`] | `Shelly.GetDeviceInfo` | [`DeviceInfo`](crate::response::DeviceInfo) |
//!
//! # Examples
//!
//! ```
//! use shelly_rpc::operation::{Operation, SwitchSet};
//! use shelly_rpc::types::{SwitchId, ToggleAfter};
//!
//! let op = SwitchSet::on(SwitchId::from(1)).toggle_after(ToggleAfter::from_secs(10).unwrap());
//!
//! assert_eq!(op.method(), "Switch.Set");
//! assert_eq!(op.query_path(), "Switch.Set?id=1&on=true&toggle_after=10");
//! ```

mod device;
mod switch;

pub use device::GetDeviceInfo;
pub use switch::{SwitchGetConfig, SwitchGetStatus, SwitchResetCounters, SwitchSet, SwitchToggle};

use std::fmt;

use serde::de::DeserializeOwned;

/// An RPC operation that can be issued against a Shelly device.
pub trait Operation {
    /// The record a successful reply decodes into.
    type Output: DeserializeOwned;

    /// Returns the wire method name, e.g. `"Switch.Set"`.
    fn method(&self) -> &'static str;

    /// Returns the call parameters in declaration order.
    fn params(&self) -> Params;

    /// Returns the legacy GET path segment for this call.
    ///
    /// Format: `<method>?<query>` or just `<method>` without parameters.
    fn query_path(&self) -> String {
        query_path(self.method(), &self.params())
    }
}

/// Builds `<method>?<query>` from a method name and its parameters.
#[must_use]
pub fn query_path(method: &str, params: &Params) -> String {
    if params.is_empty() {
        method.to_string()
    } else {
        format!("{method}?{}", params.to_query())
    }
}

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// An integer, rendered in decimal.
    Int(i64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A string, rendered unescaped. On the legacy transport the URL layer
    /// still percent-encodes characters such as `'` on the wire.
    Literal(String),
}

impl ParamValue {
    /// Returns the value as a JSON value for the call object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::Literal(v) => serde_json::Value::String(v.clone()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Literal(v) => f.write_str(v),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// Ordered call parameters.
///
/// Order is significant: the legacy transport renders pairs exactly in the
/// order they were added. Optional parameters without a value are never
/// stored.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::Params;
///
/// let params = Params::new()
///     .with("id", 0u16)
///     .with("on", true)
///     .with_opt("toggle_after", None::<u32>);
///
/// assert_eq!(params.to_query(), "id=0&on=true");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, ParamValue)>);

impl Params {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// Appends a parameter only when a value is present.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.0.iter().map(|(n, v)| (*n, v))
    }

    /// Renders the parameters as `key=value` pairs joined by `&`.
    #[must_use]
    pub fn to_query(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders the parameters as a JSON object for the structured call.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}
