// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device information reply parsing.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Reply of `Shelly.GetDeviceInfo`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::DeviceInfo;
///
/// let json = r#"{
///     "name": null,
///     "id": "shellyplus1pm-441793d69718",
///     "mac": "441793D69718",
///     "model": "SNSW-001P16EU",
///     "gen": 2,
///     "fw_id": "20220527-091739/0.10.2-beta4-gecc3a61",
///     "ver": "0.10.2-beta4",
///     "app": "Plus1PM",
///     "auth_en": false,
///     "auth_domain": null
/// }"#;
/// let info: DeviceInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(info.model, "SNSW-001P16EU");
/// assert!(!info.auth_en);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceInfo {
    /// User-assigned device name, if any.
    pub name: Option<String>,

    /// Device id, e.g. `shellyplus1pm-441793d69718`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// MAC address in upper-case hex without separators.
    #[serde(deserialize_with = "null_as_default")]
    pub mac: String,

    /// Firmware slot the device booted from.
    pub slot: u32,

    /// Hardware model identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,

    /// Device generation.
    #[serde(rename = "gen")]
    pub generation: u8,

    /// Firmware build id.
    #[serde(deserialize_with = "null_as_default")]
    pub fw_id: String,

    /// Firmware version.
    #[serde(deserialize_with = "null_as_default")]
    pub ver: String,

    /// Application name, e.g. `Plus1PM`.
    #[serde(deserialize_with = "null_as_default")]
    pub app: String,

    /// Active device profile on multi-profile devices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Whether authentication is enabled.
    pub auth_en: bool,

    /// Authentication domain, when authentication is enabled.
    pub auth_domain: Option<String>,
}

impl DeviceInfo {
    /// Returns the firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        &self.ver
    }

    /// Returns whether requests to this device need credentials.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.auth_en
    }
}
