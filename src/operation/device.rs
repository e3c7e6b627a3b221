// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-level operations.

use crate::operation::{Operation, Params};
use crate::response::DeviceInfo;

/// Reads identification and firmware information of the device.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::{GetDeviceInfo, Operation};
///
/// assert_eq!(GetDeviceInfo.method(), "Shelly.GetDeviceInfo");
/// assert!(GetDeviceInfo.params().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetDeviceInfo;

impl Operation for GetDeviceInfo {
    type Output = DeviceInfo;

    fn method(&self) -> &'static str {
        "Shelly.GetDeviceInfo"
    }

    fn params(&self) -> Params {
        Params::new()
    }
}
