// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed records for Shelly RPC replies.
//!
//! Each record mirrors the `result` object of one RPC method. Decoding is
//! lenient about shape and strict about types:
//!
//! - unknown fields are ignored
//! - missing fields, and scalar fields sent as `null`, take the zero value
//! - a value of the wrong type fails the decode
//!
//! All electrical, energy, temperature, delay and limit quantities are `f64`.

mod device;
mod switch;

pub use device::DeviceInfo;
pub use switch::{
    CounterTotal, EnergyCounter, ResetCountersResponse, SwitchConfig, SwitchStatus, Temperature,
    WasOnResponse,
};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// Some firmware versions report `null` for sensors that are not ready yet.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
