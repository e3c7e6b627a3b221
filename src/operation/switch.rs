// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch component operations.
//!
//! These cover output control (`Switch.Set`, `Switch.Toggle`), telemetry
//! (`Switch.GetStatus`), configuration readout (`Switch.GetConfig`) and
//! energy counter reset (`Switch.ResetCounters`).

use crate::operation::{Operation, Params};
use crate::response::{ResetCountersResponse, SwitchConfig, SwitchStatus, WasOnResponse};
use crate::types::{CounterType, SwitchId, ToggleAfter};

/// Sets a switch output on or off, optionally flipping it back after a delay.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::{Operation, SwitchSet};
/// use shelly_rpc::types::SwitchId;
///
/// let on = SwitchSet::on(SwitchId::first());
/// assert_eq!(on.query_path(), "Switch.Set?id=0&on=true");
///
/// let off = SwitchSet::off(SwitchId::from(2));
/// assert_eq!(off.query_path(), "Switch.Set?id=2&on=false");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSet {
    /// The switch to control.
    pub id: SwitchId,
    /// Desired output state.
    pub on: bool,
    /// Optional delay after which the device flips the output back.
    pub toggle_after: Option<ToggleAfter>,
}

impl SwitchSet {
    /// Creates an operation that turns a switch on.
    #[must_use]
    pub const fn on(id: SwitchId) -> Self {
        Self {
            id,
            on: true,
            toggle_after: None,
        }
    }

    /// Creates an operation that turns a switch off.
    #[must_use]
    pub const fn off(id: SwitchId) -> Self {
        Self {
            id,
            on: false,
            toggle_after: None,
        }
    }

    /// Adds an auto-flip delay.
    #[must_use]
    pub const fn toggle_after(mut self, delay: ToggleAfter) -> Self {
        self.toggle_after = Some(delay);
        self
    }
}

impl Operation for SwitchSet {
    type Output = WasOnResponse;

    fn method(&self) -> &'static str {
        "Switch.Set"
    }

    fn params(&self) -> Params {
        Params::new()
            .with("id", self.id.value())
            .with("on", self.on)
            .with_opt("toggle_after", self.toggle_after.map(|d| d.as_secs()))
    }
}

/// Flips the output of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToggle {
    /// The switch to toggle.
    pub id: SwitchId,
}

impl Operation for SwitchToggle {
    type Output = WasOnResponse;

    fn method(&self) -> &'static str {
        "Switch.Toggle"
    }

    fn params(&self) -> Params {
        Params::new().with("id", self.id.value())
    }
}

/// Reads live telemetry of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchGetStatus {
    /// The switch to read.
    pub id: SwitchId,
}

impl Operation for SwitchGetStatus {
    type Output = SwitchStatus;

    fn method(&self) -> &'static str {
        "Switch.GetStatus"
    }

    fn params(&self) -> Params {
        Params::new().with("id", self.id.value())
    }
}

/// Reads the configuration of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchGetConfig {
    /// The switch to read.
    pub id: SwitchId,
}

impl Operation for SwitchGetConfig {
    type Output = SwitchConfig;

    fn method(&self) -> &'static str {
        "Switch.GetConfig"
    }

    fn params(&self) -> Params {
        Params::new().with("id", self.id.value())
    }
}

/// Resets the energy counters of a switch.
///
/// Both the consumed and the returned energy counters are cleared. The
/// counter list goes out as the literal string `['aenergy','ret_aenergy']`
/// on every transport, since that is the form the firmware parses.
///
/// # Examples
///
/// ```
/// use shelly_rpc::operation::{Operation, SwitchResetCounters};
/// use shelly_rpc::types::SwitchId;
///
/// let op = SwitchResetCounters { id: SwitchId::first() };
/// assert_eq!(
///     op.query_path(),
///     "Switch.ResetCounters?id=0&type=['aenergy','ret_aenergy']"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchResetCounters {
    /// The switch whose counters are reset.
    pub id: SwitchId,
}

impl Operation for SwitchResetCounters {
    type Output = ResetCountersResponse;

    fn method(&self) -> &'static str {
        "Switch.ResetCounters"
    }

    fn params(&self) -> Params {
        Params::new()
            .with("id", self.id.value())
            .with("type", CounterType::list_literal(&CounterType::ALL))
    }
}
