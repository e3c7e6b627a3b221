// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Shelly device control.
//!
//! Each type checks its range at construction time, so an invalid argument
//! is rejected before a request is ever encoded.
//!
//! # Types
//!
//! - [`SwitchId`] - Switch component index (0-based)
//! - [`ToggleAfter`] - Auto-flip delay in seconds (> 0)
//! - [`CounterType`] - Energy counters that can be reset

mod counter;
mod switch;

pub use counter::CounterType;
pub use switch::{SwitchId, ToggleAfter};
