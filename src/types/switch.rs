// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch addressing and timer types.

use std::fmt;

use crate::error::ValueError;

/// Index of a switch (relay) component on a Shelly device.
///
/// Shelly Gen2 devices number their switch components from 0, so a
/// single-relay plug only has `switch:0`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::types::SwitchId;
///
/// let id = SwitchId::new(1).unwrap();
/// assert_eq!(id.value(), 1);
///
/// // Negative ids are rejected before any request is built
/// assert!(SwitchId::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SwitchId(u16);

impl SwitchId {
    /// Largest accepted switch index.
    pub const MAX: u16 = u16::MAX;

    /// Creates a switch id from a caller-supplied integer.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `id` is negative or above [`Self::MAX`].
    pub fn new(id: i64) -> Result<Self, ValueError> {
        u16::try_from(id)
            .map(Self)
            .map_err(|_| ValueError::OutOfRange {
                min: 0,
                max: i64::from(Self::MAX),
                actual: id,
            })
    }

    /// The first switch, present on every switching device.
    #[must_use]
    pub const fn first() -> Self {
        Self(0)
    }

    /// Returns the numeric value of the id.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for SwitchId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch:{}", self.0)
    }
}

/// Delay after which the device flips a switch back, in whole seconds.
///
/// Sent as the `toggle_after` parameter of `Switch.Set`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::types::ToggleAfter;
///
/// let delay = ToggleAfter::from_secs(10).unwrap();
/// assert_eq!(delay.as_secs(), 10);
///
/// assert!(ToggleAfter::from_secs(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleAfter(u32);

impl ToggleAfter {
    /// Creates a delay from a number of seconds.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonPositiveDelay` for zero or negative values, and
    /// `ValueError::OutOfRange` for values that do not fit in 32 bits.
    pub fn from_secs(secs: i64) -> Result<Self, ValueError> {
        if secs <= 0 {
            return Err(ValueError::NonPositiveDelay(secs));
        }
        u32::try_from(secs)
            .map(Self)
            .map_err(|_| ValueError::OutOfRange {
                min: 1,
                max: i64::from(u32::MAX),
                actual: secs,
            })
    }

    /// Returns the delay in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ToggleAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_id_valid() {
        for i in [0, 1, 3, 65535] {
            let id = SwitchId::new(i).unwrap();
            assert_eq!(i64::from(id.value()), i);
        }
    }

    #[test]
    fn switch_id_negative() {
        let err = SwitchId::new(-1).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                min: 0,
                max: 65535,
                actual: -1
            }
        );
    }

    #[test]
    fn switch_id_too_large() {
        assert!(SwitchId::new(65536).is_err());
    }

    #[test]
    fn switch_id_display() {
        assert_eq!(SwitchId::first().to_string(), "switch:0");
        assert_eq!(SwitchId::from(2).to_string(), "switch:2");
    }

    #[test]
    fn toggle_after_rejects_non_positive() {
        assert_eq!(
            ToggleAfter::from_secs(0).unwrap_err(),
            ValueError::NonPositiveDelay(0)
        );
        assert_eq!(
            ToggleAfter::from_secs(-1).unwrap_err(),
            ValueError::NonPositiveDelay(-1)
        );
    }

    #[test]
    fn toggle_after_display() {
        assert_eq!(ToggleAfter::from_secs(90).unwrap().to_string(), "90s");
    }
}
