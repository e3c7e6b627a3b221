// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy counter selection for `Switch.ResetCounters`.

use std::fmt;

/// An energy counter kept by a metering switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterType {
    /// Active energy consumed (`aenergy`).
    ActiveEnergy,
    /// Active energy returned to the grid (`ret_aenergy`).
    ReturnedEnergy,
}

impl CounterType {
    /// Every counter the device keeps, in the order the device lists them.
    pub const ALL: [Self; 2] = [Self::ActiveEnergy, Self::ReturnedEnergy];

    /// Returns the counter's wire key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveEnergy => "aenergy",
            Self::ReturnedEnergy => "ret_aenergy",
        }
    }

    /// Renders a counter list in the lexical form the firmware expects for the
    /// `type` parameter: a bracketed list of single-quoted names with no spaces.
    ///
    /// The value travels as one opaque string on both transports, not as a
    /// JSON array.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelly_rpc::types::CounterType;
    ///
    /// assert_eq!(
    ///     CounterType::list_literal(&CounterType::ALL),
    ///     "['aenergy','ret_aenergy']"
    /// );
    /// ```
    #[must_use]
    pub fn list_literal(counters: &[Self]) -> String {
        let names: Vec<String> = counters.iter().map(|c| format!("'{}'", c.as_str())).collect();
        format!("[{}]", names.join(","))
    }
}

impl fmt::Display for CounterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
