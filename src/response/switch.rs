// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch component reply parsing.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Reply of `Switch.Set` and `Switch.Toggle`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::WasOnResponse;
///
/// let response: WasOnResponse = serde_json::from_str(r#"{"was_on": true}"#).unwrap();
/// assert!(response.was_on);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct WasOnResponse {
    /// Output state before the call took effect.
    pub was_on: bool,
}

/// Reply of `Switch.GetStatus`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::SwitchStatus;
///
/// let json = r#"{
///     "id": 0,
///     "source": "HTTP_in",
///     "output": true,
///     "apower": 8.9,
///     "voltage": 237.5,
///     "current": 0.068,
///     "aenergy": {"total": 6.532, "by_minute": [45.199, 47.141, 88.397], "minute_ts": 1654511972},
///     "temperature": {"tC": 23.5, "tF": 74.4}
/// }"#;
/// let status: SwitchStatus = serde_json::from_str(json).unwrap();
/// assert!(status.is_on());
/// assert_eq!(status.aenergy.by_minute.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitchStatus {
    /// Switch component id.
    pub id: u16,

    /// Source of the last command, e.g. `"init"`, `"HTTP_in"`, `"button"`.
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,

    /// Current output state.
    pub output: bool,

    /// Unix time the running timer started at, if a timer is running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_started_at: Option<f64>,

    /// Duration of the running timer in seconds, if a timer is running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_duration: Option<f64>,

    /// Active power in Watts.
    #[serde(deserialize_with = "null_as_default")]
    pub apower: f64,

    /// Supply voltage in Volts.
    #[serde(deserialize_with = "null_as_default")]
    pub voltage: f64,

    /// Current in Amperes.
    #[serde(deserialize_with = "null_as_default")]
    pub current: f64,

    /// Network frequency in Hz.
    #[serde(deserialize_with = "null_as_default")]
    pub freq: f64,

    /// Power factor.
    #[serde(deserialize_with = "null_as_default")]
    pub pf: f64,

    /// Consumed active energy.
    pub aenergy: EnergyCounter,

    /// Active energy returned to the grid.
    pub ret_aenergy: EnergyCounter,

    /// Internal temperature.
    pub temperature: Temperature,

    /// Active error conditions, e.g. `"overtemp"`, `"overpower"`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl SwitchStatus {
    /// Returns whether the output is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.output
    }

    /// Returns whether an auto-flip timer is running.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer_started_at.is_some()
    }

    /// Returns whether the device reports any error condition.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns whether the switch is currently drawing power.
    #[must_use]
    pub fn is_consuming(&self) -> bool {
        self.apower > 0.0
    }
}

/// An energy counter with per-minute history.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyCounter {
    /// Total energy in Watt-hours.
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,

    /// Energy per minute in milliwatt-hours, most recent complete minute first.
    pub by_minute: Vec<f64>,

    /// Unix timestamp of the start of the current minute.
    pub minute_ts: i64,
}

impl EnergyCounter {
    /// Returns the energy of the last complete minute in milliwatt-hours.
    #[must_use]
    pub fn last_minute(&self) -> Option<f64> {
        self.by_minute.first().copied()
    }

    /// Returns [`minute_ts`](Self::minute_ts) as a UTC timestamp.
    ///
    /// Returns `None` when the device did not report one.
    #[must_use]
    pub fn minute_timestamp(&self) -> Option<DateTime<Utc>> {
        if self.minute_ts == 0 {
            return None;
        }
        DateTime::from_timestamp(self.minute_ts, 0)
    }
}

/// Internal device temperature in both scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Temperature {
    /// Degrees Celsius.
    #[serde(rename = "tC", deserialize_with = "null_as_default")]
    pub celsius: f64,

    /// Degrees Fahrenheit.
    #[serde(rename = "tF", deserialize_with = "null_as_default")]
    pub fahrenheit: f64,
}

/// Reply of `Switch.GetConfig`.
///
/// # Examples
///
/// ```
/// use shelly_rpc::response::SwitchConfig;
///
/// let json = r#"{"id": 0, "name": null, "in_mode": "follow", "auto_off": true, "auto_off_delay": 60.0}"#;
/// let config: SwitchConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.in_mode, "follow");
/// assert_eq!(config.auto_off_after().unwrap().as_secs(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Switch component id.
    pub id: u16,

    /// User-assigned name, if any.
    pub name: Option<String>,

    /// Input mode, e.g. `"follow"`, `"flip"`, `"detached"`.
    #[serde(alias = "mode", deserialize_with = "null_as_default")]
    pub in_mode: String,

    /// Output state after power-on, e.g. `"off"`, `"restore_last"`.
    #[serde(deserialize_with = "null_as_default")]
    pub initial_state: String,

    /// Whether the output turns itself on after [`auto_on_delay`](Self::auto_on_delay).
    pub auto_on: bool,

    /// Auto-on delay in seconds.
    pub auto_on_delay: f64,

    /// Whether the output turns itself off after [`auto_off_delay`](Self::auto_off_delay).
    pub auto_off: bool,

    /// Auto-off delay in seconds.
    pub auto_off_delay: f64,

    /// Whether the output recovers after a voltage error clears.
    pub autorecover_voltage_errors: bool,

    /// Power limit in Watts.
    pub power_limit: f64,

    /// Overvoltage limit in Volts.
    pub voltage_limit: f64,

    /// Undervoltage limit in Volts.
    pub undervoltage_limit: f64,

    /// Current limit in Amperes.
    pub current_limit: f64,
}

impl SwitchConfig {
    /// Returns the auto-on delay when auto-on is enabled.
    #[must_use]
    pub fn auto_on_after(&self) -> Option<Duration> {
        delay(self.auto_on, self.auto_on_delay)
    }

    /// Returns the auto-off delay when auto-off is enabled.
    #[must_use]
    pub fn auto_off_after(&self) -> Option<Duration> {
        delay(self.auto_off, self.auto_off_delay)
    }
}

fn delay(enabled: bool, secs: f64) -> Option<Duration> {
    if enabled {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

/// Reply of `Switch.ResetCounters`: counter totals just before the reset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResetCountersResponse {
    /// Consumed energy before the reset.
    pub aenergy: CounterTotal,

    /// Returned energy before the reset.
    pub ret_aenergy: CounterTotal,
}

/// A bare counter total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CounterTotal {
    /// Total energy in Watt-hours.
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_was_on() {
        let response: WasOnResponse = serde_json::from_str(r#"{"was_on": false}"#).unwrap();
        assert!(!response.was_on);
    }

    #[test]
    fn parse_full_status() {
        let json = r#"{
            "id": 0,
            "source": "init",
            "output": true,
            "timer_started_at": 1654511900.5,
            "timer_duration": 60.0,
            "apower": 8.9,
            "voltage": 237.5,
            "current": 0.068,
            "freq": 50.0,
            "pf": 0.56,
            "aenergy": {"total": 6.532, "by_minute": [45.199, 47.141, 88.397], "minute_ts": 1654511972},
            "ret_aenergy": {"total": 0.0, "by_minute": [0.0, 0.0, 0.0], "minute_ts": 1654511972},
            "temperature": {"tC": 23.5, "tF": 74.4},
            "errors": ["overtemp"]
        }"#;

        let status: SwitchStatus = serde_json::from_str(json).unwrap();

        assert_eq!(status.id, 0);
        assert_eq!(status.source, "init");
        assert!(status.is_on());
        assert!(status.has_timer());
        assert!(status.has_errors());
        assert!(status.is_consuming());
        assert!((status.voltage - 237.5).abs() < f64::EPSILON);
        assert!((status.freq - 50.0).abs() < f64::EPSILON);
        assert!((status.aenergy.total - 6.532).abs() < f64::EPSILON);
        assert_eq!(status.aenergy.last_minute(), Some(45.199));
        assert!((status.temperature.fahrenheit - 74.4).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let status: SwitchStatus = serde_json::from_str(r#"{"id": 1, "output": false}"#).unwrap();
        assert_eq!(status.id, 1);
        assert!(status.source.is_empty());
        assert!(!status.has_timer());
        assert_eq!(status.aenergy, EnergyCounter::default());
        assert!(status.aenergy.minute_timestamp().is_none());
        assert!(status.temperature.celsius.abs() < f64::EPSILON);
    }

    #[test]
    fn null_temperature_is_zero() {
        let json = r#"{"id": 0, "temperature": {"tC": null, "tF": null}}"#;
        let status: SwitchStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.temperature, Temperature::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"id": 0, "output": true, "future_field": {"x": 1}}"#;
        let status: SwitchStatus = serde_json::from_str(json).unwrap();
        assert!(status.output);
    }

    #[test]
    fn type_mismatch_fails() {
        let json = r#"{"id": 0, "apower": "lots"}"#;
        assert!(serde_json::from_str::<SwitchStatus>(json).is_err());
    }

    #[test]
    fn minute_timestamp_converts() {
        let counter = EnergyCounter {
            total: 1.0,
            by_minute: vec![],
            minute_ts: 1_654_511_972,
        };
        let ts = counter.minute_timestamp().unwrap();
        assert_eq!(ts.timestamp(), 1_654_511_972);
    }

    #[test]
    fn status_survives_reencoding() {
        let status = SwitchStatus {
            id: 2,
            source: "WS_in".to_string(),
            output: true,
            timer_started_at: None,
            timer_duration: None,
            apower: 12.5,
            voltage: 230.1,
            current: 0.05,
            freq: 49.9,
            pf: 0.9,
            aenergy: EnergyCounter {
                total: 100.25,
                by_minute: vec![1.5, 2.5, 3.5],
                minute_ts: 1_700_000_000,
            },
            ret_aenergy: EnergyCounter::default(),
            temperature: Temperature {
                celsius: 40.0,
                fahrenheit: 104.0,
            },
            errors: vec![],
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"tC\""));
        let decoded: SwitchStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, status);
    }

    #[test]
    fn parse_config() {
        let json = r#"{
            "id": 0,
            "name": "Heater",
            "in_mode": "flip",
            "initial_state": "restore_last",
            "auto_on": false,
            "auto_on_delay": 60.00,
            "auto_off": true,
            "auto_off_delay": 90.5,
            "autorecover_voltage_errors": true,
            "input_id": 0,
            "power_limit": 4480,
            "voltage_limit": 280,
            "undervoltage_limit": 0,
            "current_limit": 16.000
        }"#;

        let config: SwitchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.name.as_deref(), Some("Heater"));
        assert_eq!(config.in_mode, "flip");
        assert!(config.auto_on_after().is_none());
        assert_eq!(
            config.auto_off_after(),
            Some(Duration::from_secs_f64(90.5))
        );
        assert!((config.power_limit - 4480.0).abs() < f64::EPSILON);
        assert!((config.current_limit - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn config_accepts_legacy_mode_key() {
        let config: SwitchConfig = serde_json::from_str(r#"{"mode": "detached"}"#).unwrap();
        assert_eq!(config.in_mode, "detached");
    }

    #[test]
    fn parse_reset_counters() {
        let json = r#"{"aenergy": {"total": 11.679}, "ret_aenergy": {"total": 0}}"#;
        let response: ResetCountersResponse = serde_json::from_str(json).unwrap();
        assert!((response.aenergy.total - 11.679).abs() < f64::EPSILON);
        assert!(response.ret_aenergy.total.abs() < f64::EPSILON);
    }

    #[test]
    fn was_on_survives_reencoding() {
        for was_on in [true, false] {
            let response = WasOnResponse { was_on };
            let json = serde_json::to_string(&response).unwrap();
            let decoded: WasOnResponse = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, response);
        }
    }

    #[test]
    fn config_survives_reencoding() {
        let named = SwitchConfig {
            id: 1,
            name: Some("Boiler".to_string()),
            in_mode: "flip".to_string(),
            initial_state: "restore_last".to_string(),
            auto_on: true,
            auto_on_delay: 30.0,
            auto_off: true,
            auto_off_delay: 5.5,
            autorecover_voltage_errors: true,
            power_limit: 3500.0,
            voltage_limit: 280.0,
            undervoltage_limit: 180.0,
            current_limit: 16.0,
        };
        let unnamed = SwitchConfig {
            name: None,
            ..named.clone()
        };

        for config in [named, unnamed] {
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"in_mode\""));
            let decoded: SwitchConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }
    }

    #[test]
    fn reset_counters_survives_reencoding() {
        let response = ResetCountersResponse {
            aenergy: CounterTotal { total: 11.679 },
            ret_aenergy: CounterTotal { total: 0.25 },
        };
        let json = serde_json::to_string(&response).unwrap();
        let decoded: ResetCountersResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }
}
