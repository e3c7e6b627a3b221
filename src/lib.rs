// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `shelly_rpc` - A Rust library to control Shelly Gen2 switches.
//!
//! This library issues control and telemetry calls to a single Shelly
//! device and decodes the replies into typed records. Two wire conventions
//! are supported behind one typed API:
//!
//! - **JSON-RPC**: frames POSTed to `http://<device>/rpc`
//! - **Legacy GET**: `http://<device>/rpc/<Method>?<query>`
//!
//! # Supported Operations
//!
//! - **Switch control**: on, on with auto-off timer, off, toggle
//! - **Switch telemetry**: power, voltage, current, frequency, energy counters, temperature
//! - **Switch configuration**: limits, auto-on/off delays, input mode
//! - **Counter reset**: clear consumed and returned energy
//! - **Device info**: id, MAC, model, firmware version, auth flags
//!
//! # Quick Start
//!
//! ```no_run
//! use shelly_rpc::Client;
//! use shelly_rpc::protocol::HttpConfig;
//! use shelly_rpc::types::{SwitchId, ToggleAfter};
//!
//! #[tokio::main]
//! async fn main() -> shelly_rpc::Result<()> {
//!     let client = Client::rpc(HttpConfig::new("192.168.1.100"))?;
//!
//!     // Turn switch 0 on for ten minutes
//!     let switch = SwitchId::new(0)?;
//!     client
//!         .switch_on_with_timer(switch, ToggleAfter::from_secs(600)?)
//!         .await?;
//!
//!     let status = client.switch_status(switch).await?;
//!     println!("{} W, {} Wh total", status.apower, status.aenergy.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Legacy GET transport
//!
//! ```no_run
//! use shelly_rpc::Client;
//! use shelly_rpc::protocol::HttpConfig;
//! use shelly_rpc::types::SwitchId;
//!
//! # async fn example() -> shelly_rpc::Result<()> {
//! let client = Client::query(HttpConfig::new("192.168.1.100"))?;
//! let was = client.switch_toggle(SwitchId::first()).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod operation;
pub mod protocol;
pub mod response;
pub mod types;

pub use client::Client;
pub use error::{ConstructionError, Error, ProtocolError, Result, TransportError, ValueError};
pub use operation::{
    GetDeviceInfo, Operation, Params, SwitchGetConfig, SwitchGetStatus, SwitchResetCounters,
    SwitchSet, SwitchToggle,
};
pub use protocol::{HttpConfig, QueryTransport, Reply, RpcTransport, Transport};
pub use response::{
    DeviceInfo, ResetCountersResponse, SwitchConfig, SwitchStatus, WasOnResponse,
};
pub use types::{CounterType, SwitchId, ToggleAfter};
