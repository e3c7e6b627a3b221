// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for one Shelly device.
//!
//! [`Client`] binds a transport to the operation catalog and exposes one
//! method per operation. It holds nothing but the transport, so every call
//! stands on its own: reachability is reported by the call's own result.
//!
//! ```no_run
//! use shelly_rpc::Client;
//! use shelly_rpc::protocol::HttpConfig;
//! use shelly_rpc::types::SwitchId;
//!
//! # async fn example() -> shelly_rpc::Result<()> {
//! let client = Client::rpc(HttpConfig::new("192.168.1.100"))?;
//!
//! let was = client.switch_on(SwitchId::first()).await?;
//! println!("switch was on before: {}", was.was_on);
//!
//! let status = client.switch_status(SwitchId::first()).await?;
//! println!("drawing {} W at {} V", status.apower, status.voltage);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::operation::{
    GetDeviceInfo, Operation, SwitchGetConfig, SwitchGetStatus, SwitchResetCounters, SwitchSet,
    SwitchToggle,
};
use crate::protocol::{HttpConfig, QueryTransport, RpcTransport, Transport};
use crate::response::{
    DeviceInfo, ResetCountersResponse, SwitchConfig, SwitchStatus, WasOnResponse,
};
use crate::types::{SwitchId, ToggleAfter};

/// A Shelly device reachable through a transport.
///
/// # Type Parameter
///
/// `T` selects the wire convention:
/// - [`RpcTransport`] for JSON-RPC frames POSTed to `/rpc`
/// - [`QueryTransport`] for legacy `GET /rpc/<Method>?<query>` requests
#[derive(Debug, Clone)]
pub struct Client<T: Transport> {
    transport: T,
}

impl Client<RpcTransport> {
    /// Creates a client speaking JSON-RPC over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the address is invalid.
    pub fn rpc(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(config.into_rpc_transport()?))
    }
}

impl Client<QueryTransport> {
    /// Creates a client using legacy GET requests with query parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::Construction` if the address is invalid.
    pub fn query(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(config.into_query_transport()?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of an existing transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes any operation and decodes its result.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the exchange fails, or `Error::Protocol`
    /// if the reply cannot be decoded or reports a device error.
    pub async fn call<O: Operation>(&self, operation: &O) -> Result<O::Output> {
        let method = operation.method();
        let params = operation.params();

        tracing::debug!(device = self.transport.base_url(), method, "Executing operation");

        let reply = self.transport.execute(method, &params).await?;
        Ok(reply.decode::<O::Output>()?)
    }

    // ========== Switch Control ==========

    /// Turns a switch on.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_on(&self, id: SwitchId) -> Result<WasOnResponse> {
        self.call(&SwitchSet::on(id)).await
    }

    /// Turns a switch on and lets the device turn it off again after `delay`.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_on_with_timer(
        &self,
        id: SwitchId,
        delay: ToggleAfter,
    ) -> Result<WasOnResponse> {
        self.call(&SwitchSet::on(id).toggle_after(delay)).await
    }

    /// Turns a switch off.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_off(&self, id: SwitchId) -> Result<WasOnResponse> {
        self.call(&SwitchSet::off(id)).await
    }

    /// Flips a switch.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_toggle(&self, id: SwitchId) -> Result<WasOnResponse> {
        self.call(&SwitchToggle { id }).await
    }

    // ========== Switch Telemetry ==========

    /// Reads the live status of a switch.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_status(&self, id: SwitchId) -> Result<SwitchStatus> {
        self.call(&SwitchGetStatus { id }).await
    }

    /// Reads the configuration of a switch.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_config(&self, id: SwitchId) -> Result<SwitchConfig> {
        self.call(&SwitchGetConfig { id }).await
    }

    /// Resets both energy counters of a switch.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn switch_reset_counters(&self, id: SwitchId) -> Result<ResetCountersResponse> {
        self.call(&SwitchResetCounters { id }).await
    }

    // ========== Device ==========

    /// Reads device identification and firmware information.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn device_info(&self) -> Result<DeviceInfo> {
        self.call(&GetDeviceInfo).await
    }
}
