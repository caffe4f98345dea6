// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The purifier accessory.
//!
//! An [`Accessory`] ties one purifier session to the bridge's
//! characteristic registry. Bridge writes go through the command dispatcher
//! ([`set_active`](Accessory::set_active) and friends), bridge reads through
//! [`handle_get`](Accessory::handle_get), and purifier notifications flow
//! back through the [`EventBridge`]. A [`LivenessProber`] keeps the session
//! warm.
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use purifier_bridge::accessory::Accessory;
//! use purifier_bridge::config::AccessoryConfig;
//!
//! # async fn example() -> purifier_bridge::Result<()> {
//! let config = AccessoryConfig::new("Air Purifier 2", "192.168.1.77");
//! let accessory = Accessory::new(config, Arc::new(my_registry));
//!
//! accessory.connect(&my_connector).await?;
//! // Drives the event bridge and the liveness prober until the
//! // purifier's event stream closes
//! accessory.run().await?;
//! # Ok(())
//! # }
//! ```

mod bridge;
mod dispatcher;
mod identify;
mod prober;
mod query;

pub use bridge::EventBridge;
pub use prober::LivenessProber;

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::config::AccessoryConfig;
use crate::device::{ConnectionState, Connector, DeviceSession, PurifierDevice};
use crate::error::Error;
use crate::policy::{AccessoryPolicy, ModePolicyEngine, Projection, project};
use crate::registry::{Characteristic, CharacteristicRegistry, CharacteristicValue, ServiceLayout};
use crate::state::{DeviceState, ExternalView};
use crate::types::CurrentPurifierState;

/// A purifier exposed as a bridge accessory.
///
/// The type parameter `D` is the purifier session type and `R` the bridge's
/// characteristic registry.
#[derive(Debug)]
pub struct Accessory<D, R> {
    config: AccessoryConfig,
    engine: ModePolicyEngine,
    layout: ServiceLayout,
    session: DeviceSession<D>,
    view: RwLock<ExternalView>,
    state: RwLock<DeviceState>,
    registry: Arc<R>,
}

impl<D, R> Accessory<D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Creates a disconnected accessory with a provisional view.
    #[must_use]
    pub fn new(config: AccessoryConfig, registry: Arc<R>) -> Self {
        let engine = ModePolicyEngine::new(config.policy);
        let layout = ServiceLayout::for_config(&config);
        Self {
            config,
            engine,
            layout,
            session: DeviceSession::new(),
            view: RwLock::new(ExternalView::new()),
            state: RwLock::new(DeviceState::new()),
            registry,
        }
    }

    // ========== Accessors ==========

    /// Returns the accessory's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AccessoryConfig {
        &self.config
    }

    /// Returns the behavior policy.
    #[must_use]
    pub fn policy(&self) -> AccessoryPolicy {
        self.engine.policy()
    }

    /// Returns the policy engine.
    #[must_use]
    pub fn engine(&self) -> &ModePolicyEngine {
        &self.engine
    }

    /// Returns the services the bridge should register.
    #[must_use]
    pub fn layout(&self) -> &ServiceLayout {
        &self.layout
    }

    /// Returns the stable accessory identifier.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.config.accessory_uuid()
    }

    /// Returns a snapshot of what the bridge currently sees.
    #[must_use]
    pub fn view(&self) -> ExternalView {
        self.view.read().clone()
    }

    /// Returns a snapshot of the last known purifier state.
    #[must_use]
    pub fn device_state(&self) -> DeviceState {
        self.state.read().clone()
    }

    // ========== Connection Lifecycle ==========

    /// Returns true if a purifier session is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    /// Returns the session's connection state.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.session.state()
    }

    /// Opens a purifier session through `connector`.
    ///
    /// On failure the accessory stays disconnected; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` with the connector's error.
    pub async fn connect<C>(&self, connector: &C) -> Result<(), Error>
    where
        C: Connector<Device = D>,
    {
        tracing::info!(
            accessory = %self.config.name,
            address = %self.config.device.address,
            "Connecting to purifier"
        );
        match connector.connect(&self.config.device).await {
            Ok(device) => {
                self.attach(device);
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    accessory = %self.config.name,
                    error = %e,
                    "Purifier not connected"
                );
                self.session.fail(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Installs an already-open purifier session.
    pub fn attach(&self, device: D) -> Arc<D> {
        let device = self.session.connect(device);
        tracing::info!(accessory = %self.config.name, "Purifier connected");
        device
    }

    /// Drops the purifier session and forgets its state.
    pub fn disconnect(&self) {
        if self.session.disconnect().is_some() {
            tracing::info!(accessory = %self.config.name, "Purifier disconnected");
        }
        self.state.write().clear();
    }

    /// Runs the event bridge and the liveness prober until the purifier's
    /// event stream closes.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` if no session is open.
    pub async fn run(&self) -> Result<(), Error> {
        let events = self.device()?.subscribe();
        let bridge = self.event_bridge();
        let prober = self.liveness_prober();

        tokio::select! {
            () = bridge.run(events) => {}
            () = prober.run() => {}
        }
        Ok(())
    }

    /// Returns an event bridge bound to this accessory.
    #[must_use]
    pub fn event_bridge(&self) -> EventBridge<'_, D, R> {
        EventBridge::new(self)
    }

    /// Returns a liveness prober bound to this accessory.
    #[must_use]
    pub fn liveness_prober(&self) -> LivenessProber<'_, D, R> {
        LivenessProber::new(self, self.config.probe_interval())
    }

    // ========== Internals ==========

    /// Returns the current device, or `NotConnected` without any I/O.
    fn device(&self) -> Result<Arc<D>, Error> {
        self.session
            .current()
            .ok_or_else(|| Error::not_connected(self.config.name.clone()))
    }

    /// Re-derives Active and the current and target state from the cached
    /// purifier state and stores them in the view.
    fn reproject(&self) -> Projection {
        let projection = {
            let state = self.state.read();
            project(state.mode(), state.power(), self.engine.policy())
        };
        self.view.write().apply_projection(projection);
        projection
    }

    fn push_activation(&self, active: bool, current: CurrentPurifierState) {
        self.push(Characteristic::Active, u8::from(active));
        self.push(Characteristic::CurrentAirPurifierState, current.as_num());
    }

    /// Pushes a value to the registry if the layout exposes it.
    fn push(&self, characteristic: Characteristic, value: impl Into<CharacteristicValue>) {
        if !self.layout.exposes(characteristic) {
            return;
        }
        let value = value.into();
        tracing::trace!(characteristic = %characteristic, value = ?value, "Pushing value");
        self.registry.update_value(characteristic, value);
    }

    fn ensure_exposed(&self, characteristic: Characteristic) -> Result<(), Error> {
        if self.layout.exposes(characteristic) {
            Ok(())
        } else {
            Err(Error::CharacteristicUnsupported {
                characteristic: characteristic.name(),
            })
        }
    }
}
