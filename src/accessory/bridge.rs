// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Purifier notifications to registry updates.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::device::PurifierDevice;
use crate::event::DeviceEvent;
use crate::policy::AccessoryPolicy;
use crate::registry::{Characteristic, CharacteristicRegistry};
use crate::types::PurifierMode;

use super::Accessory;

/// Mirrors purifier notifications into the registry.
///
/// The bridge only observes: it updates the cached purifier state and the
/// bridge view, then pushes the affected characteristics. It never issues
/// purifier commands.
#[derive(Debug)]
pub struct EventBridge<'a, D, R> {
    accessory: &'a Accessory<D, R>,
}

impl<'a, D, R> EventBridge<'a, D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Binds a bridge to an accessory.
    #[must_use]
    pub fn new(accessory: &'a Accessory<D, R>) -> Self {
        Self { accessory }
    }

    /// Consumes notifications until the stream closes.
    ///
    /// A lagging receiver logs how many notifications it missed and keeps
    /// going.
    pub async fn run(&self, mut events: broadcast::Receiver<DeviceEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.handle_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        accessory = %self.accessory.config.name,
                        skipped,
                        "Event bridge lagged behind purifier notifications"
                    );
                }
                Err(RecvError::Closed) => {
                    tracing::debug!(
                        accessory = %self.accessory.config.name,
                        "Purifier event stream closed"
                    );
                    break;
                }
            }
        }
    }

    /// Applies one notification.
    pub fn handle_event(&self, event: &DeviceEvent) {
        tracing::debug!(event = event.name(), payload = ?event, "Purifier notification");
        self.accessory.state.write().apply(&event.state_change());

        match *event {
            DeviceEvent::TemperatureChanged { celsius } => {
                self.accessory.view.write().temperature = Some(celsius);
                self.accessory.push(Characteristic::CurrentTemperature, celsius);
            }
            DeviceEvent::RelativeHumidityChanged { percent } => {
                self.accessory.view.write().humidity = Some(percent);
                self.accessory.push(Characteristic::CurrentRelativeHumidity, percent);
            }
            DeviceEvent::Pm25Changed { density } => {
                let quality = {
                    let mut view = self.accessory.view.write();
                    view.set_pm2_5(density);
                    view.air_quality
                };
                self.accessory.push(Characteristic::AirQuality, quality.as_num());
                self.accessory.push(Characteristic::Pm25Density, density);
            }
            DeviceEvent::ModeChanged { mode } => self.mode_changed(mode),
            DeviceEvent::PowerChanged { on } => self.power_changed(on),
        }
    }

    // The cached state already holds `mode` when this runs.
    fn mode_changed(&self, mode: PurifierMode) {
        let engine = self.accessory.engine;
        let projection = self.accessory.reproject();

        match engine.policy() {
            AccessoryPolicy::Mode1 => {
                let on = engine.silent_switch_on(mode);
                self.accessory.view.write().silent_switch_on = on;
                self.accessory.push(Characteristic::SilentSwitch, on);
            }
            AccessoryPolicy::Mode2 => {
                self.accessory.push_activation(projection.active, projection.current_state);
            }
            AccessoryPolicy::Mode0 | AccessoryPolicy::Mode3 => {}
        }

        let target = projection.target_state.as_num();
        self.accessory.push(Characteristic::TargetAirPurifierState, target);
    }

    fn power_changed(&self, on: bool) {
        let policy = self.accessory.engine.policy();
        if policy.has_silent_switch() && !on {
            self.accessory.view.write().silent_switch_on = false;
            self.accessory.push(Characteristic::SilentSwitch, false);
        }

        if policy.allows_power_off() {
            let projection = self.accessory.reproject();
            self.accessory.push_activation(projection.active, projection.current_state);
        } else {
            // Under policy 2 activation follows the mode, not power.
            let current = {
                let mut view = self.accessory.view.write();
                view.set_active(on);
                view.current_state
            };
            self.accessory.push_activation(on, current);
        }
    }
}
