// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Periodic keep-alive reads.
//!
//! Purifier sessions go stale when idle, and the bridge then reports the
//! accessory as unresponsive. The prober issues a cheap read on a fixed
//! interval to keep the session warm.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::device::PurifierDevice;
use crate::error::{DeviceError, Error};
use crate::registry::{Characteristic, CharacteristicRegistry};

use super::Accessory;

/// Keeps the purifier session alive with periodic reads.
#[derive(Debug)]
pub struct LivenessProber<'a, D, R> {
    accessory: &'a Accessory<D, R>,
    period: Duration,
}

impl<'a, D, R> LivenessProber<'a, D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Binds a prober to an accessory.
    #[must_use]
    pub fn new(accessory: &'a Accessory<D, R>, period: Duration) -> Self {
        Self { accessory, period }
    }

    /// Returns the probe interval.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Probes every period, starting one period from now. Never returns.
    ///
    /// Failed probes are logged and do not stop the loop.
    pub async fn run(&self) {
        let mut ticker = time::interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = self.probe().await {
                tracing::warn!(
                    accessory = %self.accessory.config.name,
                    error = %e,
                    "Liveness probe failed"
                );
            }
        }
    }

    /// Runs one probe.
    ///
    /// Reads the temperature if the temperature sensor is exposed and pushes
    /// it. Otherwise reads power, caches it and pushes the active state when
    /// it can be derived.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn probe(&self) -> Result<(), Error> {
        let accessory = self.accessory;
        tracing::trace!(accessory = %accessory.config.name, "Liveness probe");

        if accessory.layout.exposes(Characteristic::CurrentTemperature) {
            let celsius = accessory.get_temperature().await?;
            accessory.push(Characteristic::CurrentTemperature, celsius);
            return Ok(());
        }

        let power = accessory
            .device()?
            .power()
            .await
            .map_err(|e| DeviceError::rejected("getting active state (power)", e))?;

        let mode_known = {
            let mut state = accessory.state.write();
            state.set_power(power);
            state.mode().is_some()
        };

        // Under policy 2 activation depends on the mode.
        if accessory.engine.policy().allows_power_off() || mode_known {
            let projection = accessory.reproject();
            accessory.push_activation(projection.active, projection.current_state);
        }
        Ok(())
    }
}
