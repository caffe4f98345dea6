// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Get handlers.
//!
//! Live readings go to the purifier and are cached on success. The current
//! and target state are served from the cached view.

use crate::device::PurifierDevice;
use crate::error::{DeviceError, Error};
use crate::registry::{Characteristic, CharacteristicRegistry, CharacteristicValue};
use crate::state::StateChange;
use crate::types::{AirQuality, CurrentPurifierState, RotationSpeed, TargetPurifierState};

use super::Accessory;

impl<D, R> Accessory<D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Serves a bridge read of `characteristic`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CharacteristicUnsupported` if the layout does not
    /// expose the characteristic, `Error::NotConnected` without a session,
    /// and `Error::Device` if the purifier read fails.
    pub async fn handle_get(
        &self,
        characteristic: Characteristic,
    ) -> Result<CharacteristicValue, Error> {
        self.ensure_exposed(characteristic)?;
        tracing::debug!(characteristic = %characteristic, "Get");

        let value = match characteristic {
            Characteristic::Active => {
                CharacteristicValue::UInt(u8::from(self.get_active().await?))
            }
            Characteristic::CurrentAirPurifierState => {
                CharacteristicValue::UInt(self.get_current_state()?.as_num())
            }
            Characteristic::TargetAirPurifierState => {
                CharacteristicValue::UInt(self.get_target_state()?.as_num())
            }
            Characteristic::RotationSpeed => {
                CharacteristicValue::Float(self.get_rotation_speed().await?.value())
            }
            Characteristic::SilentSwitch => {
                CharacteristicValue::Bool(self.get_silent_switch().await?)
            }
            Characteristic::CurrentTemperature => {
                CharacteristicValue::Float(self.get_temperature().await?)
            }
            Characteristic::CurrentRelativeHumidity => {
                CharacteristicValue::Float(self.get_humidity().await?)
            }
            Characteristic::AirQuality => {
                CharacteristicValue::UInt(self.get_air_quality().await?.as_num())
            }
            Characteristic::Pm25Density => {
                CharacteristicValue::Int(self.get_pm2_5_density().await?)
            }
        };
        Ok(value)
    }

    /// Reads whether the accessory is active.
    ///
    /// Under policy 2 this is derived from the mode, otherwise from power.
    /// The current and target state are re-derived from the fresh reading.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_active(&self) -> Result<bool, Error> {
        let device = self.device()?;
        if self.engine.policy().allows_power_off() {
            let power = device
                .power()
                .await
                .map_err(|e| DeviceError::rejected("getting active state (power)", e))?;
            self.state.write().set_power(power);
        } else {
            let mode = device
                .mode()
                .await
                .map_err(|e| DeviceError::rejected("getting mode", e))?;
            self.state.write().set_mode(mode);
        }
        Ok(self.reproject().active)
    }

    /// Returns the cached current state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` without a session.
    pub fn get_current_state(&self) -> Result<CurrentPurifierState, Error> {
        self.device()?;
        Ok(self.view.read().current_state)
    }

    /// Returns the cached target state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` without a session.
    pub fn get_target_state(&self) -> Result<TargetPurifierState, Error> {
        self.device()?;
        Ok(self.view.read().target_state)
    }

    /// Reads the fan speed from the favorite level.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_rotation_speed(&self) -> Result<RotationSpeed, Error> {
        let level = self
            .device()?
            .favorite_level()
            .await
            .map_err(|e| DeviceError::rejected("getting rotation speed", e))?;
        self.state.write().set_favorite_level(level);
        let speed = level.rotation_speed();
        self.view.write().rotation_speed = speed;
        Ok(speed)
    }

    /// Reads whether silent mode is on.
    ///
    /// # Errors
    ///
    /// Returns `Error::CharacteristicUnsupported` unless policy 1 is in
    /// effect, otherwise `Error::NotConnected` or `Error::Device`.
    pub async fn get_silent_switch(&self) -> Result<bool, Error> {
        self.ensure_exposed(Characteristic::SilentSwitch)?;
        let mode = self
            .device()?
            .mode()
            .await
            .map_err(|e| DeviceError::rejected("getting mode", e))?;
        self.state.write().set_mode(mode);
        let on = self.engine.silent_switch_on(mode);
        self.view.write().silent_switch_on = on;
        Ok(on)
    }

    /// Reads the temperature.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_temperature(&self) -> Result<f32, Error> {
        let celsius = self
            .device()?
            .temperature()
            .await
            .map_err(|e| DeviceError::rejected("getting temperature", e))?;
        self.state.write().apply(&StateChange::Temperature(celsius));
        self.view.write().temperature = Some(celsius);
        Ok(celsius)
    }

    /// Reads the relative humidity.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_humidity(&self) -> Result<f32, Error> {
        let percent = self
            .device()?
            .relative_humidity()
            .await
            .map_err(|e| DeviceError::rejected("getting relative humidity", e))?;
        self.state.write().apply(&StateChange::Humidity(percent));
        self.view.write().humidity = Some(percent);
        Ok(percent)
    }

    /// Reads PM2.5 and classifies it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_air_quality(&self) -> Result<AirQuality, Error> {
        let density = self.read_pm2_5("getting air quality in words").await?;
        Ok(AirQuality::classify(density))
    }

    /// Reads the PM2.5 density.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn get_pm2_5_density(&self) -> Result<i32, Error> {
        self.read_pm2_5("getting air quality in PM2.5").await
    }

    async fn read_pm2_5(&self, operation: &'static str) -> Result<i32, Error> {
        let density = self
            .device()?
            .pm2_5()
            .await
            .map_err(|e| DeviceError::rejected(operation, e))?;
        self.state.write().apply(&StateChange::Pm25(density));
        self.view.write().set_pm2_5(density);
        Ok(density)
    }
}
