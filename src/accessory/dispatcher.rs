// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set handlers.
//!
//! Each handler checks the session, asks the policy engine for the command,
//! awaits the purifier and only then updates the cached view. A rejected
//! command leaves the view untouched and is returned to the caller as
//! `DeviceError::CommandRejected`; there is no retry.

use crate::command::DeviceCommand;
use crate::device::PurifierDevice;
use crate::error::{DeviceError, Error, ValueError};
use crate::registry::{Characteristic, CharacteristicRegistry, CharacteristicValue};
use crate::types::{FavoriteLevel, RotationSpeed, TargetPurifierState};

use super::Accessory;

impl<D, R> Accessory<D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Serves a bridge write of `value` to `characteristic`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CharacteristicUnsupported` for characteristics that
    /// are read-only or not exposed, `Error::Value` for values of the wrong
    /// shape, and whatever the typed setter returns.
    pub async fn handle_set(
        &self,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<(), Error> {
        if !characteristic.is_writable() {
            return Err(Error::CharacteristicUnsupported {
                characteristic: characteristic.name(),
            });
        }
        self.ensure_exposed(characteristic)?;
        tracing::debug!(characteristic = %characteristic, value = ?value, "Set");

        match characteristic {
            Characteristic::Active => {
                let active = value
                    .as_bool()
                    .ok_or_else(|| unexpected(characteristic, "boolean"))?;
                self.set_active(active).await
            }
            Characteristic::TargetAirPurifierState => {
                let target = value
                    .as_u8()
                    .map(TargetPurifierState::from_num)
                    .ok_or_else(|| unexpected(characteristic, "integer"))?;
                self.set_target_state(target).await
            }
            Characteristic::RotationSpeed => {
                let percent = value
                    .as_f32()
                    .ok_or_else(|| unexpected(characteristic, "number"))?;
                self.set_rotation_speed(RotationSpeed::new(percent)?).await
            }
            Characteristic::SilentSwitch => {
                let on = value
                    .as_bool()
                    .ok_or_else(|| unexpected(characteristic, "boolean"))?;
                self.set_silent_switch(on).await
            }
            _ => Err(Error::CharacteristicUnsupported {
                characteristic: characteristic.name(),
            }),
        }
    }

    /// Turns the accessory on or off.
    ///
    /// Under policy 2 "off" switches the purifier to silent mode instead of
    /// cutting power. On success the current state follows `active`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn set_active(&self, active: bool) -> Result<(), Error> {
        let device = self.device()?;
        let command = self.engine.decide_activation(active);
        let operation = if command.is_mode_change() {
            "changing active state (setting SILENT)"
        } else {
            "setting active state (power)"
        };

        device
            .execute(command)
            .await
            .map_err(|e| DeviceError::rejected(operation, e))?;
        tracing::debug!(
            accessory = %self.config.name,
            active,
            command = %command,
            "Active state set"
        );

        self.record(command);
        let current = {
            let mut view = self.view.write();
            view.set_active(active);
            view.current_state
        };
        self.push(Characteristic::CurrentAirPurifierState, current.as_num());
        Ok(())
    }

    /// Switches between automatic and manual regulation.
    ///
    /// Manual means favorite mode, or silent mode under policy 3.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device`.
    pub async fn set_target_state(&self, target: TargetPurifierState) -> Result<(), Error> {
        let device = self.device()?;
        let command = self.engine.decide_target_state(target);

        device
            .execute(command)
            .await
            .map_err(|e| DeviceError::rejected("setting target state", e))?;
        tracing::debug!(
            accessory = %self.config.name,
            target = %target,
            command = %command,
            "Target state set"
        );

        self.record(command);
        self.view.write().target_state = target;
        Ok(())
    }

    /// Sets the fan speed.
    ///
    /// The purifier is first switched to favorite mode if it is known to be
    /// in another mode. Both the mode read and the mode switch are best
    /// effort; only the favorite level result is returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device` if the level is
    /// rejected.
    pub async fn set_rotation_speed(&self, speed: RotationSpeed) -> Result<(), Error> {
        let device = self.device()?;

        let current_mode = match device.mode().await {
            Ok(mode) => {
                self.state.write().set_mode(mode);
                Some(mode)
            }
            Err(e) => {
                tracing::warn!(accessory = %self.config.name, error = %e, "Error getting mode");
                None
            }
        };

        let plan = self.engine.decide_rotation_speed(speed, current_mode);
        tracing::debug!(
            accessory = %self.config.name,
            speed = %speed,
            commands = ?plan.commands(),
            "Rotation speed plan"
        );

        if let Some(switch) = plan.switch_mode {
            match device.execute(switch).await {
                Ok(()) => {
                    tracing::debug!(accessory = %self.config.name, "Switched to favorite mode");
                    self.record(switch);
                }
                Err(e) => {
                    tracing::warn!(accessory = %self.config.name, error = %e, "Error setting mode");
                }
            }
        }

        device
            .execute(plan.set_level)
            .await
            .map_err(|e| DeviceError::rejected("setting rotation speed", e))?;
        tracing::debug!(accessory = %self.config.name, speed = %speed, "Rotation speed set");

        self.record(plan.set_level);
        self.view.write().rotation_speed =
            FavoriteLevel::from_rotation_speed(speed).rotation_speed();
        Ok(())
    }

    /// Turns silent mode on or off through the auxiliary switch.
    ///
    /// # Errors
    ///
    /// Returns `Error::CharacteristicUnsupported` unless policy 1 is in
    /// effect, otherwise `Error::NotConnected` or `Error::Device`.
    pub async fn set_silent_switch(&self, on: bool) -> Result<(), Error> {
        let command = self.engine.decide_silent_switch(on)?;
        let device = self.device()?;

        device
            .execute(command)
            .await
            .map_err(|e| DeviceError::rejected("setting silent mode", e))?;
        tracing::debug!(accessory = %self.config.name, on, "Silent mode set");

        self.record(command);
        self.view.write().silent_switch_on = on;
        Ok(())
    }

    /// Caches the effect of an acknowledged command.
    fn record(&self, command: DeviceCommand) {
        let mut state = self.state.write();
        match command {
            DeviceCommand::SetPower(on) => state.set_power(on),
            DeviceCommand::SetMode(mode) => state.set_mode(mode),
            DeviceCommand::SetFavoriteLevel(level) => state.set_favorite_level(level),
            DeviceCommand::SetLedBrightness(_) => {}
        }
    }
}

fn unexpected(characteristic: Characteristic, expected: &'static str) -> ValueError {
    ValueError::UnexpectedValue {
        characteristic: characteristic.name(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_value_names_characteristic() {
        let err = unexpected(Characteristic::Active, "boolean");
        assert_eq!(
            err.to_string(),
            "characteristic Active expects a boolean value"
        );
    }
}
