// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::device::PurifierDevice;
use crate::error::{DeviceError, Error};
use crate::registry::CharacteristicRegistry;
use crate::state::StateChange;
use crate::types::LedBrightness;

use super::Accessory;

/// Steps in one identify blink; a full cycle lands back on the start.
const IDENTIFY_STEPS: usize = LedBrightness::CYCLE.len();

impl<D, R> Accessory<D, R>
where
    D: PurifierDevice,
    R: CharacteristicRegistry,
{
    /// Blinks the purifier's LED so the user can spot it.
    ///
    /// Reads the current brightness and steps through the full cycle,
    /// ending where it started.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` or `Error::Device` with the
    /// "cycling LED brightness" operation.
    pub async fn identify(&self, paired: bool) -> Result<(), Error> {
        tracing::debug!(accessory = %self.config.name, paired, "Identify");
        let device = self.device()?;

        let mut brightness = device
            .led_brightness()
            .await
            .map_err(|e| DeviceError::rejected("cycling LED brightness", e))?;

        for _ in 0..IDENTIFY_STEPS {
            brightness = brightness.next();
            device
                .set_led_brightness(brightness)
                .await
                .map_err(|e| DeviceError::rejected("cycling LED brightness", e))?;
        }

        self.state
            .write()
            .apply(&StateChange::LedBrightness(brightness));
        tracing::debug!(accessory = %self.config.name, "Blinked successfully");
        Ok(())
    }
}
