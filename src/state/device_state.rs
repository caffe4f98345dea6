// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last-known purifier state.

use serde::{Deserialize, Serialize};

use crate::types::{AirQuality, FavoriteLevel, LedBrightness, PurifierMode, RotationSpeed};

use super::StateChange;

/// Tracked state of the purifier.
///
/// All fields are optional because nothing is known until the purifier
/// reports it, and everything is forgotten again on disconnect.
///
/// # Examples
///
/// ```
/// use purifier_bridge::state::DeviceState;
/// use purifier_bridge::types::PurifierMode;
///
/// let mut state = DeviceState::new();
/// state.set_mode(PurifierMode::Favorite);
/// assert_eq!(state.mode(), Some(PurifierMode::Favorite));
/// assert_eq!(state.power(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    power: Option<bool>,
    mode: Option<PurifierMode>,
    favorite_level: Option<FavoriteLevel>,
    /// Degrees Celsius.
    temperature: Option<f32>,
    /// Percent.
    humidity: Option<f32>,
    /// µg/m³.
    pm2_5: Option<i32>,
    led_brightness: Option<LedBrightness>,
}

impl DeviceState {
    /// Creates a new empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Power & Mode ==========

    /// Gets the power flag.
    #[must_use]
    pub fn power(&self) -> Option<bool> {
        self.power
    }

    /// Sets the power flag.
    pub fn set_power(&mut self, on: bool) {
        self.power = Some(on);
    }

    /// Gets the operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<PurifierMode> {
        self.mode
    }

    /// Sets the operating mode.
    pub fn set_mode(&mut self, mode: PurifierMode) {
        self.mode = Some(mode);
    }

    // ========== Fan ==========

    /// Gets the favorite level.
    #[must_use]
    pub fn favorite_level(&self) -> Option<FavoriteLevel> {
        self.favorite_level
    }

    /// Sets the favorite level.
    pub fn set_favorite_level(&mut self, level: FavoriteLevel) {
        self.favorite_level = Some(level);
    }

    /// Returns the rotation speed equivalent of the favorite level.
    #[must_use]
    pub fn rotation_speed(&self) -> Option<RotationSpeed> {
        self.favorite_level.map(|level| level.rotation_speed())
    }

    // ========== Sensors ==========

    /// Gets the temperature in degrees Celsius.
    #[must_use]
    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Gets the relative humidity in percent.
    #[must_use]
    pub fn humidity(&self) -> Option<f32> {
        self.humidity
    }

    /// Gets the PM2.5 density in µg/m³.
    #[must_use]
    pub fn pm2_5(&self) -> Option<i32> {
        self.pm2_5
    }

    /// Returns the air quality tier for the last PM2.5 reading.
    #[must_use]
    pub fn air_quality(&self) -> AirQuality {
        AirQuality::from_pm2_5(self.pm2_5)
    }

    /// Gets the LED brightness.
    #[must_use]
    pub fn led_brightness(&self) -> Option<LedBrightness> {
        self.led_brightness
    }

    // ========== State Changes ==========

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(on) => replace(&mut self.power, *on),
            StateChange::Mode(mode) => replace(&mut self.mode, *mode),
            StateChange::FavoriteLevel(level) => replace(&mut self.favorite_level, *level),
            StateChange::Temperature(celsius) => replace(&mut self.temperature, *celsius),
            StateChange::Humidity(percent) => replace(&mut self.humidity, *percent),
            StateChange::Pm25(density) => replace(&mut self.pm2_5, *density),
            StateChange::LedBrightness(brightness) => {
                replace(&mut self.led_brightness, *brightness)
            }
        }
    }

    /// Clears all known state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}
