// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Purifier notification types.

use crate::state::StateChange;
use crate::types::PurifierMode;

/// Change notifications emitted by the purifier.
///
/// Each event carries the new value. Device sessions publish them on an
/// [`EventBus`](super::EventBus); the accessory's event bridge consumes them.
///
/// # Examples
///
/// ```
/// use purifier_bridge::event::DeviceEvent;
/// use purifier_bridge::state::StateChange;
/// use purifier_bridge::types::PurifierMode;
///
/// let event = DeviceEvent::mode_changed(PurifierMode::Silent);
/// assert_eq!(event.name(), "modeChanged");
/// assert_eq!(event.state_change(), StateChange::Mode(PurifierMode::Silent));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DeviceEvent {
    /// Temperature reading changed.
    TemperatureChanged {
        /// New temperature in degrees Celsius.
        celsius: f32,
    },

    /// Relative humidity reading changed.
    RelativeHumidityChanged {
        /// New humidity in percent.
        percent: f32,
    },

    /// PM2.5 density changed.
    Pm25Changed {
        /// New density in µg/m³.
        density: i32,
    },

    /// Operating mode changed.
    ModeChanged {
        /// The new mode.
        mode: PurifierMode,
    },

    /// Power switched on or off.
    PowerChanged {
        /// Whether the purifier is now powered.
        on: bool,
    },
}

impl DeviceEvent {
    /// Returns the purifier's name for this notification.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TemperatureChanged { .. } => "temperatureChanged",
            Self::RelativeHumidityChanged { .. } => "relativeHumidityChanged",
            Self::Pm25Changed { .. } => "pm2.5Changed",
            Self::ModeChanged { .. } => "modeChanged",
            Self::PowerChanged { .. } => "powerChanged",
        }
    }

    /// Returns the state change this notification represents.
    #[must_use]
    pub fn state_change(&self) -> StateChange {
        match self {
            Self::TemperatureChanged { celsius } => StateChange::Temperature(*celsius),
            Self::RelativeHumidityChanged { percent } => StateChange::Humidity(*percent),
            Self::Pm25Changed { density } => StateChange::Pm25(*density),
            Self::ModeChanged { mode } => StateChange::Mode(*mode),
            Self::PowerChanged { on } => StateChange::Power(*on),
        }
    }

    /// Creates a temperature event.
    #[must_use]
    pub fn temperature_changed(celsius: f32) -> Self {
        Self::TemperatureChanged { celsius }
    }

    /// Creates a humidity event.
    #[must_use]
    pub fn humidity_changed(percent: f32) -> Self {
        Self::RelativeHumidityChanged { percent }
    }

    /// Creates a PM2.5 event.
    #[must_use]
    pub fn pm2_5_changed(density: i32) -> Self {
        Self::Pm25Changed { density }
    }

    /// Creates a mode event.
    #[must_use]
    pub fn mode_changed(mode: PurifierMode) -> Self {
        Self::ModeChanged { mode }
    }

    /// Creates a power event.
    #[must_use]
    pub fn power_changed(on: bool) -> Self {
        Self::PowerChanged { on }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        assert_eq!(DeviceEvent::temperature_changed(20.0).name(), "temperatureChanged");
        assert_eq!(DeviceEvent::humidity_changed(40.0).name(), "relativeHumidityChanged");
        assert_eq!(DeviceEvent::pm2_5_changed(3).name(), "pm2.5Changed");
        assert_eq!(DeviceEvent::power_changed(true).name(), "powerChanged");
    }

    #[test]
    fn state_change_mapping() {
        assert_eq!(
            DeviceEvent::power_changed(false).state_change(),
            StateChange::Power(false)
        );
        assert_eq!(
            DeviceEvent::pm2_5_changed(42).state_change(),
            StateChange::Pm25(42)
        );
    }
}
