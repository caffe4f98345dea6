// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge-side characteristic model.
//!
//! The home-automation bridge owns service registration and publishes
//! characteristics on the network. This crate only needs two things from
//! it: a place to push value updates ([`CharacteristicRegistry`]) and a
//! description of which services to register ([`ServiceLayout`]).
//!
//! # Examples
//!
//! ```
//! use purifier_bridge::registry::{Characteristic, CharacteristicValue};
//!
//! let value = CharacteristicValue::from(true);
//! assert_eq!(value.as_bool(), Some(true));
//! assert_eq!(Characteristic::Active.name(), "Active");
//! ```

mod layout;

pub use layout::{Service, ServiceKind, ServiceLayout};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A characteristic the accessory serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    /// Air purifier: on/off as the bridge sees it.
    Active,
    /// Air purifier: inactive / idle / purifying.
    CurrentAirPurifierState,
    /// Air purifier: manual / auto.
    TargetAirPurifierState,
    /// Air purifier: fan speed percentage.
    RotationSpeed,
    /// Auxiliary switch: silent mode on/off (policy 1 only).
    SilentSwitch,
    /// Temperature sensor.
    CurrentTemperature,
    /// Humidity sensor.
    CurrentRelativeHumidity,
    /// Air quality sensor: quality tier.
    AirQuality,
    /// Air quality sensor: PM2.5 density.
    Pm25Density,
}

impl Characteristic {
    /// Returns the characteristic's name in the bridge model.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::CurrentAirPurifierState => "CurrentAirPurifierState",
            Self::TargetAirPurifierState => "TargetAirPurifierState",
            Self::RotationSpeed => "RotationSpeed",
            Self::SilentSwitch => "On",
            Self::CurrentTemperature => "CurrentTemperature",
            Self::CurrentRelativeHumidity => "CurrentRelativeHumidity",
            Self::AirQuality => "AirQuality",
            Self::Pm25Density => "PM2_5Density",
        }
    }

    /// Returns `true` if the bridge may write this characteristic.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::Active | Self::TargetAirPurifierState | Self::RotationSpeed | Self::SilentSwitch
        )
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A characteristic value as exchanged with the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CharacteristicValue {
    /// Boolean characteristics (silent switch).
    Bool(bool),
    /// Enumerated characteristics (Active, states, air quality).
    UInt(u8),
    /// Integer readings (PM2.5 density).
    Int(i32),
    /// Floating point readings (speed, temperature, humidity).
    Float(f32),
}

impl CharacteristicValue {
    /// Interprets the value as a boolean.
    ///
    /// Integers are true when non-zero, matching how the bridge encodes
    /// Active as 0/1.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::UInt(n) => Some(*n != 0),
            Self::Int(n) => Some(*n != 0),
            Self::Float(_) => None,
        }
    }

    /// Interprets the value as a small unsigned integer.
    #[must_use]
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::Bool(b) => Some(u8::from(*b)),
            Self::UInt(n) => Some(*n),
            Self::Int(n) => u8::try_from(*n).ok(),
            Self::Float(_) => None,
        }
    }

    /// Interprets the value as a float.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::UInt(n) => Some(f32::from(*n)),
            // Safe: readings and percentages are far below f32's exact range
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f32),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for CharacteristicValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for CharacteristicValue {
    fn from(value: u8) -> Self {
        Self::UInt(value)
    }
}

impl From<i32> for CharacteristicValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for CharacteristicValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

/// Push side of the bridge's characteristic registry.
///
/// The accessory calls [`update_value`](Self::update_value) whenever a
/// derived value changes, independent of get-handler polling. Only
/// characteristics present in the accessory's [`ServiceLayout`] are pushed.
pub trait CharacteristicRegistry: Send + Sync {
    /// Publishes a new value for a characteristic.
    fn update_value(&self, characteristic: Characteristic, value: CharacteristicValue);
}
