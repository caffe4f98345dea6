// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory configuration.
//!
//! Configuration is fixed at startup and never reloaded. It can be built in
//! code with the `with_*` methods or parsed from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, ParseError, ValueError};
use crate::policy::AccessoryPolicy;

/// Namespace for deriving accessory identifiers from the username.
const ACCESSORY_NAMESPACE: Uuid = Uuid::from_u128(0x5f1c_3a0e_8d2b_4c71_9a6e_2b0d_7c4f_1e93);

/// Default interval between liveness probes.
const DEFAULT_PROBE_INTERVAL_SECS: u64 = 300;

/// Configuration for the purifier accessory.
///
/// # Examples
///
/// ```
/// use purifier_bridge::config::AccessoryConfig;
/// use purifier_bridge::policy::AccessoryPolicy;
///
/// let config = AccessoryConfig::new("Air Purifier 2", "192.168.1.77")
///     .with_token("2b26525b0674c61e1893bc74fd2f38d6")
///     .with_policy(AccessoryPolicy::Mode3)
///     .with_temperature(false);
///
/// assert!(config.validate().is_ok());
/// assert!(!config.sensors.temperature);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryConfig {
    /// Display name of the accessory.
    pub name: String,
    /// Pairing code in `NNN-NN-NNN` form.
    #[serde(default = "default_pincode")]
    pub pincode: String,
    /// MAC-like identifier the bridge uses to tell accessories apart.
    #[serde(default = "default_username")]
    pub username: String,
    /// Metadata shown by home-automation clients.
    #[serde(default)]
    pub info: AccessoryInfo,
    /// How to reach the purifier.
    pub device: DeviceConfig,
    /// Behavior policy (0-3).
    #[serde(default)]
    pub policy: AccessoryPolicy,
    /// Which sensor services to expose.
    #[serde(default)]
    pub sensors: SensorToggles,
    /// Seconds between liveness probes.
    #[serde(default = "default_probe_interval")]
    pub probe_interval_secs: u64,
}

impl AccessoryConfig {
    /// Creates a configuration with defaults for everything but the name
    /// and device address.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pincode: default_pincode(),
            username: default_username(),
            info: AccessoryInfo::default(),
            device: DeviceConfig::new(address),
            policy: AccessoryPolicy::default(),
            sensors: SensorToggles::default(),
            probe_interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the document is malformed and
    /// `Error::Value` if a field fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the device token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.device.token = Some(token.into());
        self
    }

    /// Sets the device model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.info.model.clone_from(&model);
        self.device.model = Some(model);
        self
    }

    /// Sets the pairing credentials.
    #[must_use]
    pub fn with_pairing(mut self, pincode: impl Into<String>, username: impl Into<String>) -> Self {
        self.pincode = pincode.into();
        self.username = username.into();
        self
    }

    /// Sets the accessory metadata.
    #[must_use]
    pub fn with_info(mut self, info: AccessoryInfo) -> Self {
        self.info = info;
        self
    }

    /// Sets the behavior policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AccessoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shows or hides the temperature sensor.
    #[must_use]
    pub fn with_temperature(mut self, show: bool) -> Self {
        self.sensors.temperature = show;
        self
    }

    /// Shows or hides the humidity sensor.
    #[must_use]
    pub fn with_humidity(mut self, show: bool) -> Self {
        self.sensors.humidity = show;
        self
    }

    /// Shows or hides the air quality sensor.
    #[must_use]
    pub fn with_air_quality(mut self, show: bool) -> Self {
        self.sensors.air_quality = show;
        self
    }

    /// Sets the liveness probe interval.
    #[must_use]
    pub fn with_probe_interval(mut self, interval: Duration) -> Self {
        self.probe_interval_secs = interval.as_secs().max(1);
        self
    }

    /// Returns the liveness probe interval.
    #[must_use]
    pub fn probe_interval(&self) -> Duration {
        Duration::from_secs(self.probe_interval_secs.max(1))
    }

    /// Returns a stable accessory identifier derived from the username.
    #[must_use]
    pub fn accessory_uuid(&self) -> Uuid {
        let seed = format!("accessories:AirPurifier:{}", self.username);
        Uuid::new_v5(&ACCESSORY_NAMESPACE, seed.as_bytes())
    }

    /// Checks pairing credentials and metadata.
    ///
    /// # Errors
    ///
    /// Returns the first `ValueError` found.
    pub fn validate(&self) -> Result<(), ValueError> {
        if !is_valid_pincode(&self.pincode) {
            return Err(ValueError::InvalidPincode(self.pincode.clone()));
        }
        if !is_valid_username(&self.username) {
            return Err(ValueError::InvalidUsername(self.username.clone()));
        }
        if self.info.firmware.contains('_') {
            return Err(ValueError::InvalidFirmware(self.info.firmware.clone()));
        }
        Ok(())
    }
}

/// Metadata for the accessory information service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessoryInfo {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model identifier.
    pub model: String,
    /// Serial number.
    pub serial_number: String,
    /// Firmware revision (no underscores).
    pub firmware: String,
}

impl Default for AccessoryInfo {
    fn default() -> Self {
        Self {
            manufacturer: "Xiaomi".to_string(),
            model: "zhimi.airpurifier.m1".to_string(),
            serial_number: "12345678".to_string(),
            firmware: "1.2.4".to_string(),
        }
    }
}

/// Connection parameters handed to the device connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// IP address or host name of the purifier.
    pub address: String,
    /// Authentication token, if the transport needs one.
    #[serde(default)]
    pub token: Option<String>,
    /// Model identifier, if known.
    #[serde(default)]
    pub model: Option<String>,
}

impl DeviceConfig {
    /// Creates a device configuration for an address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: None,
            model: None,
        }
    }
}

/// Which sensor services to expose alongside the purifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
// Each flag toggles an independent service.
#[allow(clippy::struct_excessive_bools)]
pub struct SensorToggles {
    /// Temperature sensor service.
    pub temperature: bool,
    /// Humidity sensor service.
    pub humidity: bool,
    /// Air quality sensor service (tier and PM2.5 density).
    pub air_quality: bool,
}

impl SensorToggles {
    /// Exposes every sensor.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            temperature: true,
            humidity: true,
            air_quality: true,
        }
    }

    /// Exposes no sensors.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            temperature: false,
            humidity: false,
            air_quality: false,
        }
    }
}

impl Default for SensorToggles {
    fn default() -> Self {
        Self::all()
    }
}

fn default_pincode() -> String {
    "000-69-777".to_string()
}

fn default_username() -> String {
    "AA:BB:CC:DD:EE:FF".to_string()
}

fn default_probe_interval() -> u64 {
    DEFAULT_PROBE_INTERVAL_SECS
}

fn is_valid_pincode(pincode: &str) -> bool {
    let groups: Vec<&str> = pincode.split('-').collect();
    groups.len() == 3
        && groups
            .iter()
            .zip([3, 2, 3])
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()))
}

fn is_valid_username(username: &str) -> bool {
    let octets: Vec<&str> = username.split(':').collect();
    octets.len() == 6
        && octets
            .iter()
            .all(|octet| octet.len() == 2 && octet.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AccessoryConfig::new("Purifier", "10.0.0.5");
        assert_eq!(config.policy, AccessoryPolicy::Mode2);
        assert_eq!(config.sensors, SensorToggles::all());
        assert_eq!(config.probe_interval(), Duration::from_secs(300));
        assert!(config.device.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_json() {
        let json = r#"{
            "name": "Bedroom Purifier",
            "pincode": "123-45-678",
            "username": "12:34:56:78:9A:BC",
            "device": { "address": "192.168.1.77", "token": "abc" },
            "policy": 1,
            "sensors": { "humidity": false }
        }"#;

        let config = AccessoryConfig::from_json_str(json).unwrap();
        assert_eq!(config.name, "Bedroom Purifier");
        assert_eq!(config.policy, AccessoryPolicy::Mode1);
        assert_eq!(config.device.token.as_deref(), Some("abc"));
        assert!(config.sensors.temperature);
        assert!(!config.sensors.humidity);
        assert_eq!(config.info, AccessoryInfo::default());
    }

    #[test]
    fn parse_rejects_bad_policy() {
        let json = r#"{ "name": "P", "device": { "address": "x" }, "policy": 7 }"#;
        assert!(matches!(
            AccessoryConfig::from_json_str(json),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn validate_pincode() {
        let config = AccessoryConfig::new("P", "x").with_pairing("12345678", "AA:BB:CC:DD:EE:FF");
        assert!(matches!(
            config.validate(),
            Err(ValueError::InvalidPincode(_))
        ));
    }

    #[test]
    fn validate_username() {
        let config = AccessoryConfig::new("P", "x").with_pairing("000-69-777", "AA:BB:CC:DD:EE");
        assert!(matches!(
            config.validate(),
            Err(ValueError::InvalidUsername(_))
        ));
    }

    #[test]
    fn validate_firmware() {
        let info = AccessoryInfo {
            firmware: "1_2_4".to_string(),
            ..AccessoryInfo::default()
        };
        let config = AccessoryConfig::new("P", "x").with_info(info);
        assert!(matches!(
            config.validate(),
            Err(ValueError::InvalidFirmware(_))
        ));
    }

    #[test]
    fn accessory_uuid_is_stable_per_username() {
        let a = AccessoryConfig::new("A", "x");
        let b = AccessoryConfig::new("B", "y");
        assert_eq!(a.accessory_uuid(), b.accessory_uuid());

        let c = AccessoryConfig::new("A", "x").with_pairing("000-69-777", "11:22:33:44:55:66");
        assert_ne!(a.accessory_uuid(), c.accessory_uuid());
    }

    #[test]
    fn with_model_sets_both_sides() {
        let config = AccessoryConfig::new("P", "x").with_model("zhimi.airpurifier.m2");
        assert_eq!(config.info.model, "zhimi.airpurifier.m2");
        assert_eq!(config.device.model.as_deref(), Some("zhimi.airpurifier.m2"));
    }
}
