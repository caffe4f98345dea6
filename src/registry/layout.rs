// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Services the bridge registers for an accessory.

use std::fmt;

use crate::config::{AccessoryConfig, AccessoryInfo};

use super::Characteristic;

/// Kind of service in the bridge model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Manufacturer, model, serial number and firmware.
    AccessoryInformation,
    /// The purifier itself.
    AirPurifier,
    /// Auxiliary on/off switch.
    Switch,
    /// Temperature reading.
    TemperatureSensor,
    /// Relative humidity reading.
    HumiditySensor,
    /// Air quality tier and PM2.5 density.
    AirQualitySensor,
}

impl ServiceKind {
    /// Returns the service's name in the bridge model.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccessoryInformation => "AccessoryInformation",
            Self::AirPurifier => "AirPurifier",
            Self::Switch => "Switch",
            Self::TemperatureSensor => "TemperatureSensor",
            Self::HumiditySensor => "HumiditySensor",
            Self::AirQualitySensor => "AirQualitySensor",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service to register with the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// What kind of service this is.
    pub kind: ServiceKind,
    /// Display name.
    pub name: String,
    /// Characteristics the accessory serves on this service.
    pub characteristics: Vec<Characteristic>,
}

impl Service {
    fn new(kind: ServiceKind, name: impl Into<String>, characteristics: &[Characteristic]) -> Self {
        Self {
            kind,
            name: name.into(),
            characteristics: characteristics.to_vec(),
        }
    }
}

/// The full set of services for one accessory.
///
/// Policy 1 adds the silent switch; sensor services follow the configured
/// toggles.
///
/// # Examples
///
/// ```
/// use purifier_bridge::config::AccessoryConfig;
/// use purifier_bridge::policy::AccessoryPolicy;
/// use purifier_bridge::registry::{Characteristic, ServiceKind, ServiceLayout};
///
/// let config = AccessoryConfig::new("Purifier", "10.0.0.5")
///     .with_policy(AccessoryPolicy::Mode1);
/// let layout = ServiceLayout::for_config(&config);
///
/// let switch = layout.service(ServiceKind::Switch).unwrap();
/// assert_eq!(switch.name, "Silent Purifier");
/// assert!(layout.exposes(Characteristic::SilentSwitch));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLayout {
    information: AccessoryInfo,
    services: Vec<Service>,
}

impl ServiceLayout {
    /// Builds the layout for a configuration.
    #[must_use]
    pub fn for_config(config: &AccessoryConfig) -> Self {
        let name = config.name.as_str();
        let mut services = vec![
            Service::new(ServiceKind::AccessoryInformation, name, &[]),
            Service::new(
                ServiceKind::AirPurifier,
                name,
                &[
                    Characteristic::Active,
                    Characteristic::CurrentAirPurifierState,
                    Characteristic::TargetAirPurifierState,
                    Characteristic::RotationSpeed,
                ],
            ),
        ];

        if config.policy.has_silent_switch() {
            services.push(Service::new(
                ServiceKind::Switch,
                format!("Silent {name}"),
                &[Characteristic::SilentSwitch],
            ));
        }
        if config.sensors.temperature {
            services.push(Service::new(
                ServiceKind::TemperatureSensor,
                format!("Temperature {name}"),
                &[Characteristic::CurrentTemperature],
            ));
        }
        if config.sensors.humidity {
            services.push(Service::new(
                ServiceKind::HumiditySensor,
                format!("Humidity {name}"),
                &[Characteristic::CurrentRelativeHumidity],
            ));
        }
        if config.sensors.air_quality {
            services.push(Service::new(
                ServiceKind::AirQualitySensor,
                format!("Air Quality {name}"),
                &[Characteristic::AirQuality, Characteristic::Pm25Density],
            ));
        }

        Self {
            information: config.info.clone(),
            services,
        }
    }

    /// Metadata for the accessory information service.
    #[must_use]
    pub fn information(&self) -> &AccessoryInfo {
        &self.information
    }

    /// All services in registration order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns the service of the given kind, if registered.
    #[must_use]
    pub fn service(&self, kind: ServiceKind) -> Option<&Service> {
        self.services.iter().find(|s| s.kind == kind)
    }

    /// Returns `true` if any registered service serves the characteristic.
    #[must_use]
    pub fn exposes(&self, characteristic: Characteristic) -> bool {
        self.services
            .iter()
            .any(|s| s.characteristics.contains(&characteristic))
    }
}
