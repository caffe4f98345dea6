// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory purifier and registry shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use purifier_bridge::accessory::Accessory;
use purifier_bridge::command::DeviceCommand;
use purifier_bridge::config::{AccessoryConfig, DeviceConfig};
use purifier_bridge::device::{Connector, PurifierDevice};
use purifier_bridge::error::ProtocolError;
use purifier_bridge::event::{DeviceEvent, EventBus};
use purifier_bridge::policy::AccessoryPolicy;
use purifier_bridge::registry::{Characteristic, CharacteristicRegistry, CharacteristicValue};
use purifier_bridge::types::{FavoriteLevel, LedBrightness, PurifierMode};
use tokio::sync::broadcast;

// ============================================================================
// Fake purifier
// ============================================================================

#[derive(Debug)]
struct Readings {
    power: bool,
    mode: PurifierMode,
    level: FavoriteLevel,
    temperature: f32,
    humidity: f32,
    pm2_5: i32,
    led: LedBrightness,
}

/// Purifier double that records every call and setter command.
#[derive(Debug)]
pub struct FakePurifier {
    readings: Mutex<Readings>,
    calls: Mutex<Vec<&'static str>>,
    commands: Mutex<Vec<DeviceCommand>>,
    failing: Mutex<HashSet<&'static str>>,
    events: EventBus,
}

impl FakePurifier {
    pub fn new() -> Self {
        Self {
            readings: Mutex::new(Readings {
                power: true,
                mode: PurifierMode::Auto,
                level: FavoriteLevel::MIN,
                temperature: 21.5,
                humidity: 45.0,
                pm2_5: 12,
                led: LedBrightness::Bright,
            }),
            calls: Mutex::new(Vec::new()),
            commands: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            events: EventBus::new(),
        }
    }

    pub fn with_mode(self, mode: PurifierMode) -> Self {
        self.readings.lock().mode = mode;
        self
    }

    pub fn with_power(self, power: bool) -> Self {
        self.readings.lock().power = power;
        self
    }

    pub fn with_level(self, level: u8) -> Self {
        self.readings.lock().level = FavoriteLevel::new(level).unwrap();
        self
    }

    pub fn with_pm2_5(self, density: i32) -> Self {
        self.readings.lock().pm2_5 = density;
        self
    }

    pub fn with_led(self, led: LedBrightness) -> Self {
        self.readings.lock().led = led;
        self
    }

    /// Makes the named method fail from now on.
    pub fn fail(&self, method: &'static str) {
        self.failing.lock().insert(method);
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    /// Number of calls to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls.lock().iter().filter(|c| **c == method).count()
    }

    /// Setter commands issued so far, including rejected ones.
    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.commands.lock().clone()
    }

    pub fn mode_now(&self) -> PurifierMode {
        self.readings.lock().mode
    }

    pub fn led_now(&self) -> LedBrightness {
        self.readings.lock().led
    }

    /// Publishes a notification as the purifier would.
    pub fn emit(&self, event: DeviceEvent) {
        self.events.publish(event);
    }

    fn enter(&self, method: &'static str) -> Result<(), ProtocolError> {
        self.calls.lock().push(method);
        if self.failing.lock().contains(method) {
            Err(ProtocolError::Rejected(format!("{method} failed")))
        } else {
            Ok(())
        }
    }

    fn command(&self, method: &'static str, command: DeviceCommand) -> Result<(), ProtocolError> {
        self.commands.lock().push(command);
        self.enter(method)
    }
}

impl PurifierDevice for FakePurifier {
    async fn power(&self) -> Result<bool, ProtocolError> {
        self.enter("power")?;
        Ok(self.readings.lock().power)
    }

    async fn set_power(&self, on: bool) -> Result<(), ProtocolError> {
        self.command("set_power", DeviceCommand::SetPower(on))?;
        self.readings.lock().power = on;
        Ok(())
    }

    async fn mode(&self) -> Result<PurifierMode, ProtocolError> {
        self.enter("mode")?;
        Ok(self.readings.lock().mode)
    }

    async fn set_mode(&self, mode: PurifierMode) -> Result<(), ProtocolError> {
        self.command("set_mode", DeviceCommand::SetMode(mode))?;
        self.readings.lock().mode = mode;
        Ok(())
    }

    async fn favorite_level(&self) -> Result<FavoriteLevel, ProtocolError> {
        self.enter("favorite_level")?;
        Ok(self.readings.lock().level)
    }

    async fn set_favorite_level(&self, level: FavoriteLevel) -> Result<(), ProtocolError> {
        self.command("set_favorite_level", DeviceCommand::SetFavoriteLevel(level))?;
        self.readings.lock().level = level;
        Ok(())
    }

    async fn temperature(&self) -> Result<f32, ProtocolError> {
        self.enter("temperature")?;
        Ok(self.readings.lock().temperature)
    }

    async fn relative_humidity(&self) -> Result<f32, ProtocolError> {
        self.enter("relative_humidity")?;
        Ok(self.readings.lock().humidity)
    }

    async fn pm2_5(&self) -> Result<i32, ProtocolError> {
        self.enter("pm2_5")?;
        Ok(self.readings.lock().pm2_5)
    }

    async fn led_brightness(&self) -> Result<LedBrightness, ProtocolError> {
        self.enter("led_brightness")?;
        Ok(self.readings.lock().led)
    }

    async fn set_led_brightness(&self, brightness: LedBrightness) -> Result<(), ProtocolError> {
        self.command(
            "set_led_brightness",
            DeviceCommand::SetLedBrightness(brightness),
        )?;
        self.readings.lock().led = brightness;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.events.subscribe()
    }
}

/// Connector that either hands out a fresh fake or refuses.
#[derive(Debug, Default)]
pub struct FakeConnector {
    pub refuse: bool,
}

impl Connector for FakeConnector {
    type Device = FakePurifier;

    async fn connect(&self, config: &DeviceConfig) -> Result<FakePurifier, ProtocolError> {
        if self.refuse {
            Err(ProtocolError::ConnectionFailed(format!(
                "{} did not answer",
                config.address
            )))
        } else {
            Ok(FakePurifier::new())
        }
    }
}

// ============================================================================
// Recording registry
// ============================================================================

/// Registry double that keeps every pushed value.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    updates: Mutex<Vec<(Characteristic, CharacteristicValue)>>,
}

impl RecordingRegistry {
    pub fn updates(&self) -> Vec<(Characteristic, CharacteristicValue)> {
        self.updates.lock().clone()
    }

    /// Last value pushed for `characteristic`.
    pub fn last(&self, characteristic: Characteristic) -> Option<CharacteristicValue> {
        self.updates
            .lock()
            .iter()
            .rev()
            .find(|(c, _)| *c == characteristic)
            .map(|(_, v)| *v)
    }

    pub fn count(&self, characteristic: Characteristic) -> usize {
        self.updates
            .lock()
            .iter()
            .filter(|(c, _)| *c == characteristic)
            .count()
    }

    pub fn clear(&self) {
        self.updates.lock().clear();
    }
}

impl CharacteristicRegistry for RecordingRegistry {
    fn update_value(&self, characteristic: Characteristic, value: CharacteristicValue) {
        self.updates.lock().push((characteristic, value));
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestAccessory = Accessory<FakePurifier, RecordingRegistry>;

pub fn config(policy: AccessoryPolicy) -> AccessoryConfig {
    AccessoryConfig::new("Air Purifier 2", "192.168.1.77").with_policy(policy)
}

pub fn accessory(config: AccessoryConfig) -> (TestAccessory, Arc<RecordingRegistry>) {
    let registry = Arc::new(RecordingRegistry::default());
    (Accessory::new(config, Arc::clone(&registry)), registry)
}

/// Accessory with `policy` and `device` already attached.
pub fn connected(
    policy: AccessoryPolicy,
    device: FakePurifier,
) -> (TestAccessory, Arc<FakePurifier>, Arc<RecordingRegistry>) {
    let (accessory, registry) = accessory(config(policy));
    let device = accessory.attach(device);
    (accessory, device, registry)
}
