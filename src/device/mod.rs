// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Purifier device abstraction.
//!
//! The transport to the physical purifier lives outside this crate. A
//! transport implements [`PurifierDevice`] for its session type and
//! [`Connector`] to open sessions; the accessory only talks to those traits.
//!
//! # Examples
//!
//! A minimal in-memory purifier:
//!
//! ```
//! use parking_lot::Mutex;
//! use purifier_bridge::device::PurifierDevice;
//! use purifier_bridge::error::ProtocolError;
//! use purifier_bridge::event::{DeviceEvent, EventBus};
//! use purifier_bridge::types::{FavoriteLevel, LedBrightness, PurifierMode};
//! use tokio::sync::broadcast;
//!
//! struct Memory {
//!     mode: Mutex<PurifierMode>,
//!     events: EventBus,
//! }
//!
//! impl PurifierDevice for Memory {
//!     async fn power(&self) -> Result<bool, ProtocolError> { Ok(true) }
//!     async fn set_power(&self, _on: bool) -> Result<(), ProtocolError> { Ok(()) }
//!     async fn mode(&self) -> Result<PurifierMode, ProtocolError> { Ok(*self.mode.lock()) }
//!     async fn set_mode(&self, mode: PurifierMode) -> Result<(), ProtocolError> {
//!         *self.mode.lock() = mode;
//!         self.events.publish(DeviceEvent::mode_changed(mode));
//!         Ok(())
//!     }
//!     async fn favorite_level(&self) -> Result<FavoriteLevel, ProtocolError> {
//!         Ok(FavoriteLevel::MIN)
//!     }
//!     async fn set_favorite_level(&self, _l: FavoriteLevel) -> Result<(), ProtocolError> {
//!         Ok(())
//!     }
//!     async fn temperature(&self) -> Result<f32, ProtocolError> { Ok(21.5) }
//!     async fn relative_humidity(&self) -> Result<f32, ProtocolError> { Ok(40.0) }
//!     async fn pm2_5(&self) -> Result<i32, ProtocolError> { Ok(12) }
//!     async fn led_brightness(&self) -> Result<LedBrightness, ProtocolError> {
//!         Ok(LedBrightness::Dim)
//!     }
//!     async fn set_led_brightness(&self, _b: LedBrightness) -> Result<(), ProtocolError> {
//!         Ok(())
//!     }
//!     fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> { self.events.subscribe() }
//! }
//! ```

mod session;

pub use session::{ConnectionState, DeviceSession};

use tokio::sync::broadcast;

use crate::command::DeviceCommand;
use crate::config::DeviceConfig;
use crate::error::ProtocolError;
use crate::event::DeviceEvent;
use crate::types::{FavoriteLevel, LedBrightness, PurifierMode};

/// Operations a connected purifier supports.
///
/// Every call is a round trip to the purifier. Setters resolve once the
/// purifier acknowledges the change; change notifications arrive
/// separately through [`subscribe`](Self::subscribe).
#[allow(async_fn_in_trait)]
pub trait PurifierDevice {
    /// Reads the power flag.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn power(&self) -> Result<bool, ProtocolError>;

    /// Switches the purifier on or off.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier rejects the change.
    async fn set_power(&self, on: bool) -> Result<(), ProtocolError>;

    /// Reads the operating mode.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn mode(&self) -> Result<PurifierMode, ProtocolError>;

    /// Changes the operating mode.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier rejects the change.
    async fn set_mode(&self, mode: PurifierMode) -> Result<(), ProtocolError>;

    /// Reads the favorite fan level.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn favorite_level(&self) -> Result<FavoriteLevel, ProtocolError>;

    /// Changes the favorite fan level.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier rejects the change.
    async fn set_favorite_level(&self, level: FavoriteLevel) -> Result<(), ProtocolError>;

    /// Reads the temperature in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn temperature(&self) -> Result<f32, ProtocolError>;

    /// Reads the relative humidity in percent.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn relative_humidity(&self) -> Result<f32, ProtocolError>;

    /// Reads the PM2.5 density in µg/m³.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn pm2_5(&self) -> Result<i32, ProtocolError>;

    /// Reads the LED brightness.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier cannot be reached.
    async fn led_brightness(&self) -> Result<LedBrightness, ProtocolError>;

    /// Changes the LED brightness.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the purifier rejects the change.
    async fn set_led_brightness(&self, brightness: LedBrightness) -> Result<(), ProtocolError>;

    /// Subscribes to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<DeviceEvent>;

    /// Executes a command by calling the matching setter.
    ///
    /// # Errors
    ///
    /// Returns the setter's `ProtocolError`.
    async fn execute(&self, command: DeviceCommand) -> Result<(), ProtocolError> {
        tracing::debug!(command = %command, "Executing purifier command");
        match command {
            DeviceCommand::SetPower(on) => self.set_power(on).await,
            DeviceCommand::SetMode(mode) => self.set_mode(mode).await,
            DeviceCommand::SetFavoriteLevel(level) => self.set_favorite_level(level).await,
            DeviceCommand::SetLedBrightness(brightness) => {
                self.set_led_brightness(brightness).await
            }
        }
    }
}

/// Opens sessions to a purifier.
#[allow(async_fn_in_trait)]
pub trait Connector {
    /// The session type this connector produces.
    type Device: PurifierDevice;

    /// Connects to the purifier described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::ConnectionFailed` if the purifier cannot be
    /// reached or authenticated.
    async fn connect(&self, config: &DeviceConfig) -> Result<Self::Device, ProtocolError>;
}
