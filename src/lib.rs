// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `purifier_bridge` - Expose a networked air purifier as a home-automation
//! bridge accessory.
//!
//! The crate keeps two representations in sync: the purifier's own state
//! (power, mode, favorite level, sensor readings) and the characteristics a
//! home-automation bridge shows its users (Active, current and target
//! purifier state, rotation speed, sensors).
//!
//! # Accessory Policies
//!
//! The mapping between the two is chosen by an [`AccessoryPolicy`]:
//!
//! - **0**: Active turns the purifier on and off
//! - **1**: as 0, plus a separate switch for silent mode
//! - **2** (default): the purifier is never powered off; "off" means silent
//! - **3**: as 0, but manual regulation means silent mode
//!
//! # Collaborators
//!
//! The transport to the purifier and the bridge itself stay outside this
//! crate. Implement [`PurifierDevice`] and [`Connector`] for the transport and
//! [`CharacteristicRegistry`] for the bridge.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use purifier_bridge::{Accessory, AccessoryConfig, AccessoryPolicy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> purifier_bridge::Result<()> {
//!     let config = AccessoryConfig::new("Air Purifier 2", "192.168.1.77")
//!         .with_token("2b26525b0674c61e1893bc74fd2f38d6")
//!         .with_policy(AccessoryPolicy::Mode3);
//!     config.validate()?;
//!
//!     let accessory = Accessory::new(config, Arc::new(MyBridgeRegistry::default()));
//!     accessory.connect(&MyConnector).await?;
//!
//!     // Bridge write handlers call into the dispatcher
//!     accessory.set_rotation_speed(RotationSpeed::new(50.0)?).await?;
//!
//!     // Mirror purifier notifications until the session ends
//!     accessory.run().await
//! }
//! ```

pub mod accessory;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod policy;
pub mod registry;
pub mod state;
pub mod types;

pub use accessory::{Accessory, EventBridge, LivenessProber};
pub use command::{DeviceCommand, RotationPlan};
pub use config::{AccessoryConfig, AccessoryInfo, DeviceConfig, SensorToggles};
pub use device::{ConnectionState, Connector, DeviceSession, PurifierDevice};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use event::{DeviceEvent, EventBus};
pub use policy::{AccessoryPolicy, ModePolicyEngine, Projection};
pub use registry::{
    Characteristic, CharacteristicRegistry, CharacteristicValue, Service, ServiceKind,
    ServiceLayout,
};
pub use state::{DeviceState, ExternalView, StateChange};
pub use types::{
    AirQuality, CurrentPurifierState, FavoriteLevel, LedBrightness, PurifierMode, RotationSpeed,
    TargetPurifierState,
};
