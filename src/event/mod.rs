// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Purifier notifications.
//!
//! The purifier reports temperature, humidity, PM2.5, mode and power
//! changes as [`DeviceEvent`]s. Device sessions publish them on an
//! [`EventBus`], which uses tokio's broadcast channel so the accessory and
//! any other observer can subscribe independently.
//!
//! # Examples
//!
//! ```
//! use purifier_bridge::event::{DeviceEvent, EventBus};
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! bus.publish(DeviceEvent::pm2_5_changed(35));
//! ```

mod device_event;
mod event_bus;

pub use device_event::DeviceEvent;
pub use event_bus::EventBus;
