// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the building blocks for updating the cached
//! [`DeviceState`](super::DeviceState). They come from purifier
//! notifications, from reads issued by get handlers, and from commands that
//! completed successfully.
//!
//! # Examples
//!
//! ```
//! use purifier_bridge::state::{DeviceState, StateChange};
//! use purifier_bridge::types::PurifierMode;
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::Mode(PurifierMode::Auto)));
//! assert!(!state.apply(&StateChange::Mode(PurifierMode::Auto)));
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FavoriteLevel, LedBrightness, PurifierMode};

/// Represents a change in purifier state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateChange {
    /// Power switched on or off.
    Power(bool),

    /// Operating mode changed.
    Mode(PurifierMode),

    /// Favorite fan level changed.
    FavoriteLevel(FavoriteLevel),

    /// Temperature reading in degrees Celsius.
    Temperature(f32),

    /// Relative humidity reading in percent.
    Humidity(f32),

    /// PM2.5 density in µg/m³.
    Pm25(i32),

    /// Display LED brightness changed.
    LedBrightness(LedBrightness),
}
