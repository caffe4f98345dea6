// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Purifier command definitions.
//!
//! The policy engine decides *which* command to send; this module only
//! describes the commands themselves. They are executed through
//! [`PurifierDevice::execute`](crate::device::PurifierDevice::execute).
//!
//! # Available Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | [`DeviceCommand::SetPower`] | Switch the purifier on or off | `set_power true` |
//! | [`DeviceCommand::SetMode`] | Change the operating mode | `set_mode silent` |
//! | [`DeviceCommand::SetFavoriteLevel`] | Set the manual fan level | `set_level_favorite 8` |
//! | [`DeviceCommand::SetLedBrightness`] | Change the display brightness | `set_led_b dim` |
//!
//! # Examples
//!
//! ```
//! use purifier_bridge::command::DeviceCommand;
//! use purifier_bridge::types::PurifierMode;
//!
//! let cmd = DeviceCommand::SetMode(PurifierMode::Favorite);
//! assert_eq!(cmd.name(), "set_mode");
//! assert_eq!(cmd.payload(), "favorite");
//! assert_eq!(cmd.to_string(), "set_mode favorite");
//! ```

use std::fmt;

use crate::types::{FavoriteLevel, LedBrightness, PurifierMode};

/// A state-changing command for the purifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCommand {
    /// Turn the purifier on (`true`) or off (`false`).
    SetPower(bool),
    /// Switch operating mode.
    SetMode(PurifierMode),
    /// Set the favorite fan level.
    SetFavoriteLevel(FavoriteLevel),
    /// Set the display LED brightness.
    SetLedBrightness(LedBrightness),
}

impl DeviceCommand {
    /// Returns the purifier's method name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetPower(_) => "set_power",
            Self::SetMode(_) => "set_mode",
            Self::SetFavoriteLevel(_) => "set_level_favorite",
            Self::SetLedBrightness(_) => "set_led_b",
        }
    }

    /// Returns the command argument as sent to the purifier.
    #[must_use]
    pub fn payload(&self) -> String {
        match self {
            Self::SetPower(on) => if *on { "on" } else { "off" }.to_string(),
            Self::SetMode(mode) => mode.as_str().to_string(),
            Self::SetFavoriteLevel(level) => level.value().to_string(),
            Self::SetLedBrightness(brightness) => brightness.as_str().to_string(),
        }
    }

    /// Returns `true` if the command changes the operating mode.
    #[must_use]
    pub const fn is_mode_change(&self) -> bool {
        matches!(self, Self::SetMode(_))
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.payload())
    }
}

/// Commands needed to apply a rotation speed request.
///
/// `switch_mode` is best-effort: a failure is logged and the level is still
/// set. Only the outcome of `set_level` is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPlan {
    /// Mode switch to issue first, if the purifier is not in favorite mode.
    pub switch_mode: Option<DeviceCommand>,
    /// The favorite level command that carries the request.
    pub set_level: DeviceCommand,
}

impl RotationPlan {
    /// Returns the commands in the order they are issued.
    #[must_use]
    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.switch_mode
            .into_iter()
            .chain(std::iter::once(self.set_level))
            .collect()
    }
}
