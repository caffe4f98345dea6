// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory policies and the mapping rules they govern.
//!
//! An [`AccessoryPolicy`] is chosen once at startup and decides how the
//! bridge's power/target/speed controls translate into purifier commands.
//! Every policy lets the user reach favorite (manual) mode, and setting a
//! rotation speed always switches to favorite mode.
//!
//! | Policy | Silent mode | Power off | Target MANUAL |
//! |--------|-------------|-----------|---------------|
//! | 0 | not reachable | powers off | favorite |
//! | 1 | separate switch | powers off | favorite |
//! | 2 | used as "off" | never | favorite |
//! | 3 | via target MANUAL | powers off | silent |
//!
//! The [`ModePolicyEngine`] turns bridge requests into
//! [`DeviceCommand`](crate::command::DeviceCommand)s, and [`project`]
//! derives the bridge-visible state from purifier mode and power.

mod engine;
mod projection;

pub use engine::ModePolicyEngine;
pub use projection::{Projection, project, target_state};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Behavior configuration for the accessory (0-3).
///
/// Serialized as its number so configuration files can write
/// `"policy": 2`.
///
/// # Examples
///
/// ```
/// use purifier_bridge::policy::AccessoryPolicy;
///
/// let policy = AccessoryPolicy::try_from(1).unwrap();
/// assert!(policy.has_silent_switch());
/// assert!(policy.allows_power_off());
///
/// assert!(!AccessoryPolicy::Mode2.allows_power_off());
/// assert!(AccessoryPolicy::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AccessoryPolicy {
    /// Plain power control, silent mode not exposed.
    Mode0,
    /// Silent mode exposed as a separate switch.
    Mode1,
    /// The purifier is never powered off; "off" means silent mode.
    #[default]
    Mode2,
    /// Target MANUAL selects silent mode; speed changes select favorite.
    Mode3,
}

impl AccessoryPolicy {
    /// Returns the policy number.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Mode0 => 0,
            Self::Mode1 => 1,
            Self::Mode2 => 2,
            Self::Mode3 => 3,
        }
    }

    /// Returns `true` if silent mode is controlled by an auxiliary switch.
    #[must_use]
    pub const fn has_silent_switch(&self) -> bool {
        matches!(self, Self::Mode1)
    }

    /// Returns `true` if deactivating the accessory powers the purifier off.
    #[must_use]
    pub const fn allows_power_off(&self) -> bool {
        !matches!(self, Self::Mode2)
    }

    /// Returns `true` if target MANUAL maps to silent rather than favorite.
    #[must_use]
    pub const fn manual_means_silent(&self) -> bool {
        matches!(self, Self::Mode3)
    }
}

impl fmt::Display for AccessoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_num())
    }
}

impl TryFrom<u8> for AccessoryPolicy {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Mode0),
            1 => Ok(Self::Mode1),
            2 => Ok(Self::Mode2),
            3 => Ok(Self::Mode3),
            other => Err(ValueError::InvalidPolicy(other)),
        }
    }
}

impl From<AccessoryPolicy> for u8 {
    fn from(policy: AccessoryPolicy) -> Self {
        policy.as_num()
    }
}
