// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating modes reported and accepted by the purifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Operating mode of the purifier.
///
/// The purifier's own protocol exchanges modes as lower-case strings.
///
/// # Examples
///
/// ```
/// use purifier_bridge::types::PurifierMode;
///
/// let mode: PurifierMode = "favorite".parse().unwrap();
/// assert_eq!(mode, PurifierMode::Favorite);
/// assert_eq!(PurifierMode::Silent.as_str(), "silent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurifierMode {
    /// The purifier reports itself idle (its own notion of "off").
    Idle,
    /// Fan speed is regulated from the air quality reading.
    Auto,
    /// Quiet operation at the lowest fan speed.
    Silent,
    /// Fan speed is the user-selected favorite level.
    Favorite,
}

impl PurifierMode {
    /// Returns the protocol string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Auto => "auto",
            Self::Silent => "silent",
            Self::Favorite => "favorite",
        }
    }

    /// Returns `true` for the favorite (manual fan level) mode.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        matches!(self, Self::Favorite)
    }

    /// Returns `true` for the modes the purifier treats as resting.
    #[must_use]
    pub const fn is_resting(&self) -> bool {
        matches!(self, Self::Silent | Self::Idle)
    }
}

impl fmt::Display for PurifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurifierMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "auto" => Ok(Self::Auto),
            "silent" => Ok(Self::Silent),
            "favorite" => Ok(Self::Favorite),
            _ => Err(ValueError::InvalidMode(s.to_string())),
        }
    }
}
