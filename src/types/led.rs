// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED brightness of the purifier's display ring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Display LED brightness.
///
/// The identify action walks through the three levels in order using
/// [`LedBrightness::next`].
///
/// # Examples
///
/// ```
/// use purifier_bridge::types::LedBrightness;
///
/// assert_eq!(LedBrightness::Bright.next(), LedBrightness::Dim);
/// assert_eq!(LedBrightness::Off.next(), LedBrightness::Bright);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedBrightness {
    /// Full brightness.
    Bright,
    /// Reduced brightness.
    Dim,
    /// LEDs off.
    Off,
}

impl LedBrightness {
    /// All levels in cycling order.
    pub const CYCLE: [Self; 3] = [Self::Bright, Self::Dim, Self::Off];

    /// Returns the next level in the cycle, wrapping after `Off`.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Bright => Self::Dim,
            Self::Dim => Self::Off,
            Self::Off => Self::Bright,
        }
    }

    /// Returns the protocol string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Dim => "dim",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for LedBrightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedBrightness {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bright" => Ok(Self::Bright),
            "dim" => Ok(Self::Dim),
            "off" => Ok(Self::Off),
            _ => Err(ValueError::InvalidLedBrightness(s.to_string())),
        }
    }
}
