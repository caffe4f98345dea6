// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current and target air purifier states as modelled by the bridge.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observed operating condition of the purifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrentPurifierState {
    /// Powered off (or, under policy 2, resting in silent/idle mode).
    #[default]
    Inactive,
    /// Powered but not purifying. Defined by the bridge model, never derived
    /// from the purifier's reports.
    Idle,
    /// Purifying air.
    PurifyingAir,
}

impl CurrentPurifierState {
    /// Returns the state for an active flag: purifying when active.
    #[must_use]
    pub const fn from_active(active: bool) -> Self {
        if active {
            Self::PurifyingAir
        } else {
            Self::Inactive
        }
    }

    /// Returns the bridge's numeric value.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::PurifyingAir => 2,
        }
    }
}

impl fmt::Display for CurrentPurifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inactive => "inactive",
            Self::Idle => "idle",
            Self::PurifyingAir => "purifying air",
        };
        f.write_str(name)
    }
}

/// Desired regulation mode requested through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetPurifierState {
    /// Fan speed set by the user.
    Manual,
    /// Fan speed regulated automatically.
    #[default]
    Auto,
}

impl TargetPurifierState {
    /// Returns the bridge's numeric value.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Manual => 0,
            Self::Auto => 1,
        }
    }

    /// Parses the bridge's numeric value; anything non-zero means auto.
    #[must_use]
    pub const fn from_num(value: u8) -> Self {
        if value == 0 { Self::Manual } else { Self::Auto }
    }
}

impl fmt::Display for TargetPurifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => f.write_str("manual"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_state_numbers() {
        assert_eq!(CurrentPurifierState::Inactive.as_num(), 0);
        assert_eq!(CurrentPurifierState::Idle.as_num(), 1);
        assert_eq!(CurrentPurifierState::PurifyingAir.as_num(), 2);
    }

    #[test]
    fn current_from_active_never_idle() {
        assert_eq!(
            CurrentPurifierState::from_active(true),
            CurrentPurifierState::PurifyingAir
        );
        assert_eq!(
            CurrentPurifierState::from_active(false),
            CurrentPurifierState::Inactive
        );
    }

    #[test]
    fn target_state_numbers() {
        assert_eq!(TargetPurifierState::from_num(0), TargetPurifierState::Manual);
        assert_eq!(TargetPurifierState::from_num(1), TargetPurifierState::Auto);
        assert_eq!(TargetPurifierState::Manual.as_num(), 0);
        assert_eq!(TargetPurifierState::default(), TargetPurifierState::Auto);
    }
}
