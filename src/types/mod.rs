// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared by the purifier and bridge sides.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so the mapping code never has to re-check them.
//!
//! # Types
//!
//! - [`PurifierMode`] - Idle/Auto/Silent/Favorite operating modes
//! - [`FavoriteLevel`] - Manual fan level (0-16)
//! - [`RotationSpeed`] - Bridge fan speed percentage (0-100)
//! - [`LedBrightness`] - Display brightness used by the identify action
//! - [`AirQuality`] - Air quality tier derived from PM2.5
//! - [`CurrentPurifierState`] / [`TargetPurifierState`] - Bridge state enums

mod air_quality;
mod led;
mod level;
mod mode;
mod purifier_state;

pub use air_quality::AirQuality;
pub use led::LedBrightness;
pub use level::{FavoriteLevel, RotationSpeed};
pub use mode::PurifierMode;
pub use purifier_state::{CurrentPurifierState, TargetPurifierState};
