// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air quality tiers derived from PM2.5 density.

use std::fmt;

use serde::{Deserialize, Serialize};

/// PM2.5 thresholds (µg/m³), highest first.
const THRESHOLDS: [(i32, AirQuality); 5] = [
    (200, AirQuality::Poor),
    (150, AirQuality::Inferior),
    (100, AirQuality::Fair),
    (50, AirQuality::Good),
    (0, AirQuality::Excellent),
];

/// Air quality tier as exposed by the bridge's air quality sensor.
///
/// Variants are ordered from best to worst, with `Unknown` first to match
/// the bridge's numeric encoding.
///
/// # Examples
///
/// ```
/// use purifier_bridge::types::AirQuality;
///
/// assert_eq!(AirQuality::classify(12), AirQuality::Excellent);
/// assert_eq!(AirQuality::classify(150), AirQuality::Inferior);
/// assert_eq!(AirQuality::from_pm2_5(None), AirQuality::Unknown);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AirQuality {
    /// No usable reading.
    #[default]
    Unknown,
    /// Below 50 µg/m³.
    Excellent,
    /// 50-99 µg/m³.
    Good,
    /// 100-149 µg/m³.
    Fair,
    /// 150-199 µg/m³.
    Inferior,
    /// 200 µg/m³ and above.
    Poor,
}

impl AirQuality {
    /// Classifies a PM2.5 reading. Negative readings are `Unknown`.
    #[must_use]
    pub fn classify(pm2_5: i32) -> Self {
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| pm2_5 >= *threshold)
            .map_or(Self::Unknown, |(_, quality)| *quality)
    }

    /// Classifies an optional reading; a missing reading is `Unknown`.
    #[must_use]
    pub fn from_pm2_5(pm2_5: Option<i32>) -> Self {
        pm2_5.map_or(Self::Unknown, Self::classify)
    }

    /// Returns the bridge's numeric value (0 unknown … 5 poor).
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Excellent => 1,
            Self::Good => 2,
            Self::Fair => 3,
            Self::Inferior => 4,
            Self::Poor => 5,
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Inferior => "inferior",
            Self::Poor => "poor",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_boundaries() {
        assert_eq!(AirQuality::classify(0), AirQuality::Excellent);
        assert_eq!(AirQuality::classify(49), AirQuality::Excellent);
        assert_eq!(AirQuality::classify(50), AirQuality::Good);
        assert_eq!(AirQuality::classify(99), AirQuality::Good);
        assert_eq!(AirQuality::classify(100), AirQuality::Fair);
        assert_eq!(AirQuality::classify(149), AirQuality::Fair);
        assert_eq!(AirQuality::classify(150), AirQuality::Inferior);
        assert_eq!(AirQuality::classify(199), AirQuality::Inferior);
        assert_eq!(AirQuality::classify(200), AirQuality::Poor);
        assert_eq!(AirQuality::classify(999), AirQuality::Poor);
    }

    #[test]
    fn negative_or_missing_is_unknown() {
        assert_eq!(AirQuality::classify(-1), AirQuality::Unknown);
        assert_eq!(AirQuality::from_pm2_5(None), AirQuality::Unknown);
        assert_eq!(AirQuality::from_pm2_5(Some(75)), AirQuality::Good);
    }

    #[test]
    fn quality_never_improves_as_density_rises() {
        let mut previous = AirQuality::classify(0);
        for pm in 1..=400 {
            let current = AirQuality::classify(pm);
            assert!(current >= previous, "{pm} µg/m³ improved to {current}");
            previous = current;
        }
    }

    #[test]
    fn numeric_encoding() {
        assert_eq!(AirQuality::Unknown.as_num(), 0);
        assert_eq!(AirQuality::Excellent.as_num(), 1);
        assert_eq!(AirQuality::Poor.as_num(), 5);
    }
}
