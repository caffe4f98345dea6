// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan level types.
//!
//! The purifier expresses its manual fan speed as a favorite level (0-16),
//! while the bridge exposes a rotation speed percentage (0-100). One level
//! step is worth [`FavoriteLevel::PERCENT_PER_LEVEL`] percent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Favorite (manual) fan level of the purifier (0-16).
///
/// # Examples
///
/// ```
/// use purifier_bridge::types::{FavoriteLevel, RotationSpeed};
///
/// let level = FavoriteLevel::new(8).unwrap();
/// assert_eq!(level.rotation_speed().value(), 50.0);
///
/// // Percentages round up to the next level
/// let speed = RotationSpeed::new(51.0).unwrap();
/// assert_eq!(FavoriteLevel::from_rotation_speed(speed).value(), 9);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct FavoriteLevel(u8);

impl FavoriteLevel {
    /// Lowest favorite level.
    pub const MIN: Self = Self(0);

    /// Highest favorite level.
    pub const MAX: Self = Self(16);

    /// Rotation speed percentage covered by one level step.
    pub const PERCENT_PER_LEVEL: f32 = 6.25;

    /// Creates a new favorite level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 16.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN.0),
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Converts a rotation speed to the smallest level that reaches it.
    #[must_use]
    pub fn from_rotation_speed(speed: RotationSpeed) -> Self {
        let steps = (speed.value() / Self::PERCENT_PER_LEVEL).ceil();
        // Safe: speed is 0-100, so steps is 0-16
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = steps as u8;
        Self(level.min(Self::MAX.0))
    }

    /// Returns the exact rotation speed this level corresponds to.
    #[must_use]
    pub fn rotation_speed(&self) -> RotationSpeed {
        RotationSpeed(f32::from(self.0) * Self::PERCENT_PER_LEVEL)
    }

    /// Returns the level value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for FavoriteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for FavoriteLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Rotation speed percentage exposed to the bridge (0-100).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct RotationSpeed(f32);

impl RotationSpeed {
    /// Stopped.
    pub const MIN: Self = Self(0.0);

    /// Full speed.
    pub const MAX: Self = Self(100.0);

    /// Creates a new rotation speed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRotationSpeed` if value is not a number
    /// within [0, 100].
    pub fn new(value: f32) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::InvalidRotationSpeed(value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for RotationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_level_valid() {
        for v in 0..=16 {
            assert_eq!(FavoriteLevel::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn favorite_level_invalid() {
        assert!(matches!(
            FavoriteLevel::new(17),
            Err(ValueError::OutOfRange { actual: 17, .. })
        ));
    }

    #[test]
    fn level_to_speed_is_exact() {
        assert!((FavoriteLevel::MAX.rotation_speed().value() - 100.0).abs() < f32::EPSILON);
        let one = FavoriteLevel::new(1).unwrap().rotation_speed();
        assert!((one.value() - 6.25).abs() < f32::EPSILON);
        assert!(FavoriteLevel::MIN.rotation_speed().value().abs() < f32::EPSILON);
    }

    #[test]
    fn speed_to_level_rounds_up() {
        let level = |p: f32| FavoriteLevel::from_rotation_speed(RotationSpeed::new(p).unwrap());
        assert_eq!(level(0.0).value(), 0);
        assert_eq!(level(1.0).value(), 1);
        assert_eq!(level(6.25).value(), 1);
        assert_eq!(level(6.26).value(), 2);
        assert_eq!(level(50.0).value(), 8);
        assert_eq!(level(100.0).value(), 16);
    }

    #[test]
    fn speed_round_trip_stays_within_one_step() {
        for p in 0..=100u8 {
            let speed = RotationSpeed::new(f32::from(p)).unwrap();
            let level = FavoriteLevel::from_rotation_speed(speed);
            let back = level.rotation_speed();
            let diff = back.value() - speed.value();
            assert!(
                (0.0..FavoriteLevel::PERCENT_PER_LEVEL).contains(&diff),
                "{p}% came back as {back}"
            );
            // Setting the reported speed again lands on the same level
            assert_eq!(FavoriteLevel::from_rotation_speed(back), level);
        }
    }

    #[test]
    fn rotation_speed_invalid() {
        assert!(RotationSpeed::new(-1.0).is_err());
        assert!(RotationSpeed::new(100.5).is_err());
        assert!(RotationSpeed::new(f32::NAN).is_err());
    }
}
