// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation of bridge requests into purifier commands.

use crate::command::{DeviceCommand, RotationPlan};
use crate::error::Error;
use crate::registry::Characteristic;
use crate::types::{FavoriteLevel, PurifierMode, RotationSpeed, TargetPurifierState};

use super::AccessoryPolicy;

/// Decides purifier commands for bridge requests under a fixed policy.
///
/// The engine is pure: it never talks to the purifier. Both the command
/// dispatcher and the event bridge consult it, so the two directions agree
/// on what "active" means.
///
/// # Examples
///
/// ```
/// use purifier_bridge::command::DeviceCommand;
/// use purifier_bridge::policy::{AccessoryPolicy, ModePolicyEngine};
/// use purifier_bridge::types::PurifierMode;
///
/// let engine = ModePolicyEngine::new(AccessoryPolicy::Mode2);
///
/// // Turning the accessory off only quiets the purifier
/// assert_eq!(
///     engine.decide_activation(false),
///     DeviceCommand::SetMode(PurifierMode::Silent)
/// );
/// assert!(!engine.read_activation(Some(PurifierMode::Silent), Some(true)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicyEngine {
    policy: AccessoryPolicy,
}

impl ModePolicyEngine {
    /// Creates an engine for the given policy.
    #[must_use]
    pub const fn new(policy: AccessoryPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this engine applies.
    #[must_use]
    pub const fn policy(&self) -> AccessoryPolicy {
        self.policy
    }

    /// Command for a write to the Active characteristic.
    #[must_use]
    pub const fn decide_activation(&self, active: bool) -> DeviceCommand {
        if !active && !self.policy.allows_power_off() {
            DeviceCommand::SetMode(PurifierMode::Silent)
        } else {
            DeviceCommand::SetPower(active)
        }
    }

    /// Command for a write to the TargetAirPurifierState characteristic.
    #[must_use]
    pub const fn decide_target_state(&self, target: TargetPurifierState) -> DeviceCommand {
        match target {
            TargetPurifierState::Auto => DeviceCommand::SetMode(PurifierMode::Auto),
            TargetPurifierState::Manual if self.policy.manual_means_silent() => {
                DeviceCommand::SetMode(PurifierMode::Silent)
            }
            TargetPurifierState::Manual => DeviceCommand::SetMode(PurifierMode::Favorite),
        }
    }

    /// Commands for a write to the RotationSpeed characteristic.
    ///
    /// A mode switch is planned only when the current mode is known and is
    /// not favorite already.
    #[must_use]
    pub fn decide_rotation_speed(
        &self,
        speed: RotationSpeed,
        current_mode: Option<PurifierMode>,
    ) -> RotationPlan {
        let switch_mode = match current_mode {
            Some(mode) if !mode.is_favorite() => {
                Some(DeviceCommand::SetMode(PurifierMode::Favorite))
            }
            _ => None,
        };

        RotationPlan {
            switch_mode,
            set_level: DeviceCommand::SetFavoriteLevel(FavoriteLevel::from_rotation_speed(speed)),
        }
    }

    /// Command for a write to the silent-mode switch.
    ///
    /// # Errors
    ///
    /// Returns `Error::CharacteristicUnsupported` unless the policy exposes
    /// the silent switch.
    pub fn decide_silent_switch(&self, on: bool) -> Result<DeviceCommand, Error> {
        if !self.policy.has_silent_switch() {
            return Err(Error::CharacteristicUnsupported {
                characteristic: Characteristic::SilentSwitch.name(),
            });
        }
        let mode = if on {
            PurifierMode::Silent
        } else {
            PurifierMode::Auto
        };
        Ok(DeviceCommand::SetMode(mode))
    }

    /// Whether the accessory reads as active.
    ///
    /// Under policy 2 this depends on the mode alone (unknown mode reads as
    /// active); otherwise it is the raw power flag (unknown power reads as
    /// inactive).
    #[must_use]
    pub fn read_activation(&self, mode: Option<PurifierMode>, power: Option<bool>) -> bool {
        if self.policy.allows_power_off() {
            power.unwrap_or(false)
        } else {
            !mode.is_some_and(|m| m.is_resting())
        }
    }

    /// Whether the silent switch reads as on for the given mode.
    #[must_use]
    pub fn silent_switch_on(&self, mode: PurifierMode) -> bool {
        mode == PurifierMode::Silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AccessoryPolicy; 4] = [
        AccessoryPolicy::Mode0,
        AccessoryPolicy::Mode1,
        AccessoryPolicy::Mode2,
        AccessoryPolicy::Mode3,
    ];

    fn engine(policy: AccessoryPolicy) -> ModePolicyEngine {
        ModePolicyEngine::new(policy)
    }

    #[test]
    fn activation_powers_off_except_policy_2() {
        for policy in ALL {
            assert_eq!(
                engine(policy).decide_activation(true),
                DeviceCommand::SetPower(true)
            );
        }
        assert_eq!(
            engine(AccessoryPolicy::Mode0).decide_activation(false),
            DeviceCommand::SetPower(false)
        );
        assert_eq!(
            engine(AccessoryPolicy::Mode3).decide_activation(false),
            DeviceCommand::SetPower(false)
        );
        assert_eq!(
            engine(AccessoryPolicy::Mode2).decide_activation(false),
            DeviceCommand::SetMode(PurifierMode::Silent)
        );
    }

    #[test]
    fn target_state_mapping() {
        for policy in ALL {
            assert_eq!(
                engine(policy).decide_target_state(TargetPurifierState::Auto),
                DeviceCommand::SetMode(PurifierMode::Auto)
            );
        }
        assert_eq!(
            engine(AccessoryPolicy::Mode3).decide_target_state(TargetPurifierState::Manual),
            DeviceCommand::SetMode(PurifierMode::Silent)
        );
        assert_eq!(
            engine(AccessoryPolicy::Mode1).decide_target_state(TargetPurifierState::Manual),
            DeviceCommand::SetMode(PurifierMode::Favorite)
        );
    }

    #[test]
    fn rotation_speed_switches_to_favorite_first() {
        let speed = RotationSpeed::new(50.0).unwrap();
        let plan =
            engine(AccessoryPolicy::Mode0).decide_rotation_speed(speed, Some(PurifierMode::Auto));

        assert_eq!(
            plan.switch_mode,
            Some(DeviceCommand::SetMode(PurifierMode::Favorite))
        );
        assert_eq!(
            plan.set_level,
            DeviceCommand::SetFavoriteLevel(FavoriteLevel::new(8).unwrap())
        );
    }

    #[test]
    fn rotation_speed_in_favorite_sets_level_only() {
        let speed = RotationSpeed::new(20.0).unwrap();
        let plan = engine(AccessoryPolicy::Mode3)
            .decide_rotation_speed(speed, Some(PurifierMode::Favorite));
        assert_eq!(plan.switch_mode, None);
        assert_eq!(
            plan.set_level,
            DeviceCommand::SetFavoriteLevel(FavoriteLevel::new(4).unwrap())
        );

        let unknown = engine(AccessoryPolicy::Mode3).decide_rotation_speed(speed, None);
        assert_eq!(unknown.switch_mode, None);
    }

    #[test]
    fn silent_switch_only_under_policy_1() {
        let e = engine(AccessoryPolicy::Mode1);
        assert_eq!(
            e.decide_silent_switch(true).unwrap(),
            DeviceCommand::SetMode(PurifierMode::Silent)
        );
        assert_eq!(
            e.decide_silent_switch(false).unwrap(),
            DeviceCommand::SetMode(PurifierMode::Auto)
        );

        for policy in [AccessoryPolicy::Mode0, AccessoryPolicy::Mode2, AccessoryPolicy::Mode3] {
            assert!(matches!(
                engine(policy).decide_silent_switch(true),
                Err(Error::CharacteristicUnsupported { .. })
            ));
        }
    }

    #[test]
    fn read_activation_policy_2_follows_mode() {
        let e = engine(AccessoryPolicy::Mode2);
        assert!(!e.read_activation(Some(PurifierMode::Silent), Some(true)));
        assert!(!e.read_activation(Some(PurifierMode::Idle), Some(true)));
        assert!(!e.read_activation(Some(PurifierMode::Silent), Some(false)));
        assert!(e.read_activation(Some(PurifierMode::Auto), Some(true)));
        assert!(e.read_activation(Some(PurifierMode::Favorite), Some(true)));
    }

    #[test]
    fn read_activation_other_policies_follow_power() {
        for policy in [AccessoryPolicy::Mode0, AccessoryPolicy::Mode1, AccessoryPolicy::Mode3] {
            let e = engine(policy);
            assert!(e.read_activation(Some(PurifierMode::Silent), Some(true)));
            assert!(!e.read_activation(Some(PurifierMode::Auto), Some(false)));
            assert!(!e.read_activation(Some(PurifierMode::Auto), None));
        }
    }
}
