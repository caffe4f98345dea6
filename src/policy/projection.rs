// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derivation of bridge-visible state from purifier mode and power.

use crate::types::{CurrentPurifierState, PurifierMode, TargetPurifierState};

use super::{AccessoryPolicy, ModePolicyEngine};

/// Bridge-visible state derived from the purifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Value for Active.
    pub active: bool,
    /// Value for CurrentAirPurifierState.
    pub current_state: CurrentPurifierState,
    /// Value for TargetAirPurifierState.
    pub target_state: TargetPurifierState,
}

/// Projects purifier mode and power onto the Active flag and the current
/// and target state.
///
/// The current state is never `Idle`: an active accessory always reads as
/// purifying.
///
/// # Examples
///
/// ```
/// use purifier_bridge::policy::{AccessoryPolicy, project};
/// use purifier_bridge::types::{CurrentPurifierState, PurifierMode, TargetPurifierState};
///
/// let p = project(Some(PurifierMode::Silent), Some(true), AccessoryPolicy::Mode3);
/// assert!(p.active);
/// assert_eq!(p.current_state, CurrentPurifierState::PurifyingAir);
/// assert_eq!(p.target_state, TargetPurifierState::Manual);
/// ```
#[must_use]
pub fn project(
    mode: Option<PurifierMode>,
    power: Option<bool>,
    policy: AccessoryPolicy,
) -> Projection {
    let active = ModePolicyEngine::new(policy).read_activation(mode, power);
    Projection {
        active,
        current_state: CurrentPurifierState::from_active(active),
        target_state: target_state(mode, policy),
    }
}

/// Target state for a mode: manual for favorite, and for silent under policy 3.
#[must_use]
pub fn target_state(mode: Option<PurifierMode>, policy: AccessoryPolicy) -> TargetPurifierState {
    match mode {
        Some(PurifierMode::Favorite) => TargetPurifierState::Manual,
        Some(PurifierMode::Silent) if policy.manual_means_silent() => TargetPurifierState::Manual,
        _ => TargetPurifierState::Auto,
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

    #[test]
    fn favorite_is_manual_under_every_policy() {
        for policy in ALL {
            let p = project(Some(PurifierMode::Favorite), Some(true), policy);
            assert_eq!(p.target_state, TargetPurifierState::Manual);
        }
    }

    #[test]
    fn silent_is_manual_only_under_policy_3() {
        let p3 = project(Some(PurifierMode::Silent), Some(true), AccessoryPolicy::Mode3);
        assert_eq!(p3.target_state, TargetPurifierState::Manual);

        let p0 = project(Some(PurifierMode::Silent), Some(true), AccessoryPolicy::Mode0);
        assert_eq!(p0.target_state, TargetPurifierState::Auto);
    }

    #[test]
    fn auto_and_idle_are_auto() {
        for policy in ALL {
            for mode in [PurifierMode::Auto, PurifierMode::Idle] {
                assert_eq!(
                    project(Some(mode), Some(true), policy).target_state,
                    TargetPurifierState::Auto
                );
            }
        }
    }

    #[test]
    fn current_state_follows_activation() {
        let off = project(Some(PurifierMode::Auto), Some(false), AccessoryPolicy::Mode0);
        assert_eq!(off.current_state, CurrentPurifierState::Inactive);

        let on = project(Some(PurifierMode::Auto), Some(true), AccessoryPolicy::Mode0);
        assert_eq!(on.current_state, CurrentPurifierState::PurifyingAir);

        let resting = project(Some(PurifierMode::Silent), Some(true), AccessoryPolicy::Mode2);
        assert!(!resting.active);
        assert_eq!(resting.current_state, CurrentPurifierState::Inactive);
    }

    #[test]
    fn idle_is_never_projected() {
        let modes = [
            None,
            Some(PurifierMode::Idle),
            Some(PurifierMode::Auto),
            Some(PurifierMode::Silent),
            Some(PurifierMode::Favorite),
        ];
        for policy in ALL {
            for mode in modes {
                for power in [None, Some(false), Some(true)] {
                    assert_ne!(
                        project(mode, power, policy).current_state,
                        CurrentPurifierState::Idle
                    );
                }
            }
        }
    }
}
