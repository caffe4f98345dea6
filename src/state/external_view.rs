// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge-side view of the accessory.

use serde::{Deserialize, Serialize};

use crate::policy::Projection;
use crate::types::{AirQuality, CurrentPurifierState, RotationSpeed, TargetPurifierState};

/// The state the accessory presents to the bridge.
///
/// Created with provisional defaults when the accessory is registered and
/// mirrored into the characteristic registry as it changes. It is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalView {
    /// Value of the Active characteristic.
    pub active: bool,
    /// Value of CurrentAirPurifierState.
    pub current_state: CurrentPurifierState,
    /// Value of TargetAirPurifierState.
    pub target_state: TargetPurifierState,
    /// Value of RotationSpeed.
    pub rotation_speed: RotationSpeed,
    /// Value of the silent switch (policy 1 only).
    pub silent_switch_on: bool,
    /// Value of AirQuality.
    pub air_quality: AirQuality,
    /// Value of PM2_5Density.
    pub pm2_5_density: i32,
    /// Value of CurrentTemperature, once read.
    pub temperature: Option<f32>,
    /// Value of CurrentRelativeHumidity, once read.
    pub humidity: Option<f32>,
}

impl ExternalView {
    /// Creates a view with provisional defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a projection to the active flag and the current and target
    /// state.
    ///
    /// Returns `true` if any of them changed.
    pub fn apply_projection(&mut self, projection: Projection) -> bool {
        let changed = self.active != projection.active
            || self.current_state != projection.current_state
            || self.target_state != projection.target_state;
        self.active = projection.active;
        self.current_state = projection.current_state;
        self.target_state = projection.target_state;
        changed
    }

    /// Sets the active flag and the current state that follows from it.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.current_state = CurrentPurifierState::from_active(active);
    }

    /// Records a PM2.5 reading and its air quality tier.
    pub fn set_pm2_5(&mut self, density: i32) {
        self.pm2_5_density = density;
        self.air_quality = AirQuality::classify(density);
    }
}

impl Default for ExternalView {
    fn default() -> Self {
        Self {
            active: false,
            current_state: CurrentPurifierState::Inactive,
            target_state: TargetPurifierState::Auto,
            rotation_speed: RotationSpeed::MIN,
            silent_switch_on: false,
            air_quality: AirQuality::Unknown,
            pm2_5_density: 0,
            temperature: None,
            humidity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisional_defaults() {
        let view = ExternalView::new();
        assert!(!view.active);
        assert_eq!(view.current_state, CurrentPurifierState::Inactive);
        assert_eq!(view.target_state, TargetPurifierState::Auto);
        assert_eq!(view.air_quality, AirQuality::Unknown);
        assert!(!view.silent_switch_on);
    }

    #[test]
    fn set_active_derives_current_state() {
        let mut view = ExternalView::new();
        view.set_active(true);
        assert_eq!(view.current_state, CurrentPurifierState::PurifyingAir);
        view.set_active(false);
        assert_eq!(view.current_state, CurrentPurifierState::Inactive);
    }

    #[test]
    fn apply_projection_reports_change() {
        let mut view = ExternalView::new();
        let projection = Projection {
            active: true,
            current_state: CurrentPurifierState::PurifyingAir,
            target_state: TargetPurifierState::Manual,
        };
        assert!(view.apply_projection(projection));
        assert!(!view.apply_projection(projection));
        assert!(view.active);
        assert_eq!(view.target_state, TargetPurifierState::Manual);
    }

    #[test]
    fn pm2_5_sets_air_quality() {
        let mut view = ExternalView::new();
        view.set_pm2_5(120);
        assert_eq!(view.pm2_5_density, 120);
        assert_eq!(view.air_quality, AirQuality::Fair);
    }
}
