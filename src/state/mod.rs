// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State tracking for both sides of the bridge.
//!
//! [`DeviceState`] caches what the purifier last reported and is updated by
//! applying [`StateChange`]s. [`ExternalView`] is what the accessory shows
//! the bridge; it is derived from the device state through the policy
//! engine and the state projection.
//!
//! # Examples
//!
//! ```
//! use purifier_bridge::state::{DeviceState, StateChange};
//!
//! let mut state = DeviceState::new();
//! state.apply(&StateChange::Power(true));
//!
//! assert_eq!(state.power(), Some(true));
//! ```

mod device_state;
mod external_view;
mod state_change;

pub use device_state::DeviceState;
pub use external_view::ExternalView;
pub use state_change::StateChange;
