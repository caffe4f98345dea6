// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The accessory's device session slot.

use std::sync::Arc;

use parking_lot::RwLock;

/// Connection state of the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No session has been established.
    #[default]
    Disconnected,
    /// A session is open.
    Connected,
    /// The last connection attempt failed.
    Failed(String),
}

impl ConnectionState {
    /// Returns true if a session is open.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns true if the last connection attempt failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Holds at most one device session.
///
/// Filled by a successful connection and emptied by
/// [`disconnect`](Self::disconnect). Callers take an `Arc` handle with
/// [`current`](Self::current) so the lock is never held across a device
/// round trip.
#[derive(Debug)]
pub struct DeviceSession<D> {
    inner: RwLock<Slot<D>>,
}

#[derive(Debug)]
struct Slot<D> {
    device: Option<Arc<D>>,
    state: ConnectionState,
}

impl<D> DeviceSession<D> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Slot {
                device: None,
                state: ConnectionState::Disconnected,
            }),
        }
    }

    /// Stores a connected device and returns a handle to it.
    pub fn connect(&self, device: D) -> Arc<D> {
        let device = Arc::new(device);
        let mut slot = self.inner.write();
        slot.device = Some(Arc::clone(&device));
        slot.state = ConnectionState::Connected;
        device
    }

    /// Records a failed connection attempt. Any previous session is dropped.
    pub fn fail(&self, reason: impl Into<String>) {
        let mut slot = self.inner.write();
        slot.device = None;
        slot.state = ConnectionState::Failed(reason.into());
    }

    /// Drops the current session, returning it if there was one.
    pub fn disconnect(&self) -> Option<Arc<D>> {
        let mut slot = self.inner.write();
        slot.state = ConnectionState::Disconnected;
        slot.device.take()
    }

    /// Returns a handle to the current device, if connected.
    #[must_use]
    pub fn current(&self) -> Option<Arc<D>> {
        self.inner.read().device.clone()
    }

    /// Returns true if a device is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner.read().device.is_some()
    }

    /// Returns the connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.inner.read().state.clone()
    }
}

impl<D> Default for DeviceSession<D> {
    fn default() -> Self {
        Self::new()
    }
}
