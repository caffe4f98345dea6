// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the purifier bridge.
//!
//! This module provides the error hierarchy used across the crate: value
//! validation, transport communication with the purifier, configuration
//! parsing, and rejected device operations.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when serving
/// the accessory's characteristics.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the purifier.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing configuration.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A device operation failed.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// No device session is attached to the accessory.
    #[error("{accessory} is not connected")]
    NotConnected {
        /// Display name of the accessory.
        accessory: String,
    },

    /// The characteristic is not exposed under the active configuration.
    #[error("characteristic {characteristic} is not exposed by this accessory")]
    CharacteristicUnsupported {
        /// Name of the characteristic.
        characteristic: &'static str,
    },
}

impl Error {
    /// Creates a not-connected error for the named accessory.
    #[must_use]
    pub fn not_connected(accessory: impl Into<String>) -> Self {
        Self::NotConnected {
            accessory: accessory.into(),
        }
    }

    /// Returns `true` if the error was caused by a missing device session.
    #[must_use]
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected { .. })
    }
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A rotation speed is outside 0-100 percent.
    #[error("rotation speed {0} is out of range [0, 100]")]
    InvalidRotationSpeed(f32),

    /// An unknown purifier mode string was provided.
    #[error("invalid purifier mode: {0}")]
    InvalidMode(String),

    /// An unknown LED brightness string was provided.
    #[error("invalid LED brightness: {0}")]
    InvalidLedBrightness(String),

    /// An accessory policy outside 0-3 was provided.
    #[error("invalid accessory policy: {0}")]
    InvalidPolicy(u8),

    /// The pairing code does not follow the `NNN-NN-NNN` layout.
    #[error("invalid pincode: {0}")]
    InvalidPincode(String),

    /// The accessory username is not a MAC-like address.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// The firmware revision contains characters the bridge rejects.
    #[error("invalid firmware revision: {0}")]
    InvalidFirmware(String),

    /// A characteristic write carried a value of the wrong kind.
    #[error("characteristic {characteristic} expects a {expected} value")]
    UnexpectedValue {
        /// Name of the characteristic being written.
        characteristic: &'static str,
        /// Kind of value the characteristic accepts.
        expected: &'static str,
    },
}

/// Errors related to communication with the purifier.
///
/// Device session implementations report their failures with this type;
/// the accessory wraps them into [`DeviceError`] together with the
/// operation that was attempted.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The device answered the request with an error.
    #[error("device rejected request: {0}")]
    Rejected(String),

    /// Internal channel was closed.
    #[error("channel closed: {0}")]
    ChannelClosed(String),
}

/// Errors related to parsing configuration documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A get or set issued to the purifier failed.
    #[error("error {operation}: {cause}")]
    CommandRejected {
        /// What the accessory was trying to do, e.g. `setting rotation speed`.
        operation: &'static str,
        /// The underlying transport failure.
        #[source]
        cause: ProtocolError,
    },
}

impl DeviceError {
    /// Wraps a transport failure with the attempted operation.
    #[must_use]
    pub fn rejected(operation: &'static str, cause: ProtocolError) -> Self {
        Self::CommandRejected { operation, cause }
    }

    /// Returns the operation name carried by this error.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CommandRejected { operation, .. } => operation,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
