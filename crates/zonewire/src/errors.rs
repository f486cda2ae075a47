//! Zones API client error types

use thiserror::Error;

/// Exact message the API attaches to requests against a zone that does
/// not exist.
pub(crate) const MSG_ZONE_NOT_FOUND: &str = "zone not found";

/// Exact message the API attaches to a create request for a name that is
/// already taken.
pub(crate) const MSG_ZONE_EXISTS: &str = "zone already exists";

/// Zones API client errors
#[derive(Error, Debug)]
pub enum ZoneError {
    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server rejected the request and supplied a structured error
    /// payload. Recognized messages are remapped to [`ZoneError::ZoneMissing`]
    /// or [`ZoneError::ZoneExists`] by the calling operation; anything else
    /// surfaces here with the original message intact.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The requested zone does not exist.
    #[error("zone does not exist")]
    ZoneMissing,

    /// A zone with this name already exists.
    #[error("zone already exists")]
    ZoneExists,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZoneError {
    /// Remap the server's "zone not found" message to the [`ZoneError::ZoneMissing`]
    /// sentinel. Every other error passes through unchanged.
    pub(crate) fn into_missing_zone(self) -> Self {
        match self {
            ZoneError::Api { ref message, .. } if message == MSG_ZONE_NOT_FOUND => {
                ZoneError::ZoneMissing
            }
            other => other,
        }
    }

    /// Remap the server's "zone already exists" message to the
    /// [`ZoneError::ZoneExists`] sentinel. Every other error passes through
    /// unchanged.
    pub(crate) fn into_zone_exists(self) -> Self {
        match self {
            ZoneError::Api { ref message, .. } if message == MSG_ZONE_EXISTS => {
                ZoneError::ZoneExists
            }
            other => other,
        }
    }
}
