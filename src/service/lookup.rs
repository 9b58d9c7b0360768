//! Contract with the external catalog lookup service.
//!
//! The service resolves a normalized plate to a vehicle payload and its
//! manufacturer. A call either resolves with a business outcome
//! ([`LookupResponse`]) or fails to complete ([`LookupError`]).

use crate::domain::{Plate, VehicleRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business response from the lookup service.
///
/// Field names follow the catalog API, which reports the vehicle and the
/// manufacturer under Portuguese keys (`veiculo`, `montadora`); the English
/// names are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    /// Absent means the lookup did not succeed.
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "veiculo")]
    pub vehicle: Option<VehicleRecord>,
    #[serde(default, alias = "montadora")]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LookupResponse {
    /// A successful response carrying a vehicle and its manufacturer.
    #[must_use]
    pub fn found(vehicle: VehicleRecord, manufacturer: impl Into<String>) -> Self {
        Self {
            success: true,
            vehicle: Some(vehicle),
            manufacturer: Some(manufacturer.into()),
            message: None,
        }
    }

    /// An unsuccessful response, optionally with a message from the service.
    #[must_use]
    pub fn not_found(message: Option<String>) -> Self {
        Self {
            success: false,
            vehicle: None,
            manufacturer: None,
            message,
        }
    }
}

/// Failure to complete a lookup call.
///
/// Every variant is a communication failure from the point of view of the
/// lookup state machine.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent or the connection broke.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with an unexpected HTTP status and no usable body.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Outcome of a single lookup call as fed back into the controller.
pub type LookupOutcome = std::result::Result<LookupResponse, LookupError>;

/// Resolves plates against the vehicle catalog.
///
/// Implementations own their transport concerns, timeouts included; the
/// controller awaits exactly one result per call and never retries.
#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    async fn search(&self, plate: &Plate) -> LookupOutcome;
}
