//! Plate lookup controller and its presentation state.
//!
//! The controller owns the plate input, guards submission, calls the lookup
//! service and folds the single response into a [`LookupResult`]. It can be
//! driven directly with [`PlateLookupController::search`], or in two halves
//! ([`begin_search`](PlateLookupController::begin_search) /
//! [`complete_search`](PlateLookupController::complete_search)) when the runtime
//! performs the service call itself, as the event handler does.
//!
//! # State Machine
//!
//! ```text
//! NotAsked ─┐
//! Success  ─┼─ begin_search ──► Loading ── complete_search ──► Success | Failure
//! Failure  ─┘
//! ```
//!
//! `Loading` only leaves through `complete_search`; submitting while loading is
//! rejected, so at most one service call is ever in flight.

use super::actions::{Action, CatalogRoute};
use crate::domain::{AncoraError, Plate, Result, VehicleRecord};
use crate::service::{LookupError, LookupOutcome, LookupResponse, LookupService};
use std::sync::Arc;

/// Why a lookup ended in failure.
///
/// Both kinds render the same way; the kind is kept for logging and for
/// deciding whether suggesting a retry makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service answered: no vehicle for this plate, or a business rule failed.
    NotFound,
    /// The service call did not complete.
    Communication,
}

impl FailureKind {
    /// Retrying the same plate can only help when the call itself failed.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Communication)
    }
}

/// Presentation state of the plate lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    NotAsked,
    Loading,
    Success {
        vehicle: VehicleRecord,
        manufacturer: String,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl LookupResult {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short tag for structured logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotAsked => "not_asked",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::Failure { kind: FailureKind::NotFound, .. } => "not_found",
            Self::Failure { kind: FailureKind::Communication, .. } => "communication_failure",
        }
    }
}

/// User-facing texts used by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMessages {
    /// Shown when the service reports failure without a message of its own.
    pub not_found: String,
    /// Shown when the service call fails to complete.
    pub communication_failure: String,
    /// Returned when a search is attempted with an incomplete plate.
    pub invalid_plate: String,
}

impl Default for LookupMessages {
    fn default() -> Self {
        Self {
            not_found: "Veículo não encontrado. Verifique a placa.".to_string(),
            communication_failure: "Falha na comunicação com o catálogo. Tente novamente.".to_string(),
            invalid_plate: "Placa deve ter 7 caracteres.".to_string(),
        }
    }
}

/// Search form state and lookup lifecycle.
pub struct PlateLookupController {
    service: Arc<dyn LookupService>,
    messages: LookupMessages,
    plate: Plate,
    result: LookupResult,
}

impl PlateLookupController {
    #[must_use]
    pub fn new(service: Arc<dyn LookupService>, messages: LookupMessages) -> Self {
        Self {
            service,
            messages,
            plate: Plate::default(),
            result: LookupResult::NotAsked,
        }
    }

    /// Stores the normalized input. Never validates and never touches the result.
    pub fn set_plate(&mut self, raw: &str) {
        self.plate = Plate::normalize(raw);
    }

    #[must_use]
    pub const fn plate(&self) -> &Plate {
        &self.plate
    }

    #[must_use]
    pub const fn result(&self) -> &LookupResult {
        &self.result
    }

    #[must_use]
    pub const fn messages(&self) -> &LookupMessages {
        &self.messages
    }

    /// Shared handle to the lookup service, for runtimes that perform the call.
    #[must_use]
    pub fn service(&self) -> Arc<dyn LookupService> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.plate.is_complete() && !self.result.is_loading()
    }

    /// Validation hint for a partially typed plate, `None` when empty or complete.
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        if self.plate.is_empty() || self.plate.is_complete() {
            None
        } else {
            Some(&self.messages.invalid_plate)
        }
    }

    /// Enters `Loading` and hands back the plate to look up.
    ///
    /// # Errors
    ///
    /// - [`AncoraError::SearchInFlight`] while a previous lookup is unresolved
    /// - [`AncoraError::InvalidPlate`] when the plate is not seven characters
    ///
    /// The state is left untouched on error.
    pub fn begin_search(&mut self) -> Result<Plate> {
        if self.result.is_loading() {
            tracing::debug!(plate = %self.plate, "search rejected: lookup in flight");
            return Err(AncoraError::SearchInFlight);
        }
        if !self.plate.is_complete() {
            tracing::debug!(plate = %self.plate, len = self.plate.len(), "search rejected: incomplete plate");
            return Err(AncoraError::InvalidPlate(self.messages.invalid_plate.clone()));
        }

        self.result = LookupResult::Loading;
        tracing::debug!(plate = %self.plate, "lookup started");
        Ok(self.plate.clone())
    }

    /// Folds the service outcome into the result state.
    ///
    /// Ignored (with a warning) unless a lookup is in flight.
    pub fn complete_search(&mut self, outcome: LookupOutcome) {
        if !self.result.is_loading() {
            tracing::warn!(state = self.result.label(), "lookup outcome arrived with no lookup in flight");
            return;
        }

        self.result = match outcome {
            Ok(response) => self.from_response(response),
            Err(e) => self.from_error(&e),
        };

        match &self.result {
            LookupResult::Failure { kind, message } => tracing::info!(
                plate = %self.plate,
                outcome = self.result.label(),
                retryable = kind.is_retryable(),
                %message,
                "lookup failed"
            ),
            _ => tracing::info!(plate = %self.plate, outcome = self.result.label(), "lookup finished"),
        }
    }

    /// Runs one complete lookup against the injected service.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`begin_search`](Self::begin_search); the service is
    /// not called when they fail. Service failures are not errors: they end in
    /// [`LookupResult::Failure`].
    pub async fn search(&mut self) -> Result<()> {
        let plate = self.begin_search()?;
        let service = self.service();
        let outcome = service.search(&plate).await;
        self.complete_search(outcome);
        Ok(())
    }

    /// Navigation intent toward the part catalog, only after a successful lookup.
    #[must_use]
    pub fn proceed_to_catalog(&self) -> Option<Action> {
        match &self.result {
            LookupResult::Success { vehicle, manufacturer } => Some(Action::OpenPartCatalog(CatalogRoute {
                plate: self.plate.clone(),
                vehicle: vehicle.clone(),
                manufacturer: manufacturer.clone(),
            })),
            _ => None,
        }
    }

    fn from_response(&self, response: LookupResponse) -> LookupResult {
        if !response.success {
            return self.not_found(response.message);
        }

        match (response.vehicle, response.manufacturer) {
            (Some(vehicle), Some(manufacturer)) => LookupResult::Success { vehicle, manufacturer },
            (vehicle, manufacturer) => {
                tracing::warn!(
                    has_vehicle = vehicle.is_some(),
                    has_manufacturer = manufacturer.is_some(),
                    "successful lookup response is missing data"
                );
                self.not_found(response.message)
            }
        }
    }

    /// Not-found failure with the service's message, or the default when blank.
    fn not_found(&self, message: Option<String>) -> LookupResult {
        LookupResult::Failure {
            kind: FailureKind::NotFound,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| self.messages.not_found.clone()),
        }
    }

    fn from_error(&self, error: &LookupError) -> LookupResult {
        tracing::debug!(error = %error, "lookup call failed");
        LookupResult::Failure {
            kind: FailureKind::Communication,
            message: self.messages.communication_failure.clone(),
        }
    }
}

impl std::fmt::Debug for PlateLookupController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlateLookupController")
            .field("plate", &self.plate)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
