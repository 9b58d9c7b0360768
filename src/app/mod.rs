//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the rendering layer (or the CLI shim in
//! `main.rs`) and the domain/service layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── Collaborator Responses ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and action execution
//! - [`lookup`]: Plate lookup controller and its result state
//! - [`reviews`]: Review feed loader and its state
//! - [`state`]: Application state container

pub mod actions;
pub mod handler;
pub mod lookup;
pub mod reviews;
pub mod state;

pub use actions::{Action, CatalogRoute};
pub use handler::{handle_event, perform, Event};
pub use lookup::{FailureKind, LookupMessages, LookupResult, PlateLookupController};
pub use reviews::{ReviewFeedLoader, ReviewFeedState, DEFAULT_REVIEW_FAILURE_MESSAGE};
pub use state::AppState;
