//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! collaborator responses, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the rendering layer or from a completed action
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the component methods on [`AppState`]
//! 4. Actions are collected and returned for execution
//! 5. [`perform`] executes an action and yields the follow-up event, if any
//!
//! # Example
//!
//! ```rust,no_run
//! use ancora::{handle_event, perform, AppState, Event};
//!
//! # async fn run(state: &mut AppState) -> ancora::Result<()> {
//! let mut pending = handle_event(state, Event::PlateChanged("abc1d23".into()))?;
//! pending.extend(handle_event(state, Event::SubmitSearch)?);
//! for action in pending {
//!     if let Some(event) = perform(state, &action).await {
//!         handle_event(state, event)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::app::{Action, AppState};
use crate::domain::{Result, Review};
use crate::service::{LookupOutcome, ReviewSourceError};

/// Events triggered by user input or collaborator responses.
#[derive(Debug)]
pub enum Event {
    /// The plate input changed; carries the raw text.
    PlateChanged(String),
    /// The user pressed the search button.
    SubmitSearch,
    /// The lookup service answered (or failed to).
    LookupCompleted(LookupOutcome),
    /// The user asked to open the part catalog for the vehicle found.
    ProceedToCatalog,
    /// The review feed was mounted.
    ReviewsRequested,
    /// The review source answered (or failed to).
    ReviewsLoaded(std::result::Result<Vec<Review>, ReviewSourceError>),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// `SubmitSearch` fails with `InvalidPlate` or `SearchInFlight` when the search
/// precondition does not hold; no action is emitted and the lookup state is
/// unchanged. All other events are infallible.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event = event_name(&event)).entered();

    let actions = match event {
        Event::PlateChanged(raw) => {
            state.lookup.set_plate(&raw);
            vec![]
        }
        Event::SubmitSearch => {
            let plate = state.lookup.begin_search()?;
            vec![Action::Lookup { plate }]
        }
        Event::LookupCompleted(outcome) => {
            state.lookup.complete_search(outcome);
            vec![]
        }
        Event::ProceedToCatalog => state.lookup.proceed_to_catalog().into_iter().collect(),
        Event::ReviewsRequested => {
            state.reviews.begin_load();
            vec![Action::LoadReviews]
        }
        Event::ReviewsLoaded(outcome) => {
            state.reviews.complete_load(outcome);
            vec![]
        }
    };

    tracing::debug!(actions = actions.len(), "event handled");
    Ok(actions)
}

/// Executes an action against the injected collaborators.
///
/// Returns the event carrying the collaborator's answer. Navigation actions
/// belong to the rendering layer and yield `None`.
pub async fn perform(state: &AppState, action: &Action) -> Option<Event> {
    match action {
        Action::Lookup { plate } => {
            let service = state.lookup.service();
            Some(Event::LookupCompleted(service.search(plate).await))
        }
        Action::LoadReviews => {
            let source = state.reviews.source();
            Some(Event::ReviewsLoaded(source.fetch_reviews().await))
        }
        Action::OpenPartCatalog(_) => None,
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PlateChanged(_) => "plate_changed",
        Event::SubmitSearch => "submit_search",
        Event::LookupCompleted(_) => "lookup_completed",
        Event::ProceedToCatalog => "proceed_to_catalog",
        Event::ReviewsRequested => "reviews_requested",
        Event::ReviewsLoaded(_) => "reviews_loaded",
    }
}
