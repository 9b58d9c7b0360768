//! Application state container for the vehicle search screen.
//!
//! [`AppState`] holds the two independent components of the screen (the plate
//! lookup and the review feed) along with the palette used to render them.
//! View models are computed on demand from state snapshots.

use super::lookup::{LookupMessages, PlateLookupController};
use super::reviews::ReviewFeedLoader;
use crate::service::{LookupService, ReviewSource};
use crate::ui::palette::Palette;
use crate::ui::viewmodel::{ReviewFeedViewModel, SearchViewModel};
use std::sync::Arc;

/// Central application state container.
///
/// The lookup controller and the review loader never read each other's state.
#[derive(Debug)]
pub struct AppState {
    /// Plate input and lookup lifecycle.
    pub lookup: PlateLookupController,

    /// Review list lifecycle.
    pub reviews: ReviewFeedLoader,

    /// Brand colors injected into rendering.
    pub palette: Palette,
}

impl AppState {
    #[must_use]
    pub fn new(
        lookup_service: Arc<dyn LookupService>,
        review_source: Arc<dyn ReviewSource>,
        messages: LookupMessages,
        palette: Palette,
    ) -> Self {
        Self {
            lookup: PlateLookupController::new(lookup_service, messages),
            reviews: ReviewFeedLoader::new(review_source),
            palette,
        }
    }

    /// Replaces the text shown when the review source fails.
    #[must_use]
    pub fn with_review_failure_message(mut self, message: impl Into<String>) -> Self {
        self.reviews = self.reviews.with_failure_message(message);
        self
    }

    #[must_use]
    pub fn search_viewmodel(&self) -> SearchViewModel {
        SearchViewModel::from_controller(&self.lookup)
    }

    #[must_use]
    pub fn reviews_viewmodel(&self) -> ReviewFeedViewModel {
        ReviewFeedViewModel::from_state(self.reviews.state())
    }
}
