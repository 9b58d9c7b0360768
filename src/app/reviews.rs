//! Review feed loader.
//!
//! Runs the fetch-and-display lifecycle of the member review list. The feed
//! starts in `Loading`, and each load resolves to exactly one of `Loaded`,
//! `Empty` or `Failure`. The data source sits behind [`ReviewSource`], so the
//! built-in mock and a real fetch drive the same state machine.

use crate::domain::Review;
use crate::service::{ReviewSource, ReviewSourceError};
use std::sync::Arc;

/// Message shown when the review source fails.
pub const DEFAULT_REVIEW_FAILURE_MESSAGE: &str = "Não foi possível carregar as avaliações. Tente novamente.";

/// Presentation state of the review feed.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFeedState {
    Loading,
    Failure { message: String },
    Empty,
    Loaded { items: Vec<Review> },
}

impl ReviewFeedState {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failure { .. } => "failure",
            Self::Empty => "empty",
            Self::Loaded { .. } => "loaded",
        }
    }
}

/// Loads the review list once per screen lifecycle.
pub struct ReviewFeedLoader {
    source: Arc<dyn ReviewSource>,
    failure_message: String,
    state: ReviewFeedState,
}

impl ReviewFeedLoader {
    #[must_use]
    pub fn new(source: Arc<dyn ReviewSource>) -> Self {
        Self {
            source,
            failure_message: DEFAULT_REVIEW_FAILURE_MESSAGE.to_string(),
            state: ReviewFeedState::Loading,
        }
    }

    #[must_use]
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    #[must_use]
    pub const fn state(&self) -> &ReviewFeedState {
        &self.state
    }

    #[must_use]
    pub fn source(&self) -> Arc<dyn ReviewSource> {
        Arc::clone(&self.source)
    }

    pub fn begin_load(&mut self) {
        self.state = ReviewFeedState::Loading;
    }

    /// Folds a fetch outcome into the feed state, preserving source order.
    ///
    /// Ignored (with a warning) unless the feed is loading.
    pub fn complete_load(&mut self, outcome: Result<Vec<Review>, ReviewSourceError>) {
        if self.state != ReviewFeedState::Loading {
            tracing::warn!(state = self.state.label(), "review outcome arrived with no load in flight");
            return;
        }

        self.state = match outcome {
            Ok(items) if items.is_empty() => ReviewFeedState::Empty,
            Ok(items) => ReviewFeedState::Loaded { items },
            Err(e) => {
                tracing::warn!(error = %e, "failed to load reviews");
                ReviewFeedState::Failure {
                    message: self.failure_message.clone(),
                }
            }
        };

        tracing::debug!(state = self.state.label(), "review feed resolved");
    }

    /// Fetches from the source and resolves the feed.
    ///
    /// The mounting collaborator calls this once; calling again re-enters
    /// `Loading` and fetches anew.
    #[tracing::instrument(name = "review_feed_load", level = "debug", skip_all)]
    pub async fn load(&mut self) {
        self.begin_load();
        let outcome = self.source.fetch_reviews().await;
        self.complete_load(outcome);
    }
}

impl std::fmt::Debug for ReviewFeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewFeedLoader")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
