//! Review data sources.
//!
//! [`ReviewSource`] is the seam between the review feed state machine and the
//! place reviews come from. [`MockReviewSource`] serves the built-in member
//! reviews after a simulated network delay until the catalog API exposes them.

use crate::domain::{Result, Review};
use std::time::Duration;
use thiserror::Error;

/// Default simulated latency for the built-in source.
pub const DEFAULT_REVIEW_DELAY: Duration = Duration::from_millis(1500);

/// Failure to fetch reviews.
#[derive(Debug, Error)]
#[error("review fetch failed: {0}")]
pub struct ReviewSourceError(pub String);

/// Supplies the ordered list of reviews to display.
#[async_trait::async_trait]
pub trait ReviewSource: Send + Sync {
    async fn fetch_reviews(&self) -> std::result::Result<Vec<Review>, ReviewSourceError>;
}

/// In-memory review source with simulated latency.
#[derive(Debug, Clone)]
pub struct MockReviewSource {
    reviews: Vec<Review>,
    delay: Duration,
    fail_with: Option<String>,
}

impl MockReviewSource {
    /// Serves the built-in member reviews after `delay`.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in review violates the rating invariants.
    pub fn builtin(delay: Duration) -> Result<Self> {
        Ok(Self::with_reviews(builtin_reviews()?, delay))
    }

    #[must_use]
    pub const fn with_reviews(reviews: Vec<Review>, delay: Duration) -> Self {
        Self {
            reviews,
            delay,
            fail_with: None,
        }
    }

    /// Makes every fetch fail with the given reason.
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }
}

#[async_trait::async_trait]
impl ReviewSource for MockReviewSource {
    async fn fetch_reviews(&self) -> std::result::Result<Vec<Review>, ReviewSourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(reason) = &self.fail_with {
            return Err(ReviewSourceError(reason.clone()));
        }

        Ok(self.reviews.clone())
    }
}

/// The three member reviews shown on the search screen.
///
/// # Errors
///
/// Fails only if a review below violates the rating invariants.
pub fn builtin_reviews() -> Result<Vec<Review>> {
    Ok(vec![
        Review::new(
            1,
            "José A.",
            "Auto Center Prime",
            5.0,
            "O catálogo por placa é um diferencial! Economiza muito tempo na identificação das peças. Ferramenta indispensável.",
            "2 dias atrás",
        )?,
        Review::new(
            2,
            "Carla R.",
            "Mecânica Rápida",
            4.5,
            "A busca de similares me ajudou a fechar um serviço complexo. Precisa de mais peças para veículos mais antigos, mas excelente!",
            "1 semana atrás",
        )?,
        Review::new(
            3,
            "Pedro S.",
            "Oficina do Seu Pedro",
            5.0,
            "Simples, rápido e direto ao ponto. A navegação é intuitiva. Nota 10!",
            "3 semanas atrás",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_reviews_have_unique_ids() {
        let reviews = builtin_reviews().unwrap();
        let mut ids: Vec<u32> = reviews.iter().map(Review::id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn mock_source_returns_reviews_in_order() {
        let source = MockReviewSource::builtin(Duration::ZERO).unwrap();
        let reviews = source.fetch_reviews().await.unwrap();
        let authors: Vec<&str> = reviews.iter().map(Review::author_name).collect();
        assert_eq!(authors, ["José A.", "Carla R.", "Pedro S."]);
    }

    #[tokio::test]
    async fn failing_source_reports_reason() {
        let source = MockReviewSource::with_reviews(vec![], Duration::ZERO).failing("offline");
        let err = source.fetch_reviews().await.unwrap_err();
        assert_eq!(err.to_string(), "review fetch failed: offline");
    }
}
