//! Mechanic review model and star rating computation.

use super::error::{AncoraError, Result};
use serde::{Deserialize, Serialize};

/// Number of stars in a rating display.
pub const MAX_STARS: u8 = 5;

/// A pre-authored piece of feedback from a network member.
///
/// Reviews are immutable once constructed. Ratings live in `[0, 5]` in steps
/// of one half. Deserialization goes through [`Review::new`], so decoded
/// reviews hold the same invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReview")]
pub struct Review {
    id: u32,
    author_name: String,
    affiliation: String,
    rating: f32,
    text: String,
    relative_date: String,
}

impl Review {
    /// Builds a review, checking the rating invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AncoraError::InvalidReview`] if the rating is outside `[0, 5]`
    /// or is not a multiple of 0.5.
    ///
    /// # Examples
    ///
    /// ```
    /// use ancora::domain::Review;
    ///
    /// let review = Review::new(1, "José A.", "Auto Center Prime", 4.5, "Ótimo", "2 dias atrás").unwrap();
    /// assert_eq!(review.stars().full, 4);
    /// assert!(Review::new(2, "X", "Y", 4.3, "", "").is_err());
    /// ```
    pub fn new(
        id: u32,
        author_name: impl Into<String>,
        affiliation: impl Into<String>,
        rating: f32,
        text: impl Into<String>,
        relative_date: impl Into<String>,
    ) -> Result<Self> {
        if !(0.0..=f32::from(MAX_STARS)).contains(&rating) {
            return Err(AncoraError::InvalidReview(format!(
                "rating {rating} outside 0..={MAX_STARS}"
            )));
        }
        if (rating * 2.0).fract() != 0.0 {
            return Err(AncoraError::InvalidReview(format!(
                "rating {rating} is not a multiple of 0.5"
            )));
        }

        Ok(Self {
            id,
            author_name: author_name.into(),
            affiliation: affiliation.into(),
            rating,
            text: text.into(),
            relative_date: relative_date.into(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    #[must_use]
    pub fn affiliation(&self) -> &str {
        &self.affiliation
    }

    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn relative_date(&self) -> &str {
        &self.relative_date
    }

    #[must_use]
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Wire shape of a review, before rating validation.
#[derive(Deserialize)]
struct RawReview {
    id: u32,
    author_name: String,
    affiliation: String,
    rating: f32,
    text: String,
    relative_date: String,
}

impl TryFrom<RawReview> for Review {
    type Error = AncoraError;

    fn try_from(raw: RawReview) -> Result<Self> {
        Self::new(raw.id, raw.author_name, raw.affiliation, raw.rating, raw.text, raw.relative_date)
    }
}

/// Star breakdown for a numeric rating.
///
/// `full + half + empty` is always [`MAX_STARS`], with `half` counting as one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRating {
    /// Splits a rating into full, half and empty stars.
    ///
    /// `full = floor(rating)`, one half star when the rating has any fractional
    /// part, and the remainder empty. Ratings are clamped to `[0, 5]` first so the
    /// total never drifts from five; NaN is treated as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ancora::domain::StarRating;
    ///
    /// let stars = StarRating::from_rating(4.5);
    /// assert_eq!((stars.full, stars.half, stars.empty), (4, 1, 0));
    /// ```
    #[must_use]
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f32::from(MAX_STARS))
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = rating.floor() as u8;
        let half = u8::from(rating.fract() != 0.0);
        let empty = MAX_STARS - full - half;

        Self { full, half, empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(rating: f32) -> (u8, u8, u8) {
        let s = StarRating::from_rating(rating);
        (s.full, s.half, s.empty)
    }

    #[test]
    fn star_counts_for_reference_ratings() {
        assert_eq!(counts(5.0), (5, 0, 0));
        assert_eq!(counts(4.5), (4, 1, 0));
        assert_eq!(counts(3.0), (3, 0, 2));
        assert_eq!(counts(0.0), (0, 0, 5));
        assert_eq!(counts(0.5), (0, 1, 4));
    }

    #[test]
    fn stars_always_sum_to_five() {
        let mut rating = 0.0_f32;
        while rating <= 5.0 {
            let s = StarRating::from_rating(rating);
            assert_eq!(s.full + s.half + s.empty, MAX_STARS, "rating {rating}");
            rating += 0.25;
        }
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(counts(7.0), (5, 0, 0));
        assert_eq!(counts(-1.0), (0, 0, 5));
        assert_eq!(counts(f32::NAN), (0, 0, 5));
    }

    #[test]
    fn review_rejects_invalid_ratings() {
        assert!(Review::new(1, "a", "b", 5.5, "", "").is_err());
        assert!(Review::new(1, "a", "b", -0.5, "", "").is_err());
        assert!(Review::new(1, "a", "b", 3.7, "", "").is_err());
        assert!(Review::new(1, "a", "b", 3.5, "", "").is_ok());
    }

    #[test]
    fn decoding_validates_the_rating() {
        let body = |rating: &str| {
            format!(
                r#"{{"id":1,"author_name":"José A.","affiliation":"Auto Center Prime","rating":{rating},"text":"Ótimo","relative_date":"2 dias atrás"}}"#
            )
        };

        let review: Review = serde_json::from_str(&body("4.5")).unwrap();
        assert_eq!(review.stars(), StarRating { full: 4, half: 1, empty: 0 });

        let err = serde_json::from_str::<Review>(&body("7.3")).unwrap_err();
        assert!(err.to_string().contains("outside"), "{err}");
        assert!(serde_json::from_str::<Review>(&body("3.7")).is_err());
    }

    #[test]
    fn serialized_review_decodes_back() {
        let review = Review::new(2, "Carla R.", "Mecânica Rápida", 4.5, "Excelente", "1 semana atrás").unwrap();
        let json = serde_json::to_string(&review).unwrap();
        assert_eq!(serde_json::from_str::<Review>(&json).unwrap(), review);
    }
}
