//! External collaborators behind trait seams.
//!
//! - [`lookup`]: the catalog lookup contract ([`LookupService`])
//! - [`http`]: HTTP implementation of the lookup contract
//! - [`reviews`]: review data sources ([`ReviewSource`])

pub mod http;
pub mod lookup;
pub mod reviews;

pub use http::HttpLookupService;
pub use lookup::{LookupError, LookupOutcome, LookupResponse, LookupService};
pub use reviews::{builtin_reviews, MockReviewSource, ReviewSource, ReviewSourceError, DEFAULT_REVIEW_DELAY};
