//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime performs them: lookups and review fetches are awaited and fed back as
//! events, catalog routes are handed to the navigation layer.

use crate::domain::{Plate, VehicleRecord};

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Call the lookup service for this plate and report back with
    /// `Event::LookupCompleted`.
    Lookup { plate: Plate },

    /// Fetch reviews and report back with `Event::ReviewsLoaded`.
    LoadReviews,

    /// Navigate to the part catalog for the vehicle that was found.
    OpenPartCatalog(CatalogRoute),
}

/// Payload handed to the part catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRoute {
    /// Normalized plate that was looked up.
    pub plate: Plate,
    /// Vehicle payload exactly as returned by the lookup service.
    pub vehicle: VehicleRecord,
    pub manufacturer: String,
}
