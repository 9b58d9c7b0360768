//! Domain layer for the Ancora catalog core.
//!
//! This module contains the core domain types, independent of the lookup
//! transport, the rendering layer and observability concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`plate`]: Plate input normalization and layout detection
//! - [`vehicle`]: Pass-through vehicle payload from the catalog
//! - [`review`]: Mechanic reviews and star rating computation

pub mod error;
pub mod plate;
pub mod review;
pub mod vehicle;

pub use error::{AncoraError, Result};
pub use plate::{Plate, PlateFormat, PLATE_LENGTH};
pub use review::{Review, StarRating, MAX_STARS};
pub use vehicle::VehicleRecord;
