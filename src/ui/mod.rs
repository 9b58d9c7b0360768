//! User interface layer: palette, view models and a terminal renderer.
//!
//! ```text
//! AppState → view models → render_search / render_reviews → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`palette`]: Brand colors and ANSI escape helpers
//! - [`viewmodel`]: Display-ready state for the search screen and review feed
//! - [`renderer`]: Terminal renderer for the view models
//!
//! # Example
//!
//! ```rust
//! use ancora::ui::{render_reviews, Palette, ReviewFeedViewModel};
//! use ancora::app::ReviewFeedState;
//!
//! let vm = ReviewFeedViewModel::from_state(&ReviewFeedState::Loading);
//! let text = render_reviews(&vm, &Palette::default(), 60);
//! assert!(text.contains("Carregando"));
//! ```

pub mod palette;
pub mod renderer;
pub mod viewmodel;

pub use palette::{Palette, PaletteColors};
pub use renderer::{render_reviews, render_search, star_glyphs};
pub use viewmodel::{
    DetailRow, ErrorBanner, PlateInputInfo, ReviewCard, ReviewFeedViewModel, SearchViewModel, SubmitButtonInfo,
    VehicleCard,
};
