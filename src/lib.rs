//! Ancora: vehicle plate lookup and mechanic review feed for a parts catalog.
//!
//! The crate models the vehicle search screen of a parts catalog client:
//! - A plate lookup state machine that validates input, calls an injected
//!   lookup service once per search and folds the answer into a result state
//! - An independent review feed that loads once and exposes its lifecycle
//! - View models and an ANSI terminal renderer colored from a brand palette
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machines
//! │  - Event handling and action dispatching            │
//! │  - Plate lookup controller, review feed loader      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Service Layer │   │ Domain Layer  │
//! │ (ui/)         │   │ (service/)    │   │ (domain/)     │
//! │ - Palette     │   │ - Lookup API  │   │ - Plate       │
//! │ - View models │   │ - HTTP client │   │ - Vehicle     │
//! │ - Renderer    │   │ - Reviews     │   │ - Review      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability & Infrastructure                     │
//! │  - Tracing with JSON span export                    │
//! │  - Platform paths                                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State machines and the event/action model
//! - [`domain`]: Plate, vehicle record, review and error types
//! - [`service`]: Lookup and review collaborator contracts plus adapters
//! - [`ui`]: Palette, view models and terminal renderer
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Tracing subscriber and span export
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/ancora/config.toml
//! lookup_base_url = "https://catalogo.example.com/api"
//! request_timeout_ms = 10000
//! review_delay_ms = 1500
//! palette = "ancora"
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use ancora::service::{LookupOutcome, LookupResponse, LookupService, MockReviewSource};
//! use ancora::{initialize, Config, LookupResult, Plate};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Offline;
//!
//! #[async_trait::async_trait]
//! impl LookupService for Offline {
//!     async fn search(&self, _plate: &Plate) -> LookupOutcome {
//!         Ok(LookupResponse::not_found(None))
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let reviews = MockReviewSource::builtin(Duration::ZERO)?;
//! let mut state = initialize(&Config::default(), Arc::new(Offline), Arc::new(reviews));
//!
//! state.lookup.set_plate("abc1d23");
//! state.lookup.search().await?;
//! assert!(matches!(state.lookup.result(), LookupResult::Failure { .. }));
//! # Ok::<(), ancora::AncoraError>(())
//! # }).unwrap();
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod service;
pub mod ui;

pub use app::{
    handle_event, perform, Action, AppState, Event, LookupMessages, LookupResult, PlateLookupController,
    ReviewFeedLoader, ReviewFeedState,
};
pub use domain::{AncoraError, Plate, Result};
pub use ui::Palette;

use serde::Deserialize;
use service::{LookupService, ReviewSource};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_REVIEW_DELAY_MS: u64 = 1_500;

/// Runtime configuration.
///
/// Read from a TOML file ([`Config::load`]) or a flat string map
/// ([`Config::from_map`]). Every field has a default, so partial files are fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API. Lookups go to `{base}/vehicles/{plate}`.
    pub lookup_base_url: String,

    /// HTTP request timeout in milliseconds. Default: 10000
    pub request_timeout_ms: u64,

    /// Simulated latency of the built-in review source. Default: 1500
    pub review_delay_ms: u64,

    /// Built-in palette name (`ancora`, `ancora-night`). Ignored if
    /// `palette_file` is set.
    #[serde(alias = "palette")]
    pub palette_name: Option<String>,

    /// Path to a custom TOML palette. `~` is expanded.
    pub palette_file: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Overrides the default "vehicle not found" text.
    pub not_found_message: Option<String>,

    /// Overrides the default communication failure text.
    pub communication_failure_message: Option<String>,

    /// Overrides the default plate length validation text.
    pub invalid_plate_message: Option<String>,

    /// Overrides the text shown when reviews fail to load.
    pub review_failure_message: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            review_delay_ms: DEFAULT_REVIEW_DELAY_MS,
            palette_name: None,
            palette_file: None,
            trace_level: None,
            not_found_message: None,
            communication_failure_message: None,
            invalid_plate_message: None,
            review_failure_message: None,
        }
    }
}

impl Config {
    /// Builds configuration from a flat string map.
    ///
    /// Unknown keys are ignored. Numbers that fail to parse fall back to their
    /// defaults, and blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ancora::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("lookup_base_url".to_string(), "https://api.example.com".to_string());
    /// map.insert("request_timeout_ms".to_string(), "oops".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.lookup_base_url, "https://api.example.com");
    /// assert_eq!(config.request_timeout_ms, 10_000);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let number = |key: &str, default: u64| {
            map.get(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            lookup_base_url: text("lookup_base_url").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_ms: number("request_timeout_ms", DEFAULT_TIMEOUT_MS),
            review_delay_ms: number("review_delay_ms", DEFAULT_REVIEW_DELAY_MS),
            palette_name: text("palette").or_else(|| text("palette_name")),
            palette_file: text("palette_file"),
            trace_level: text("trace_level"),
            not_found_message: text("not_found_message"),
            communication_failure_message: text("communication_failure_message"),
            invalid_plate_message: text("invalid_plate_message"),
            review_failure_message: text("review_failure_message"),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AncoraError::Config`] if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| AncoraError::Config(format!("invalid configuration: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AncoraError::Config`] if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AncoraError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub const fn review_delay(&self) -> Duration {
        Duration::from_millis(self.review_delay_ms)
    }

    /// Lookup texts with the configured overrides applied.
    #[must_use]
    pub fn messages(&self) -> LookupMessages {
        let defaults = LookupMessages::default();
        LookupMessages {
            not_found: self.not_found_message.clone().unwrap_or(defaults.not_found),
            communication_failure: self
                .communication_failure_message
                .clone()
                .unwrap_or(defaults.communication_failure),
            invalid_plate: self.invalid_plate_message.clone().unwrap_or(defaults.invalid_plate),
        }
    }

    /// Resolves the palette: `palette_file`, then `palette_name`, then the
    /// built-in default. Failures fall through to the next option.
    #[must_use]
    pub fn palette(&self) -> Palette {
        if let Some(file) = &self.palette_file {
            match Palette::from_file(infrastructure::expand_tilde(file)) {
                Ok(palette) => return palette,
                Err(e) => tracing::debug!(palette_file = %file, error = %e, "failed to load palette from file"),
            }
        }

        if let Some(name) = &self.palette_name {
            match Palette::from_name(name) {
                Some(palette) => return palette,
                None => tracing::debug!(palette_name = %name, "unknown palette, using default"),
            }
        }

        Palette::default()
    }
}

/// Builds the application state from configuration and collaborators.
///
/// Both components start idle: the lookup is `NotAsked` with an empty plate and
/// the review feed is `Loading` until the runtime requests it.
#[must_use]
pub fn initialize(
    config: &Config,
    lookup_service: Arc<dyn LookupService>,
    review_source: Arc<dyn ReviewSource>,
) -> AppState {
    let palette = config.palette();
    tracing::debug!(palette = %palette.name, base_url = %config.lookup_base_url, "initializing ancora");

    let state = AppState::new(lookup_service, review_source, config.messages(), palette);
    match &config.review_failure_message {
        Some(message) => state.with_review_failure_message(message.clone()),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.review_delay(), Duration::from_millis(1500));
        assert_eq!(config.messages(), LookupMessages::default());
    }

    #[test]
    fn from_map_reads_overrides_and_ignores_blanks() {
        let map: BTreeMap<String, String> = [
            ("review_delay_ms", "0"),
            ("palette", "ancora-night"),
            ("trace_level", "  "),
            ("not_found_message", "Nada encontrado"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.review_delay_ms, 0);
        assert_eq!(config.palette_name.as_deref(), Some("ancora-night"));
        assert_eq!(config.trace_level, None);
        assert_eq!(config.messages().not_found, "Nada encontrado");
        assert_eq!(config.lookup_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = Config::from_toml_str(
            r#"
            lookup_base_url = "https://catalogo.example.com/api"
            palette = "ancora-night"
            "#,
        )
        .unwrap();

        assert_eq!(config.lookup_base_url, "https://catalogo.example.com/api");
        assert_eq!(config.palette_name.as_deref(), Some("ancora-night"));
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[tokio::test]
    async fn review_failure_message_is_configurable() {
        use crate::service::{LookupOutcome, LookupResponse, MockReviewSource};

        struct Offline;

        #[async_trait::async_trait]
        impl LookupService for Offline {
            async fn search(&self, _plate: &Plate) -> LookupOutcome {
                Ok(LookupResponse::not_found(None))
            }
        }

        let config = Config::from_toml_str(r#"review_failure_message = "Avaliações indisponíveis""#).unwrap();
        let reviews = MockReviewSource::with_reviews(vec![], Duration::ZERO).failing("offline");
        let mut state = initialize(&config, Arc::new(Offline), Arc::new(reviews));

        state.reviews.load().await;
        assert_eq!(
            state.reviews.state(),
            &ReviewFeedState::Failure {
                message: "Avaliações indisponíveis".to_string()
            }
        );
    }

    #[test]
    fn toml_type_errors_are_config_errors() {
        let err = Config::from_toml_str("request_timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, AncoraError::Config(_)));
    }

    #[test]
    fn load_reads_file_and_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "review_delay_ms = 20\n").unwrap();

        assert_eq!(Config::load(&path).unwrap().review_delay_ms, 20);
        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(AncoraError::Config(_))
        ));
    }

    #[test]
    fn palette_resolution_prefers_file_then_name_then_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let night = Palette::from_name("ancora-night").unwrap();
        let custom = toml::to_string(&Palette {
            name: "custom".to_string(),
            colors: night.colors.clone(),
        })
        .unwrap();
        std::fs::write(&path, custom).unwrap();

        let config = Config {
            palette_file: Some(path.display().to_string()),
            palette_name: Some("ancora-night".to_string()),
            ..Config::default()
        };
        assert_eq!(config.palette().name, "custom");

        let config = Config {
            palette_file: Some(dir.path().join("missing.toml").display().to_string()),
            palette_name: Some("ancora-night".to_string()),
            ..Config::default()
        };
        assert_eq!(config.palette(), night);

        let config = Config {
            palette_name: Some("unknown".to_string()),
            ..Config::default()
        };
        assert_eq!(config.palette(), Palette::default());
    }
}
