//! View model types representing renderable UI state.
//!
//! View models are computed from component state and consumed by a renderer.
//! They contain no business logic, only display-ready data: every text the
//! screen shows is decided here, so any rendering layer draws the same screen.

use crate::app::{FailureKind, LookupResult, PlateLookupController, ReviewFeedState};
use crate::domain::{Plate, Review, StarRating, VehicleRecord, PLATE_LENGTH};
use serde_json::Value;

const SEARCH_TITLE: &str = "Busca Rápida de Peças";
const SEARCH_SUBTITLE: &str = "Digite a placa e encontre o catálogo específico do veículo.";
const PLATE_PLACEHOLDER: &str = "ABC1234 ou ABC1D23";
const SUBMIT_LABEL: &str = "Buscar Veículo";
const FOUND_BADGE: &str = "Veículo Compatível Encontrado";
const CONTINUE_LABEL: &str = "Ver Catálogo de Peças";
const MANUFACTURER_LABEL: &str = "Montadora";

const REVIEWS_LOADING: &str = "Carregando avaliações...";
const REVIEWS_EMPTY: &str = "Nenhuma avaliação encontrada.";
const REVIEWS_TITLE: &str = "O que dizem sobre o Catálogo?";
const REVIEWS_SUBTITLE: &str = "Avaliações dos membros da Rede";
const REVIEWS_FOOTER: &str = "Junte-se a milhares de mecânicos que usam o Catálogo ANCORA diariamente.";

/// Complete view model for the plate search screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchViewModel {
    pub title: String,
    pub subtitle: String,
    pub input: PlateInputInfo,
    pub submit: SubmitButtonInfo,
    /// Shown under the input while the plate is partially typed.
    pub validation_hint: Option<String>,
    pub error: Option<ErrorBanner>,
    pub vehicle_card: Option<VehicleCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateInputInfo {
    pub value: String,
    pub placeholder: String,
    pub max_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonInfo {
    pub label: String,
    pub enabled: bool,
    /// Replace the label with a spinner.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    /// Whether trying the same plate again may succeed.
    pub retryable: bool,
}

/// Result card for a vehicle that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleCard {
    pub badge: String,
    /// `"{manufacturer} {model}"`.
    pub title: String,
    /// `"Placa: {plate}"`, with the plate layout when recognized.
    pub subtitle: String,
    pub details: Vec<DetailRow>,
    pub continue_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl SearchViewModel {
    #[must_use]
    pub fn from_controller(controller: &PlateLookupController) -> Self {
        let result = controller.result();
        let plate = controller.plate();

        let error = match result {
            LookupResult::Failure { kind, message } => Some(ErrorBanner {
                message: message.clone(),
                retryable: matches!(kind, FailureKind::Communication),
            }),
            _ => None,
        };

        let vehicle_card = match result {
            LookupResult::Success { vehicle, manufacturer } => Some(VehicleCard::new(plate, vehicle, manufacturer)),
            _ => None,
        };

        Self {
            title: SEARCH_TITLE.to_string(),
            subtitle: SEARCH_SUBTITLE.to_string(),
            input: PlateInputInfo {
                value: plate.to_string(),
                placeholder: PLATE_PLACEHOLDER.to_string(),
                max_length: PLATE_LENGTH,
            },
            submit: SubmitButtonInfo {
                label: SUBMIT_LABEL.to_string(),
                enabled: controller.can_submit(),
                loading: result.is_loading(),
            },
            validation_hint: controller.validation_message().map(String::from),
            error,
            vehicle_card,
        }
    }
}

impl VehicleCard {
    fn new(plate: &Plate, vehicle: &VehicleRecord, manufacturer: &str) -> Self {
        let title = match vehicle.model() {
            Some(model) => format!("{manufacturer} {model}"),
            None => manufacturer.to_string(),
        };

        let subtitle = match plate.format() {
            Some(format) => format!("Placa: {plate} ({format})"),
            None => format!("Placa: {plate}"),
        };

        let mut details: Vec<DetailRow> = vehicle
            .fields()
            .filter(|(label, value)| !value.is_null() && label.as_str() != MANUFACTURER_LABEL)
            .map(|(label, value)| DetailRow {
                label: label.clone(),
                value: display_value(value),
            })
            .collect();
        details.push(DetailRow {
            label: MANUFACTURER_LABEL.to_string(),
            value: manufacturer.to_string(),
        });

        Self {
            badge: FOUND_BADGE.to_string(),
            title,
            subtitle,
            details,
            continue_label: CONTINUE_LABEL.to_string(),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// View model for the review feed, one variant per feed state.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFeedViewModel {
    Loading { text: String },
    Error { message: String },
    Empty { text: String },
    Loaded {
        title: String,
        subtitle: String,
        cards: Vec<ReviewCard>,
        footer: String,
    },
}

/// One rendered review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub id: u32,
    /// `"{author} - {affiliation}"`.
    pub heading: String,
    pub stars: StarRating,
    pub text: String,
    pub date: String,
}

impl ReviewFeedViewModel {
    #[must_use]
    pub fn from_state(state: &ReviewFeedState) -> Self {
        match state {
            ReviewFeedState::Loading => Self::Loading {
                text: REVIEWS_LOADING.to_string(),
            },
            ReviewFeedState::Failure { message } => Self::Error {
                message: message.clone(),
            },
            ReviewFeedState::Empty => Self::Empty {
                text: REVIEWS_EMPTY.to_string(),
            },
            ReviewFeedState::Loaded { items } => Self::Loaded {
                title: REVIEWS_TITLE.to_string(),
                subtitle: REVIEWS_SUBTITLE.to_string(),
                cards: items.iter().map(ReviewCard::from).collect(),
                footer: REVIEWS_FOOTER.to_string(),
            },
        }
    }
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id(),
            heading: format!("{} - {}", review.author_name(), review.affiliation()),
            stars: review.stars(),
            text: review.text().to_string(),
            date: review.relative_date().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LookupMessages;
    use crate::service::{builtin_reviews, LookupError, LookupOutcome, LookupResponse, LookupService};
    use serde_json::json;
    use std::sync::Arc;

    struct Unused;

    #[async_trait::async_trait]
    impl LookupService for Unused {
        async fn search(&self, _plate: &Plate) -> LookupOutcome {
            Err(LookupError::Transport("unused".to_string()))
        }
    }

    fn controller() -> PlateLookupController {
        PlateLookupController::new(Arc::new(Unused), LookupMessages::default())
    }

    #[test]
    fn idle_screen_disables_submit() {
        let mut ctrl = controller();
        ctrl.set_plate("abc");
        let vm = SearchViewModel::from_controller(&ctrl);

        assert!(!vm.submit.enabled);
        assert!(!vm.submit.loading);
        assert_eq!(vm.input.value, "ABC");
        assert_eq!(vm.validation_hint.as_deref(), Some("Placa deve ter 7 caracteres."));
        assert!(vm.error.is_none());
        assert!(vm.vehicle_card.is_none());
    }

    #[test]
    fn loading_screen_shows_spinner() {
        let mut ctrl = controller();
        ctrl.set_plate("abc1234");
        ctrl.begin_search().unwrap();
        let vm = SearchViewModel::from_controller(&ctrl);

        assert!(vm.submit.loading);
        assert!(!vm.submit.enabled);
    }

    #[test]
    fn success_builds_vehicle_card() {
        let mut ctrl = controller();
        ctrl.set_plate("abc1d23");
        ctrl.begin_search().unwrap();
        let vehicle = serde_json::from_value(json!({"Modelo": "Palio", "Ano": 2012, "Motor": null})).unwrap();
        ctrl.complete_search(Ok(LookupResponse::found(vehicle, "Fiat")));

        let card = SearchViewModel::from_controller(&ctrl).vehicle_card.unwrap();
        assert_eq!(card.title, "Fiat Palio");
        assert_eq!(card.subtitle, "Placa: ABC1D23 (Mercosul)");
        let labels: Vec<&str> = card.details.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["Ano", "Modelo", "Montadora"]);
        assert_eq!(card.details[0].value, "2012");
        assert_eq!(card.details[1].value, "Palio");
    }

    #[test]
    fn lookup_manufacturer_replaces_payload_manufacturer() {
        let mut ctrl = controller();
        ctrl.set_plate("abc1234");
        ctrl.begin_search().unwrap();
        let vehicle = serde_json::from_value(json!({"Modelo": "Uno", "Montadora": "FIAT S/A"})).unwrap();
        ctrl.complete_search(Ok(LookupResponse::found(vehicle, "Fiat")));

        let card = SearchViewModel::from_controller(&ctrl).vehicle_card.unwrap();
        let manufacturer_rows: Vec<&str> = card
            .details
            .iter()
            .filter(|row| row.label == "Montadora")
            .map(|row| row.value.as_str())
            .collect();
        assert_eq!(manufacturer_rows, ["Fiat"]);
    }

    #[test]
    fn communication_failure_banner_is_retryable() {
        let mut ctrl = controller();
        ctrl.set_plate("abc1234");
        ctrl.begin_search().unwrap();
        ctrl.complete_search(Err(LookupError::Status(503)));

        let banner = SearchViewModel::from_controller(&ctrl).error.unwrap();
        assert!(banner.retryable);
        assert_eq!(banner.message, LookupMessages::default().communication_failure);
    }

    #[test]
    fn loaded_feed_keeps_order_and_stars() {
        let state = ReviewFeedState::Loaded {
            items: builtin_reviews().unwrap(),
        };
        let ReviewFeedViewModel::Loaded { cards, .. } = ReviewFeedViewModel::from_state(&state) else {
            panic!("expected loaded view model");
        };

        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(cards[1].heading, "Carla R. - Mecânica Rápida");
        assert_eq!((cards[1].stars.full, cards[1].stars.half), (4, 1));
    }

    #[test]
    fn empty_feed_has_placeholder_text() {
        assert_eq!(
            ReviewFeedViewModel::from_state(&ReviewFeedState::Empty),
            ReviewFeedViewModel::Empty {
                text: REVIEWS_EMPTY.to_string()
            }
        );
    }
}
