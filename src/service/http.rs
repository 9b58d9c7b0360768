//! HTTP adapter for the catalog lookup service.
//!
//! Issues `GET {base_url}/vehicles/{plate}` and decodes the contract JSON. The
//! request timeout lives here, at the service boundary, not in the controller.

use super::lookup::{LookupError, LookupOutcome, LookupResponse, LookupService};
use crate::domain::{AncoraError, Plate, Result};
use std::time::Duration;

/// Lookup service backed by the catalog HTTP API.
#[derive(Debug, Clone)]
pub struct HttpLookupService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLookupService {
    /// Builds a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AncoraError::Config`] if the base URL is empty or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AncoraError::Config("lookup_base_url is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AncoraError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn endpoint(&self, plate: &Plate) -> String {
        format!("{}/vehicles/{}", self.base_url, plate.as_str())
    }
}

#[async_trait::async_trait]
impl LookupService for HttpLookupService {
    async fn search(&self, plate: &Plate) -> LookupOutcome {
        let url = self.endpoint(plate);
        tracing::debug!(%url, "requesting vehicle lookup");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Decodes a lookup response body.
///
/// Business failures are often reported with a 4xx status and a contract body
/// (`{"success": false, "message": ...}`); those decode normally. A non-2xx
/// status without a decodable body is a [`LookupError::Status`].
pub(crate) fn decode_response(status: u16, body: &str) -> LookupOutcome {
    match serde_json::from_str::<LookupResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !(200..300).contains(&status) => Err(LookupError::Status(status)),
        Err(e) => Err(LookupError::InvalidResponse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_on_404_is_a_business_response() {
        let outcome = decode_response(404, r#"{"success":false,"message":"Placa não encontrada"}"#);
        let response = outcome.unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Placa não encontrada"));
    }

    #[test]
    fn server_error_without_body_is_a_status_error() {
        assert!(matches!(decode_response(502, "Bad Gateway"), Err(LookupError::Status(502))));
    }

    #[test]
    fn body_without_success_flag_keeps_service_message() {
        let response = decode_response(200, r#"{"message":"Placa inválida"}"#).unwrap();
        assert_eq!(response, LookupResponse::not_found(Some("Placa inválida".to_string())));
    }

    #[test]
    fn garbage_on_200_is_invalid_response() {
        assert!(matches!(
            decode_response(200, "<html>"),
            Err(LookupError::InvalidResponse(_))
        ));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let service = HttpLookupService::new("https://catalog.example/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            service.endpoint(&Plate::normalize("abc1d23")),
            "https://catalog.example/api/vehicles/ABC1D23"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(HttpLookupService::new("  ", Duration::from_secs(1)).is_err());
    }
}
