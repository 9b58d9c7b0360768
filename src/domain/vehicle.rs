//! Vehicle record returned by the catalog lookup service.
//!
//! The record is a pass-through payload: the catalog decides which fields exist
//! and this crate neither validates nor transforms them. Only the model name is
//! read, for the result card title.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys under which the catalog reports the vehicle model, in lookup order.
const MODEL_KEYS: [&str; 2] = ["Modelo", "model"];

/// Opaque vehicle payload from the lookup service.
///
/// # Examples
///
/// ```
/// use ancora::domain::VehicleRecord;
/// use serde_json::json;
///
/// let vehicle: VehicleRecord = serde_json::from_value(json!({"Modelo": "Palio", "Ano": 2012})).unwrap();
/// assert_eq!(vehicle.model(), Some("Palio"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord(Map<String, Value>);

impl VehicleRecord {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the model name if the payload carries one as a string.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        MODEL_KEYS
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates over all fields, sorted by key.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for VehicleRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> VehicleRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn model_prefers_catalog_key() {
        let vehicle = record(json!({"model": "Uno", "Modelo": "Palio"}));
        assert_eq!(vehicle.model(), Some("Palio"));
    }

    #[test]
    fn model_falls_back_to_english_key() {
        assert_eq!(record(json!({"model": "Gol"})).model(), Some("Gol"));
    }

    #[test]
    fn model_ignores_non_string_values() {
        assert_eq!(record(json!({"Modelo": 12})).model(), None);
    }

    #[test]
    fn payload_round_trips_untouched() {
        let raw = json!({"Modelo": "Palio", "Motor": "1.0 Fire", "Ano": 2012});
        let vehicle = record(raw.clone());
        assert_eq!(serde_json::to_value(&vehicle).unwrap(), raw);
    }
}
