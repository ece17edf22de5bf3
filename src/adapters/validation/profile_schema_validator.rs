//! Profile Schema Validator - Implementation of ProfileSchemaValidator.
//!
//! Walks a payload against the embedded response schema manually, without
//! an external schema validation dependency. The schema uses the
//! generative service's dialect (`OBJECT`, `ARRAY`, `NUMBER`, `STRING`)
//! so the same value can be sent as `responseSchema`.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use crate::ports::{ProfileSchemaValidator, SchemaValidationError};

/// Response schema of the identity profile.
///
/// `strengths.top5` is deliberately absent: it is derived after decoding.
static PROFILE_RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    let factor_set = || {
        json!({
            "type": "OBJECT",
            "properties": {
                "d": { "type": "NUMBER", "minimum": 0 },
                "i": { "type": "NUMBER", "minimum": 0 },
                "s": { "type": "NUMBER", "minimum": 0 },
                "c": { "type": "NUMBER", "minimum": 0 }
            },
            "required": ["d", "i", "s", "c"]
        })
    };
    let ranked_item = || {
        json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "score": { "type": "NUMBER" },
                "rank": { "type": "NUMBER" }
            },
            "required": ["name", "score", "rank"]
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "disc": {
                "type": "OBJECT",
                "properties": {
                    "factors": factor_set(),
                    "dominantProfile": { "type": "STRING" },
                    "indices": {
                        "type": "OBJECT",
                        "properties": {
                            "aem": { "type": "NUMBER" },
                            "apf": { "type": "NUMBER" },
                            "ips": { "type": "NUMBER" },
                            "ida": { "type": "NUMBER" },
                            "ipm": { "type": "NUMBER" }
                        },
                        "required": ["aem", "apf", "ips", "ida", "ipm"]
                    },
                    "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "limitations": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "pieChart": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "label": { "type": "STRING" },
                                "value": { "type": "NUMBER" }
                            },
                            "required": ["label", "value"]
                        }
                    },
                    "towerChart": {
                        "type": "OBJECT",
                        "properties": {
                            "natural": factor_set(),
                            "adapted": factor_set()
                        },
                        "required": ["natural", "adapted"]
                    }
                },
                "required": [
                    "factors",
                    "dominantProfile",
                    "indices",
                    "strengths",
                    "limitations",
                    "pieChart"
                ]
            },
            "anchors": { "type": "ARRAY", "items": ranked_item() },
            "strengths": {
                "type": "OBJECT",
                "properties": {
                    "all": { "type": "ARRAY", "items": ranked_item() }
                },
                "required": ["all"]
            },
            "values": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "language": { "type": "STRING" },
                        "scoreWork": { "type": "NUMBER" },
                        "scoreHome": { "type": "NUMBER" }
                    },
                    "required": ["language", "scoreWork", "scoreHome"]
                }
            },
            "summary": { "type": "STRING" }
        },
        "required": ["disc", "anchors", "strengths", "values", "summary"]
    })
});

/// Schema-driven validator for extraction payloads.
///
/// Collects every violation in one pass rather than stopping at the first.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
pub struct JsonSchemaValidator {
    // No runtime state needed - validation walks the static schema
}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self {}
    }

    fn walk(&self, schema: &Value, value: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        match schema.get("type").and_then(Value::as_str) {
            Some("OBJECT") => self.walk_object(schema, value, path, errors),
            Some("ARRAY") => self.walk_array(schema, value, path, errors),
            Some("NUMBER") => {
                if let Err(e) = self
                    .require_finite_number(value, path)
                    .and_then(|number| Self::require_minimum(schema, number, path))
                {
                    errors.push(e);
                }
            }
            Some("STRING") => {
                if !value.is_string() {
                    errors.push(Self::invalid_type(path, "string", value));
                }
            }
            other => errors.push(SchemaValidationError::Generic {
                message: format!("unsupported schema type {:?} at {}", other, path),
            }),
        }
    }

    fn walk_object(&self, schema: &Value, value: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let obj = match self.require_object(value, path) {
            Ok(obj) => obj,
            Err(e) => {
                errors.push(e);
                return;
            }
        };

        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str);
        for field in required {
            if let Err(e) = self.require_field(obj, field, path) {
                errors.push(e);
            }
        }

        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (name, property_schema) in properties {
                if let Some(field_value) = obj.get(name) {
                    self.walk(property_schema, field_value, &Self::child_path(path, name), errors);
                }
            }
        }
    }

    fn walk_array(&self, schema: &Value, value: &Value, path: &str, errors: &mut Vec<SchemaValidationError>) {
        let Some(items) = value.as_array() else {
            errors.push(Self::invalid_type(path, "array", value));
            return;
        };
        if let Some(item_schema) = schema.get("items") {
            for (i, item) in items.iter().enumerate() {
                self.walk(item_schema, item, &format!("{}[{}]", path, i), errors);
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_object<'a>(
        &self,
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, SchemaValidationError> {
        value
            .as_object()
            .ok_or_else(|| Self::invalid_type(path, "object", value))
    }

    fn require_field(
        &self,
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
    ) -> Result<(), SchemaValidationError> {
        if !obj.contains_key(field) {
            Err(SchemaValidationError::MissingRequired {
                field: Self::child_path(parent, field),
            })
        } else {
            Ok(())
        }
    }

    fn require_finite_number(&self, value: &Value, path: &str) -> Result<f64, SchemaValidationError> {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => Ok(f),
                _ => Err(SchemaValidationError::NonFiniteNumber {
                    field: path.to_string(),
                }),
            },
            other => Err(Self::invalid_type(path, "number", other)),
        }
    }

    fn require_minimum(schema: &Value, number: f64, path: &str) -> Result<(), SchemaValidationError> {
        match schema.get("minimum").and_then(Value::as_f64) {
            Some(minimum) if number < minimum => Err(SchemaValidationError::BelowMinimum {
                field: path.to_string(),
                minimum,
            }),
            _ => Ok(()),
        }
    }

    fn child_path(parent: &str, field: &str) -> String {
        if parent == "root" {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn invalid_type(path: &str, expected: &str, value: &Value) -> SchemaValidationError {
        SchemaValidationError::InvalidType {
            field: path.to_string(),
            expected: expected.to_string(),
            actual: Self::type_name(value),
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn collect_errors(mut errors: Vec<SchemaValidationError>) -> SchemaValidationError {
        match errors.len() {
            1 => errors.remove(0),
            _ => SchemaValidationError::Multiple(errors),
        }
    }
}

impl ProfileSchemaValidator for JsonSchemaValidator {
    fn validate(&self, payload: &Value) -> Result<(), SchemaValidationError> {
        let mut errors = Vec::new();
        self.walk(&PROFILE_RESPONSE_SCHEMA, payload, "root", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::collect_errors(errors))
        }
    }

    fn response_schema(&self) -> &Value {
        &PROFILE_RESPONSE_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> JsonSchemaValidator {
        JsonSchemaValidator::new()
    }

    fn factors() -> Value {
        json!({ "d": 65, "i": 20, "s": 10, "c": 5 })
    }

    fn minimal_profile() -> Value {
        json!({
            "disc": {
                "factors": factors(),
                "dominantProfile": "Executor-Dominante",
                "indices": { "aem": 15, "apf": 8, "ips": 55, "ida": 12, "ipm": 30 },
                "strengths": [],
                "limitations": [],
                "pieChart": []
            },
            "anchors": [],
            "strengths": { "all": [] },
            "values": [],
            "summary": ""
        })
    }

    fn fixture() -> Value {
        serde_json::from_str(include_str!("../ai/fixtures/reference_profile.json")).unwrap()
    }

    // =============================================================
    // Accepted payloads
    // =============================================================

    #[test]
    fn reference_fixture_is_valid() {
        assert!(validator().validate(&fixture()).is_ok());
    }

    #[test]
    fn empty_arrays_are_valid() {
        assert!(validator().validate(&minimal_profile()).is_ok());
    }

    #[test]
    fn tower_chart_is_optional_as_a_whole() {
        let mut payload = minimal_profile();
        payload["disc"]["towerChart"] = json!({ "natural": factors(), "adapted": factors() });
        assert!(validator().validate(&payload).is_ok());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut payload = minimal_profile();
        payload["strengths"]["top5"] = json!([{ "nonsense": true }]);
        payload["extra"] = json!(1);
        assert!(validator().validate(&payload).is_ok());
    }

    #[test]
    fn fractional_numbers_are_valid() {
        let mut payload = minimal_profile();
        payload["disc"]["indices"]["ips"] = json!(84.5);
        assert!(validator().validate(&payload).is_ok());
    }

    // =============================================================
    // Missing fields
    // =============================================================

    #[test]
    fn missing_top_level_field_is_reported() {
        let mut payload = minimal_profile();
        payload.as_object_mut().unwrap().remove("summary");
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::MissingRequired { field: "summary".to_string() }
        );
    }

    #[test]
    fn missing_nested_field_has_qualified_path() {
        let mut payload = minimal_profile();
        payload["disc"]["indices"].as_object_mut().unwrap().remove("aem");
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::MissingRequired { field: "disc.indices.aem".to_string() }
        );
    }

    #[test]
    fn partial_tower_chart_is_rejected() {
        let mut payload = minimal_profile();
        payload["disc"]["towerChart"] = json!({ "natural": factors() });
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::MissingRequired {
                field: "disc.towerChart.adapted".to_string()
            }
        );
    }

    #[test]
    fn missing_array_is_not_treated_as_empty() {
        let mut payload = minimal_profile();
        payload["disc"].as_object_mut().unwrap().remove("limitations");
        assert!(matches!(
            validator().validate(&payload),
            Err(SchemaValidationError::MissingRequired { .. })
        ));
    }

    // =============================================================
    // Type errors
    // =============================================================

    #[test]
    fn negative_factor_is_rejected() {
        let mut payload = minimal_profile();
        payload["disc"]["factors"]["d"] = json!(-5);
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::BelowMinimum {
                field: "disc.factors.d".to_string(),
                minimum: 0.0
            }
        );
    }

    #[test]
    fn negative_tower_factor_is_rejected() {
        let mut payload = minimal_profile();
        payload["disc"]["towerChart"] = json!({
            "natural": factors(),
            "adapted": { "d": 60, "i": -1, "s": 10, "c": 5 }
        });
        assert!(matches!(
            validator().validate(&payload),
            Err(SchemaValidationError::BelowMinimum { ref field, .. }) if field == "disc.towerChart.adapted.i"
        ));
    }

    #[test]
    fn zero_factor_is_accepted() {
        let mut payload = minimal_profile();
        payload["disc"]["factors"]["c"] = json!(0);
        assert!(validator().validate(&payload).is_ok());
    }

    #[test]
    fn negative_index_is_not_bounded() {
        let mut payload = minimal_profile();
        payload["disc"]["indices"]["ida"] = json!(-3);
        assert!(validator().validate(&payload).is_ok());
    }

    #[test]
    fn numbers_as_strings_are_rejected() {
        let mut payload = minimal_profile();
        payload["disc"]["indices"]["ips"] = json!("55");
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::InvalidType {
                field: "disc.indices.ips".to_string(),
                expected: "number".to_string(),
                actual: "string".to_string(),
            }
        );
    }

    #[test]
    fn array_items_are_checked_with_index_path() {
        let mut payload = minimal_profile();
        payload["anchors"] = json!([
            { "name": "Autonomia", "score": 28, "rank": 1 },
            { "name": 7, "score": 24, "rank": 2 }
        ]);
        assert_eq!(
            validator().validate(&payload).unwrap_err(),
            SchemaValidationError::InvalidType {
                field: "anchors[1].name".to_string(),
                expected: "string".to_string(),
                actual: "number".to_string(),
            }
        );
    }

    #[test]
    fn root_must_be_object() {
        let err = validator().validate(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, SchemaValidationError::InvalidType { ref field, .. } if field == "root"));
    }

    #[test]
    fn null_is_not_an_empty_array() {
        let mut payload = minimal_profile();
        payload["values"] = Value::Null;
        assert!(matches!(
            validator().validate(&payload),
            Err(SchemaValidationError::InvalidType { ref actual, .. }) if actual == "null"
        ));
    }

    #[test]
    fn all_violations_are_collected() {
        let mut payload = minimal_profile();
        payload["summary"] = json!(42);
        payload["disc"]["factors"]["d"] = json!(true);
        payload["strengths"] = json!({});

        let err = validator().validate(&payload).unwrap_err();
        assert!(err.is_multiple());
        assert_eq!(err.error_count(), 3);
    }

    // =============================================================
    // Response schema
    // =============================================================

    #[test]
    fn response_schema_omits_top5() {
        let schema = validator().response_schema().clone();
        assert_eq!(schema["type"], "OBJECT");
        assert!(schema["properties"]["strengths"]["properties"]["all"].is_object());
        assert!(schema["properties"]["strengths"]["properties"]
            .get("top5")
            .is_none());
    }

    #[test]
    fn response_schema_types_every_index() {
        let schema = validator().response_schema().clone();
        let indices = &schema["properties"]["disc"]["properties"]["indices"]["properties"];
        for key in ["aem", "apf", "ips", "ida", "ipm"] {
            assert_eq!(indices[key]["type"], "NUMBER");
        }
    }
}
