//! Provider-agnostic structured-output schema description.
//!
//! One `Schema` value serves both sides of a generation call: the prompt
//! builder serializes it into the schema-capable provider's wire dialect
//! (or renders it as plain text for providers without native schema
//! support), and the response normalizer validates the parsed JSON against
//! the same value. Builder and validator can therefore never drift apart.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// Declarative description of an expected JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    String {
        enum_values: Option<&'static [&'static str]>,
    },
    Number,
    Boolean,
    Array {
        items: Box<Schema>,
    },
    Object {
        properties: Vec<(&'static str, Schema)>,
        required: Vec<&'static str>,
    },
}

/// A mismatch found while validating a JSON value against a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("missing required field at {path}")]
    MissingField { path: String },

    #[error("expected {expected} at {path}")]
    WrongType { path: String, expected: &'static str },

    #[error("value at {path} is not one of the allowed variants")]
    NotInEnum { path: String },
}

impl Schema {
    pub fn string() -> Self {
        Self {
            kind: SchemaKind::String { enum_values: None },
            description: None,
        }
    }

    pub fn string_enum(values: &'static [&'static str]) -> Self {
        Self {
            kind: SchemaKind::String {
                enum_values: Some(values),
            },
            description: None,
        }
    }

    pub fn number() -> Self {
        Self {
            kind: SchemaKind::Number,
            description: None,
        }
    }

    pub fn boolean() -> Self {
        Self {
            kind: SchemaKind::Boolean,
            description: None,
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            kind: SchemaKind::Array {
                items: Box::new(items),
            },
            description: None,
        }
    }

    /// Object schema. Fields listed in `required` must exist in the value
    /// being validated; properties not listed are optional.
    pub fn object(properties: Vec<(&'static str, Schema)>, required: &[&'static str]) -> Self {
        Self {
            kind: SchemaKind::Object {
                properties,
                required: required.to_vec(),
            },
            description: None,
        }
    }

    /// Attach a human-readable description, forwarded to schema-capable
    /// providers as a field hint.
    pub fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Serialize into the Gemini `responseSchema` wire dialect
    /// (upper-case type tags, `enum`, `items`, `properties`, `required`).
    pub fn to_provider_json(&self) -> Value {
        let mut obj = Map::new();
        match &self.kind {
            SchemaKind::String { enum_values } => {
                obj.insert("type".into(), json!("STRING"));
                if let Some(values) = enum_values {
                    obj.insert("enum".into(), json!(values));
                }
            }
            SchemaKind::Number => {
                obj.insert("type".into(), json!("NUMBER"));
            }
            SchemaKind::Boolean => {
                obj.insert("type".into(), json!("BOOLEAN"));
            }
            SchemaKind::Array { items } => {
                obj.insert("type".into(), json!("ARRAY"));
                obj.insert("items".into(), items.to_provider_json());
            }
            SchemaKind::Object {
                properties,
                required,
            } => {
                obj.insert("type".into(), json!("OBJECT"));
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.to_string(), schema.to_provider_json()))
                    .collect();
                obj.insert("properties".into(), Value::Object(props));
                if !required.is_empty() {
                    obj.insert("required".into(), json!(required));
                }
            }
        }
        if let Some(description) = self.description {
            obj.insert("description".into(), json!(description));
        }
        Value::Object(obj)
    }

    /// Render as a compact JSON-like shape sketch, used to instruct
    /// providers without native schema enforcement.
    pub fn to_compact_text(&self) -> String {
        match &self.kind {
            SchemaKind::String { enum_values } => match enum_values {
                Some(values) => values.join("|"),
                None => "string".to_string(),
            },
            SchemaKind::Number => "number".to_string(),
            SchemaKind::Boolean => "boolean".to_string(),
            SchemaKind::Array { items } => format!("[{}, ...]", items.to_compact_text()),
            SchemaKind::Object { properties, .. } => {
                let fields: Vec<String> = properties
                    .iter()
                    .map(|(name, schema)| format!("\"{}\": {}", name, schema.to_compact_text()))
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }
        }
    }

    /// Validate a parsed JSON value against this schema.
    ///
    /// Required object fields must be present and non-null; fields the
    /// schema does not know about are tolerated.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        match &self.kind {
            SchemaKind::String { enum_values } => match value {
                Value::String(s) => {
                    if let Some(values) = enum_values {
                        if !values.contains(&s.as_str()) {
                            return Err(SchemaViolation::NotInEnum {
                                path: path.to_string(),
                            });
                        }
                    }
                    Ok(())
                }
                _ => Err(SchemaViolation::WrongType {
                    path: path.to_string(),
                    expected: "string",
                }),
            },
            SchemaKind::Number => {
                if value.is_number() {
                    Ok(())
                } else {
                    Err(SchemaViolation::WrongType {
                        path: path.to_string(),
                        expected: "number",
                    })
                }
            }
            SchemaKind::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(SchemaViolation::WrongType {
                        path: path.to_string(),
                        expected: "boolean",
                    })
                }
            }
            SchemaKind::Array { items } => match value {
                Value::Array(entries) => {
                    for (index, entry) in entries.iter().enumerate() {
                        items.validate_at(entry, &format!("{}[{}]", path, index))?;
                    }
                    Ok(())
                }
                _ => Err(SchemaViolation::WrongType {
                    path: path.to_string(),
                    expected: "array",
                }),
            },
            SchemaKind::Object {
                properties,
                required,
            } => match value {
                Value::Object(map) => {
                    for name in required {
                        match map.get(*name) {
                            None | Some(Value::Null) => {
                                return Err(SchemaViolation::MissingField {
                                    path: format!("{}.{}", path, name),
                                });
                            }
                            Some(_) => {}
                        }
                    }
                    for (name, schema) in properties {
                        if let Some(field) = map.get(*name) {
                            if !field.is_null() {
                                schema.validate_at(field, &format!("{}.{}", path, name))?;
                            }
                        }
                    }
                    Ok(())
                }
                _ => Err(SchemaViolation::WrongType {
                    path: path.to_string(),
                    expected: "object",
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::object(
            vec![
                ("title", Schema::string()),
                ("count", Schema::number()),
                (
                    "effort",
                    Schema::string_enum(&["low", "medium", "high"]),
                ),
                ("tags", Schema::array(Schema::string())),
            ],
            &["title", "effort"],
        )
    }

    #[test]
    fn test_provider_json_shape() {
        let json = sample_schema().to_provider_json();
        assert_eq!(json["type"], "OBJECT");
        assert_eq!(json["properties"]["title"]["type"], "STRING");
        assert_eq!(json["properties"]["effort"]["enum"][0], "low");
        assert_eq!(json["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(json["required"][0], "title");
    }

    #[test]
    fn test_validate_accepts_conforming_value() {
        let value = serde_json::json!({
            "title": "Hooked",
            "effort": "medium",
            "tags": ["a", "b"],
            "extra": 1,
        });
        assert!(sample_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_validate_missing_required_field() {
        let value = serde_json::json!({ "effort": "low" });
        let err = sample_schema().validate(&value).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::MissingField {
                path: "$.title".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_wrong_type_in_array() {
        let value = serde_json::json!({
            "title": "x",
            "effort": "high",
            "tags": ["ok", 3],
        });
        let err = sample_schema().validate(&value).unwrap_err();
        assert_eq!(
            err,
            SchemaViolation::WrongType {
                path: "$.tags[1]".to_string(),
                expected: "string"
            }
        );
    }

    #[test]
    fn test_validate_rejects_unknown_enum_variant() {
        let value = serde_json::json!({ "title": "x", "effort": "extreme" });
        assert!(matches!(
            sample_schema().validate(&value),
            Err(SchemaViolation::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_compact_text_rendering() {
        let schema = Schema::object(
            vec![("hooks", Schema::array(Schema::string()))],
            &["hooks"],
        );
        assert_eq!(schema.to_compact_text(), r#"{"hooks": [string, ...]}"#);
    }
}
