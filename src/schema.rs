//! Field-level validation for inbound and outbound shapes.
//!
//! Each shape implements [`Shape`] by pulling its fields out of a [`Fields`]
//! cursor. Every field is checked before the shape is assembled, so a single
//! [`ValidationError`] reports all offending fields at once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use url::Url;
use utoipa::ToSchema;

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Input failed one or more field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// Prefix every field name, e.g. `url` becomes `recipes[2].url`.
    pub fn nested(self, prefix: &str) -> Self {
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|e| FieldError {
                    field: format!("{}.{}", prefix, e.field),
                    message: e.message,
                })
                .collect(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, e) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// An absolute `http`/`https` URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct HttpUrl(Url);

impl HttpUrl {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let url = Url::parse(raw).map_err(|e| format!("invalid URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "URL scheme should be 'http' or 'https', got '{}'",
                url.scheme()
            ));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err("URL host is required".to_string());
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for HttpUrl {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl Serialize for HttpUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Cursor over a raw JSON object that records a [`FieldError`] for every
/// missing, mistyped or malformed field it is asked for.
#[derive(Debug)]
pub struct Fields {
    map: Map<String, Value>,
    errors: Vec<FieldError>,
}

impl Fields {
    pub fn new(raw: Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(Self {
                map,
                errors: Vec::new(),
            }),
            other => Err(ValidationError::single(
                "body",
                format!("expected an object, got {}", kind(&other)),
            )),
        }
    }

    /// A field that must be present and non-null.
    pub fn required<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        match self.map.remove(name) {
            None | Some(Value::Null) => {
                self.reject(name, "field required");
                None
            }
            Some(value) => self.parse(name, value),
        }
    }

    /// A field that may be absent or null.
    pub fn optional<T: DeserializeOwned>(&mut self, name: &str) -> Option<T> {
        match self.map.remove(name) {
            None | Some(Value::Null) => None,
            Some(value) => self.parse(name, value),
        }
    }

    /// An optional field with a declared default.
    pub fn optional_or<T: DeserializeOwned>(&mut self, name: &str, default: T) -> T {
        self.optional(name).unwrap_or(default)
    }

    pub fn reject(&mut self, name: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: name.to_string(),
            message: message.into(),
        });
    }

    fn parse<T: DeserializeOwned>(&mut self, name: &str, value: Value) -> Option<T> {
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                self.reject(name, e.to_string());
                None
            }
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// A named set of typed fields.
pub trait Shape: Sized {
    /// Pull every field out of `fields`. Returns `None` if any was rejected.
    fn from_fields(fields: &mut Fields) -> Option<Self>;
}

/// Validate raw JSON against shape `T`.
pub fn validate<T: Shape>(raw: Value) -> Result<T, ValidationError> {
    let mut fields = Fields::new(raw)?;
    let shape = T::from_fields(&mut fields);
    fields.finish()?;
    shape.ok_or_else(|| ValidationError::single("body", "invalid input"))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Sample {
        name: String,
        link: HttpUrl,
        count: i64,
        note: String,
    }

    impl Shape for Sample {
        fn from_fields(fields: &mut Fields) -> Option<Self> {
            let name = fields.required("name");
            let link = fields.required("link");
            let count = fields.required("count");
            let note = fields.optional_or("note", String::new());
            Some(Self {
                name: name?,
                link: link?,
                count: count?,
                note,
            })
        }
    }

    #[test]
    fn test_http_url_accepts_http_and_https() {
        assert!(HttpUrl::parse("http://norecipes.com/recipe/chicken-paprikash/").is_ok());
        assert!(HttpUrl::parse("https://example.com").is_ok());
    }

    #[test]
    fn test_http_url_rejects_malformed() {
        assert!(HttpUrl::parse("not-a-url").is_err());
        assert!(HttpUrl::parse("ftp://example.com/file").is_err());
        assert!(HttpUrl::parse("mailto:someone@example.com").is_err());
        assert!(HttpUrl::parse("").is_err());
    }

    #[test]
    fn test_validate_applies_default() {
        let sample: Sample = validate(json!({
            "name": "a",
            "link": "http://example.com/x",
            "count": 3
        }))
        .unwrap();
        assert_eq!(sample.name, "a");
        assert_eq!(sample.link.as_str(), "http://example.com/x");
        assert_eq!(sample.count, 3);
        assert_eq!(sample.note, "");
    }

    #[test]
    fn test_validate_collects_every_bad_field() {
        let err = validate::<Sample>(json!({
            "link": "not-a-url",
            "count": "three"
        }))
        .unwrap_err();

        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "link", "count"]);
        assert_eq!(err.errors[0].message, "field required");
        assert!(err.errors[1].message.contains("invalid URL"));
    }

    #[test]
    fn test_validate_null_counts_as_missing() {
        let err = validate::<Sample>(json!({
            "name": null,
            "link": "http://example.com",
            "count": 1
        }))
        .unwrap_err();
        assert_eq!(err.errors, vec![FieldError {
            field: "name".to_string(),
            message: "field required".to_string(),
        }]);
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let err = validate::<Sample>(json!([1, 2])).unwrap_err();
        assert_eq!(err.errors[0].field, "body");
        assert_eq!(err.errors[0].message, "expected an object, got an array");
    }

    #[test]
    fn test_display_lists_fields() {
        let err = ValidationError::single("url", "bad").nested("recipes[0]");
        assert_eq!(err.to_string(), "validation failed: recipes[0].url: bad");
    }
}
