use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::diagnostics::Diagnostics;
use super::resource_data::json_kind;

/// Element type of a list attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// UTF-8 string elements.
    String,
}

/// Shape of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    /// Single string value.
    String,
    /// List of primitive elements.
    List {
        /// Element type.
        element: ElementType,
    },
    /// One nested object.
    SingleNested {
        /// Nested attributes.
        attributes: BTreeMap<String, Attribute>,
    },
    /// List of nested objects.
    ListNested {
        /// Attributes of each list item.
        attributes: BTreeMap<String, Attribute>,
    },
}

/// One declared attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Value shape.
    pub kind: AttributeKind,
    /// The user must set a value.
    pub required: bool,
    /// The user may set a value.
    pub optional: bool,
    /// The provider sets the value.
    pub computed: bool,
    /// Markdown documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
}

impl Attribute {
    fn with_kind(kind: AttributeKind) -> Self {
        Self {
            kind,
            required: false,
            optional: false,
            computed: false,
            markdown_description: None,
        }
    }

    /// Creates a string attribute.
    #[must_use]
    pub fn string() -> Self {
        Self::with_kind(AttributeKind::String)
    }

    /// Creates a list attribute.
    #[must_use]
    pub fn list(element: ElementType) -> Self {
        Self::with_kind(AttributeKind::List { element })
    }

    /// Creates a single nested object attribute.
    #[must_use]
    pub fn single_nested(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::with_kind(AttributeKind::SingleNested { attributes })
    }

    /// Creates a list of nested objects attribute.
    #[must_use]
    pub fn list_nested(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::with_kind(AttributeKind::ListNested { attributes })
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the attribute as computed.
    #[must_use]
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Sets the markdown description.
    #[must_use]
    pub fn description(mut self, markdown: impl Into<String>) -> Self {
        self.markdown_description = Some(markdown.into());
        self
    }

    fn is_computed_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }
}

/// Declared shape of a managed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Markdown documentation for the resource.
    pub markdown_description: String,
    /// Top-level attributes keyed by name.
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    /// Validates a configuration object against the declared attributes.
    ///
    /// Null values count as unset.
    #[must_use]
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        match config {
            Value::Object(object) => {
                validate_object(&self.attributes, object, "", &mut diagnostics);
            }
            other => diagnostics.add_error(
                "Invalid Configuration",
                format!("expected a configuration object, got {}", json_kind(other)),
            ),
        }

        diagnostics
    }
}

fn validate_object(
    attributes: &BTreeMap<String, Attribute>,
    object: &Map<String, Value>,
    prefix: &str,
    diagnostics: &mut Diagnostics,
) {
    for name in object.keys() {
        if !attributes.contains_key(name) {
            diagnostics.add_error(
                "Unsupported argument",
                format!("an argument named '{prefix}{name}' is not expected here"),
            );
        }
    }

    for (name, attribute) in attributes {
        let path = format!("{prefix}{name}");
        let value = object.get(name).filter(|value| !value.is_null());

        match value {
            None if attribute.required => diagnostics.add_error(
                "Missing required argument",
                format!("the argument '{path}' is required, but no definition was found"),
            ),
            None => {}
            Some(_) if attribute.is_computed_only() => diagnostics.add_error(
                "Invalid Configuration for Read-Only Attribute",
                format!("'{path}' is computed by the provider and cannot be set"),
            ),
            Some(value) => validate_value(&attribute.kind, value, path.as_str(), diagnostics),
        }
    }
}

fn validate_value(kind: &AttributeKind, value: &Value, path: &str, diagnostics: &mut Diagnostics) {
    match (kind, value) {
        (AttributeKind::String, Value::String(_)) => {}
        (AttributeKind::List { element }, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                let matches = match element {
                    ElementType::String => item.is_string(),
                };
                if !matches {
                    diagnostics.add_error(
                        "Incorrect attribute value type",
                        format!(
                            "'{path}[{index}]' must be a string, got {}",
                            json_kind(item)
                        ),
                    );
                }
            }
        }
        (AttributeKind::SingleNested { attributes }, Value::Object(object)) => {
            validate_object(attributes, object, format!("{path}.").as_str(), diagnostics);
        }
        (AttributeKind::ListNested { attributes }, Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Object(object) => validate_object(
                        attributes,
                        object,
                        format!("{path}[{index}].").as_str(),
                        diagnostics,
                    ),
                    other => diagnostics.add_error(
                        "Incorrect attribute value type",
                        format!("'{path}[{index}]' must be an object, got {}", json_kind(other)),
                    ),
                }
            }
        }
        (kind, other) => diagnostics.add_error(
            "Incorrect attribute value type",
            format!(
                "'{path}' must be {}, got {}",
                expected_kind(kind),
                json_kind(other)
            ),
        ),
    }
}

fn expected_kind(kind: &AttributeKind) -> &'static str {
    match kind {
        AttributeKind::String => "a string",
        AttributeKind::List { .. } | AttributeKind::ListNested { .. } => "a list",
        AttributeKind::SingleNested { .. } => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::{Attribute, ElementType, Schema};

    fn schema() -> Schema {
        Schema {
            markdown_description: "test".to_owned(),
            attributes: BTreeMap::from([
                ("id".to_owned(), Attribute::string().computed()),
                ("name".to_owned(), Attribute::string().required()),
                (
                    "tags".to_owned(),
                    Attribute::list(ElementType::String).optional(),
                ),
                (
                    "items".to_owned(),
                    Attribute::list_nested(BTreeMap::from([(
                        "field".to_owned(),
                        Attribute::string().required(),
                    )]))
                    .optional(),
                ),
            ]),
        }
    }

    #[test]
    fn accepts_valid_configuration() {
        let diagnostics = schema().validate(&json!({
            "name": "rule",
            "tags": ["a"],
            "items": [{ "field": "x" }],
            "id": null,
        }));

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_missing_required_argument() {
        let diagnostics = schema().validate(&json!({ "name": null }));

        assert!(diagnostics.has_error());
        assert_eq!(
            diagnostics.iter().next().map(|item| item.summary.as_str()),
            Some("Missing required argument")
        );
    }

    #[test]
    fn rejects_user_set_computed_attribute() {
        let diagnostics = schema().validate(&json!({ "name": "rule", "id": "rule_1" }));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.has_error());
    }

    #[test]
    fn reports_nested_paths() {
        let diagnostics = schema().validate(&json!({ "name": "rule", "items": [{}] }));

        assert!(
            diagnostics
                .iter()
                .any(|item| item.detail.contains("'items[0].field'"))
        );
    }

    #[test]
    fn rejects_unknown_and_mistyped_arguments() {
        let diagnostics = schema().validate(&json!({
            "name": 1,
            "tags": ["a", 2],
            "extra": true,
        }));

        assert_eq!(diagnostics.len(), 3);
    }
}
