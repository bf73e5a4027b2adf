use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use warden_core::{AppError, AppResult, NonEmptyString};

/// Permitted values for one field of a target provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConstraint {
    field: NonEmptyString,
    values: Vec<String>,
}

impl TargetConstraint {
    /// Creates a validated constraint with at least one value.
    pub fn new(field: impl Into<String>, values: Vec<String>) -> AppResult<Self> {
        let field = NonEmptyString::for_attribute("target.field", field)?;
        if values.is_empty() {
            return Err(AppError::Validation(format!(
                "target field '{}' must list at least one value",
                field.as_str()
            )));
        }

        Ok(Self { field, values })
    }
}

/// Target constraints keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArguments(BTreeMap<String, Vec<String>>);

impl TargetArguments {
    /// Collects constraints, rejecting a field that appears twice.
    pub fn from_constraints(
        constraints: impl IntoIterator<Item = TargetConstraint>,
    ) -> AppResult<Self> {
        let mut arguments = BTreeMap::new();
        for constraint in constraints {
            match arguments.entry(String::from(constraint.field)) {
                Entry::Vacant(entry) => {
                    entry.insert(constraint.values);
                }
                Entry::Occupied(entry) => {
                    return Err(AppError::Validation(format!(
                        "target field '{}' is declared more than once",
                        entry.key()
                    )));
                }
            }
        }

        Ok(Self(arguments))
    }
}

impl IntoIterator for TargetArguments {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use warden_core::AppError;

    use super::{TargetArguments, TargetConstraint};

    fn constraint(field: &str, values: &[&str]) -> TargetConstraint {
        TargetConstraint::new(field, values.iter().map(|value| (*value).to_owned()).collect())
            .unwrap_or_else(|error| panic!("constraint should be valid: {error}"))
    }

    #[test]
    fn constraint_requires_field_name() {
        let result = TargetConstraint::new("  ", vec!["a".to_owned()]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn constraint_requires_a_value() {
        let result = TargetConstraint::new("accountId", Vec::new());
        assert!(
            matches!(result, Err(AppError::Validation(message)) if message.contains("accountId"))
        );
    }

    #[test]
    fn arguments_are_keyed_and_ordered_by_field() {
        let arguments = TargetArguments::from_constraints([
            constraint("permissionSetArn", &["arn:a", "arn:b"]),
            constraint("accountId", &["123456789012"]),
        ])
        .unwrap_or_default();

        let entries = arguments.into_iter().collect::<Vec<_>>();
        assert_eq!(
            entries,
            vec![
                ("accountId".to_owned(), vec!["123456789012".to_owned()]),
                (
                    "permissionSetArn".to_owned(),
                    vec!["arn:a".to_owned(), "arn:b".to_owned()]
                ),
            ]
        );
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let result = TargetArguments::from_constraints([
            constraint("accountId", &["1"]),
            constraint("accountId", &["2"]),
        ]);

        let message = match result {
            Err(AppError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert!(message.contains("more than once"));
    }
}
