use std::collections::BTreeMap;

use crate::plugin_protocol::{Attribute, ElementType, Schema};

pub(super) fn access_rule_schema() -> Schema {
    Schema {
        markdown_description: "Manages the creation of a Common Fate access rule.".to_owned(),
        attributes: BTreeMap::from([
            (
                "id".to_owned(),
                Attribute::string().computed().description("Access Rule ID"),
            ),
            (
                "name".to_owned(),
                Attribute::string()
                    .required()
                    .description("Name of the Access Rule"),
            ),
            (
                "description".to_owned(),
                Attribute::string()
                    .required()
                    .description("Description of the Access Rule"),
            ),
            (
                "status".to_owned(),
                Attribute::string()
                    .optional()
                    .description("Status of the Access Rule"),
            ),
            (
                "groups".to_owned(),
                Attribute::list(ElementType::String)
                    .required()
                    .description("Groups with access to the Access Rule"),
            ),
            (
                "target_provider_id".to_owned(),
                Attribute::string()
                    .required()
                    .description("ID of the target provider"),
            ),
            (
                "duration".to_owned(),
                Attribute::string()
                    .required()
                    .description("Maximum duration of granted access, in seconds"),
            ),
            (
                "approval".to_owned(),
                Attribute::single_nested(BTreeMap::from([
                    (
                        "groups".to_owned(),
                        Attribute::list(ElementType::String).optional(),
                    ),
                    (
                        "users".to_owned(),
                        Attribute::list(ElementType::String).optional(),
                    ),
                ]))
                .optional(),
            ),
            (
                "target".to_owned(),
                Attribute::list_nested(BTreeMap::from([
                    (
                        "field".to_owned(),
                        Attribute::string()
                            .required()
                            .description("Target provider field name"),
                    ),
                    (
                        "value".to_owned(),
                        Attribute::list(ElementType::String).required(),
                    ),
                ]))
                .required(),
            ),
        ]),
    }
}
