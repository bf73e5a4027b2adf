use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use warden_domain::{ApprovalPolicy, MaxDuration, TargetArguments};

/// Body of access rule create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRuleRequestBody {
    /// Rule name.
    pub name: String,
    /// Rule description.
    pub description: String,
    /// Groups that may request access under the rule.
    pub groups: Vec<String>,
    /// Approvers.
    pub approval: ApprovalPolicy,
    /// Target provider and field constraints.
    pub target: AccessRuleTarget,
    /// Time limits of granted access.
    pub time_constraints: TimeConstraints,
}

/// Target block of a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRuleTarget {
    /// Target provider identifier.
    pub provider_id: String,
    /// Permitted values keyed by provider field.
    pub with: BTreeMap<String, TargetArgumentValues>,
}

impl AccessRuleTarget {
    /// Replaces the field constraints with validated arguments.
    pub fn set_arguments(&mut self, arguments: TargetArguments) {
        self.with = arguments
            .into_iter()
            .map(|(field, values)| (field, TargetArgumentValues { values }))
            .collect();
    }
}

/// Permitted values of one target field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetArgumentValues {
    /// Values.
    pub values: Vec<String>,
}

/// Time limits of granted access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConstraints {
    /// Longest grant in seconds.
    pub max_duration_seconds: MaxDuration,
}

/// Identifier returned when a rule is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessRuleReference {
    /// Remote-assigned identifier.
    pub id: String,
}

/// Access rule as returned by the governance API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRuleDetail {
    /// Rule name.
    pub name: String,
    /// Rule description.
    #[serde(default)]
    pub description: String,
    /// Groups that may request access.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Time limits of granted access.
    pub time_constraints: TimeConstraints,
}
