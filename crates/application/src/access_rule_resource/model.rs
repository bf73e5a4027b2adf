use serde::{Deserialize, Serialize};

/// Declared access rule as stored in plan and state.
///
/// Every attribute is optional here: imported state carries only `id`, and
/// the required ones are enforced by the schema and the field mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRuleModel {
    /// Remote-assigned identifier.
    pub id: Option<String>,
    /// Rule name.
    pub name: Option<String>,
    /// Rule description.
    pub description: Option<String>,
    /// Declared status, kept locally only.
    pub status: Option<String>,
    /// Groups that may request access.
    pub groups: Option<Vec<String>>,
    /// Target provider identifier.
    pub target_provider_id: Option<String>,
    /// Maximum grant duration in seconds, as a decimal string.
    pub duration: Option<String>,
    /// Approvers.
    pub approval: Option<ApprovalModel>,
    /// Target field constraints.
    pub target: Option<Vec<TargetModel>>,
}

/// Declared `approval` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalModel {
    /// Approving groups.
    pub groups: Option<Vec<String>>,
    /// Approving users.
    pub users: Option<Vec<String>>,
}

/// Declared `target` list item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetModel {
    /// Provider field name.
    pub field: String,
    /// Permitted values.
    pub value: Vec<String>,
}

impl AccessRuleModel {
    /// Returns the identifier when it is set and non-blank.
    #[must_use]
    pub fn rule_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}
