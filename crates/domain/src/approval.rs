use serde::{Deserialize, Serialize};

/// Groups and users allowed to approve requests made under an access rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalPolicy {
    /// Approving group identifiers.
    pub groups: Vec<String>,
    /// Approving user identifiers.
    pub users: Vec<String>,
}

impl ApprovalPolicy {
    /// Creates an approval policy from group and user identifiers.
    #[must_use]
    pub fn new(groups: Vec<String>, users: Vec<String>) -> Self {
        Self { groups, users }
    }
}
