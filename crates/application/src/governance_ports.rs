mod client;
mod transport;
mod wire;

pub use client::{ApiResponse, GovernanceClient};
pub use transport::{ApiRequest, GovernanceTransport, RawResponse};
pub use wire::{
    AccessRuleDetail, AccessRuleReference, AccessRuleRequestBody, AccessRuleTarget,
    TargetArgumentValues, TimeConstraints,
};
