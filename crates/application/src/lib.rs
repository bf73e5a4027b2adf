//! Access rule resource handler, host plugin protocol and governance API port.

#![forbid(unsafe_code)]

mod access_rule_resource;
mod governance_ports;
mod plugin_protocol;

pub use access_rule_resource::{
    ACCESS_RULE_TYPE_SUFFIX, AccessRuleModel, AccessRuleResource, ApprovalModel, TargetModel,
};
pub use governance_ports::{
    AccessRuleDetail, AccessRuleReference, AccessRuleRequestBody, AccessRuleTarget, ApiRequest,
    ApiResponse, GovernanceClient, GovernanceTransport, RawResponse, TargetArgumentValues,
    TimeConstraints,
};
pub use plugin_protocol::{
    Attribute, AttributeKind, ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse,
    DeleteRequest, DeleteResponse, Diagnostic, DiagnosticSeverity, Diagnostics, ElementType,
    ImportStateRequest, ImportStateResponse, MetadataRequest, MetadataResponse, ProviderData,
    ReadRequest, ReadResponse, Resource, ResourceData, Schema, UpdateRequest, UpdateResponse,
    import_state_passthrough_id,
};
