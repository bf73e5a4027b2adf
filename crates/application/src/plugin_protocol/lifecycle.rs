use std::any::Any;
use std::sync::Arc;

use serde_json::Value;

use super::diagnostics::Diagnostics;
use super::resource_data::ResourceData;

/// Opaque provider-level data handed to resources at configuration time.
pub type ProviderData = Arc<dyn Any + Send + Sync>;

/// Request for the resource type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    /// Provider type name, used as the resource type prefix.
    pub provider_type_name: String,
}

/// Resource type name answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    /// Full resource type name.
    pub type_name: String,
}

/// Provider data delivered once the provider itself is configured.
#[derive(Default)]
pub struct ConfigureRequest {
    /// Absent while the provider is still unconfigured.
    pub provider_data: Option<ProviderData>,
}

/// Result of configuring a resource.
#[derive(Debug, Default)]
pub struct ConfigureResponse {
    /// Diagnostics raised while configuring.
    pub diagnostics: Diagnostics,
}

/// Create call carrying the planned configuration.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    /// Planned attribute values.
    pub plan: ResourceData,
}

/// Create result; `state` stays empty unless creation succeeded.
#[derive(Debug, Default)]
pub struct CreateResponse {
    /// New state.
    pub state: Option<ResourceData>,
    /// Diagnostics raised while creating.
    pub diagnostics: Diagnostics,
}

/// Read call carrying prior state.
#[derive(Debug, Clone, Default)]
pub struct ReadRequest {
    /// Prior state.
    pub state: ResourceData,
}

/// Read result; `state` is `None` when the object no longer exists remotely.
#[derive(Debug)]
pub struct ReadResponse {
    /// Refreshed state.
    pub state: Option<ResourceData>,
    /// Diagnostics raised while reading.
    pub diagnostics: Diagnostics,
}

/// Update call carrying the new plan and prior state.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    /// Planned attribute values.
    pub plan: ResourceData,
    /// Prior state.
    pub state: ResourceData,
}

/// Update result; `state` keeps the prior state on failure.
#[derive(Debug)]
pub struct UpdateResponse {
    /// New state.
    pub state: Option<ResourceData>,
    /// Diagnostics raised while updating.
    pub diagnostics: Diagnostics,
}

/// Delete call carrying prior state.
#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    /// Prior state.
    pub state: ResourceData,
}

/// Delete result; `state` is `None` once the object is gone.
#[derive(Debug)]
pub struct DeleteResponse {
    /// Remaining state.
    pub state: Option<ResourceData>,
    /// Diagnostics raised while deleting.
    pub diagnostics: Diagnostics,
}

/// Import call carrying an externally supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStateRequest {
    /// Remote identifier.
    pub id: String,
}

/// Import result.
#[derive(Debug, Default)]
pub struct ImportStateResponse {
    /// Imported state.
    pub state: Option<ResourceData>,
    /// Diagnostics raised while importing.
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    /// Starts a response that keeps the prior state unless changed.
    #[must_use]
    pub fn keeping(state: ResourceData) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }
}

impl UpdateResponse {
    /// Starts a response that keeps the prior state unless changed.
    #[must_use]
    pub fn keeping(state: ResourceData) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }
}

impl DeleteResponse {
    /// Starts a response that keeps the prior state unless removed.
    #[must_use]
    pub fn keeping(state: ResourceData) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Writes the import identifier verbatim into `attribute`.
#[must_use]
pub fn import_state_passthrough_id(
    attribute: &str,
    request: &ImportStateRequest,
) -> ImportStateResponse {
    let mut response = ImportStateResponse::default();
    if request.id.trim().is_empty() {
        response.diagnostics.add_error(
            "Missing Resource Import Identifier",
            format!("the import identifier for '{attribute}' must not be empty"),
        );
        return response;
    }

    let mut state = ResourceData::new();
    state.set_attribute(attribute, Value::String(request.id.clone()));
    response.state = Some(state);
    response
}
