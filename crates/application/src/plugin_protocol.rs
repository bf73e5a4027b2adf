mod diagnostics;
mod lifecycle;
mod resource_data;
mod schema;

pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use lifecycle::{
    ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, ImportStateRequest, ImportStateResponse, MetadataRequest, MetadataResponse,
    ProviderData, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
    import_state_passthrough_id,
};
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeKind, ElementType, Schema};

use async_trait::async_trait;

/// Lifecycle contract a managed resource exposes to the host orchestrator.
///
/// The host serializes calls per managed record and may run calls for
/// different records concurrently, so every lifecycle method takes `&self`.
/// Only `configure` mutates the handler, once, before any lifecycle call.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Returns the resource type name for the given provider.
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    /// Declares the configuration shape the host validates against.
    fn schema(&self) -> Schema;

    /// Receives provider-level data such as the configured API client.
    fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse;

    /// Creates the remote object described by the plan.
    async fn create(&self, request: CreateRequest) -> CreateResponse;

    /// Refreshes state from the remote object.
    async fn read(&self, request: ReadRequest) -> ReadResponse;

    /// Applies a changed plan to an existing remote object.
    async fn update(&self, request: UpdateRequest) -> UpdateResponse;

    /// Removes the remote object.
    async fn delete(&self, request: DeleteRequest) -> DeleteResponse;

    /// Adopts an existing remote object into state.
    fn import_state(&self, request: ImportStateRequest) -> ImportStateResponse;
}
