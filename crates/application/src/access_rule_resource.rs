mod mapping;
mod model;
mod schema;


pub use model::{AccessRuleModel, ApprovalModel, TargetModel};

use async_trait::async_trait;
use http::StatusCode;
use tracing::{info, warn};
use warden_core::AppError;

use crate::governance_ports::GovernanceClient;
use crate::plugin_protocol::{
    ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, Diagnostic, ImportStateRequest, ImportStateResponse, MetadataRequest,
    MetadataResponse, ReadRequest, ReadResponse, Resource, ResourceData, Schema, UpdateRequest,
    UpdateResponse, import_state_passthrough_id,
};

use self::mapping::{apply_remote_detail, build_request_body};

/// Resource type suffix appended to the provider type name.
pub const ACCESS_RULE_TYPE_SUFFIX: &str = "_access_rule";

const DEVELOPER_HINT: &str = "Please report this issue to the provider developers.";

/// Governance access rule resource handler.
///
/// Holds nothing but the client handle received in `configure`; plan and
/// state live with the host.
#[derive(Clone, Default)]
pub struct AccessRuleResource {
    client: Option<GovernanceClient>,
}

impl AccessRuleResource {
    /// Creates an unconfigured handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn require_client(&self) -> Result<&GovernanceClient, Diagnostic> {
        self.client.as_ref().ok_or_else(|| {
            Diagnostic::error(
                "Unconfigured HTTP Client",
                format!("Expected configured HTTP client. {DEVELOPER_HINT}"),
            )
        })
    }

    async fn create_rule(&self, plan: &ResourceData) -> Result<ResourceData, Diagnostic> {
        let client = self.require_client()?;
        let mut model = plan
            .get::<AccessRuleModel>()
            .map_err(|error| Diagnostic::from_app_error("Unable to Create Resource", &error))?;

        let body = build_request_body(&model).map_err(|error| {
            Diagnostic::from_app_error("Invalid Access Rule Configuration", &error)
        })?;

        let response = client.create_access_rule(&body).await.map_err(|error| {
            Diagnostic::error(
                "Unable to Create Resource",
                format!(
                    "An unexpected error occurred while creating the access rule. \
                     {DEVELOPER_HINT}\n\nError: {error}"
                ),
            )
        })?;

        let created = match response.payload() {
            Some(Ok(created)) => created,
            Some(Err(error)) => {
                return Err(Diagnostic::from_app_error("Unable to Create Resource", &error));
            }
            None => {
                warn!(
                    status = response.status.as_u16(),
                    name = %body.name,
                    "governance API rejected access rule creation"
                );
                return Err(Diagnostic::error(
                    "Unable to Create Resource",
                    format!(
                        "The governance API did not return a created access rule. \
                         {DEVELOPER_HINT}\n\nHTTP Status: {}",
                        response.status_line()
                    ),
                ));
            }
        };

        info!(rule_id = %created.id, name = %body.name, "access rule created");
        model.id = Some(created.id);
        encode_state(&model)
    }

    async fn refresh_rule(&self, prior: &ResourceData) -> Result<Option<ResourceData>, Diagnostic> {
        let client = self.require_client()?;
        let mut state = prior
            .get::<AccessRuleModel>()
            .map_err(|error| Diagnostic::from_app_error("Unable to Read access rule", &error))?;
        let rule_id = required_rule_id(&state, "Unable to Read access rule")?;

        let response = client
            .get_access_rule(rule_id.as_str())
            .await
            .map_err(|error| Diagnostic::from_app_error("Unable to Read access rule", &error))?;

        // Not found must be checked before the generic non-success branch.
        if response.status == StatusCode::NOT_FOUND {
            warn!(rule_id = %rule_id, "access rule no longer exists, removing from state");
            return Ok(None);
        }

        let detail = match response.payload() {
            Some(Ok(detail)) => detail,
            Some(Err(error)) => {
                return Err(Diagnostic::from_app_error("Unable to Refresh Resource", &error));
            }
            None => {
                return Err(Diagnostic::error(
                    "Unable to Refresh Resource",
                    format!(
                        "An unexpected error occurred while attempting to refresh resource \
                         state. Please retry the operation or report this issue to the \
                         provider developers.\n\nHTTP Status: {}",
                        response.status_line()
                    ),
                ));
            }
        };

        apply_remote_detail(&detail, &mut state);
        encode_state(&state).map(Some)
    }

    async fn update_rule(
        &self,
        plan: &ResourceData,
        prior: &ResourceData,
    ) -> Result<ResourceData, Diagnostic> {
        let client = self.require_client()?;
        let mut model = plan
            .get::<AccessRuleModel>()
            .map_err(|error| Diagnostic::from_app_error("Unable to Update Resource", &error))?;
        let prior_state = prior
            .get::<AccessRuleModel>()
            .map_err(|error| Diagnostic::from_app_error("Unable to Update Resource", &error))?;
        let rule_id = required_rule_id(&prior_state, "Unable to Update Resource")?;

        let body = build_request_body(&model).map_err(|error| {
            Diagnostic::from_app_error("Invalid Access Rule Configuration", &error)
        })?;

        let response = client
            .update_access_rule(rule_id.as_str(), &body)
            .await
            .map_err(|error| {
                Diagnostic::error(
                    "Unable to Update Resource",
                    format!(
                        "An unexpected error occurred while updating the access rule. \
                         {DEVELOPER_HINT}\n\nError: {error}"
                    ),
                )
            })?;

        if !response.is_success() {
            return Err(Diagnostic::error(
                "Unable to Update Resource",
                format!(
                    "The governance API did not accept the access rule update.\n\nHTTP Status: {}",
                    response.status_line()
                ),
            ));
        }

        info!(rule_id = %rule_id, "access rule updated");
        model.id = Some(rule_id);
        encode_state(&model)
    }

    /// Archives the rule, returning a warning when it was already gone.
    async fn archive_rule(&self, prior: &ResourceData) -> Result<Option<Diagnostic>, Diagnostic> {
        let client = self.require_client()?;
        let state = prior
            .get::<AccessRuleModel>()
            .map_err(|error| Diagnostic::from_app_error("Unable to Delete Resource", &error))?;
        let rule_id = required_rule_id(&state, "Unable to Delete Resource")?;

        let response = client
            .archive_access_rule(rule_id.as_str())
            .await
            .map_err(|error| {
                Diagnostic::error(
                    "Unable to Delete Resource",
                    format!(
                        "An unexpected error occurred while archiving the access rule. \
                         {DEVELOPER_HINT}\n\nError: {error}"
                    ),
                )
            })?;

        if response.status == StatusCode::NOT_FOUND {
            warn!(rule_id = %rule_id, "access rule already absent, treating as archived");
            return Ok(Some(Diagnostic::warning(
                "Access Rule Already Archived",
                format!(
                    "The governance API has no access rule '{rule_id}'; \
                     it is removed from state."
                ),
            )));
        }

        if !response.is_success() {
            return Err(Diagnostic::error(
                "Unable to Delete Resource",
                format!(
                    "The governance API did not archive the access rule.\n\nHTTP Status: {}",
                    response.status_line()
                ),
            ));
        }

        info!(rule_id = %rule_id, "access rule archived");
        Ok(None)
    }
}

#[async_trait]
impl Resource for AccessRuleResource {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: format!("{}{ACCESS_RULE_TYPE_SUFFIX}", request.provider_type_name),
        }
    }

    fn schema(&self) -> Schema {
        schema::access_rule_schema()
    }

    fn configure(&mut self, request: ConfigureRequest) -> ConfigureResponse {
        let mut response = ConfigureResponse::default();
        let Some(provider_data) = request.provider_data else {
            return response;
        };

        match (*provider_data).downcast_ref::<GovernanceClient>() {
            Some(client) => self.client = Some(client.clone()),
            None => response.diagnostics.add_error(
                "Unexpected Resource Configure Type",
                format!("Expected a governance API client as provider data. {DEVELOPER_HINT}"),
            ),
        }

        response
    }

    async fn create(&self, request: CreateRequest) -> CreateResponse {
        let mut response = CreateResponse::default();
        match self.create_rule(&request.plan).await {
            Ok(state) => response.state = Some(state),
            Err(diagnostic) => response.diagnostics.push(diagnostic),
        }

        response
    }

    async fn read(&self, request: ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::keeping(request.state.clone());
        match self.refresh_rule(&request.state).await {
            Ok(state) => response.state = state,
            Err(diagnostic) => response.diagnostics.push(diagnostic),
        }

        response
    }

    async fn update(&self, request: UpdateRequest) -> UpdateResponse {
        let mut response = UpdateResponse::keeping(request.state.clone());
        match self.update_rule(&request.plan, &request.state).await {
            Ok(state) => response.state = Some(state),
            Err(diagnostic) => response.diagnostics.push(diagnostic),
        }

        response
    }

    async fn delete(&self, request: DeleteRequest) -> DeleteResponse {
        let mut response = DeleteResponse::keeping(request.state.clone());
        match self.archive_rule(&request.state).await {
            Ok(warning) => {
                response.state = None;
                if let Some(warning) = warning {
                    response.diagnostics.push(warning);
                }
            }
            Err(diagnostic) => response.diagnostics.push(diagnostic),
        }

        response
    }

    fn import_state(&self, request: ImportStateRequest) -> ImportStateResponse {
        import_state_passthrough_id("id", &request)
    }
}

fn required_rule_id(model: &AccessRuleModel, summary: &str) -> Result<String, Diagnostic> {
    model.rule_id().map(str::to_owned).ok_or_else(|| {
        Diagnostic::from_app_error(
            summary,
            &AppError::Validation("state does not contain an access rule id".to_owned()),
        )
    })
}

fn encode_state(model: &AccessRuleModel) -> Result<ResourceData, Diagnostic> {
    ResourceData::from_model(model)
        .map_err(|error| Diagnostic::from_app_error("Unable to Save Resource State", &error))
}
