//! Command-line stand-in for the host orchestrator driving the access rule resource.

#![forbid(unsafe_code)]

mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use warden_application::{
    AccessRuleResource, ConfigureRequest, CreateRequest, DeleteRequest, DiagnosticSeverity,
    Diagnostics, GovernanceClient, ImportStateRequest, MetadataRequest, ProviderData, ReadRequest,
    Resource, ResourceData, UpdateRequest,
};
use warden_core::{AppError, AppResult};
use warden_infrastructure::ReqwestGovernanceTransport;

use crate::config::{HarnessConfig, provider_type_name};

#[derive(Debug, Parser)]
#[command(
    name = "warden-harness",
    about = "Drive the governance access rule resource through its lifecycle"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resource type name and schema.
    Schema,
    /// Create an access rule from a plan file.
    Create {
        /// JSON plan file.
        plan: PathBuf,
    },
    /// Refresh a state file from the governance API.
    Read {
        /// JSON state file.
        state: PathBuf,
    },
    /// Apply a changed plan to an existing access rule.
    Update {
        /// JSON plan file.
        plan: PathBuf,
        /// JSON prior state file.
        state: PathBuf,
    },
    /// Archive the access rule recorded in a state file.
    Delete {
        /// JSON state file.
        state: PathBuf,
    },
    /// Adopt an existing access rule by identifier.
    Import {
        /// Remote access rule identifier.
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let type_name = AccessRuleResource::new()
        .metadata(&MetadataRequest {
            provider_type_name: provider_type_name(),
        })
        .type_name;

    if matches!(cli.command, Command::Schema) {
        let schema = AccessRuleResource::new().schema();
        return print_json(&serde_json::json!({ "type_name": type_name, "schema": schema }));
    }

    let config = HarnessConfig::load()?;
    let resource = configured_resource(&config)?;
    info!(
        resource_type = %type_name,
        governance_api_url = %config.governance_api_url,
        "warden-harness started"
    );

    let (state, diagnostics) = match cli.command {
        Command::Schema => return Ok(()),
        Command::Create { plan } => {
            let plan = load_plan(&resource, plan.as_path())?;
            let response = resource.create(CreateRequest { plan }).await;
            (response.state, response.diagnostics)
        }
        Command::Read { state } => {
            let state = load_resource_data(state.as_path())?;
            let response = resource.read(ReadRequest { state }).await;
            (response.state, response.diagnostics)
        }
        Command::Update { plan, state } => {
            let plan = load_plan(&resource, plan.as_path())?;
            let state = load_resource_data(state.as_path())?;
            let response = resource.update(UpdateRequest { plan, state }).await;
            (response.state, response.diagnostics)
        }
        Command::Delete { state } => {
            let state = load_resource_data(state.as_path())?;
            let response = resource.delete(DeleteRequest { state }).await;
            (response.state, response.diagnostics)
        }
        Command::Import { id } => {
            let imported = resource.import_state(ImportStateRequest { id });
            match imported.state {
                Some(state) if !imported.diagnostics.has_error() => {
                    let response = resource.read(ReadRequest { state }).await;
                    let mut diagnostics = imported.diagnostics;
                    diagnostics.append(response.diagnostics);
                    (response.state, diagnostics)
                }
                state => (state, imported.diagnostics),
            }
        }
    };

    finish(state, &diagnostics)
}

fn configured_resource(config: &HarnessConfig) -> AppResult<AccessRuleResource> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;
    let transport = ReqwestGovernanceTransport::new(
        http_client,
        config.governance_api_url.clone(),
        config.governance_api_token.clone(),
    )?;

    let provider_data: ProviderData = Arc::new(GovernanceClient::new(Arc::new(transport)));
    let mut resource = AccessRuleResource::new();
    let response = resource.configure(ConfigureRequest {
        provider_data: Some(provider_data),
    });
    report(&response.diagnostics);
    if response.diagnostics.has_error() {
        return Err(AppError::Internal(
            "access rule resource rejected provider configuration".to_owned(),
        ));
    }

    Ok(resource)
}

fn load_plan(resource: &AccessRuleResource, path: &Path) -> AppResult<ResourceData> {
    let plan = load_resource_data(path)?;
    let diagnostics = resource.schema().validate(&plan.to_value());
    report(&diagnostics);
    if diagnostics.has_error() {
        return Err(AppError::Validation(format!(
            "plan '{}' does not match the access rule schema",
            path.display()
        )));
    }

    Ok(plan)
}

fn load_resource_data(path: &Path) -> AppResult<ResourceData> {
    let raw = fs::read_to_string(path).map_err(|error| {
        AppError::Validation(format!("failed to read '{}': {error}", path.display()))
    })?;
    let value = serde_json::from_str::<Value>(raw.as_str()).map_err(|error| {
        AppError::Validation(format!("failed to parse '{}': {error}", path.display()))
    })?;

    ResourceData::from_value(value)
}

fn finish(state: Option<ResourceData>, diagnostics: &Diagnostics) -> AppResult<()> {
    report(diagnostics);
    if diagnostics.has_error() {
        return Err(AppError::Internal(format!(
            "lifecycle call failed with {} diagnostic(s)",
            diagnostics.len()
        )));
    }

    match state {
        Some(state) => print_json(&state.to_value()),
        None => print_json(&Value::Null),
    }
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        match diagnostic.severity {
            DiagnosticSeverity::Error => warn!(
                severity = diagnostic.severity.as_str(),
                summary = %diagnostic.summary,
                detail = %diagnostic.detail,
                "lifecycle diagnostic"
            ),
            DiagnosticSeverity::Warning => info!(
                severity = diagnostic.severity.as_str(),
                summary = %diagnostic.summary,
                detail = %diagnostic.detail,
                "lifecycle diagnostic"
            ),
        }
    }
}

fn print_json(value: &Value) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|error| AppError::Internal(format!("failed to render output: {error}")))?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
