//! Declared attribute to governance API field mappings.

use tracing::{debug, trace};
use warden_core::{AppError, AppResult, NonEmptyString};
use warden_domain::{ApprovalPolicy, MaxDuration, TargetArguments, TargetConstraint};

use crate::governance_ports::{AccessRuleDetail, AccessRuleRequestBody};

use super::model::AccessRuleModel;

type ToRemote = fn(&AccessRuleModel, &mut AccessRuleRequestBody) -> AppResult<()>;
type FromRemote = fn(&AccessRuleDetail, &mut AccessRuleModel);

/// One declared attribute, the remote field it maps to and its coercions.
pub(crate) struct FieldMapping {
    pub(crate) declared: &'static str,
    pub(crate) remote: &'static str,
    pub(crate) to_remote: Option<ToRemote>,
    pub(crate) from_remote: Option<FromRemote>,
}

/// Mappings applied in order. Duration comes first so an unparsable value is
/// the first error reported.
pub(crate) const ACCESS_RULE_FIELD_MAPPINGS: &[FieldMapping] = &[
    FieldMapping {
        declared: "duration",
        remote: "timeConstraints.maxDurationSeconds",
        to_remote: Some(duration_to_remote),
        from_remote: Some(duration_from_remote),
    },
    FieldMapping {
        declared: "name",
        remote: "name",
        to_remote: Some(name_to_remote),
        from_remote: Some(name_from_remote),
    },
    FieldMapping {
        declared: "description",
        remote: "description",
        to_remote: Some(description_to_remote),
        from_remote: Some(description_from_remote),
    },
    FieldMapping {
        declared: "groups",
        remote: "groups",
        to_remote: Some(groups_to_remote),
        from_remote: Some(groups_from_remote),
    },
    FieldMapping {
        declared: "approval",
        remote: "approval",
        to_remote: Some(approval_to_remote),
        from_remote: None,
    },
    FieldMapping {
        declared: "target_provider_id",
        remote: "target.providerId",
        to_remote: Some(target_provider_to_remote),
        from_remote: None,
    },
    FieldMapping {
        declared: "target",
        remote: "target.with",
        to_remote: Some(target_to_remote),
        from_remote: None,
    },
];

/// Builds a create or update body from a declared model.
pub(crate) fn build_request_body(model: &AccessRuleModel) -> AppResult<AccessRuleRequestBody> {
    let mut body = AccessRuleRequestBody::default();
    for mapping in ACCESS_RULE_FIELD_MAPPINGS {
        if let Some(to_remote) = mapping.to_remote {
            to_remote(model, &mut body).inspect_err(|error| {
                debug!(
                    attribute = mapping.declared,
                    remote_field = mapping.remote,
                    error = %error,
                    "failed to map declared attribute"
                );
            })?;
        }
    }

    Ok(body)
}

/// Overwrites the refreshable attributes of a model with remote values.
pub(crate) fn apply_remote_detail(detail: &AccessRuleDetail, model: &mut AccessRuleModel) {
    for mapping in ACCESS_RULE_FIELD_MAPPINGS {
        if let Some(from_remote) = mapping.from_remote {
            from_remote(detail, model);
            trace!(
                attribute = mapping.declared,
                remote_field = mapping.remote,
                "refreshed attribute from governance API"
            );
        }
    }
}

fn required<'a>(attribute: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    value.ok_or_else(|| missing(attribute))
}

fn missing(attribute: &str) -> AppError {
    AppError::Validation(format!("attribute '{attribute}' is required"))
}

fn duration_to_remote(model: &AccessRuleModel, body: &mut AccessRuleRequestBody) -> AppResult<()> {
    let duration = required("duration", model.duration.as_deref())?;
    body.time_constraints.max_duration_seconds = MaxDuration::parse(duration)?;
    Ok(())
}

fn duration_from_remote(detail: &AccessRuleDetail, model: &mut AccessRuleModel) {
    model.duration = Some(detail.time_constraints.max_duration_seconds.to_string());
}

fn name_to_remote(model: &AccessRuleModel, body: &mut AccessRuleRequestBody) -> AppResult<()> {
    let name = required("name", model.name.as_deref())?;
    body.name = NonEmptyString::for_attribute("name", name)?.into();
    Ok(())
}

fn name_from_remote(detail: &AccessRuleDetail, model: &mut AccessRuleModel) {
    model.name = Some(detail.name.clone());
}

fn description_to_remote(
    model: &AccessRuleModel,
    body: &mut AccessRuleRequestBody,
) -> AppResult<()> {
    body.description = required("description", model.description.as_deref())?.to_owned();
    Ok(())
}

fn description_from_remote(detail: &AccessRuleDetail, model: &mut AccessRuleModel) {
    model.description = Some(detail.description.clone());
}

fn groups_to_remote(model: &AccessRuleModel, body: &mut AccessRuleRequestBody) -> AppResult<()> {
    body.groups = model.groups.clone().ok_or_else(|| missing("groups"))?;
    Ok(())
}

fn groups_from_remote(detail: &AccessRuleDetail, model: &mut AccessRuleModel) {
    model.groups = Some(detail.groups.clone());
}

fn approval_to_remote(model: &AccessRuleModel, body: &mut AccessRuleRequestBody) -> AppResult<()> {
    let approval = model.approval.clone().unwrap_or_default();
    body.approval = ApprovalPolicy::new(
        approval.groups.unwrap_or_default(),
        approval.users.unwrap_or_default(),
    );
    Ok(())
}

fn target_provider_to_remote(
    model: &AccessRuleModel,
    body: &mut AccessRuleRequestBody,
) -> AppResult<()> {
    let provider_id = required("target_provider_id", model.target_provider_id.as_deref())?;
    body.target.provider_id =
        NonEmptyString::for_attribute("target_provider_id", provider_id)?.into();
    Ok(())
}

fn target_to_remote(model: &AccessRuleModel, body: &mut AccessRuleRequestBody) -> AppResult<()> {
    let items = model.target.as_deref().ok_or_else(|| missing("target"))?;
    let constraints = items
        .iter()
        .map(|item| TargetConstraint::new(item.field.clone(), item.value.clone()))
        .collect::<AppResult<Vec<_>>>()?;

    body.target
        .set_arguments(TargetArguments::from_constraints(constraints)?);
    Ok(())
}
