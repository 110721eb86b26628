//! Labels dispatch: validation, target check, retrieval, rendering.
//!
//! The command executes sequentially: username resolution, flag
//! validation, target check, exactly one retrieval call, warning
//! surfacing, rendering. Warnings are displayed whether or not retrieval
//! failed; on failure no table is rendered.

use super::display;
use super::{LabelMap, LabelSource, LabelsQuery, Warnings};
use crate::error::CommandError;
use crate::output::OutputSink;
use crate::resource::{ResourceKind, TargetRequirement};
use crate::session::Session;

/// Notice shown instead of a table when the resource has no labels.
pub const NO_LABELS_NOTICE: &str = "No labels found.";

/// Header of the labels table.
pub const TABLE_HEADER: [&str; 2] = ["key", "value"];

/// Run a labels query end to end against the given retrieval backend.
pub async fn run(
    query: &LabelsQuery,
    session: &Session,
    source: &dyn LabelSource,
    sink: &mut dyn OutputSink,
) -> Result<(), CommandError> {
    let username = session.current_user()?.to_string();
    query.validate()?;

    let kind = query.kind();
    let (needs_org, needs_space) = kind
        .map(ResourceKind::target_requirement)
        .unwrap_or(TargetRequirement::None)
        .flags();
    session.require_target(needs_org, needs_space)?;

    tracing::debug!(
        resource_type = %query.resource_type,
        resource_name = %query.resource_name,
        "dispatching labels query"
    );

    let mut warnings = Warnings::new();
    let fetched = dispatch(query, kind, session, source, sink, &username, &mut warnings).await;
    sink.warnings(&warnings);
    let labels = fetched?;

    render(sink, &labels);
    Ok(())
}

/// Emit the kind-specific progress message, then invoke exactly one
/// retrieval method. The unsupported sentinel produces the formatted error
/// without touching the backend.
async fn dispatch(
    query: &LabelsQuery,
    kind: Option<ResourceKind>,
    session: &Session,
    source: &dyn LabelSource,
    sink: &mut dyn OutputSink,
    username: &str,
    warnings: &mut Warnings,
) -> Result<LabelMap, CommandError> {
    let Some(kind) = kind else {
        return Err(CommandError::UnsupportedResourceType(
            query.resource_type.clone(),
        ));
    };

    let raw = query.resource_type.as_str();
    let name = query.resource_name.as_str();

    let labels = match kind {
        ResourceKind::App => {
            let org = session.targeted_org()?;
            let space = session.targeted_space()?;
            progress(
                sink,
                display::org_space_message(raw, name, &org.name, &space.name, username),
            );
            source.app_labels(name, &space.guid, warnings).await?
        }
        ResourceKind::Buildpack => {
            progress(
                sink,
                display::buildpack_message(raw, name, query.stack(), username),
            );
            source.buildpack_labels(name, query.stack(), warnings).await?
        }
        ResourceKind::Domain => {
            progress(sink, display::default_message(raw, name, username));
            source.domain_labels(name, warnings).await?
        }
        ResourceKind::Org => {
            progress(sink, display::default_message(raw, name, username));
            source.org_labels(name, warnings).await?
        }
        ResourceKind::Route => {
            let org = session.targeted_org()?;
            let space = session.targeted_space()?;
            progress(
                sink,
                display::org_space_message(raw, name, &org.name, &space.name, username),
            );
            source.route_labels(name, &space.guid, warnings).await?
        }
        ResourceKind::Space => {
            let org = session.targeted_org()?;
            progress(sink, display::org_message(raw, name, &org.name, username));
            source.space_labels(name, &org.guid, warnings).await?
        }
        ResourceKind::Stack => {
            progress(sink, display::default_message(raw, name, username));
            source.stack_labels(name, warnings).await?
        }
        ResourceKind::ServiceBroker => {
            progress(sink, display::default_message(raw, name, username));
            source.service_broker_labels(name, warnings).await?
        }
        ResourceKind::ServiceOffering => {
            progress(
                sink,
                display::service_message(raw, name, query.offering(), query.broker(), username),
            );
            source
                .service_offering_labels(name, query.broker(), warnings)
                .await?
        }
        ResourceKind::ServicePlan => {
            progress(
                sink,
                display::service_message(raw, name, query.offering(), query.broker(), username),
            );
            source
                .service_plan_labels(name, query.offering(), query.broker(), warnings)
                .await?
        }
    };

    Ok(labels)
}

fn progress(sink: &mut dyn OutputSink, message: String) {
    sink.text(&message);
    sink.blank();
}

fn render(sink: &mut dyn OutputSink, labels: &LabelMap) {
    if labels.is_empty() {
        sink.text(NO_LABELS_NOTICE);
        return;
    }
    sink.table(&TABLE_HEADER, &display::label_rows(labels));
}
