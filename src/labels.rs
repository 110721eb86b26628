//! Label Retrieval
//!
//! Capability interface for reading the key/value labels attached to
//! platform resources, plus the request/dispatch/presentation pipeline of
//! the `labels` command. One retrieval method exists per resource kind
//! because the kinds genuinely differ in the context they need (space or
//! org GUID, stack, broker, offering).

use crate::error::ApiError;
use async_trait::async_trait;
use std::collections::HashMap;

pub mod display;
pub mod query;
pub mod service;

pub use query::LabelsQuery;

/// Labels attached to a single resource. Values are tri-state: present
/// with a value, present and empty, or null.
pub type LabelMap = HashMap<String, Option<String>>;

/// Ordered advisory messages accompanying a retrieval call. Warnings are
/// surfaced to the user whether or not the call also fails; they are a
/// channel independent of the error.
#[derive(Debug, Default, Clone)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = String>) {
        self.0.extend(warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Retrieval backend capability: one method per resource kind.
///
/// Each method takes the resource name plus the kind-specific context and a
/// warnings sink, and returns the labels of the single matching resource.
/// Implementations must not print; presentation belongs to the caller.
#[async_trait]
pub trait LabelSource: Send + Sync {
    async fn app_labels(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn buildpack_labels(
        &self,
        name: &str,
        stack: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn domain_labels(&self, name: &str, warnings: &mut Warnings)
        -> Result<LabelMap, ApiError>;

    async fn org_labels(&self, name: &str, warnings: &mut Warnings) -> Result<LabelMap, ApiError>;

    async fn route_labels(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn space_labels(
        &self,
        name: &str,
        org_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn stack_labels(&self, name: &str, warnings: &mut Warnings)
        -> Result<LabelMap, ApiError>;

    async fn service_broker_labels(
        &self,
        name: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn service_offering_labels(
        &self,
        name: &str,
        broker: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;

    async fn service_plan_labels(
        &self,
        name: &str,
        offering: Option<&str>,
        broker: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError>;
}
