//! Platform API Client
//!
//! `reqwest`-backed implementation of the label retrieval capability
//! against the platform controller's v3-style list endpoints. Each lookup
//! filters a list endpoint by name (plus kind-specific filters), takes the
//! first matching resource, and reads its `metadata.labels`. Advisory
//! warnings arrive in the `X-Platform-Warnings` response header and are
//! collected whether or not the request succeeds.

use crate::config::StratoConfig;
use crate::error::{ApiError, ConfigError};
use crate::labels::{LabelMap, LabelSource, Warnings};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

/// Response header carrying advisory warnings from the platform.
pub const WARNINGS_HEADER: &str = "X-Platform-Warnings";

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the platform controller API.
pub struct PlatformClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

/// A platform resource as returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRecord {
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub labels: LabelMap,
}

#[derive(Deserialize)]
struct ListEnvelope {
    resources: Vec<ResourceRecord>,
}

impl PlatformClient {
    pub fn from_config(config: &StratoConfig) -> Result<Self, ConfigError> {
        let base_url = config.api.endpoint()?.trim_end_matches('/').to_string();
        let http = Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::Load(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token: config.auth.token.clone(),
        })
    }

    /// Resolve an organization by name (used by the `target` command).
    pub async fn organization_by_name(
        &self,
        name: &str,
        warnings: &mut Warnings,
    ) -> Result<ResourceRecord, ApiError> {
        self.first_matching(
            "Organization",
            name,
            "/v3/organizations",
            &[("names", name)],
            warnings,
        )
        .await
    }

    /// Resolve a space by name within an organization (used by `target`).
    pub async fn space_by_name(
        &self,
        name: &str,
        org_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<ResourceRecord, ApiError> {
        self.first_matching(
            "Space",
            name,
            "/v3/spaces",
            &[("names", name), ("organization_guids", org_guid)],
            warnings,
        )
        .await
    }

    async fn first_matching(
        &self,
        kind: &str,
        name: &str,
        path: &str,
        filters: &[(&str, &str)],
        warnings: &mut Warnings,
    ) -> Result<ResourceRecord, ApiError> {
        let resources = self.list(path, filters, warnings).await?;
        resources
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::ResourceNotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            })
    }

    async fn list(
        &self,
        path: &str,
        filters: &[(&str, &str)],
        warnings: &mut Warnings,
    ) -> Result<Vec<ResourceRecord>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "platform API request");

        let mut request = self.http.get(&url).query(filters);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_http_error)?;
        collect_warnings(&response, warnings);

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 | 403 => ApiError::AuthFailed(body),
                429 => ApiError::RateLimited(body),
                _ => ApiError::RequestFailed {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let envelope: ListEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Ok(envelope.resources)
    }
}

#[async_trait]
impl LabelSource for PlatformClient {
    async fn app_labels(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.first_matching(
            "App",
            name,
            "/v3/apps",
            &[("names", name), ("space_guids", space_guid)],
            warnings,
        )
        .await
        .map(|resource| resource.metadata.labels)
    }

    async fn buildpack_labels(
        &self,
        name: &str,
        stack: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        let mut filters = vec![("names", name)];
        if let Some(stack) = stack {
            filters.push(("stacks", stack));
        }
        self.first_matching("Buildpack", name, "/v3/buildpacks", &filters, warnings)
            .await
            .map(|resource| resource.metadata.labels)
    }

    async fn domain_labels(
        &self,
        name: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.first_matching("Domain", name, "/v3/domains", &[("names", name)], warnings)
            .await
            .map(|resource| resource.metadata.labels)
    }

    async fn org_labels(&self, name: &str, warnings: &mut Warnings) -> Result<LabelMap, ApiError> {
        self.organization_by_name(name, warnings)
            .await
            .map(|resource| resource.metadata.labels)
    }

    async fn route_labels(
        &self,
        name: &str,
        space_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.first_matching(
            "Route",
            name,
            "/v3/routes",
            &[("names", name), ("space_guids", space_guid)],
            warnings,
        )
        .await
        .map(|resource| resource.metadata.labels)
    }

    async fn space_labels(
        &self,
        name: &str,
        org_guid: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.space_by_name(name, org_guid, warnings)
            .await
            .map(|resource| resource.metadata.labels)
    }

    async fn stack_labels(
        &self,
        name: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.first_matching("Stack", name, "/v3/stacks", &[("names", name)], warnings)
            .await
            .map(|resource| resource.metadata.labels)
    }

    async fn service_broker_labels(
        &self,
        name: &str,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        self.first_matching(
            "Service broker",
            name,
            "/v3/service_brokers",
            &[("names", name)],
            warnings,
        )
        .await
        .map(|resource| resource.metadata.labels)
    }

    async fn service_offering_labels(
        &self,
        name: &str,
        broker: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        let mut filters = vec![("names", name)];
        if let Some(broker) = broker {
            filters.push(("service_broker_names", broker));
        }
        self.first_matching(
            "Service offering",
            name,
            "/v3/service_offerings",
            &filters,
            warnings,
        )
        .await
        .map(|resource| resource.metadata.labels)
    }

    async fn service_plan_labels(
        &self,
        name: &str,
        offering: Option<&str>,
        broker: Option<&str>,
        warnings: &mut Warnings,
    ) -> Result<LabelMap, ApiError> {
        let mut filters = vec![("names", name)];
        if let Some(offering) = offering {
            filters.push(("service_offering_names", offering));
        }
        if let Some(broker) = broker {
            filters.push(("service_broker_names", broker));
        }
        self.first_matching(
            "Service plan",
            name,
            "/v3/service_plans",
            &filters,
            warnings,
        )
        .await
        .map(|resource| resource.metadata.labels)
    }
}

fn collect_warnings(response: &Response, warnings: &mut Warnings) {
    for value in response.headers().get_all(WARNINGS_HEADER) {
        if let Ok(raw) = value.to_str() {
            warnings.extend(parse_warnings(raw));
        }
    }
}

/// Split a warnings header value into individual advisories.
fn parse_warnings(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|warning| !warning.is_empty())
        .map(String::from)
        .collect()
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::Transport(format!("Connection error: {}", error))
    } else {
        ApiError::Transport(error.to_string())
    }
}
