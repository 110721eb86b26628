//! Error types for the Strato command-line client.

use thiserror::Error;

/// Platform API errors reported by the retrieval backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{kind} '{name}' not found")]
    ResourceNotFound { kind: String, name: String },

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response from the platform API: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Configuration load/store errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Failed to write configuration: {0}")]
    Write(String),

    #[error("Configuration directory could not be determined")]
    NoConfigDir,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("No API endpoint configured. Set api.url in the configuration file")]
    NoApiEndpoint,
}

/// Command-surface errors. Everything the binary can report maps onto one
/// of these; none are retried internally.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The following arguments cannot be used together: {resource}, {flag}")]
    ArgumentCombination {
        resource: String,
        flag: &'static str,
    },

    #[error("Unsupported resource type of '{0}'")]
    UnsupportedResourceType(String),

    #[error("Not logged in. Use 'strato auth USERNAME TOKEN' to store credentials")]
    NotLoggedIn,

    #[error("No organization targeted. Use 'strato target -o ORG' to target an organization")]
    NoOrganizationTargeted,

    #[error("No space targeted. Use 'strato target -s SPACE' to target a space")]
    NoSpaceTargeted,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Runtime error: {0}")]
    Runtime(String),
}
