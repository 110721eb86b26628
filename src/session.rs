//! Session context: current user and targeted organization/space.
//!
//! A read-only view over the persisted configuration. Commands that need an
//! org or space target call `require_target` before doing any network work,
//! so an unmet prerequisite never costs a request.

use crate::config::StratoConfig;
use crate::error::CommandError;
use serde::{Deserialize, Serialize};

/// A targeted organization or space: the GUID the API needs plus the name
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    pub guid: String,
    pub name: String,
}

/// Ambient context for a single command invocation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    username: Option<String>,
    org: Option<TargetRef>,
    space: Option<TargetRef>,
}

impl Session {
    pub fn new(
        username: Option<String>,
        org: Option<TargetRef>,
        space: Option<TargetRef>,
    ) -> Self {
        Self {
            username,
            org,
            space,
        }
    }

    pub fn from_config(config: &StratoConfig) -> Self {
        Self {
            username: config.auth.username.clone(),
            org: config.target.org.clone(),
            space: config.target.space.clone(),
        }
    }

    /// The logged-in username, required by every command that talks to the API.
    pub fn current_user(&self) -> Result<&str, CommandError> {
        self.username.as_deref().ok_or(CommandError::NotLoggedIn)
    }

    /// Check the org/space prerequisites for a command.
    ///
    /// A space target is only meaningful inside an org target, so the org
    /// check runs first.
    pub fn require_target(&self, needs_org: bool, needs_space: bool) -> Result<(), CommandError> {
        if needs_org && self.org.is_none() {
            return Err(CommandError::NoOrganizationTargeted);
        }
        if needs_space && self.space.is_none() {
            return Err(CommandError::NoSpaceTargeted);
        }
        Ok(())
    }

    pub fn targeted_org(&self) -> Result<&TargetRef, CommandError> {
        self.org.as_ref().ok_or(CommandError::NoOrganizationTargeted)
    }

    pub fn targeted_space(&self) -> Result<&TargetRef, CommandError> {
        self.space.as_ref().ok_or(CommandError::NoSpaceTargeted)
    }
}
