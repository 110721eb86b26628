//! CLI route: single route table and run context. Dispatches to domain
//! services and owns the config read/write cycle.

use crate::cli::parse::Commands;
use crate::client::PlatformClient;
use crate::config::{ConfigLoader, StratoConfig};
use crate::error::CommandError;
use crate::labels::{self, LabelsQuery, Warnings};
use crate::output::{OutputSink, StdoutSink};
use crate::session::{Session, TargetRef};
use std::path::PathBuf;

/// Runtime context for CLI execution: loaded configuration and its origin.
pub struct RunContext {
    config: StratoConfig,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Create a run context from an optional explicit config path.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, CommandError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &StratoConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&mut self, command: &Commands) -> Result<(), CommandError> {
        let mut sink = StdoutSink::default();
        match command {
            Commands::Labels {
                resource_type,
                resource_name,
                stack,
                broker,
                offering,
            } => {
                let query = LabelsQuery {
                    resource_type: resource_type.clone(),
                    resource_name: resource_name.clone(),
                    stack: stack.clone(),
                    broker: broker.clone(),
                    offering: offering.clone(),
                };
                self.handle_labels(&query, &mut sink)
            }
            Commands::Target { org, space } => {
                self.handle_target(org.as_deref(), space.as_deref(), &mut sink)
            }
            Commands::Auth { username, token } => self.handle_auth(username, token, &mut sink),
        }
    }

    fn handle_labels(
        &self,
        query: &LabelsQuery,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        let session = Session::from_config(&self.config);
        let client = PlatformClient::from_config(&self.config)?;
        let rt = runtime()?;
        rt.block_on(labels::service::run(query, &session, &client, sink))
    }

    fn handle_target(
        &mut self,
        org: Option<&str>,
        space: Option<&str>,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        if org.is_none() && space.is_none() {
            self.show_target(sink);
            return Ok(());
        }

        let client = PlatformClient::from_config(&self.config)?;
        let rt = runtime()?;
        let mut warnings = Warnings::new();

        let resolved: Result<(), CommandError> = rt.block_on(async {
            if let Some(org_name) = org {
                let record = client.organization_by_name(org_name, &mut warnings).await?;
                self.config.target.org = Some(TargetRef {
                    guid: record.guid,
                    name: record.name,
                });
                // Any previously targeted space belonged to the old org.
                self.config.target.space = None;
            }
            if let Some(space_name) = space {
                let org = self
                    .config
                    .target
                    .org
                    .clone()
                    .ok_or(CommandError::NoOrganizationTargeted)?;
                let record = client
                    .space_by_name(space_name, &org.guid, &mut warnings)
                    .await?;
                self.config.target.space = Some(TargetRef {
                    guid: record.guid,
                    name: record.name,
                });
            }
            Ok(())
        });

        sink.warnings(&warnings);
        resolved?;

        ConfigLoader::save(&self.config, self.config_path.as_deref())?;
        self.show_target(sink);
        Ok(())
    }

    fn show_target(&self, sink: &mut dyn OutputSink) {
        let endpoint = self.config.api.url.as_deref().unwrap_or("(not set)");
        sink.text(&format!("API endpoint:   {}", endpoint));

        let user = self
            .config
            .auth
            .username
            .as_deref()
            .unwrap_or("(not logged in)");
        sink.text(&format!("User:           {}", user));

        match &self.config.target.org {
            Some(org) => sink.text(&format!("Org:            {}", org.name)),
            None => sink.text("No org targeted, use 'strato target -o ORG'"),
        }
        match &self.config.target.space {
            Some(space) => sink.text(&format!("Space:          {}", space.name)),
            None => sink.text("No space targeted, use 'strato target -s SPACE'"),
        }
    }

    fn handle_auth(
        &mut self,
        username: &str,
        token: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        self.config.auth.username = Some(username.to_string());
        self.config.auth.token = Some(token.to_string());
        let path = ConfigLoader::save(&self.config, self.config_path.as_deref())?;
        sink.text(&format!(
            "Credentials stored for {} in {}",
            username,
            path.display()
        ));
        Ok(())
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, CommandError> {
    tokio::runtime::Runtime::new().map_err(|e| CommandError::Runtime(e.to_string()))
}
