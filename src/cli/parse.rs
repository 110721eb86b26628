//! CLI parse: clap types for Strato. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strato CLI - query labels on cloud platform resources
#[derive(Parser)]
#[command(name = "strato")]
#[command(about = "Query labels on cloud platform resources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the labels attached to a resource
    #[command(after_help = "RESOURCES:\n  app\n  buildpack\n  domain\n  org\n  route\n  service-broker\n  service-offering\n  service-plan\n  space\n  stack\n\nEXAMPLES:\n  strato labels app dora\n  strato labels org business\n  strato labels buildpack go_buildpack --stack cflinuxfs4")]
    Labels {
        /// Resource type
        resource_type: String,

        /// Resource name
        resource_name: String,

        /// Specify stack to disambiguate buildpacks with the same name
        #[arg(long, short = 's')]
        stack: Option<String>,

        /// Specify a service broker to disambiguate service offerings or service plans with the same name
        #[arg(long, short = 'b')]
        broker: Option<String>,

        /// Specify a service offering to disambiguate service plans with the same name
        #[arg(long, short = 'e')]
        offering: Option<String>,
    },
    /// Show or change the targeted organization and space
    Target {
        /// Organization to target
        #[arg(long, short = 'o')]
        org: Option<String>,

        /// Space to target (requires a targeted organization)
        #[arg(long, short = 's')]
        space: Option<String>,
    },
    /// Store credentials for the platform API
    Auth {
        /// Username shown in command output
        username: String,

        /// Bearer token passed to the platform API
        token: String,
    },
}
