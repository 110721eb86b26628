//! CLI domain: parse, route, and output mapping only.
//! No domain orchestration; a single route table dispatches to services.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
