//! Get command
//!
//! Usage: sadata get <RESOURCE> <ID>

use clap::Args;
use sadata_engine::ResourceQuery;

use super::{run, ResourceKind};
use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Resource collection to read from
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Client-facing id (school id or hospital id)
    pub id: String,
}

/// Execute get command
pub fn execute(args: GetArgs, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    run(args.resource, ResourceQuery::Get { id: args.id }, config)
}
