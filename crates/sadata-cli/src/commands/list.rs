//! List command
//!
//! Usage: sadata list <RESOURCE> [QUERY]
//!
//! `QUERY` is a raw query string, e.g.
//! `maxResults=10&filter-key-1=province&filter-key-1-value=Gauteng`.

use clap::Args;
use sadata_core::QueryParams;
use sadata_engine::ResourceQuery;

use super::{run, ResourceKind};
use crate::config::CliConfig;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Resource collection to list
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// URL-encoded query string (a leading `?` is ignored)
    #[arg(default_value = "")]
    pub query: String,
}

/// Execute list command
pub fn execute(args: ListArgs, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let params = QueryParams::parse(&args.query);
    run(args.resource, ResourceQuery::List(params), config)
}
