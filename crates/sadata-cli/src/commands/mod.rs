//! Subcommands and the shared request runner.

pub mod get;
pub mod list;

use std::error::Error;
use std::path::Path;

use clap::ValueEnum;
use sadata_core::Resource;
use sadata_core_types::RequestContext;
use sadata_engine::{respond, InMemorySource, ResourceQuery};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{CliConfig, ConfigError};

/// Resource collections the CLI can query
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Schools,
    Hospitals,
}

impl ResourceKind {
    fn dataset<'a>(&self, config: &'a CliConfig) -> Result<&'a Path, ConfigError> {
        match self {
            ResourceKind::Schools => config.schools_path(),
            ResourceKind::Hospitals => config.hospitals_path(),
        }
    }
}

/// The request was answered with an error envelope
#[derive(Debug, Error)]
#[error("request failed with status {status}")]
pub struct RequestFailed {
    pub status: u16,
}

/// Load the dataset for `kind`, run `query` and print the JSON envelope
pub fn run(
    kind: ResourceKind,
    query: ResourceQuery,
    config: &CliConfig,
) -> Result<(), Box<dyn Error>> {
    let dataset = kind.dataset(config)?;
    match kind {
        ResourceKind::Schools => run_on::<sadata_core::model::School>(dataset, query),
        ResourceKind::Hospitals => run_on::<sadata_core::model::Hospital>(dataset, query),
    }
}

fn run_on<R>(dataset: &Path, query: ResourceQuery) -> Result<(), Box<dyn Error>>
where
    R: Resource + Clone + Serialize + DeserializeOwned,
{
    let source = InMemorySource::<R>::from_json(&std::fs::read_to_string(dataset)?)?;

    let ctx = RequestContext::new();
    let outcome = respond(&ctx, query, &source);
    tracing::debug!(
        request_id = %ctx.request_id,
        duration_ms = ctx.elapsed_ms(),
        ok = outcome.is_ok(),
        "request complete"
    );

    match outcome {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(error) => {
            println!("{}", serde_json::to_string_pretty(&error)?);
            Err(Box::new(RequestFailed {
                status: error.status().code(),
            }))
        }
    }
}
