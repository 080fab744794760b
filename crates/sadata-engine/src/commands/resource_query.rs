//! Resource request surface.
//!
//! `apply_resource_query` is the single entry point for list and get
//! requests against one resource collection. It validates the raw
//! parameters, checks filter names before any data is fetched, picks the
//! fetch strategy and applies filters to what comes back.

use std::time::Instant;

use sadata_core::errors::{QueryError, Result};
use sadata_core::filter::{apply_filters, validate_filter_keys};
use sadata_core::pagination::{self, Page};
use sadata_core::query::params::MAX_RESULTS_KEY;
use sadata_core::{log_op_end, log_op_error, log_op_start};
use sadata_core::{DataSource, ErrorResponse, Query, QueryParams, Resource, Response};
use sadata_core_types::RequestContext;

/// Requests supported by the engine.
#[derive(Debug, Clone)]
pub enum ResourceQuery {
    /// List records matching the raw query parameters.
    List(QueryParams),
    /// Get one record by its client-facing id.
    Get { id: String },
}

/// Run `query` against `source`.
///
/// # Errors
///
/// Any validation failure, `RESOURCE_ID_MALFORMED` / `RESOURCE_NOT_FOUND` for
/// get requests, and source failures. Errors carry the operation name and
/// the request id.
pub fn apply_resource_query<R, S>(
    ctx: &RequestContext,
    query: ResourceQuery,
    source: &S,
) -> Result<Page<R>>
where
    R: Resource,
    S: DataSource<R>,
{
    let request_id = ctx.request_id.as_str();

    let (op, result) = match query {
        ResourceQuery::List(params) => {
            log_op_start!(
                "list_resources",
                request_id = request_id,
                resource = R::RESOURCE_TAG,
                param_count = params.len()
            );
            let start = Instant::now();

            let result = list_resources(&params, source);

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(page) => {
                    log_op_end!(
                        "list_resources",
                        duration_ms = elapsed,
                        request_id = request_id,
                        result_len = page.data.len(),
                        has_more = page.has_more()
                    );
                }
                Err(e) => {
                    log_op_error!("list_resources", e.clone(), duration_ms = elapsed, request_id = request_id);
                }
            }
            ("list_resources", result)
        }

        ResourceQuery::Get { id } => {
            log_op_start!(
                "get_resource",
                request_id = request_id,
                resource = R::RESOURCE_TAG,
                resource_id = id.as_str()
            );
            let start = Instant::now();

            let result = get_resource(&id, source);

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => {
                    log_op_end!("get_resource", duration_ms = elapsed, request_id = request_id);
                }
                Err(e) => {
                    log_op_error!("get_resource", e.clone(), duration_ms = elapsed, request_id = request_id);
                }
            }
            ("get_resource", result)
        }
    };

    result.map_err(|e| e.with_op(op).with_request_id(ctx.request_id.clone()))
}

/// Run `query` and wrap the outcome in the client-facing envelope.
///
/// # Errors
///
/// The [`ErrorResponse`] for any failure of [`apply_resource_query`].
pub fn respond<R, S>(
    ctx: &RequestContext,
    query: ResourceQuery,
    source: &S,
) -> std::result::Result<Response<R>, ErrorResponse>
where
    R: Resource,
    S: DataSource<R>,
{
    apply_resource_query(ctx, query, source)
        .map(|page| Response::from_page(ctx.request_id.clone(), page))
        .map_err(|err| ErrorResponse::from_error(ctx.request_id.clone(), &err))
}

fn list_resources<R, S>(params: &QueryParams, source: &S) -> Result<Page<R>>
where
    R: Resource,
    S: DataSource<R>,
{
    let query = Query::from_params(params)?;
    let declaration = R::filter_declaration()?;
    validate_filter_keys(query.filters(), declaration)?;
    let filters = query.filters();

    if query.has_resource_ids() {
        let data = source.fetch_by_ids(query.resource_ids())?;
        return Ok(Page::terminal(apply_filters(filters, data, declaration)));
    }

    if let Some(ids) = filters.get(R::ID_FILTER) {
        if query.is_paginated() {
            return Err(QueryError::invalid_parameter_combination(
                R::ID_FILTER,
                MAX_RESULTS_KEY,
            ));
        }
        if let Some(malformed) = ids.iter().find(|id| !R::is_well_formed_id(id)) {
            return Err(QueryError::invalid_filter_value(R::ID_FILTER, malformed));
        }
        let data = source.fetch_by_ids(ids)?;
        return Ok(Page::terminal(apply_filters(filters, data, declaration)));
    }

    let Some(max_results) = query.max_results() else {
        let data = source.fetch_all()?;
        return Ok(Page::terminal(apply_filters(filters, data, declaration)));
    };

    // Filters run on the fetched page; a short page is returned as is.
    let page = pagination::get_page(
        R::RESOURCE_TAG,
        max_results,
        query.next_token(),
        |after, limit| source.fetch_ordered_after(after, limit),
        R::sort_key,
    )?;
    Ok(page.map_data(|data| apply_filters(filters, data, declaration)))
}

fn get_resource<R, S>(id: &str, source: &S) -> Result<Page<R>>
where
    R: Resource,
    S: DataSource<R>,
{
    let Some(canonical) = R::canonical_id(id) else {
        return Err(QueryError::resource_id_malformed(R::RESOURCE_TAG, id));
    };
    source
        .fetch_by_id(&canonical)?
        .map(|record| Page::terminal(vec![record]))
        .ok_or_else(|| QueryError::resource_not_found(id))
}
