//! High-level planning entry points.
//!
//! This module provides:
//! - [`RouteRequest`] / [`EnumerateRequest`] - query descriptions with defaults
//! - [`plan_route`] - single-criterion shortest route
//! - [`plan_enumeration`] - bounded enumeration of distinct routes
//!
//! Both entry points validate that the requested endpoints exist in the
//! network before delegating to the core algorithms, so consumers get a
//! friendly unknown-name error with suggestions instead of a bare `NoPath`.

use tracing::debug;

use crate::enumerate::{enumerate_paths, EnumerationOutcome, DEFAULT_CUTOFF, DEFAULT_MAX_PATHS};
use crate::error::{Error, Result};
use crate::graph::TransportGraph;
use crate::solver::{shortest_path, Criterion, RouteOutcome};

/// High-level shortest-route request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    pub criterion: Criterion,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, criterion: Criterion) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            criterion,
        }
    }
}

/// High-level enumeration request.
#[derive(Debug, Clone)]
pub struct EnumerateRequest {
    pub start: String,
    pub end: String,
    /// Maximum number of edges per discovered path.
    pub cutoff: usize,
    /// Result cap; `None` returns every distinct route.
    pub max_paths: Option<usize>,
}

impl EnumerateRequest {
    /// Request with the default edge cutoff and result cap.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            cutoff: DEFAULT_CUTOFF,
            max_paths: Some(DEFAULT_MAX_PATHS),
        }
    }

    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_max_paths(mut self, max_paths: Option<usize>) -> Self {
        self.max_paths = max_paths;
        self
    }
}

fn resolve_node(graph: &TransportGraph, name: &str) -> Result<()> {
    if graph.contains(name) {
        return Ok(());
    }
    Err(Error::UnknownNode {
        name: name.to_string(),
        suggestions: graph.fuzzy_node_matches(name, 3),
    })
}

/// Compute the optimal route for a request.
pub fn plan_route(graph: &TransportGraph, request: &RouteRequest) -> Result<RouteOutcome> {
    resolve_node(graph, &request.start)?;
    resolve_node(graph, &request.end)?;

    debug!(
        start = %request.start,
        end = %request.end,
        criterion = %request.criterion,
        "planning route"
    );
    shortest_path(graph, &request.start, &request.end, request.criterion)
}

/// Enumerate every distinct route for a request.
pub fn plan_enumeration(
    graph: &TransportGraph,
    request: &EnumerateRequest,
) -> Result<EnumerationOutcome> {
    resolve_node(graph, &request.start)?;
    resolve_node(graph, &request.end)?;

    debug!(
        start = %request.start,
        end = %request.end,
        cutoff = request.cutoff,
        "enumerating routes"
    );
    enumerate_paths(
        graph,
        &request.start,
        &request.end,
        request.cutoff,
        request.max_paths,
    )
}
