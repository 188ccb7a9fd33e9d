use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EdgeId, TransportGraph};
use crate::solver::{accumulate_route, Route};

/// Edge limit applied to simple-path discovery when the caller does not
/// provide one.
pub const DEFAULT_CUTOFF: usize = 6;

/// Result cap applied when the caller does not provide one.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Outcome of a path enumeration query.
///
/// `NoPath` is a recognized result, not an error; callers must branch on the
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationOutcome {
    Paths(Vec<Route>),
    NoPath,
}

/// Enumerate every distinct route from `start` to `end`.
///
/// Discovers all simple node paths (no repeated node) with at most `cutoff`
/// edges, then expands every combination of parallel edges per hop.
/// Combinations picking the same mode sequence over the same node path are
/// duplicates; the first is kept. Results are sorted ascending by total time
/// and truncated to `max_paths` when a cap is given.
///
/// A query with `start == end` enumerates no legs and reports `NoPath`.
pub fn enumerate_paths(
    graph: &TransportGraph,
    start: &str,
    end: &str,
    cutoff: usize,
    max_paths: Option<usize>,
) -> Result<EnumerationOutcome> {
    if start == end {
        return Ok(EnumerationOutcome::NoPath);
    }

    let node_paths = simple_node_paths(graph, start, end, cutoff);
    if node_paths.is_empty() {
        return Ok(EnumerationOutcome::NoPath);
    }
    debug!(paths = node_paths.len(), cutoff, "discovered simple node paths");

    let mut seen: HashSet<(Vec<&str>, Vec<&str>)> = HashSet::new();
    let mut routes = Vec::new();

    for nodes in &node_paths {
        let mut options: Vec<&[EdgeId]> = Vec::with_capacity(nodes.len() - 1);
        for pair in nodes.windows(2) {
            let edges = graph.parallel_edges(pair[0], pair[1]);
            if edges.is_empty() {
                return Err(Error::MissingLeg {
                    from: pair[0].to_string(),
                    to: pair[1].to_string(),
                });
            }
            options.push(edges);
        }

        for combination in edge_combinations(&options) {
            let modes: Vec<&str> = combination
                .iter()
                .map(|&id| graph.edge(id).mode.as_str())
                .collect();
            if !seen.insert((nodes.clone(), modes)) {
                continue;
            }

            let edges: Vec<_> = combination.iter().map(|&id| graph.edge(id)).collect();
            routes.push(accumulate_route(nodes, &edges));
        }
    }
    debug!(routes = routes.len(), "expanded edge combinations");

    routes.sort_by(|a, b| a.time.total_cmp(&b.time));
    if let Some(cap) = max_paths {
        routes.truncate(cap);
    }

    Ok(EnumerationOutcome::Paths(routes))
}

/// Depth-first enumeration of simple paths over the node adjacency, ignoring
/// edge multiplicity. Exponential in the worst case, bounded by `cutoff`.
fn simple_node_paths<'g>(
    graph: &'g TransportGraph,
    start: &str,
    end: &str,
    cutoff: usize,
) -> Vec<Vec<&'g str>> {
    let mut found = Vec::new();
    let (Some(start), Some(end)) = (graph.node(start), graph.node(end)) else {
        return found;
    };

    let mut path = vec![start];
    let mut visited = HashSet::from([start]);
    extend(graph, end, cutoff, &mut path, &mut visited, &mut found);
    found
}

fn extend<'g>(
    graph: &'g TransportGraph,
    end: &'g str,
    cutoff: usize,
    path: &mut Vec<&'g str>,
    visited: &mut HashSet<&'g str>,
    found: &mut Vec<Vec<&'g str>>,
) {
    let current = *path.last().expect("path is never empty");
    if current == end {
        found.push(path.clone());
        return;
    }
    // path.len() - 1 edges used so far; stop once the cutoff is spent.
    if path.len() > cutoff {
        return;
    }

    for hop in graph.neighbours(current) {
        let next = hop.to.as_str();
        if visited.contains(next) {
            continue;
        }
        path.push(next);
        visited.insert(next);
        extend(graph, end, cutoff, path, visited, found);
        visited.remove(next);
        path.pop();
    }
}

/// Cartesian product of per-hop edge choices, produced odometer-style in
/// document order.
fn edge_combinations(options: &[&[EdgeId]]) -> Vec<Vec<EdgeId>> {
    let mut combinations = Vec::new();
    let mut cursor = vec![0usize; options.len()];

    loop {
        combinations.push(
            cursor
                .iter()
                .zip(options)
                .map(|(&index, edges)| edges[index])
                .collect(),
        );

        let mut position = options.len();
        loop {
            if position == 0 {
                return combinations;
            }
            position -= 1;
            cursor[position] += 1;
            if cursor[position] < options[position].len() {
                break;
            }
            cursor[position] = 0;
        }
    }
}
