use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, TransportGraph};

/// Ranking criterion for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Minimize total transit time.
    #[default]
    Time,
    /// Minimize total freight cost.
    Cost,
    /// Minimize total carbon emission.
    Carbon,
    /// Minimize the number of transfers (hop count).
    Transfers,
}

impl Criterion {
    /// Primary weight contributed by a single edge under this criterion.
    /// Every edge weighs 1 under `Transfers`.
    pub fn edge_weight(self, edge: &Edge) -> f64 {
        match self {
            Criterion::Time => edge.time,
            Criterion::Cost => edge.cost,
            Criterion::Carbon => edge.carbon,
            Criterion::Transfers => 1.0,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Criterion::Time => "time",
            Criterion::Cost => "cost",
            Criterion::Carbon => "carbon",
            Criterion::Transfers => "transfers",
        };
        f.write_str(value)
    }
}

/// Per-leg detail of a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub mode: String,
    pub time: f64,
    pub cost: f64,
    pub distance: f64,
    pub carbon: f64,
}

/// Aggregated route produced by the solver or the enumerator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Visited node labels, start first.
    pub nodes: Vec<String>,
    pub time: f64,
    pub cost: f64,
    pub distance: f64,
    pub carbon: f64,
    /// Intermediate nodes between start and end.
    pub transfers: usize,
    pub legs: Vec<Leg>,
}

impl Route {
    /// Number of legs in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Outcome of a single-criterion shortest path query.
///
/// `SameNode` and `NoPath` are recognized results, not errors; callers must
/// branch on the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(Route),
    SameNode,
    NoPath,
}

/// Find the optimal route from `start` to `end` under `criterion`, breaking
/// ties between parallel edges by lowest carbon emission.
///
/// Runs a priority-queue shortest path over node-level best distances, where
/// each hop weighs the minimum primary weight over its parallel edges. Once
/// the node sequence is fixed, the concrete edge for each hop is selected
/// locally: smallest primary weight first, then smallest carbon, keeping the
/// first encountered on exact double ties.
pub fn shortest_path(
    graph: &TransportGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Result<RouteOutcome> {
    if start == end {
        return Ok(RouteOutcome::SameNode);
    }

    let Some(nodes) = shortest_node_path(graph, start, end, criterion) else {
        return Ok(RouteOutcome::NoPath);
    };
    debug!(hops = nodes.len() - 1, %criterion, "node path fixed");

    let mut chosen = Vec::with_capacity(nodes.len() - 1);
    for pair in nodes.windows(2) {
        let edge = select_edge(graph, pair[0], pair[1], criterion).ok_or_else(|| {
            Error::MissingLeg {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
            }
        })?;
        chosen.push(edge);
    }

    Ok(RouteOutcome::Found(accumulate_route(&nodes, &chosen)))
}

/// Aggregate a fixed node sequence and its chosen edges into a route record.
pub(crate) fn accumulate_route(nodes: &[&str], edges: &[&Edge]) -> Route {
    let mut route = Route {
        nodes: nodes.iter().map(|node| node.to_string()).collect(),
        time: 0.0,
        cost: 0.0,
        distance: 0.0,
        carbon: 0.0,
        transfers: nodes.len().saturating_sub(2),
        legs: Vec::with_capacity(edges.len()),
    };

    for (pair, edge) in nodes.windows(2).zip(edges) {
        route.time += edge.time;
        route.cost += edge.cost;
        route.distance += edge.distance;
        route.carbon += edge.carbon;
        route.legs.push(Leg {
            from: pair[0].to_string(),
            to: pair[1].to_string(),
            mode: edge.mode.clone(),
            time: edge.time,
            cost: edge.cost,
            distance: edge.distance,
            carbon: edge.carbon,
        });
    }

    route
}

/// Dijkstra over node-level best distances. Each hop contributes the minimum
/// primary weight over its parallel edges; relaxation is strict less-than, so
/// the first equal-cost path found is kept.
fn shortest_node_path<'g>(
    graph: &'g TransportGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Option<Vec<&'g str>> {
    let start = graph.node(start)?;
    let end = graph.node(end)?;

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let Some(&current) = distances.get(entry.node) else {
            continue;
        };
        if entry.cost.0 > current {
            continue;
        }

        if entry.node == end {
            return Some(reconstruct_path(&parents, start, end));
        }

        for hop in graph.neighbours(entry.node) {
            let weight = hop
                .edges
                .iter()
                .map(|&id| criterion.edge_weight(graph.edge(id)))
                .min_by(f64::total_cmp)
                .expect("hops always carry at least one edge");

            let next = hop.to.as_str();
            let next_cost = current + weight;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Pick the concrete edge for a fixed hop: smallest primary weight, smallest
/// carbon among equals, first encountered when both tie exactly.
fn select_edge<'g>(
    graph: &'g TransportGraph,
    from: &str,
    to: &str,
    criterion: Criterion,
) -> Option<&'g Edge> {
    let mut best: Option<(&Edge, f64)> = None;
    for &id in graph.parallel_edges(from, to) {
        let edge = graph.edge(id);
        let weight = criterion.edge_weight(edge);
        match best {
            None => best = Some((edge, weight)),
            Some((current, best_weight)) => {
                if weight < best_weight || (weight == best_weight && edge.carbon < current.carbon) {
                    best = Some((edge, weight));
                }
            }
        }
    }
    best.map(|(edge, _)| edge)
}

fn reconstruct_path<'g>(
    parents: &HashMap<&'g str, Option<&'g str>>,
    start: &'g str,
    end: &'g str,
) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; ties pop
        // in node-name order to keep results deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::graph::build_graph;

    #[test]
    fn transfers_weighs_every_edge_as_one() {
        let edge = Edge {
            mode: "Sea".to_string(),
            time: 48.0,
            cost: 300.0,
            distance: 850.0,
            carbon: 500.0,
        };
        assert_eq!(Criterion::Transfers.edge_weight(&edge), 1.0);
        assert_eq!(Criterion::Time.edge_weight(&edge), 48.0);
        assert_eq!(Criterion::Cost.edge_weight(&edge), 300.0);
        assert_eq!(Criterion::Carbon.edge_weight(&edge), 500.0);
    }

    #[test]
    fn select_edge_breaks_primary_ties_by_carbon() {
        let document = json!({
            "A": { "B": [
                { "mode": "Truck", "time": 10, "cost": 100, "distance": 500, "carbon": 900 },
                { "mode": "Rail", "time": 10, "cost": 100, "distance": 500, "carbon": 200 }
            ] }
        });
        let graph = build_graph(&document).expect("document builds");
        let edge = select_edge(&graph, "A", "B", Criterion::Time).expect("edge exists");
        assert_eq!(edge.mode, "Rail");
    }

    #[test]
    fn select_edge_keeps_first_on_exact_double_tie() {
        let document = json!({
            "A": { "B": [
                { "mode": "Truck", "time": 10, "cost": 100, "distance": 500, "carbon": 200 },
                { "mode": "Rail", "time": 10, "cost": 120, "distance": 500, "carbon": 200 },
                { "mode": "Barge", "time": 10, "cost": 90, "distance": 500, "carbon": 200 }
            ] }
        });
        let graph = build_graph(&document).expect("document builds");
        let edge = select_edge(&graph, "A", "B", Criterion::Time).expect("edge exists");
        assert_eq!(edge.mode, "Truck");
    }

    #[test]
    fn route_hop_count() {
        let route = Route {
            nodes: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            time: 0.0,
            cost: 0.0,
            distance: 0.0,
            carbon: 0.0,
            transfers: 1,
            legs: Vec::new(),
        };
        assert_eq!(route.hop_count(), 2);
    }
}
