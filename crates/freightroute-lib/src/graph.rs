use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity for a node name to count as a suggestion.
const FUZZY_THRESHOLD: f64 = 0.84;

/// Index of an edge within the graph's flat edge arena.
pub type EdgeId = usize;

/// One transport leg between two locations.
///
/// The four numeric attributes are fixed at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Transport mode label (for example "Sea", "Air", "Rail", "Truck").
    pub mode: String,
    /// Transit time in hours.
    pub time: f64,
    /// Freight cost.
    pub cost: f64,
    /// Distance covered by the leg.
    pub distance: f64,
    /// Carbon emission for the leg.
    pub carbon: f64,
}

impl Edge {
    fn from_value(from: &str, to: &str, raw: &Value) -> Result<Self> {
        let mode = require(raw, from, to, "mode")?
            .as_str()
            .ok_or_else(|| malformed(from, to, "mode"))?
            .to_string();

        Ok(Self {
            mode,
            time: require_numeric(raw, from, to, "time")?,
            cost: require_numeric(raw, from, to, "cost")?,
            distance: require_numeric(raw, from, to, "distance")?,
            carbon: require_numeric(raw, from, to, "carbon")?,
        })
    }
}

fn malformed(from: &str, to: &str, attribute: &'static str) -> Error {
    Error::MalformedEdge {
        from: from.to_string(),
        to: to.to_string(),
        attribute,
    }
}

fn require<'v>(raw: &'v Value, from: &str, to: &str, attribute: &'static str) -> Result<&'v Value> {
    raw.get(attribute).ok_or_else(|| malformed(from, to, attribute))
}

/// Spreadsheet exports sometimes carry numerics as strings; accept both.
fn require_numeric(raw: &Value, from: &str, to: &str, attribute: &'static str) -> Result<f64> {
    let value = require(raw, from, to, attribute)?;
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| malformed(from, to, attribute))
}

/// Outgoing connection from one node to a single destination, together with
/// every parallel edge available for that hop, in document order.
#[derive(Debug, Clone)]
pub struct Hop {
    pub to: String,
    pub edges: Vec<EdgeId>,
}

/// Directed multigraph of transport legs keyed by location name.
///
/// Edges live in one flat arena; adjacency lists reference them by index so
/// parallel edges between the same ordered node pair stay distinct. The
/// structure is immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct TransportGraph {
    edges: Vec<Edge>,
    adjacency: HashMap<String, Vec<Hop>>,
    nodes: BTreeSet<String>,
}

impl TransportGraph {
    /// Return the outgoing hops for a given node, in document order.
    pub fn neighbours(&self, node: &str) -> &[Hop] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve an edge identifier to its edge.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// All parallel edges between an ordered node pair, in document order.
    pub fn parallel_edges(&self, from: &str, to: &str) -> &[EdgeId] {
        self.neighbours(from)
            .iter()
            .find(|hop| hop.to == to)
            .map(|hop| hop.edges.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the node appears in the network, as origin or destination.
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Canonical reference for a node label, if present.
    pub(crate) fn node(&self, name: &str) -> Option<&str> {
        self.nodes.get(name).map(String::as_str)
    }

    /// All node labels in the network, sorted.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Number of nodes in the network.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the network, counting parallel edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node names similar to `name`, best match first, at most `limit`.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate.as_str(),
                )
            })
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// Build the routing graph from a network document: a JSON object keyed by
/// origin label, mapping destination labels to lists of edge objects.
///
/// Fails with [`Error::MalformedEdge`] when an edge object is missing one of
/// `mode`, `time`, `cost`, `distance`, or `carbon`. A destination with an
/// empty edge list contributes its node label but no hop.
pub fn build_graph(document: &Value) -> Result<TransportGraph> {
    let origins = document.as_object().ok_or(Error::MalformedDocument)?;

    let mut edges = Vec::new();
    let mut adjacency = HashMap::with_capacity(origins.len());
    let mut nodes = BTreeSet::new();

    for (from, destinations) in origins {
        let destinations = destinations.as_object().ok_or(Error::MalformedDocument)?;
        nodes.insert(from.clone());

        let mut hops = Vec::with_capacity(destinations.len());
        for (to, raw_edges) in destinations {
            let raw_edges = raw_edges.as_array().ok_or(Error::MalformedDocument)?;
            nodes.insert(to.clone());

            let mut ids = Vec::with_capacity(raw_edges.len());
            for raw in raw_edges {
                ids.push(edges.len());
                edges.push(Edge::from_value(from, to, raw)?);
            }
            if !ids.is_empty() {
                hops.push(Hop {
                    to: to.clone(),
                    edges: ids,
                });
            }
        }
        adjacency.insert(from.clone(), hops);
    }

    Ok(TransportGraph {
        edges,
        adjacency,
        nodes,
    })
}
