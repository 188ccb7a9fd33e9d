//! Network document loading and the embedded sample network.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::graph::{build_graph, TransportGraph};

/// Demonstration network used when no document is supplied: a small
/// Asia-to-Europe corridor with parallel sea/air and rail/truck options.
static SAMPLE_DOCUMENT: Lazy<Value> = Lazy::new(|| {
    json!({
        "Incheon": {
            "Shanghai": [
                { "mode": "Sea", "time": 48, "cost": 300, "distance": 850, "carbon": 500 },
                { "mode": "Air", "time": 2, "cost": 1500, "distance": 850, "carbon": 4000 }
            ],
            "Vladivostok": [
                { "mode": "Sea", "time": 72, "cost": 400, "distance": 1000, "carbon": 600 }
            ]
        },
        "Shanghai": {
            "Duisburg": [
                { "mode": "Rail", "time": 360, "cost": 2000, "distance": 9000, "carbon": 3000 }
            ]
        },
        "Vladivostok": {
            "Duisburg": [
                { "mode": "Rail", "time": 240, "cost": 1800, "distance": 10000, "carbon": 2500 }
            ]
        },
        "Duisburg": {
            "Warsaw": [
                { "mode": "Rail", "time": 24, "cost": 200, "distance": 1000, "carbon": 150 },
                { "mode": "Truck", "time": 18, "cost": 300, "distance": 1000, "carbon": 250 }
            ]
        },
        "Warsaw": {}
    })
});

/// Build the embedded sample network.
pub fn sample_network() -> TransportGraph {
    build_graph(&SAMPLE_DOCUMENT).expect("embedded sample network is well formed")
}

/// Load a network document from a JSON file and build the routing graph.
pub fn load_network(path: &Path) -> Result<TransportGraph> {
    let raw = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&raw)?;
    let graph = build_graph(&document)?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        path = %path.display(),
        "loaded network"
    );
    Ok(graph)
}
