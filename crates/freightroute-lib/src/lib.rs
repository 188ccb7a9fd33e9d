//! Freightroute library entry points.
//!
//! This crate loads multimodal freight networks, builds the transport graph,
//! and runs route planning queries: single-criterion shortest routes with a
//! carbon tie-break, and bounded enumeration of every distinct route.
//! Higher-level consumers (CLI, UIs) should depend on the functions exported
//! here instead of reimplementing behaviour.

#![deny(warnings)]

pub mod convert;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod routing;
pub mod solver;

pub use convert::{convert_csv_file, csv_to_document};
pub use enumerate::{enumerate_paths, EnumerationOutcome, DEFAULT_CUTOFF, DEFAULT_MAX_PATHS};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeId, Hop, TransportGraph};
pub use network::{load_network, sample_network};
pub use output::{EnumerationSummary, RenderMode, RouteSummary};
pub use routing::{plan_enumeration, plan_route, EnumerateRequest, RouteRequest};
pub use solver::{shortest_path, Criterion, Leg, Route, RouteOutcome};
