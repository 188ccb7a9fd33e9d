use thiserror::Error;

/// Convenient result alias for the freightroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge object lacks a required attribute at graph build time.
    #[error("malformed edge {from} -> {to}: missing or invalid attribute '{attribute}'")]
    MalformedEdge {
        from: String,
        to: String,
        attribute: &'static str,
    },

    /// Raised when a network document is not the expected nested mapping of
    /// origin -> destination -> edge list.
    #[error("network document is not an object of origin -> destination -> edge list")]
    MalformedDocument,

    /// Raised when a node name could not be found in the network.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a fixed node path references a hop with no edges. This is
    /// an internal invariant violation, not a recognized query outcome.
    #[error("route references a missing leg {from} -> {to}")]
    MissingLeg { from: String, to: String },

    /// Raised when a CSV row does not carry the expected leg columns.
    #[error("csv row {row} has {found} columns, expected {expected}")]
    MalformedCsvRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
