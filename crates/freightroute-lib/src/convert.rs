//! Conversion of tabular leg listings into the nested network document.
//!
//! The expected input is a CSV with a header row and the columns
//! `from,to,mode,time,cost,distance,carbon`, one transport leg per row.
//! Numeric cells are parsed here so the resulting document carries real
//! numbers regardless of how the spreadsheet exported them.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{Error, Result};

const COLUMNS: usize = 7;

/// Read a leg CSV and produce the nested network document.
///
/// Fully blank rows are skipped; rows with a wrong column count and cells
/// that fail numeric parsing are errors.
pub fn csv_to_document(reader: impl Read) -> Result<Value> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut origins: Map<String, Value> = Map::new();
    let mut rows = 0usize;

    for (index, record) in csv.records().enumerate() {
        let record = record?;
        // Row numbers are 1-based and count the header.
        let row = index + 2;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if record.len() != COLUMNS {
            return Err(Error::MalformedCsvRow {
                row,
                found: record.len(),
                expected: COLUMNS,
            });
        }

        let from = record[0].trim();
        let to = record[1].trim();
        let mut edge = Map::new();
        edge.insert("mode".to_string(), Value::String(record[2].trim().to_string()));
        edge.insert("time".to_string(), numeric_cell(&record[3], from, to, "time")?);
        edge.insert("cost".to_string(), numeric_cell(&record[4], from, to, "cost")?);
        edge.insert(
            "distance".to_string(),
            numeric_cell(&record[5], from, to, "distance")?,
        );
        edge.insert(
            "carbon".to_string(),
            numeric_cell(&record[6], from, to, "carbon")?,
        );

        let destinations = origins
            .entry(from.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let destinations = destinations
            .as_object_mut()
            .expect("origin entries are always objects");
        let edges = destinations
            .entry(to.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        edges
            .as_array_mut()
            .expect("destination entries are always arrays")
            .push(Value::Object(edge));

        rows += 1;
    }

    debug!(rows, origins = origins.len(), "converted leg csv");
    Ok(Value::Object(origins))
}

fn numeric_cell(cell: &str, from: &str, to: &str, attribute: &'static str) -> Result<Value> {
    let parsed: f64 = cell
        .trim()
        .parse()
        .map_err(|_| Error::MalformedEdge {
            from: from.to_string(),
            to: to.to_string(),
            attribute,
        })?;
    let number = Number::from_f64(parsed).ok_or_else(|| Error::MalformedEdge {
        from: from.to_string(),
        to: to.to_string(),
        attribute,
    })?;
    Ok(Value::Number(number))
}

/// Convert a leg CSV file into a network document file.
pub fn convert_csv_file(input: &Path, output: &Path) -> Result<()> {
    let file = fs::File::open(input)?;
    let document = csv_to_document(file)?;
    fs::write(output, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}
