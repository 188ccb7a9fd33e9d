use std::io::Write;
use std::path::PathBuf;

use freightroute_lib::{load_network, sample_network, Error};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

#[test]
fn fixture_network_loads() {
    let graph = load_network(&fixture_path()).expect("fixture loads");
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn fixture_matches_the_embedded_sample() {
    let fixture = load_network(&fixture_path()).expect("fixture loads");
    let sample = sample_network();

    let fixture_nodes: Vec<_> = fixture.nodes().collect();
    let sample_nodes: Vec<_> = sample.nodes().collect();
    assert_eq!(fixture_nodes, sample_nodes);
    assert_eq!(fixture.edge_count(), sample.edge_count());
}

#[test]
fn missing_file_is_an_io_error() {
    let error = load_network(&PathBuf::from("/nonexistent/network.json"))
        .expect_err("missing file fails");
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ not json").expect("write");

    let error = load_network(file.path()).expect_err("broken json fails");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn malformed_edges_fail_the_load() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{ "A": {{ "B": [{{ "mode": "Sea", "time": 1, "cost": 2, "distance": 3 }}] }} }}"#
    )
    .expect("write");

    let error = load_network(file.path()).expect_err("missing carbon fails");
    assert!(error.to_string().contains("'carbon'"));
}
