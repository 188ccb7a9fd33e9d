use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("freightroute-cli").expect("binary builds");
    cmd.env("RUST_LOG", "error");
    cmd
}

const LEGS_CSV: &str = "\
from,to,mode,time,cost,distance,carbon
Busan,Rotterdam,Sea,720,1500,20000,4000
Busan,Hamburg,Sea,700,1000,19500,3900
Hamburg,Rotterdam,Truck,8,250,450,120
";

#[test]
fn convert_then_route_against_the_converted_network() {
    let temp = tempdir().expect("create temp dir");
    let input = temp.path().join("legs.csv");
    let output = temp.path().join("network.json");
    fs::write(&input, LEGS_CSV).expect("write csv");

    cli()
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Network document written to"));

    cli()
        .arg("--network")
        .arg(&output)
        .arg("route")
        .arg("--from")
        .arg("Busan")
        .arg("--to")
        .arg("Rotterdam")
        .arg("--criterion")
        .arg("cost")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Busan -> Hamburg -> Rotterdam",
        ))
        .stdout(predicate::str::contains("total cost: $1250"));
}

#[test]
fn malformed_rows_fail_the_conversion() {
    let temp = tempdir().expect("create temp dir");
    let input = temp.path().join("legs.csv");
    let output = temp.path().join("network.json");
    fs::write(&input, "from,to,mode,time,cost,distance,carbon\nA,B,Sea,1,2\n")
        .expect("write csv");

    cli()
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("csv row 2"));
}

#[test]
fn missing_network_file_is_a_load_failure() {
    cli()
        .arg("--network")
        .arg("/nonexistent/network.json")
        .arg("nodes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network"));
}
