use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("freightroute-cli").expect("binary builds");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn time_route_uses_the_trans_siberian_corridor() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Incheon")
        .arg("--to")
        .arg("Warsaw")
        .arg("--criterion")
        .arg("time")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Incheon -> Vladivostok -> Duisburg -> Warsaw",
        ))
        .stdout(predicate::str::contains("total time: 330 hours"));
}

#[test]
fn transfers_route_picks_low_carbon_edges() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Incheon")
        .arg("--to")
        .arg("Warsaw")
        .arg("--criterion")
        .arg("transfers")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Incheon -> Shanghai -> Duisburg -> Warsaw",
        ))
        .stdout(predicate::str::contains("total carbon: 3650 kg CO2e"))
        .stdout(predicate::str::contains("transfers: 2"));
}

#[test]
fn json_format_emits_the_outcome_discriminant() {
    cli()
        .arg("--format")
        .arg("json")
        .arg("route")
        .arg("--from")
        .arg("Incheon")
        .arg("--to")
        .arg("Warsaw")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\""))
        .stdout(predicate::str::contains("\"transfers\": 2"));
}

#[test]
fn same_location_is_reported_not_errored() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Incheon")
        .arg("--to")
        .arg("Incheon")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Start and destination are the same location.",
        ));
}

#[test]
fn unreachable_destination_is_reported_not_errored() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Warsaw")
        .arg("--to")
        .arg("Incheon")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route found between Warsaw and Incheon.",
        ));
}

#[test]
fn unknown_location_error_is_friendly() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Incheom")
        .arg("--to")
        .arg("Warsaw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node name: Incheom"))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("Incheon"));
}

#[test]
fn nodes_command_lists_the_network() {
    cli()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duisburg"))
        .stdout(predicate::str::contains("Warsaw"));
}
