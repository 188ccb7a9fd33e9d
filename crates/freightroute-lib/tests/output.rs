use freightroute_lib::{
    enumerate_paths, sample_network, shortest_path, Criterion, EnumerationOutcome,
    EnumerationSummary, RenderMode, RouteOutcome, RouteSummary, DEFAULT_CUTOFF,
};

fn sample_route() -> freightroute_lib::Route {
    let graph = sample_network();
    match shortest_path(&graph, "Incheon", "Warsaw", Criterion::Time).expect("query runs") {
        RouteOutcome::Found(route) => route,
        other => panic!("expected a route, got {other:?}"),
    }
}

#[test]
fn plain_text_lists_the_chain_and_totals() {
    let summary = RouteSummary::new(Criterion::Time, sample_route());
    let rendered = summary.render(RenderMode::PlainText);

    assert!(rendered.contains("Route: Incheon -> Vladivostok -> Duisburg -> Warsaw"));
    assert!(rendered.contains("(criterion: time)"));
    assert!(rendered.contains("total time: 330 hours (13.8 days)"));
    assert!(rendered.contains("total cost: $2500"));
    assert!(rendered.contains("total carbon: 3350 kg CO2e"));
    assert!(rendered.contains("transfers: 2"));
    assert!(rendered.contains("via Truck"));
}

#[test]
fn markdown_rendering_bolds_the_legs() {
    let summary = RouteSummary::new(Criterion::Time, sample_route());
    let rendered = summary.render(RenderMode::Markdown);

    assert!(rendered.contains("**Route**"));
    assert!(rendered.contains("`time`"));
    assert!(rendered.contains("**Duisburg -> Warsaw**"));
}

#[test]
fn enumeration_summary_counts_and_orders_routes() {
    let graph = sample_network();
    let routes = match enumerate_paths(&graph, "Incheon", "Warsaw", DEFAULT_CUTOFF, Some(3))
        .expect("query runs")
    {
        EnumerationOutcome::Paths(routes) => routes,
        EnumerationOutcome::NoPath => panic!("expected routes"),
    };

    let rendered = EnumerationSummary::new(routes).render(RenderMode::PlainText);
    assert!(rendered.contains("3 route(s) found:"));
    assert!(rendered.contains("Incheon -> Vladivostok -> Duisburg -> Warsaw"));
    assert!(rendered.contains("[Sea, Rail, Truck]"));
}

#[test]
fn outcomes_serialize_with_stable_discriminants() {
    let graph = sample_network();

    let found = shortest_path(&graph, "Incheon", "Warsaw", Criterion::Time).expect("query runs");
    let value = serde_json::to_value(&found).expect("serializes");
    assert!(value.get("found").is_some());

    let same = shortest_path(&graph, "Warsaw", "Warsaw", Criterion::Time).expect("query runs");
    let value = serde_json::to_value(&same).expect("serializes");
    assert_eq!(value, serde_json::json!("same_node"));

    let missing = shortest_path(&graph, "Warsaw", "Incheon", Criterion::Time).expect("query runs");
    let value = serde_json::to_value(&missing).expect("serializes");
    assert_eq!(value, serde_json::json!("no_path"));
}
