use std::fmt::Write;

use serde::Serialize;

use crate::solver::{Criterion, Route};

/// Hours per day, used for the friendly transit-time rendering.
const HOURS_PER_DAY: f64 = 24.0;

/// Presentation style for turning a summary into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    Markdown,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub criterion: Criterion,
    pub route: Route,
}

impl RouteSummary {
    pub fn new(criterion: Criterion, route: Route) -> Self {
        Self { criterion, route }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::Markdown => self.render_markdown(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} (criterion: {})",
            self.route.nodes.join(" -> "),
            self.criterion
        );
        write_totals(&mut buffer, &self.route);
        for (index, leg) in self.route.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "  {:>2}: {} -> {} via {} ({} h, ${}, {} kg CO2e)",
                index + 1,
                leg.from,
                leg.to,
                leg.mode,
                leg.time,
                leg.cost,
                leg.carbon
            );
        }
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{}_ (criterion: `{}`)",
            self.route.nodes.join(" -> "),
            self.criterion
        );
        let _ = writeln!(
            buffer,
            "* total: {} h / ${} / {} kg CO2e / {} transfers",
            self.route.time, self.route.cost, self.route.carbon, self.route.transfers
        );
        for leg in &self.route.legs {
            let _ = writeln!(
                buffer,
                "* **{} -> {}** via {} ({} h, ${}, {} kg CO2e)",
                leg.from, leg.to, leg.mode, leg.time, leg.cost, leg.carbon
            );
        }
        buffer
    }
}

/// Structured representation of an enumeration result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumerationSummary {
    pub routes: Vec<Route>,
}

impl EnumerationSummary {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        let _ = match mode {
            RenderMode::PlainText => writeln!(buffer, "{} route(s) found:", self.routes.len()),
            RenderMode::Markdown => writeln!(buffer, "**{} route(s) found**", self.routes.len()),
        };

        for (index, route) in self.routes.iter().enumerate() {
            match mode {
                RenderMode::PlainText => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} [{}]",
                        index + 1,
                        route.nodes.join(" -> "),
                        route
                            .legs
                            .iter()
                            .map(|leg| leg.mode.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    write_totals(&mut buffer, route);
                }
                RenderMode::Markdown => {
                    let _ = writeln!(
                        buffer,
                        "* {}. _{}_ via {} ({} h, ${}, {} kg CO2e, {} transfers)",
                        index + 1,
                        route.nodes.join(" -> "),
                        route
                            .legs
                            .iter()
                            .map(|leg| leg.mode.as_str())
                            .collect::<Vec<_>>()
                            .join("/"),
                        route.time,
                        route.cost,
                        route.carbon,
                        route.transfers
                    );
                }
            }
        }
        buffer
    }
}

fn write_totals(buffer: &mut String, route: &Route) {
    let _ = writeln!(
        buffer,
        "  total time: {} hours ({:.1} days)",
        route.time,
        route.time / HOURS_PER_DAY
    );
    let _ = writeln!(buffer, "  total cost: ${}", route.cost);
    let _ = writeln!(buffer, "  total distance: {}", route.distance);
    let _ = writeln!(buffer, "  total carbon: {} kg CO2e", route.carbon);
    let _ = writeln!(buffer, "  transfers: {}", route.transfers);
}
