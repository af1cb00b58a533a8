use std::io::Write;

use crate::graph::{NodeId, WeightedGraph};
use crate::path::ShortestRoutes;

/// A marker struct for rendering route search results.
pub struct RouteReport;

const SEPARATOR: &str = "========================================";

impl RouteReport {
    /// Renders every minimum-weight route of one node pair as a printable
    /// block per route. Returns an empty string when the pair has no route,
    /// so unconnected pairs contribute nothing to the report.
    pub fn format_pair(graph: &WeightedGraph, routes: &ShortestRoutes) -> String {
        let Some(total) = routes.min_weight() else {
            return String::new();
        };
        let mut out = String::new();
        for route in routes.routes() {
            Self::format_block(graph, route, total, &mut out);
        }
        out
    }

    fn format_block(graph: &WeightedGraph, route: &[NodeId], total: u64, out: &mut String) {
        let (Some(&start), Some(&target)) = (route.first(), route.last()) else {
            return;
        };
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!(
            "Path: {} -> {}\n",
            graph.name(start),
            graph.name(target)
        ));
        let names: Vec<&str> = route.iter().map(|&id| graph.name(id)).collect();
        out.push_str(&format!("Route: {}\n", names.join(" -> ")));
        out.push_str(&Self::format_distance(graph, route, total));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    // One leg prints the plain total; several legs print the breakdown.
    fn format_distance(graph: &WeightedGraph, route: &[NodeId], total: u64) -> String {
        let mut legs = Vec::with_capacity(route.len().saturating_sub(1));
        for pair in route.windows(2) {
            if let Some(weight) = graph.weight(pair[0], pair[1]) {
                legs.push(weight.to_string());
            }
        }
        if legs.len() < 2 {
            format!("Distance: {}", total)
        } else {
            format!("Distance: {} = {}", legs.join(" + "), total)
        }
    }

    /// Writes a per-pair search summary to the given writer. This feeds the
    /// detail log, not the user-facing report.
    pub fn print_routes_to_writer(
        graph: &WeightedGraph,
        start: NodeId,
        target: NodeId,
        routes: &ShortestRoutes,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "=== ROUTE SEARCH {} -> {} ===",
            graph.name(start),
            graph.name(target)
        )?;
        match routes.min_weight() {
            Some(total) => {
                writeln!(writer, "Total routes found: {}", routes.len())?;
                writeln!(writer, "Minimum weight: {}", total)?;
                for (index, route) in routes.routes().iter().enumerate() {
                    let names: Vec<&str> = route.iter().map(|&id| graph.name(id)).collect();
                    writeln!(writer, "Route {}: {}", index, names.join(" -> "))?;
                }
            }
            None => {
                writeln!(writer, "No route found.")?;
            }
        }
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::RouteExplorer;

    fn named(names: &[&str]) -> WeightedGraph {
        WeightedGraph::with_nodes(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn formats_single_link_and_multi_leg_routes() {
        let mut g = named(&["A", "B", "C"]);
        g.add_link(0, 1, 40);
        g.add_link(0, 2, 10);
        g.add_link(2, 1, 30);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        let report = RouteReport::format_pair(&g, &found);
        assert_eq!(
            report,
            "========================================\n\
             Path: A -> B\n\
             Route: A -> B\n\
             Distance: 40\n\
             ========================================\n\
             ========================================\n\
             Path: A -> B\n\
             Route: A -> C -> B\n\
             Distance: 10 + 30 = 40\n\
             ========================================\n"
        );
    }

    #[test]
    fn empty_result_formats_to_nothing() {
        let g = named(&["A", "B"]);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        assert_eq!(RouteReport::format_pair(&g, &found), "");
    }

    #[test]
    fn degenerate_route_prints_distance_zero() {
        let g = named(&["A"]);
        let found = RouteExplorer::search(&g, 0, 0).unwrap();
        let report = RouteReport::format_pair(&g, &found);
        assert!(report.contains("Path: A -> A\n"));
        assert!(report.contains("Route: A\n"));
        assert!(report.contains("Distance: 0\n"));
    }

    #[test]
    fn writer_summary_lists_each_route() {
        let mut g = named(&["A", "B", "C"]);
        g.add_link(0, 2, 1);
        g.add_link(2, 1, 1);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        let mut buffer = Vec::new();
        RouteReport::print_routes_to_writer(&g, 0, 1, &found, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("=== ROUTE SEARCH A -> B ==="));
        assert!(text.contains("Total routes found: 1"));
        assert!(text.contains("Minimum weight: 2"));
        assert!(text.contains("Route 0: A -> C -> B"));
    }

    #[test]
    fn writer_summary_reports_missing_routes() {
        let g = named(&["A", "B"]);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        let mut buffer = Vec::new();
        RouteReport::print_routes_to_writer(&g, 0, 1, &found, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("No route found."));
    }
}
