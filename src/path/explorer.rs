use super::accumulator::ShortestRoutes;
use super::error::PathError;
use crate::graph::{NodeId, WeightedGraph};

/// Branch-and-bound search for every minimum-weight simple route between
/// two nodes.
///
/// One explorer owns the mutable state of a single `search` call: the
/// visited flags, the route buffer and the running weight. Each recursive
/// step marks its node on entry and unmarks it on every exit path, so a
/// caller always observes exactly the state it passed in.
pub struct RouteExplorer<'a> {
    graph: &'a WeightedGraph,
    target: NodeId,
    visited: Vec<bool>,
    route: Vec<NodeId>,
    weight: u64,
    found: ShortestRoutes,
}

impl<'a> RouteExplorer<'a> {
    /// Collects every simple route from `start` to `target` whose total
    /// weight is minimal among all simple routes between them.
    ///
    /// Returns an empty result set when the nodes are not connected;
    /// `start == target` yields the single zero-weight route `[start]`.
    /// Both indices must be valid node ids of `graph`.
    ///
    /// # Errors
    /// `PathError::Allocation` when route storage cannot grow; the search
    /// is aborted and its partial result discarded.
    pub fn search(
        graph: &'a WeightedGraph,
        start: NodeId,
        target: NodeId,
    ) -> Result<ShortestRoutes, PathError> {
        let count = graph.node_count();
        debug_assert!(start < count, "start node {} out of range {}", start, count);
        debug_assert!(
            target < count,
            "target node {} out of range {}",
            target,
            count
        );

        let mut explorer = Self {
            graph,
            target,
            visited: vec![false; count],
            route: Vec::with_capacity(count),
            weight: 0,
            found: ShortestRoutes::new(),
        };
        explorer.visit(start)?;

        debug_assert!(explorer.route.is_empty(), "route buffer not unwound");
        debug_assert_eq!(explorer.weight, 0, "running weight not unwound");
        Ok(explorer.found)
    }

    // One recursive step: enter `from`, record or descend, leave `from`.
    // The pop/unmark bracket runs before any error propagates so the
    // backward step stays symmetric with the forward one.
    fn visit(&mut self, from: NodeId) -> Result<(), PathError> {
        self.visited[from] = true;
        self.route.push(from);

        let outcome = if from == self.target {
            self.found.record(&self.route, self.weight)
        } else {
            self.explore_neighbors(from)
        };

        self.route.pop();
        self.visited[from] = false;
        outcome
    }

    // Tries every outgoing link of `from` whose extended weight can still
    // match or beat the current minimum. Equality is admitted so routes
    // tying the best known weight keep being enumerated. The minimum can
    // tighten while sibling frames are still active; those frames are not
    // aborted, they simply fail this check on their next extension.
    fn explore_neighbors(&mut self, from: NodeId) -> Result<(), PathError> {
        for next in 0..self.graph.node_count() {
            let Some(link) = self.graph.weight(from, next) else {
                continue;
            };
            if self.visited[next] {
                continue;
            }
            let extended = self.weight.saturating_add(u64::from(link));
            if self.found.min_weight().is_some_and(|best| extended > best) {
                continue;
            }
            let previous = self.weight;
            self.weight = extended;
            let outcome = self.visit(next);
            self.weight = previous;
            outcome?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(count: usize) -> WeightedGraph {
        WeightedGraph::with_nodes((0..count).map(|id| id.to_string()).collect())
    }

    #[test]
    fn no_route_between_disconnected_nodes() {
        let g = graph(2);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        assert!(found.is_empty());
        assert_eq!(found.min_weight(), None);
    }

    #[test]
    fn same_node_yields_single_zero_weight_route() {
        let mut g = graph(3);
        g.add_link(0, 1, 2);
        let found = RouteExplorer::search(&g, 1, 1).unwrap();
        assert_eq!(found.routes(), [vec![1]]);
        assert_eq!(found.min_weight(), Some(0));
    }

    #[test]
    fn cheaper_two_hop_route_beats_direct_link() {
        let mut g = graph(3);
        g.add_link(0, 1, 1);
        g.add_link(1, 2, 1);
        g.add_link(0, 2, 5);
        let found = RouteExplorer::search(&g, 0, 2).unwrap();
        assert_eq!(found.min_weight(), Some(2));
        assert_eq!(found.routes(), [vec![0, 1, 2]]);
    }

    #[test]
    fn equal_weight_routes_are_all_enumerated() {
        // Two disjoint routes of weight 2 between 0 and 3.
        let mut g = graph(4);
        g.add_link(0, 1, 1);
        g.add_link(1, 3, 1);
        g.add_link(0, 2, 1);
        g.add_link(2, 3, 1);
        let found = RouteExplorer::search(&g, 0, 3).unwrap();
        assert_eq!(found.min_weight(), Some(2));
        assert_eq!(found.routes(), [vec![0, 1, 3], vec![0, 2, 3]]);
    }

    #[test]
    fn better_route_found_late_discards_earlier_ones() {
        // Neighbor order discovers the weight-4 route through node 1 before
        // the weight-2 route through node 2 is reached.
        let mut g = graph(4);
        g.add_arc(0, 1, 1);
        g.add_arc(1, 3, 3);
        g.add_arc(0, 2, 1);
        g.add_arc(2, 3, 1);
        let found = RouteExplorer::search(&g, 0, 3).unwrap();
        assert_eq!(found.min_weight(), Some(2));
        assert_eq!(found.routes(), [vec![0, 2, 3]]);
    }

    #[test]
    fn self_links_are_never_traversed() {
        let mut g = graph(2);
        g.add_arc(0, 0, 0);
        g.add_link(0, 1, 3);
        let found = RouteExplorer::search(&g, 0, 1).unwrap();
        assert_eq!(found.routes(), [vec![0, 1]]);
        assert_eq!(found.min_weight(), Some(3));
    }

    #[test]
    fn routes_never_revisit_a_node() {
        // Cycle 0-1-2 plus a spur to 3.
        let mut g = graph(4);
        g.add_link(0, 1, 1);
        g.add_link(1, 2, 1);
        g.add_link(2, 0, 1);
        g.add_link(2, 3, 1);
        let found = RouteExplorer::search(&g, 0, 3).unwrap();
        assert!(!found.is_empty());
        for route in found.routes() {
            let mut seen = vec![false; g.node_count()];
            for &node in route {
                assert!(!seen[node], "node {} repeated in {:?}", node, route);
                seen[node] = true;
            }
        }
    }

    #[test]
    fn sequential_searches_use_fresh_state() {
        let mut g = graph(4);
        g.add_link(0, 1, 1);
        g.add_link(1, 2, 1);
        g.add_link(2, 3, 1);
        let first = RouteExplorer::search(&g, 0, 3).unwrap();
        assert_eq!(first.routes(), [vec![0, 1, 2, 3]]);
        assert_eq!(first.min_weight(), Some(3));

        let second = RouteExplorer::search(&g, 0, 2).unwrap();
        assert_eq!(second.routes(), [vec![0, 1, 2]]);
        assert_eq!(second.min_weight(), Some(2));
    }

    #[test]
    fn zero_weight_links_are_admitted_by_the_bound() {
        // 0-1-2 is weight 0 and must displace the direct weight-1 link.
        let mut g = graph(3);
        g.add_link(0, 2, 1);
        g.add_link(0, 1, 0);
        g.add_link(1, 2, 0);
        let found = RouteExplorer::search(&g, 0, 2).unwrap();
        assert_eq!(found.min_weight(), Some(0));
        assert_eq!(found.routes(), [vec![0, 1, 2]]);
    }
}
