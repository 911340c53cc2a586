use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::state::State;
use crate::BikewayNetwork;

/// Path through the network graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    /// Visited nodes, `arcs.len() + 1` of them
    pub nodes: Vec<NodeIndex>,
    /// Traversed graph edges in order
    pub arcs: Vec<EdgeIndex>,
    pub cost: f64,
}

/// Dijkstra's algorithm between two nodes, skipping banned nodes and arcs.
///
/// Bit sets are indexed by `NodeIndex::index` and `EdgeIndex::index`.
/// Returns `None` if `target` is unreachable.
pub fn shortest_path(
    network: &BikewayNetwork,
    start: NodeIndex,
    target: NodeIndex,
    banned_nodes: &FixedBitSet,
    banned_arcs: &FixedBitSet,
) -> Option<GraphPath> {
    let graph = &network.graph;
    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.edges(node) {
            if banned_arcs.contains(edge.id().index()) {
                continue;
            }
            let next = edge.target();
            if banned_nodes.contains(next.index()) {
                continue;
            }
            let next_cost = cost + edge.weight().cost;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, edge.id());
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, edge.id());
                    }
                }
            }
        }
    }

    let cost = *distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut arcs = Vec::new();
    let mut nodes = vec![target];
    let mut current = target;
    while current != start {
        let arc = *predecessors.get(&current)?;
        let (from, _) = graph.edge_endpoints(arc)?;
        arcs.push(arc);
        nodes.push(from);
        current = from;
    }
    arcs.reverse();
    nodes.reverse();

    Some(GraphPath { nodes, arcs, cost })
}
