//! Yen's k-shortest loopless paths

use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use log::trace;
use petgraph::graph::NodeIndex;

use super::dijkstra::{GraphPath, shortest_path};
use crate::BikewayNetwork;

/// Up to `k` simple paths from `source` to `target`, ordered by ascending cost.
///
/// Paths of equal cost are ordered by arc count, then by arc indices, so the
/// answer is stable for a given network.
pub fn yen_k_shortest_paths(
    network: &BikewayNetwork,
    source: NodeIndex,
    target: NodeIndex,
    k: usize,
) -> Vec<GraphPath> {
    if k == 0 || source == target {
        return Vec::new();
    }

    let graph = &network.graph;
    let node_bound = graph.node_count();
    let arc_bound = graph.edge_count();

    let Some(first) = shortest_path(
        network,
        source,
        target,
        &FixedBitSet::with_capacity(node_bound),
        &FixedBitSet::with_capacity(arc_bound),
    ) else {
        return Vec::new();
    };

    let mut accepted = vec![first];
    let mut candidates: Vec<GraphPath> = Vec::new();

    while accepted.len() < k {
        let previous = &accepted[accepted.len() - 1];

        for spur_idx in 0..previous.arcs.len() {
            let spur_node = previous.nodes[spur_idx];
            let root_nodes = &previous.nodes[..=spur_idx];
            let root_arcs = &previous.arcs[..spur_idx];

            // Arcs leaving the spur node along any accepted path sharing this root
            let mut banned_arcs = FixedBitSet::with_capacity(arc_bound);
            for path in &accepted {
                if path.arcs.len() > spur_idx && path.nodes[..=spur_idx] == *root_nodes {
                    banned_arcs.insert(path.arcs[spur_idx].index());
                }
            }

            // Root nodes other than the spur node keep the path loopless
            let mut banned_nodes = FixedBitSet::with_capacity(node_bound);
            for node in &root_nodes[..spur_idx] {
                banned_nodes.insert(node.index());
            }

            let Some(spur) = shortest_path(network, spur_node, target, &banned_nodes, &banned_arcs)
            else {
                continue;
            };

            let root_cost: f64 = root_arcs.iter().map(|&arc| graph[arc].cost).sum();
            let mut nodes = root_nodes.to_vec();
            nodes.extend_from_slice(&spur.nodes[1..]);
            let mut arcs = root_arcs.to_vec();
            arcs.extend_from_slice(&spur.arcs);

            let candidate = GraphPath {
                nodes,
                arcs,
                cost: root_cost + spur.cost,
            };

            let known = accepted
                .iter()
                .chain(candidates.iter())
                .any(|p| p.arcs == candidate.arcs);
            if !known {
                candidates.push(candidate);
            }
        }

        let Some(best) = candidates.iter().position_min_by(|a, b| compare_paths(a, b)) else {
            break;
        };
        let path = candidates.swap_remove(best);
        trace!(
            "Accepted alternative {} with {} arcs, cost {:.3}",
            accepted.len(),
            path.arcs.len(),
            path.cost
        );
        accepted.push(path);
    }

    accepted
}

fn compare_paths(a: &GraphPath, b: &GraphPath) -> Ordering {
    a.cost
        .total_cmp(&b.cost)
        .then_with(|| a.arcs.len().cmp(&b.arcs.len()))
        .then_with(|| {
            a.arcs
                .iter()
                .map(|arc| arc.index())
                .cmp(b.arcs.iter().map(|arc| arc.index()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometryFormat, test_fixtures::ladder_network};

    fn edge_ids(network: &BikewayNetwork, path: &GraphPath) -> Vec<u64> {
        path.arcs
            .iter()
            .map(|&arc| network.edges[network.graph[arc].edge].id)
            .collect()
    }

    fn ksp(network: &BikewayNetwork, from: u64, to: u64, k: usize) -> Vec<GraphPath> {
        yen_k_shortest_paths(
            network,
            network.node_index(from).unwrap(),
            network.node_index(to).unwrap(),
            k,
        )
    }

    #[test]
    fn three_alternatives_in_cost_order() {
        let network = ladder_network(GeometryFormat::GeoJson);
        let paths = ksp(&network, 1, 6, 3);

        let ids: Vec<_> = paths.iter().map(|p| edge_ids(&network, p)).collect();
        assert_eq!(ids, vec![vec![1, 2, 8], vec![1, 7, 5], vec![6, 4, 5]]);

        let costs: Vec<f64> = paths.iter().map(|p| p.cost).collect();
        assert!((costs[0] - 3.0).abs() < 1e-9);
        assert!((costs[1] - 3.2).abs() < 1e-9);
        assert!((costs[2] - 3.5).abs() < 1e-9);
    }

    #[test]
    fn returns_fewer_than_k_when_exhausted() {
        let network = ladder_network(GeometryFormat::GeoJson);
        let paths = ksp(&network, 1, 6, 10);

        assert_eq!(paths.len(), 4);
        assert_eq!(edge_ids(&network, &paths[3]), vec![6, 4, 7, 2, 8]);
        assert!(paths.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn paths_are_loopless() {
        let network = ladder_network(GeometryFormat::GeoJson);
        for path in ksp(&network, 1, 6, 10) {
            assert!(path.nodes.iter().all_unique());
            assert_eq!(path.nodes.len(), path.arcs.len() + 1);
        }
    }

    #[test]
    fn unreachable_target_yields_nothing() {
        let network = ladder_network(GeometryFormat::GeoJson);
        assert!(ksp(&network, 1, 8, 3).is_empty());
        assert!(ksp(&network, 8, 7, 3).is_empty());
    }

    #[test]
    fn zero_k_or_same_node_yields_nothing() {
        let network = ladder_network(GeometryFormat::GeoJson);
        assert!(ksp(&network, 1, 6, 0).is_empty());
        assert!(ksp(&network, 2, 2, 3).is_empty());
    }
}
