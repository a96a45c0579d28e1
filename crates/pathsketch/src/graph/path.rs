use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{info, trace};

use super::GraphStore;
use super::types::{NodeId, PathError, ShortestPath};

/// Priority queue entry with deterministic ordering.
/// BinaryHeap is a max-heap, so the ordering is reversed (lowest distance = highest priority).
#[derive(Debug)]
struct PqEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for PqEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PqEntry {}

impl Ord for PqEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            // Same distance: settle the smaller id first.
            .then(other.node.cmp(&self.node))
    }
}

impl PartialOrd for PqEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk the predecessor chain back from `node` and return the path from the source.
fn reconstruct(came_from: &HashMap<NodeId, NodeId>, node: NodeId) -> Vec<NodeId> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(&parent) = came_from.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Find the minimum-weight path from `source` to `target` with Dijkstra's algorithm.
///
/// Among several minimum-weight paths the lexicographically smallest node sequence wins:
/// when a relaxation ties the current best distance, the predecessor is swapped if the
/// path through the new one compares smaller. This is exact for strictly positive weights;
/// with zero-weight edges the result is still minimal and deterministic.
///
/// # Errors
/// * `PathError::UnknownNode` if `source` or `target` is not in the graph (source checked first).
/// * `PathError::NoPath` if `target` is unreachable from `source`.
pub fn shortest_path(
    graph: &GraphStore,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath, PathError> {
    for id in [source, target] {
        if !graph.has_node(id) {
            return Err(PathError::UnknownNode(id));
        }
    }

    if source == target {
        return Ok(ShortestPath {
            nodes: vec![source],
            weight: 0.0,
        });
    }

    let mut open = BinaryHeap::new();
    let mut best: HashMap<NodeId, f64> = HashMap::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();

    best.insert(source, 0.0);
    open.push(PqEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(PqEntry { distance, node }) = open.pop() {
        // Stale entry: a shorter distance was pushed after this one.
        if !settled.insert(node) {
            continue;
        }
        trace!(%node, distance, "settled");

        if node == target {
            let path = ShortestPath {
                nodes: reconstruct(&came_from, target),
                weight: distance,
            };
            info!(%source, %target, weight = path.weight, path = %path, "shortest path found");
            return Ok(path);
        }

        for (neighbor, weight) in graph.neighbors(node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = distance + weight;

            match best.get(&neighbor) {
                Some(&current) if candidate > current => {}
                Some(&current) if candidate == current => {
                    // Equal distance: keep whichever route reads smaller.
                    let mut through_node = reconstruct(&came_from, node);
                    through_node.push(neighbor);
                    if through_node < reconstruct(&came_from, neighbor) {
                        came_from.insert(neighbor, node);
                    }
                }
                _ => {
                    best.insert(neighbor, candidate);
                    came_from.insert(neighbor, node);
                    open.push(PqEntry {
                        distance: candidate,
                        node: neighbor,
                    });
                }
            }
        }
    }

    Err(PathError::NoPath {
        from: source,
        to: target,
    })
}
