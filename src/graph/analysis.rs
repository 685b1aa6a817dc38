//! Graph analysis: topological ordering and shortest distances.
//!
//! # Topological order
//! Depth-first post-order with an explicit work stack (no recursion, so
//! deep dependency chains cannot exhaust the call stack). The result is
//! a valid topological order only on acyclic input. Cyclic input still
//! terminates and still yields every vertex exactly once, but the order
//! may violate edges inside the cycle; callers that need a guarantee
//! must validate their input separately.
//!
//! # Shortest distances
//! Textbook Dijkstra with a lazy-deletion frontier: stale heap entries
//! are discarded when popped instead of being excised on relaxation,
//! which keeps the heap index-free. All edge weights are workload
//! minutes, hence non-negative.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4, 24.3

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::DependencyGraph;
use crate::error::ScheduleError;

/// Computes a depth-first topological order over all vertices.
///
/// Vertices are visited in insertion order, out-neighbors in edge
/// insertion order, so the result is deterministic for a given build
/// sequence. Always returns every vertex exactly once.
pub fn topological_order(graph: &DependencyGraph) -> Vec<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut finished: Vec<String> = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if !visited.insert(root.as_str()) {
            continue;
        }
        // Each frame is (vertex, index of the next neighbor to try).
        let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            let neighbors = graph.neighbors(vertex);
            match neighbors.get(cursor) {
                Some((target, _)) => {
                    frame.1 += 1;
                    if visited.insert(target.as_str()) {
                        stack.push((target.as_str(), 0));
                    }
                }
                None => {
                    // All out-neighbors finished: post-order append.
                    finished.push(vertex.to_string());
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    finished
}

/// Computes single-source shortest distances from `start`.
///
/// Returns every vertex mapped to `Some(distance)` in workload minutes,
/// or `None` when unreachable from `start`. Distance to `start` itself
/// is always `Some(0)`.
///
/// # Errors
/// [`ScheduleError::UnknownStartVertex`] if `start` is not in the graph.
pub fn shortest_distances(
    graph: &DependencyGraph,
    start: &str,
) -> Result<HashMap<String, Option<i64>>, ScheduleError> {
    if !graph.contains(start) {
        return Err(ScheduleError::UnknownStartVertex(start.to_string()));
    }

    let mut dist: HashMap<&str, i64> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(i64, &str)>> = BinaryHeap::new();

    dist.insert(start, 0);
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((current_dist, vertex))) = frontier.pop() {
        if !settled.insert(vertex) {
            continue; // stale entry, lazily deleted
        }
        for (target, weight) in graph.neighbors(vertex) {
            let candidate = current_dist + weight;
            let best = dist.entry(target.as_str()).or_insert(i64::MAX);
            if candidate < *best {
                *best = candidate;
                frontier.push(Reverse((candidate, target.as_str())));
            }
        }
    }

    Ok(graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), dist.get(v.as_str()).copied()))
        .collect())
}
