use std::collections::{HashMap, HashSet};

use pathviz_core::Node;

use crate::engine::Engine;
use crate::error::SearchError;
use crate::queue::PriorityQueue;
use crate::report::Reporter;
use crate::traits::Topology;

/// Sentinel distance for nodes not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

impl<T: Topology> Engine<T> {
    /// Weighted shortest-path search from `start` to `end`.
    ///
    /// Label-setting Dijkstra without decrease-key: improved neighbors are
    /// enqueued again and the stale copies are skipped when dequeued, since
    /// their node is already visited. On the unit-weight grid the reported
    /// path has the same length as the breadth-first one.
    pub fn dijkstra<R: Reporter + ?Sized>(
        &self,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) -> Result<(), SearchError> {
        self.dijkstra_counting(start, end, reporter).map(|_| ())
    }

    /// Body of [`dijkstra`](Self::dijkstra). Returns how many stale queue
    /// entries were dequeued and skipped.
    pub(crate) fn dijkstra_counting<R: Reporter + ?Sized>(
        &self,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) -> Result<usize, SearchError> {
        self.check_endpoints(start, end)?;
        log::debug!("dijkstra: {start} -> {end}");

        let mut distance: HashMap<Node, i32> = HashMap::new();
        let mut predecessor: HashMap<Node, Node> = HashMap::new();
        let mut visited: HashSet<Node> = HashSet::new();
        let mut open: PriorityQueue<Node> = PriorityQueue::new();

        distance.insert(start, 0);
        open.enqueue(start, 0);

        let mut nbuf = Vec::with_capacity(4);
        let mut stale = 0;

        while !open.is_empty() {
            if self.aborted("dijkstra", reporter) {
                return Ok(stale);
            }
            let (node, _) = open.dequeue()?;

            // Skip stale entries.
            if visited.contains(&node) {
                stale += 1;
                continue;
            }

            if node == end {
                let path = reconstruct(&predecessor, end);
                log::debug!(
                    "dijkstra: found path of {} nodes after {} expansions ({stale} stale)",
                    path.len(),
                    visited.len()
                );
                reporter.on_path(&path);
                return Ok(stale);
            }

            visited.insert(node);
            log::trace!("dijkstra: expand {node}");
            reporter.on_visit(node);

            let current = distance.get(&node).copied().unwrap_or(UNREACHABLE);
            nbuf.clear();
            self.topology.neighbors(node, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative = current.saturating_add(self.topology.cost(node, np));
                let known = distance.get(&np).copied().unwrap_or(UNREACHABLE);
                if tentative >= known {
                    continue;
                }
                distance.insert(np, tentative);
                predecessor.insert(np, node);
                open.enqueue(np, tentative);
            }
        }

        log::debug!(
            "dijkstra: no path after {} expansions ({stale} stale)",
            visited.len()
        );
        reporter.on_path(&[]);
        Ok(stale)
    }
}

/// Walk predecessor links back from `end` and return the path start-to-end.
fn reconstruct(predecessor: &HashMap<Node, Node>, end: Node) -> Vec<Node> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = predecessor.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
