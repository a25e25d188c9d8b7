use std::collections::{HashSet, VecDeque};

use pathviz_core::Node;

use crate::engine::Engine;
use crate::error::SearchError;
use crate::report::Reporter;
use crate::traits::Topology;

/// Which end of the frontier the next partial path is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Discipline {
    /// Earliest-enqueued first (breadth-first).
    Fifo,
    /// Latest-enqueued first (depth-first).
    Lifo,
}

impl Discipline {
    fn name(self) -> &'static str {
        match self {
            Self::Fifo => "bfs",
            Self::Lifo => "dfs",
        }
    }
}

impl<T: Topology> Engine<T> {
    /// Breadth-first search from `start` to `end`.
    ///
    /// The reported path is a shortest one by edge count. Each node is
    /// expanded at most once; `start == end` reports `[start]` without
    /// expanding anything.
    pub fn bfs<R: Reporter + ?Sized>(
        &self,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) -> Result<(), SearchError> {
        self.check_endpoints(start, end)?;
        self.walk_paths(Discipline::Fifo, start, end, reporter);
        Ok(())
    }

    /// Shared loop of the partial-path searches.
    pub(crate) fn walk_paths<R: Reporter + ?Sized>(
        &self,
        discipline: Discipline,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) {
        let name = discipline.name();
        log::debug!("{name}: {start} -> {end}");

        let mut frontier: VecDeque<Vec<Node>> = VecDeque::new();
        frontier.push_back(vec![start]);
        let mut visited: HashSet<Node> = HashSet::new();
        let mut nbuf = Vec::with_capacity(4);

        loop {
            if self.aborted(name, reporter) {
                return;
            }
            let next = match discipline {
                Discipline::Fifo => frontier.pop_front(),
                Discipline::Lifo => frontier.pop_back(),
            };
            let Some(path) = next else {
                break;
            };
            let Some(&node) = path.last() else {
                continue;
            };

            if node == end {
                log::debug!(
                    "{name}: found path of {} nodes after {} expansions",
                    path.len(),
                    visited.len()
                );
                reporter.on_path(&path);
                return;
            }

            if !visited.insert(node) {
                continue;
            }
            log::trace!("{name}: expand {node}");
            reporter.on_visit(node);

            nbuf.clear();
            self.topology.neighbors(node, &mut nbuf);
            for &np in nbuf.iter() {
                if visited.contains(&np) {
                    continue;
                }
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(np);
                frontier.push_back(extended);
            }
        }

        log::debug!("{name}: no path after {} expansions", visited.len());
        reporter.on_path(&[]);
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::Node;

    use crate::{Engine, SearchLog};

    fn n(x: i32, y: i32) -> Node {
        Node::new(x, y)
    }

    #[test]
    fn short_straight_path() {
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.bfs(n(0, 0), n(2, 0), &mut log).unwrap();
        assert_eq!(log.path(), Some(&[n(0, 0), n(1, 0), n(2, 0)][..]));
        // (0,0), (1,0), (0,1) are expanded before the goal path is dequeued.
        let visited: Vec<_> = log.visited().collect();
        assert_eq!(visited, vec![n(0, 0), n(1, 0), n(0, 1)]);
    }

    #[test]
    fn same_node_reports_single_element_path() {
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.bfs(n(4, 4), n(4, 4), &mut log).unwrap();
        assert_eq!(log.path(), Some(&[n(4, 4)][..]));
        assert_eq!(log.visited().count(), 0);
    }

    #[test]
    fn visits_in_layers() {
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.bfs(n(5, 5), n(9, 9), &mut log).unwrap();
        let dists: Vec<i32> = log
            .visited()
            .map(|v| crate::manhattan(n(5, 5), v))
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }
}
