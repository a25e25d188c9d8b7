use pathviz_core::Node;

use crate::bfs::Discipline;
use crate::engine::Engine;
use crate::error::SearchError;
use crate::report::Reporter;
use crate::traits::Topology;

impl<T: Topology> Engine<T> {
    /// Depth-first search from `start` to `end`.
    ///
    /// Same shape as [`bfs`](Self::bfs) with a LIFO frontier: the first path
    /// that reaches `end` is reported, which need not be a shortest one.
    pub fn dfs<R: Reporter + ?Sized>(
        &self,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) -> Result<(), SearchError> {
        self.check_endpoints(start, end)?;
        self.walk_paths(Discipline::Lifo, start, end, reporter);
        Ok(())
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
    fn corner_walk_is_not_minimal() {
        // Down column 0, up column 1, then across.
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.dfs(n(0, 0), n(2, 0), &mut log).unwrap();

        let path = log.path().unwrap();
        assert_eq!(path.len(), 21);
        assert_eq!(path[9], n(0, 9));
        assert_eq!(path[10], n(1, 9));
        assert_eq!(path[19], n(1, 0));
        assert_eq!(path[20], n(2, 0));
        assert_eq!(log.visited().count(), 20);
    }

    #[test]
    fn same_node_reports_single_element_path() {
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.dfs(n(0, 9), n(0, 9), &mut log).unwrap();
        assert_eq!(log.path(), Some(&[n(0, 9)][..]));
        assert_eq!(log.visited().count(), 0);
    }

    #[test]
    fn adjacent_goal_pushed_last_is_found_first() {
        // Down is the last neighbor pushed, so it is popped first.
        let engine = Engine::default();
        let mut log = SearchLog::new();
        engine.dfs(n(3, 3), n(3, 4), &mut log).unwrap();
        assert_eq!(log.path(), Some(&[n(3, 3), n(3, 4)][..]));
        assert_eq!(log.visited().collect::<Vec<_>>(), vec![n(3, 3)]);
    }
}
