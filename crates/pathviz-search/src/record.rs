//! Run recording and paced playback.
//!
//! A [`SearchLog`] is a [`Reporter`] that keeps every event of a run in
//! order. Searches run synchronously; animation is done afterwards by
//! [`replay`](SearchLog::replay)ing the log at the caller's pace.

use std::fmt;
use std::thread;
use std::time::Duration;

use pathviz_core::Node;

use crate::report::{Reporter, SearchEvent};

/// Outcome counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSummary {
    /// Number of nodes in the reported path (0 if none was found).
    pub path_len: usize,
    /// Number of expanded nodes.
    pub visited: usize,
}

impl SearchSummary {
    /// Whether a path was reported.
    pub fn found(&self) -> bool {
        self.path_len > 0
    }
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Path length: {}\nNodes visited: {}",
            self.path_len, self.visited
        )
    }
}

/// Ordered record of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLog {
    events: Vec<SearchEvent>,
}

impl SearchLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in emission order.
    #[inline]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Expanded nodes, in expansion order.
    pub fn visited(&self) -> impl Iterator<Item = Node> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            SearchEvent::Visit(n) => Some(*n),
            SearchEvent::Path(_) => None,
        })
    }

    /// The reported path, or `None` while the run has not finished.
    pub fn path(&self) -> Option<&[Node]> {
        self.events.iter().rev().find_map(|ev| match ev {
            SearchEvent::Path(p) => Some(p.as_slice()),
            SearchEvent::Visit(_) => None,
        })
    }

    /// Path length and visited count.
    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            path_len: self.path().map_or(0, <[Node]>::len),
            visited: self.visited().count(),
        }
    }

    /// Re-emit every event into `reporter`, sleeping `delay` after each
    /// visit event.
    pub fn replay<R: Reporter + ?Sized>(&self, delay: Duration, reporter: &mut R) {
        for ev in &self.events {
            match ev {
                SearchEvent::Visit(n) => {
                    reporter.on_visit(*n);
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                }
                SearchEvent::Path(p) => reporter.on_path(p),
            }
        }
    }
}

impl Reporter for SearchLog {
    fn on_visit(&mut self, node: Node) {
        self.events.push(SearchEvent::Visit(node));
    }

    fn on_path(&mut self, path: &[Node]) {
        self.events.push(SearchEvent::Path(path.to_vec()));
    }
}

impl Extend<SearchEvent> for SearchLog {
    fn extend<I: IntoIterator<Item = SearchEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl FromIterator<SearchEvent> for SearchLog {
    fn from_iter<I: IntoIterator<Item = SearchEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn sample() -> SearchLog {
        let mut log = SearchLog::new();
        log.on_visit(Node::new(0, 0));
        log.on_visit(Node::new(1, 0));
        log.on_path(&[Node::new(0, 0), Node::new(1, 0)]);
        log
    }

    #[test]
    fn accessors() {
        let log = sample();
        assert_eq!(log.events().len(), 3);
        assert_eq!(log.visited().count(), 2);
        assert_eq!(log.path().map(<[Node]>::len), Some(2));
        assert_eq!(
            log.summary(),
            SearchSummary {
                path_len: 2,
                visited: 2
            }
        );
        assert!(log.summary().found());
    }

    #[test]
    fn unfinished_log_has_no_path() {
        let mut log = SearchLog::new();
        log.on_visit(Node::ZERO);
        assert_eq!(log.path(), None);
        assert!(!log.summary().found());
    }

    #[test]
    fn replay_reproduces_events() {
        let log = sample();
        let mut copy = SearchLog::new();
        log.replay(Duration::ZERO, &mut copy);
        assert_eq!(copy, log);
    }

    #[test]
    fn replay_paces_visits() {
        let log = sample();
        let mut copy = SearchLog::new();
        let t0 = Instant::now();
        log.replay(Duration::from_millis(5), &mut copy);
        assert!(t0.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn summary_display() {
        let s = SearchSummary {
            path_len: 3,
            visited: 4,
        };
        assert_eq!(s.to_string(), "Path length: 3\nNodes visited: 4");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn log_round_trip() {
        let mut log = SearchLog::new();
        log.on_visit(Node::new(2, 3));
        log.on_path(&[]);
        let json = serde_json::to_string(&log).unwrap();
        let back: SearchLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }
}
