use std::fmt;

use pathviz_core::Node;

/// Returned by [`PriorityQueue::dequeue`](crate::PriorityQueue::dequeue) when
/// the queue holds no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dequeue on an empty priority queue")
    }
}

impl std::error::Error for EmptyQueueError {}

/// Errors that abort a search run. A run that fails never reports a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end node lies outside the grid.
    InvalidNode(Node),
    /// The weighted search dequeued from an empty queue.
    EmptyQueue(EmptyQueueError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNode(n) => write!(f, "node {n} is outside the grid"),
            Self::EmptyQueue(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNode(_) => None,
            Self::EmptyQueue(e) => Some(e),
        }
    }
}

impl From<EmptyQueueError> for SearchError {
    fn from(e: EmptyQueueError) -> Self {
        Self::EmptyQueue(e)
    }
}
