//! Graph search on a square grid, with step-by-step progress reporting.
//!
//! Three searches are provided, all driven through an [`Engine`]:
//!
//! - **BFS** over partial paths ([`Engine::bfs`]), shortest by edge count
//! - **DFS** over partial paths ([`Engine::dfs`]), first path found
//! - **Dijkstra** with a stable binary-heap [`PriorityQueue`] ([`Engine::dijkstra`])
//!
//! Each run emits one [`Reporter::on_visit`] per expanded node and exactly
//! one [`Reporter::on_path`] at the end. Runs are synchronous; record them
//! with [`Engine::record`] and [`SearchLog::replay`] the log to animate, or
//! use [`spawn_search`] to stream events from a worker thread.
//!
//! # Quick example
//!
//! ```
//! use pathviz_core::Node;
//! use pathviz_search::{Algorithm, Engine};
//!
//! let engine = Engine::default();
//! let log = engine.record(Algorithm::Bfs, Node::new(0, 0), Node::new(2, 0)).unwrap();
//! assert_eq!(log.path().map(|p| p.len()), Some(3));
//! ```

mod algorithm;
mod background;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod error;
mod grid;
mod queue;
mod record;
mod report;
mod traits;

pub use algorithm::{Algorithm, AlgorithmInfo, UnknownAlgorithm};
pub use background::{EVENT_BUFFER, SearchHandle, spawn_search};
pub use dijkstra::UNREACHABLE;
pub use distance::manhattan;
pub use engine::Engine;
pub use error::{EmptyQueueError, SearchError};
pub use grid::Grid;
pub use queue::PriorityQueue;
pub use record::{SearchLog, SearchSummary};
pub use report::{Callbacks, ChannelReporter, Reporter, SearchEvent};
pub use traits::Topology;
