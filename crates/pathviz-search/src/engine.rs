use pathviz_core::{Context, GridConfig, Node};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::grid::Grid;
use crate::record::SearchLog;
use crate::report::Reporter;
use crate::traits::Topology;

/// Runs searches over a [`Topology`].
///
/// The engine itself holds no per-run state: every call to [`run`](Self::run)
/// (or one of the per-algorithm entry points) allocates its own frontier,
/// visited set and distance maps and drops them when it returns. The attached
/// [`Context`] is polled before each expansion; once cancelled, the run stops
/// and reports an empty path.
pub struct Engine<T = Grid> {
    pub(crate) topology: T,
    pub(crate) ctx: Context,
}

impl Engine<Grid> {
    /// Engine over the grid described by `cfg`.
    pub fn from_config(cfg: &GridConfig) -> Self {
        Self::new(Grid::from_config(cfg))
    }
}

impl Default for Engine<Grid> {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl<T: Topology> Engine<T> {
    /// Create an engine over `topology` with a fresh, non-cancelled context.
    pub fn new(topology: T) -> Self {
        Self {
            topology,
            ctx: Context::new(),
        }
    }

    /// Replace the abort token.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// The abort token polled by every run.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The node space searches run over.
    #[inline]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Run `algorithm` from `start` to `end`, reporting into `reporter`.
    pub fn run<R: Reporter + ?Sized>(
        &self,
        algorithm: Algorithm,
        start: Node,
        end: Node,
        reporter: &mut R,
    ) -> Result<(), SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(start, end, reporter),
            Algorithm::Dfs => self.dfs(start, end, reporter),
            Algorithm::Dijkstra => self.dijkstra(start, end, reporter),
        }
    }

    /// Run `algorithm` and return its complete, ordered event log.
    pub fn record(
        &self,
        algorithm: Algorithm,
        start: Node,
        end: Node,
    ) -> Result<SearchLog, SearchError> {
        let mut log = SearchLog::new();
        self.run(algorithm, start, end, &mut log)?;
        Ok(log)
    }

    /// Fail fast on endpoints outside the topology.
    pub(crate) fn check_endpoints(&self, start: Node, end: Node) -> Result<(), SearchError> {
        for n in [start, end] {
            if !self.topology.contains(n) {
                return Err(SearchError::InvalidNode(n));
            }
        }
        Ok(())
    }

    /// Report an empty path if the context was cancelled. Returns whether
    /// the run must stop.
    pub(crate) fn aborted<R: Reporter + ?Sized>(&self, name: &str, reporter: &mut R) -> bool {
        if !self.ctx.is_done() {
            return false;
        }
        log::warn!("{name}: aborted");
        reporter.on_path(&[]);
        true
    }
}
