//! Searches running on a worker thread, streaming events over a channel.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use pathviz_core::{Context, GridConfig, Node};

use crate::algorithm::Algorithm;
use crate::engine::Engine;
use crate::error::SearchError;
use crate::report::{ChannelReporter, SearchEvent};

/// Events the worker may run ahead of the consumer before blocking.
pub const EVENT_BUFFER: usize = 16;

/// Handle to a search started with [`spawn_search`].
pub struct SearchHandle {
    ctx: Context,
    events: Receiver<SearchEvent>,
    thread: JoinHandle<Result<(), SearchError>>,
}

impl SearchHandle {
    /// Abort token of the running search.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Stop further expansion. The search still reports an (empty) path.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    /// Events as they are emitted. The channel closes when the search ends.
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// Wait for the worker and return its result.
    pub fn join(self) -> Result<(), SearchError> {
        drop(self.events);
        self.thread
            .join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e))
    }
}

/// Run `algorithm` on the grid described by `cfg` on a new thread.
///
/// The event channel is bounded, so a slow consumer paces the search.
pub fn spawn_search(cfg: GridConfig, algorithm: Algorithm, start: Node, end: Node) -> SearchHandle {
    let ctx = Context::new();
    let (tx, rx) = mpsc::sync_channel(EVENT_BUFFER);
    let worker_ctx = ctx.clone();
    let thread = thread::spawn(move || {
        let engine = Engine::from_config(&cfg).with_context(worker_ctx.clone());
        let mut reporter = ChannelReporter::new(tx, worker_ctx);
        engine.run(algorithm, start, end, &mut reporter)
    });
    SearchHandle {
        ctx,
        events: rx,
        thread,
    }
}
