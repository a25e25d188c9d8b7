//! Progress reporting: the sinks a search emits its events into.
//!
//! Every run calls [`Reporter::on_visit`] once per expanded node, in
//! expansion order, then [`Reporter::on_path`] exactly once. An empty path
//! means no path was found (or the run was aborted).

use std::sync::mpsc::SyncSender;

use pathviz_core::{Context, Node};

/// Receiver of search progress.
pub trait Reporter {
    /// A node was expanded.
    fn on_visit(&mut self, node: Node);

    /// The run finished. `path` runs start to end, or is empty.
    fn on_path(&mut self, path: &[Node]);
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// A [`Reporter`] made of two closures.
pub struct Callbacks<V, P> {
    on_visit: V,
    on_path: P,
}

impl<V, P> Callbacks<V, P>
where
    V: FnMut(Node),
    P: FnMut(&[Node]),
{
    /// Wrap a visit sink and a path sink.
    pub fn new(on_visit: V, on_path: P) -> Self {
        Self { on_visit, on_path }
    }
}

impl<V, P> Reporter for Callbacks<V, P>
where
    V: FnMut(Node),
    P: FnMut(&[Node]),
{
    fn on_visit(&mut self, node: Node) {
        (self.on_visit)(node)
    }

    fn on_path(&mut self, path: &[Node]) {
        (self.on_path)(path)
    }
}

// ---------------------------------------------------------------------------
// SearchEvent
// ---------------------------------------------------------------------------

/// One reported step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A node was expanded.
    Visit(Node),
    /// The terminal path (empty when none was found).
    Path(Vec<Node>),
}

// ---------------------------------------------------------------------------
// ChannelReporter
// ---------------------------------------------------------------------------

/// Forwards events over a bounded `mpsc` channel, blocking while it is full.
///
/// If the receiving side hangs up, the attached [`Context`] is cancelled so
/// the search stops expanding.
pub struct ChannelReporter {
    tx: SyncSender<SearchEvent>,
    ctx: Context,
}

impl ChannelReporter {
    pub fn new(tx: SyncSender<SearchEvent>, ctx: Context) -> Self {
        Self { tx, ctx }
    }

    fn send(&mut self, ev: SearchEvent) {
        if self.tx.send(ev).is_err() && !self.ctx.is_done() {
            log::debug!("event receiver dropped, cancelling search");
            self.ctx.cancel();
        }
    }
}

impl Reporter for ChannelReporter {
    fn on_visit(&mut self, node: Node) {
        self.send(SearchEvent::Visit(node));
    }

    fn on_path(&mut self, path: &[Node]) {
        self.send(SearchEvent::Path(path.to_vec()));
    }
}
