use pathviz_core::Node;

/// Node space and adjacency the searches run over.
pub trait Topology {
    /// Whether `n` is a node of this topology.
    fn contains(&self, n: Node) -> bool;

    /// Append neighbors of `n` into `buf`, in a fixed order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, n: Node, buf: &mut Vec<Node>);

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, _from: Node, _to: Node) -> i32 {
        1
    }
}
