//! The square grid topology.

use pathviz_core::{GridConfig, Node};

use crate::traits::Topology;

/// Offsets in neighbor order: left, right, up, down.
const DIRS: [Node; 4] = [
    Node::new(-1, 0),
    Node::new(1, 0),
    Node::new(0, -1),
    Node::new(0, 1),
];

/// An implicit `size × size` grid with 4-directional unit-weight adjacency.
///
/// Nothing is stored per node; neighbors are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    /// Create a grid with the given edge length (at least 1).
    pub fn new(size: i32) -> Self {
        Self { size: size.max(1) }
    }

    /// Create the grid described by `cfg`.
    pub fn from_config(cfg: &GridConfig) -> Self {
        Self::new(cfg.grid_size)
    }

    /// Edge length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Always `false`: a grid has at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major iterator over every node.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Node::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

impl Topology for Grid {
    #[inline]
    fn contains(&self, n: Node) -> bool {
        n.in_square(self.size)
    }

    fn neighbors(&self, n: Node, buf: &mut Vec<Node>) {
        for d in DIRS {
            let m = n + d;
            if self.contains(m) {
                buf.push(m);
            }
        }
    }
}
