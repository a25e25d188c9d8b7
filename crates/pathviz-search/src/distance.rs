use pathviz_core::Node;

/// Manhattan (L1) distance between two nodes.
#[inline]
pub fn manhattan(a: Node, b: Node) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
