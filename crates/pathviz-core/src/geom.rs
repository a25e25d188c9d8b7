//! Grid coordinates: [`Node`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A cell of the search grid. X grows right, Y grows down (screen coordinates).
///
/// Nodes are plain values: two nodes are equal (and hash the same) iff both
/// coordinates match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new node.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a node shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether both coordinates lie in `[0, size)`.
    #[inline]
    pub fn in_square(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Whether `other` differs by exactly one step on exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Node) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

// --- trait impls for Node ---

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Node {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Node {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn node_arithmetic() {
        let a = Node::new(1, 2);
        let b = Node::new(3, 4);
        assert_eq!(a + b, Node::new(4, 6));
        assert_eq!(a.shift(-1, 1), Node::new(0, 3));
    }

    #[test]
    fn structural_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Node::new(2, 3));
        assert!(set.contains(&Node::from((2, 3))));
        assert!(!set.contains(&Node::new(3, 2)));
    }

    #[test]
    fn in_square_bounds() {
        assert!(Node::new(0, 0).in_square(10));
        assert!(Node::new(9, 9).in_square(10));
        assert!(!Node::new(10, 0).in_square(10));
        assert!(!Node::new(0, -1).in_square(10));
    }

    #[test]
    fn adjacency_is_single_axis() {
        let n = Node::new(4, 4);
        assert!(n.is_adjacent(Node::new(3, 4)));
        assert!(n.is_adjacent(Node::new(4, 5)));
        assert!(!n.is_adjacent(Node::new(5, 5)));
        assert!(!n.is_adjacent(n));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Node::new(1, 1), Node::new(0, 1), Node::new(5, 0)];
        v.sort();
        assert_eq!(v, vec![Node::new(5, 0), Node::new(0, 1), Node::new(1, 1)]);
    }

    #[test]
    fn display() {
        assert_eq!(Node::new(2, 7).to_string(), "(2, 7)");
    }
}
