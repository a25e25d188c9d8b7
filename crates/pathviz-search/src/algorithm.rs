//! The catalogue of available searches.

use std::fmt;
use std::str::FromStr;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search over partial paths.
    #[default]
    Bfs,
    /// Depth-first search over partial paths.
    Dfs,
    /// Weighted shortest-path search with a priority queue.
    Dijkstra,
}

/// Human-readable description of an [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub properties: &'static [&'static str],
}

const BFS_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Breadth-First Search (BFS)",
    description: "BFS explores all the neighbor nodes at the present depth \
                  prior to moving on to the nodes at the next depth level.",
    properties: &[
        "Guaranteed to find the shortest path in an unweighted graph",
        "Time Complexity: O(V + E) where V is the number of vertices and E is the number of edges",
        "Space Complexity: O(V)",
    ],
};

const DFS_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Depth-First Search (DFS)",
    description: "DFS explores as far as possible along each branch before backtracking.",
    properties: &[
        "Not guaranteed to find the shortest path",
        "Time Complexity: O(V + E)",
        "Space Complexity: O(V)",
    ],
};

const DIJKSTRA_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Dijkstra's Algorithm",
    description: "Dijkstra's algorithm finds the shortest path between nodes \
                  in a graph with non-negative edge weights.",
    properties: &[
        "Guaranteed to find the shortest path in a weighted graph with non-negative weights",
        "Time Complexity: O((V + E) log V) with a binary heap",
        "Space Complexity: O(V)",
    ],
};

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dfs, Self::Dijkstra];

    /// Short lowercase key, as accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Display name, description and properties.
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Self::Bfs => &BFS_INFO,
            Self::Dfs => &DFS_INFO,
            Self::Dijkstra => &DIJKSTRA_INFO,
        }
    }

    /// Whether the reported path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognized algorithm key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs or dijkstra)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
