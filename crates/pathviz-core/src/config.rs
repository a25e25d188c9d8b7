//! Run configuration: [`GridConfig`].

use std::time::Duration;

/// Edge length of the square grid when nothing else is configured.
pub const DEFAULT_GRID_SIZE: i32 = 10;

/// Pause between replayed visit events. Purely cosmetic.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);

/// Configuration shared by the search engine and its consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Edge length of the square grid.
    pub grid_size: i32,
    /// Pacing between visitation events when a run is replayed.
    pub step_delay: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl GridConfig {
    /// Set the grid edge length. Values below 1 are clamped to 1.
    pub fn with_grid_size(mut self, size: i32) -> Self {
        self.grid_size = size.max(1);
        self
    }

    /// Set the replay delay.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Total number of nodes in the grid.
    #[inline]
    pub fn node_count(&self) -> usize {
        let s = self.grid_size.max(0) as usize;
        s * s
    }
}
