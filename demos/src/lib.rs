//! Terminal front-end for the grid searches.
//!
//! Demonstrates: recording a run, replaying it at the configured step delay,
//! and drawing the board (start, end, visited nodes, final path) with
//! crossterm. Endpoints come from the command line or are picked at random.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::{GridConfig, Node};
use pathviz_search::{Algorithm, Grid, Reporter, SearchSummary, Topology, UnknownAlgorithm};
use rand::{Rng, RngExt};

/// Overrides the replay delay, in milliseconds.
pub const STEP_DELAY_ENV: &str = "PATHVIZ_STEP_DELAY_MS";
/// Overrides the grid edge length.
pub const GRID_SIZE_ENV: &str = "PATHVIZ_GRID_SIZE";

pub const USAGE: &str = "usage: pathviz [bfs|dfs|dijkstra] [START_X START_Y END_X END_Y]";

// ---------------------------------------------------------------------------
// EndpointPicker
// ---------------------------------------------------------------------------

/// Endpoint selection: the first pick sets the start, the second the end,
/// and later picks are ignored until [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointPicker {
    start: Option<Node>,
    end: Option<Node>,
}

impl EndpointPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a node. Returns whether it was taken.
    pub fn pick(&mut self, n: Node) -> bool {
        if self.start.is_none() {
            self.start = Some(n);
            true
        } else if self.end.is_none() {
            self.end = Some(n);
            true
        } else {
            false
        }
    }

    pub fn start(&self) -> Option<Node> {
        self.start
    }

    pub fn end(&self) -> Option<Node> {
        self.end
    }

    /// Both endpoints, once picked.
    pub fn endpoints(&self) -> Option<(Node, Node)> {
        Some((self.start?, self.end?))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pick two uniformly random nodes of `grid`.
    pub fn pick_random(&mut self, grid: &Grid, rng: &mut impl Rng) {
        while self.endpoints().is_none() {
            let n = Node::new(
                rng.random_range(0..grid.size()),
                rng.random_range(0..grid.size()),
            );
            self.pick(n);
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// What a board cell shows, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Start,
    End,
    Path,
    Visited,
    Empty,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
            Self::Visited => 'o',
            Self::Empty => '.',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Start => Color::Green,
            Self::End => Color::Red,
            Self::Path => Color::Yellow,
            Self::Visited => Color::Blue,
            Self::Empty => Color::DarkGrey,
        }
    }
}

/// Display state fed by a search: visited nodes accumulate, the path is set
/// once at the end.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    start: Node,
    end: Node,
    visited: HashSet<Node>,
    visit_count: usize,
    path: Option<Vec<Node>>,
}

impl Board {
    pub fn new(grid: Grid, start: Node, end: Node) -> Self {
        Self {
            grid,
            start,
            end,
            visited: HashSet::new(),
            visit_count: 0,
            path: None,
        }
    }

    /// Mark of the cell at `n`.
    pub fn mark(&self, n: Node) -> Mark {
        if n == self.start {
            Mark::Start
        } else if n == self.end {
            Mark::End
        } else if self.path.as_ref().is_some_and(|p| p.contains(&n)) {
            Mark::Path
        } else if self.visited.contains(&n) {
            Mark::Visited
        } else {
            Mark::Empty
        }
    }

    /// Whether the final path has been reported.
    pub fn is_finished(&self) -> bool {
        self.path.is_some()
    }

    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            path_len: self.path.as_ref().map_or(0, Vec::len),
            visited: self.visit_count,
        }
    }

    /// Draw the board at the top-left of the terminal.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
        for y in 0..self.grid.size() {
            for x in 0..self.grid.size() {
                let m = self.mark(Node::new(x, y));
                queue!(
                    out,
                    SetForegroundColor(m.color()),
                    Print(m.glyph()),
                    Print(' ')
                )?;
            }
            queue!(out, ResetColor, Print("\r\n"))?;
        }
        out.flush()
    }
}

impl Reporter for Board {
    fn on_visit(&mut self, node: Node) {
        if self.grid.contains(node) && self.visited.insert(node) {
            self.visit_count += 1;
        }
    }

    fn on_path(&mut self, path: &[Node]) {
        self.path = Some(path.to_vec());
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.size() {
            let row: String = (0..self.grid.size())
                .map(|x| self.mark(Node::new(x, y)).glyph())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Board that redraws itself on every event.
pub struct LiveBoard<W: Write> {
    pub board: Board,
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LiveBoard<W> {
    pub fn new(board: Board, out: W) -> Self {
        Self {
            board,
            out,
            error: None,
        }
    }

    /// First drawing error, if any. Drawing stops after an error.
    pub fn finish(self) -> io::Result<Board> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.board),
        }
    }

    fn redraw(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.board.draw(&mut self.out) {
            log::warn!("redraw failed: {e}");
            self.error = Some(e);
        }
    }
}

impl<W: Write> Reporter for LiveBoard<W> {
    fn on_visit(&mut self, node: Node) {
        self.board.on_visit(node);
        self.redraw();
    }

    fn on_path(&mut self, path: &[Node]) {
        self.board.on_path(path);
        self.redraw();
    }
}

// ---------------------------------------------------------------------------
// Arguments and configuration
// ---------------------------------------------------------------------------

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoArgs {
    pub algorithm: Algorithm,
    pub endpoints: Option<(Node, Node)>,
}

/// Errors from [`parse_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Coordinates were given but not exactly four.
    CoordinateCount(usize),
    /// A coordinate is not an integer.
    InvalidCoordinate(String),
    /// The algorithm key is unknown.
    UnknownAlgorithm(UnknownAlgorithm),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateCount(n) => write!(f, "expected 4 coordinates, got {n}\n{USAGE}"),
            Self::InvalidCoordinate(s) => write!(f, "invalid coordinate \u{201c}{s}\u{201d}\n{USAGE}"),
            Self::UnknownAlgorithm(e) => write!(f, "{e}\n{USAGE}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownAlgorithm(e) => Some(e),
            Self::CoordinateCount(_) | Self::InvalidCoordinate(_) => None,
        }
    }
}

impl From<UnknownAlgorithm> for ArgsError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::UnknownAlgorithm(e)
    }
}

/// Parse `[algorithm] [sx sy ex ey]` (program name excluded).
pub fn parse_args<I, S>(args: I) -> Result<DemoArgs, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let mut rest = args.as_slice();

    let mut algorithm = Algorithm::default();
    if let Some(first) = rest.first() {
        if first.parse::<i32>().is_err() {
            algorithm = first.parse()?;
            rest = &rest[1..];
        }
    }

    let endpoints = match rest.len() {
        0 => None,
        4 => {
            let mut c = [0i32; 4];
            for (slot, s) in c.iter_mut().zip(rest) {
                *slot = s
                    .parse()
                    .map_err(|_| ArgsError::InvalidCoordinate(s.clone()))?;
            }
            Some((Node::new(c[0], c[1]), Node::new(c[2], c[3])))
        }
        n => return Err(ArgsError::CoordinateCount(n)),
    };

    Ok(DemoArgs {
        algorithm,
        endpoints,
    })
}

/// Apply the environment overrides to the default configuration. Malformed
/// values are logged and ignored.
pub fn config_from_env<F>(lookup: F) -> GridConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = GridConfig::default();
    if let Some(v) = lookup(STEP_DELAY_ENV) {
        match v.trim().parse::<u64>() {
            Ok(ms) => cfg = cfg.with_step_delay(Duration::from_millis(ms)),
            Err(e) => log::warn!("ignoring {STEP_DELAY_ENV}={v}: {e}"),
        }
    }
    if let Some(v) = lookup(GRID_SIZE_ENV) {
        match v.trim().parse::<i32>() {
            Ok(size) if size > 0 => cfg = cfg.with_grid_size(size),
            Ok(size) => log::warn!("ignoring {GRID_SIZE_ENV}={size}: must be positive"),
            Err(e) => log::warn!("ignoring {GRID_SIZE_ENV}={v}: {e}"),
        }
    }
    cfg
}

/// Text block shown under the board once a run is over.
pub fn results_text(algorithm: Algorithm, summary: SearchSummary) -> String {
    let info = algorithm.info();
    let mut s = String::new();
    s.push_str("Results\r\n");
    s.push_str(&summary.to_string().replace('\n', "\r\n"));
    if !summary.found() {
        s.push_str("\r\nNo path found.");
    }
    s.push_str("\r\n\r\n");
    s.push_str(info.name);
    s.push_str("\r\n");
    s.push_str(info.description);
    for p in info.properties {
        s.push_str("\r\n  - ");
        s.push_str(p);
    }
    s.push_str("\r\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_search::Engine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picker_takes_two_then_ignores() {
        let mut p = EndpointPicker::new();
        assert!(p.endpoints().is_none());
        assert!(p.pick(Node::new(1, 1)));
        assert_eq!(p.start(), Some(Node::new(1, 1)));
        assert!(p.pick(Node::new(2, 2)));
        assert!(!p.pick(Node::new(3, 3)));
        assert_eq!(p.endpoints(), Some((Node::new(1, 1), Node::new(2, 2))));
        p.reset();
        assert_eq!(p.end(), None);
    }

    #[test]
    fn random_picks_are_in_grid() {
        let grid = Grid::new(4);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let mut p = EndpointPicker::new();
            p.pick_random(&grid, &mut rng);
            let (s, e) = p.endpoints().unwrap();
            assert!(grid.contains(s) && grid.contains(e));
        }
    }

    #[test]
    fn board_text_after_run() {
        let grid = Grid::new(3);
        let engine = Engine::new(grid);
        let mut board = Board::new(grid, Node::new(0, 0), Node::new(2, 0));
        engine
            .bfs(Node::new(0, 0), Node::new(2, 0), &mut board)
            .unwrap();
        assert!(board.is_finished());
        assert_eq!(board.to_string(), "S*E\no..\n...\n");
        assert_eq!(
            board.summary(),
            SearchSummary {
                path_len: 3,
                visited: 3
            }
        );
    }

    #[test]
    fn board_draws_ansi() {
        let grid = Grid::new(2);
        let board = Board::new(grid, Node::new(0, 0), Node::new(1, 1));
        let mut out = Vec::new();
        board.draw(&mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains('S'));
        assert!(s.contains('E'));
        assert_eq!(s.matches("\r\n").count(), 2);
    }

    #[test]
    fn parse_variants() {
        let none: [&str; 0] = [];
        assert_eq!(
            parse_args(none),
            Ok(DemoArgs {
                algorithm: Algorithm::Bfs,
                endpoints: None
            })
        );
        assert_eq!(
            parse_args(["dfs"]).map(|a| a.algorithm),
            Ok(Algorithm::Dfs)
        );
        assert_eq!(
            parse_args(["dijkstra", "0", "1", "2", "3"]),
            Ok(DemoArgs {
                algorithm: Algorithm::Dijkstra,
                endpoints: Some((Node::new(0, 1), Node::new(2, 3)))
            })
        );
        assert_eq!(
            parse_args(["4", "4", "0", "0"]).map(|a| a.endpoints),
            Ok(Some((Node::new(4, 4), Node::new(0, 0))))
        );
        assert_eq!(
            parse_args(["bfs", "1", "2"]),
            Err(ArgsError::CoordinateCount(2))
        );
        assert_eq!(
            parse_args(["bfs", "1", "x", "2", "3"]),
            Err(ArgsError::InvalidCoordinate("x".into()))
        );
        assert_eq!(
            parse_args(["astar"]),
            Err(ArgsError::UnknownAlgorithm(UnknownAlgorithm("astar".into())))
        );
    }

    #[test]
    fn unknown_algorithm_is_the_source() {
        use std::error::Error;

        let err = parse_args(["astar", "0", "0", "1", "1"]).unwrap_err();
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            UnknownAlgorithm("astar".into()).to_string()
        );
        assert!(err.to_string().starts_with(&source.to_string()));
        assert!(err.to_string().ends_with(USAGE));
        assert!(ArgsError::CoordinateCount(1).source().is_none());
    }

    #[test]
    fn env_overrides() {
        let cfg = config_from_env(|k| match k {
            STEP_DELAY_ENV => Some("0".into()),
            GRID_SIZE_ENV => Some("12".into()),
            _ => None,
        });
        assert_eq!(cfg.step_delay, Duration::ZERO);
        assert_eq!(cfg.grid_size, 12);

        let cfg = config_from_env(|k| match k {
            STEP_DELAY_ENV => Some("soon".into()),
            GRID_SIZE_ENV => Some("-2".into()),
            _ => None,
        });
        assert_eq!(cfg, GridConfig::default());
    }

    #[test]
    fn results_text_mentions_counts_and_info() {
        let text = results_text(
            Algorithm::Dfs,
            SearchSummary {
                path_len: 0,
                visited: 50,
            },
        );
        assert!(text.contains("Path length: 0"));
        assert!(text.contains("Nodes visited: 50"));
        assert!(text.contains("No path found."));
        assert!(text.contains("Depth-First Search (DFS)"));
    }
}
