//! Animated grid search in the terminal.
//!
//! Run: cargo run --bin pathviz -- dijkstra 0 0 7 4

use std::io::{self, Write};

use pathviz_core::Node;
use pathviz_demos::{Board, EndpointPicker, LiveBoard, config_from_env, parse_args, results_text};
use pathviz_search::{Engine, Grid};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    let cfg = config_from_env(|k| std::env::var(k).ok());
    let grid = Grid::from_config(&cfg);
    let engine = Engine::new(grid);

    let mut picker = EndpointPicker::new();
    match args.endpoints {
        Some((start, end)) => {
            picker.pick(start);
            picker.pick(end);
        }
        None => picker.pick_random(&grid, &mut rand::rng()),
    }
    let (start, end): (Node, Node) = picker
        .endpoints()
        .ok_or("no endpoints selected")?;

    let log = engine.record(args.algorithm, start, end)?;

    let stdout = io::stdout();
    let mut live = LiveBoard::new(Board::new(grid, start, end), stdout.lock());
    log.replay(cfg.step_delay, &mut live);
    let board = live.finish()?;

    let mut out = stdout.lock();
    write!(out, "\r\n{start} -> {end}\r\n")?;
    write!(out, "{}", results_text(args.algorithm, board.summary()))?;
    out.flush()?;
    Ok(())
}
