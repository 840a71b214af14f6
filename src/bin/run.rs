use std::process::ExitCode;

use infinite_life::board::Board;
use infinite_life::pattern::{blinker, glider, toad};
use infinite_life::render::{render, Viewport};

const GENERATIONS: usize = 20;
const VIEWPORT_SIDE: i64 = 10;

fn main() -> ExitCode {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "blinker".to_string());
    let cells = match name.as_str() {
        "blinker" => blinker(),
        "toad" => toad(),
        "glider" => glider(),
        other => {
            eprintln!("unknown pattern {other:?} (expected blinker, toad, or glider)");
            return ExitCode::FAILURE;
        }
    };

    log::info!("running {name} for {GENERATIONS} generations");

    let mut board = Board::new(cells);
    for generation in 0..GENERATIONS {
        let mut alive: Vec<_> = board.alive_cells().iter().copied().collect();
        alive.sort();
        log::debug!("generation {generation}: {} live cells", alive.len());

        println!("{}", "*".repeat(10));
        println!("generation {generation}, alive cells:");
        for cell in &alive {
            println!("  {cell}");
        }
        println!();
        print!("{}", render(board.alive_cells(), Viewport::square(VIEWPORT_SIDE)));

        board.next();
    }

    ExitCode::SUCCESS
}
