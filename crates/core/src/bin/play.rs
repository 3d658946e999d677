//! Terminal front end: type square names to select and move pieces.

use std::io::{self, BufRead, Write};
use std::process;

use chess_rules_core::{BoardObserver, ClickOutcome, Color, EngineConfig, Game, PieceKind, Square};
use tracing_subscriber::EnvFilter;

/// Prints notifications as they arrive.
struct Console;

impl BoardObserver for Console {
    fn on_occupancy_changed(&mut self, square: Square, occupant: Option<(PieceKind, Color)>) {
        match occupant {
            Some((kind, color)) => println!("   {square}: {color} {}", kind.name()),
            None => println!("   {square}: empty"),
        }
    }

    fn on_selection_highlight_changed(&mut self, added: &[Square], _removed: &[Square]) {
        if !added.is_empty() {
            println!("   Moves: {}", join(added));
        }
    }

    fn on_check(&mut self, checked: Color) {
        println!("   Check! {checked} must answer.");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[ERROR] Could not load config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut game = match Game::new(config.clone()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            process::exit(1);
        }
    };

    println!("Chess Rules");
    println!("==================");
    println!("Type a square (e.g. e2) to select a piece, then a highlighted square to move.");
    println!("Commands: board, reset, quit");
    println!();
    print_board(&game);

    let stdin = io::stdin();
    let mut console = Console;
    loop {
        print!("{} > ", game.state().side_to_move());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                break;
            }
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "board" => print_board(&game),
            "reset" => {
                game = match Game::new(config.clone()) {
                    Ok(g) => g,
                    Err(e) => {
                        eprintln!("[ERROR] {}", e);
                        process::exit(1);
                    }
                };
                print_board(&game);
            }
            input => match input.parse::<Square>() {
                Ok(square) => {
                    if let ClickOutcome::Moved { .. } = game.on_square_selected(square, &mut console) {
                        println!();
                        print_board(&game);
                    }
                }
                Err(e) => println!("   {}", e),
            },
        }
    }
}

fn print_board(game: &Game) {
    println!("{}", game.state().board());
    println!();
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
