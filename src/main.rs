use std::io::{self, BufRead, Write};
use std::time::Instant;

use minimax_lib::prelude::*;
use pleco::PieceType;

/// Plies searched per engine move.
const BASE_DEPTH: u8 = 3;
/// With few pieces left the tree thins out, so search one ply deeper.
const ENDGAME_DEPTH: u8 = 4;
const ENDGAME_PIECE_COUNT: u8 = 10;

fn main() {
    println!("Simple Chess AI");
    println!("You are playing as White. Enter moves in UCI format (e.g. e2e4, a7a8q).");
    println!("Type 'quit' to stop.");

    let stdin = io::stdin();
    let mut state = ChessState::start_pos();

    loop {
        println!("{}", state.board().pretty_string());

        if state.is_terminal() {
            announce_result(&state);
            break;
        }

        if state.side_to_move() == Side::Max {
            print!("Your move: ");
            io::stdout().flush().expect("stdout flush failed");

            let mut line = String::new();
            let read = stdin.lock().read_line(&mut line).expect("stdin read failed");
            if read == 0 {
                break;
            }
            let input = line.trim();
            if input == "quit" {
                break;
            }

            match state.apply_uci(input) {
                Some(next) => state = next,
                None => {
                    println!("Illegal or malformed move: '{input}'");
                    continue;
                }
            }
        } else {
            let depth = search_depth(&state);
            let start = Instant::now();
            let result = find_best_move(&state, depth);
            let mv = result
                .best_move
                .expect("non-terminal position must yield a move");
            println!(
                "Engine plays {} (score {}, depth {}, {:.2?})",
                mv,
                result.score,
                depth,
                start.elapsed()
            );
            state = state.make_move(mv);
        }
    }
}

/// Depth policy belongs to the driver, not the engine.
fn search_depth(state: &ChessState) -> u8 {
    let pieces = state
        .board()
        .piece_bb_both_players(PieceType::All)
        .count_bits();
    if pieces <= ENDGAME_PIECE_COUNT {
        ENDGAME_DEPTH
    } else {
        BASE_DEPTH
    }
}

fn announce_result(state: &ChessState) {
    match state.winner() {
        Some(Side::Max) => println!("Checkmate. White wins."),
        Some(Side::Min) => println!("Checkmate. Black wins."),
        None => println!("Draw."),
    }
}
