use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use scacco_core::{Color, Game, GameStatus, Promotion, PromotionChooser, Square};

/// Prompts on stdout and reads the promotion choice from stdin, asking again
/// until the input names one of queen, rook, bishop, or knight.
struct StdinChooser;

impl PromotionChooser for StdinChooser {
    fn choose_promotion(&mut self, side: Color, square: Square) -> Promotion {
        loop {
            print!("promotion for {} on {square} [q/r/b/n]: ", side.name());
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return Promotion::Queen, // input closed
                Ok(_) => {}
            }
            match line.trim().chars().next().and_then(Promotion::from_fen_char) {
                Some(choice) => return choice,
                None => println!("unrecognized choice: {}", line.trim()),
            }
        }
    }
}

/// Parse "e2e4"-style input into a square pair.
fn parse_move(input: &str) -> Option<(Square, Square)> {
    if !input.is_ascii() || input.len() != 4 {
        return None;
    }
    let from = Square::from_algebraic(&input[..2])?;
    let to = Square::from_algebraic(&input[2..])?;
    Some((from, to))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("scacco starting");

    let mut game = Game::new();
    println!("{}", game.board().pretty());
    println!("moves are square pairs like e2e4; 'fen' prints the position, 'quit' exits");

    loop {
        print!("{}> ", game.board().side_to_move().name());
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" => break,
            "fen" => {
                println!("{}", game.board());
                continue;
            }
            _ => {}
        }

        let Some((from, to)) = parse_move(input) else {
            println!("could not read '{input}' as a move like e2e4");
            continue;
        };

        if let Err(err) = game.apply_move(from, to, &mut StdinChooser) {
            println!("{err}");
            continue;
        }

        println!("{}", game.board().pretty());
        match game.status() {
            GameStatus::Checkmate(side) => {
                println!("checkmate, {} wins", side.opponent().name());
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate");
                break;
            }
            GameStatus::Check(side) => println!("{} is in check", side.name()),
            GameStatus::InProgress => {}
        }
    }

    Ok(())
}
