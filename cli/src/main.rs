use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use saltito_core as game;

/// Peg solitaire in the terminal.
///
/// Pick a marble with `x y` to see where it can jump, then pick one of the
/// highlighted holes to jump there.
#[derive(Debug, Parser)]
#[command(name = "saltito", version, about)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Pick(game::Vec2),
    Moves,
    Undo,
    Reset,
    Help,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Command> {
        match input {
            "m" | "moves" => return Some(Self::Moves),
            "u" | "undo" => return Some(Self::Undo),
            "r" | "reset" => return Some(Self::Reset),
            "h" | "help" | "?" => return Some(Self::Help),
            "q" | "quit" | "exit" => return Some(Self::Quit),
            _ => {}
        }

        let mut parts = input.split_whitespace();
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::Pick(game::Vec2::new(x, y)))
    }
}

struct Session {
    board: game::Board,
    /// Jumps available from the marble picked last, if any.
    selected: Vec<game::Move>,
}

impl Session {
    fn new() -> Self {
        Self {
            board: game::Board::new(),
            selected: Vec::new(),
        }
    }

    fn run(&mut self, command: Command) {
        log::debug!("running {:?}", command);
        match command {
            Command::Pick(coords) => {
                if let Err(err) = self.pick(coords) {
                    println!(" {err}");
                    self.selected.clear();
                }
                self.render();
            }
            Command::Moves => self.list_moves(),
            Command::Undo => {
                self.selected.clear();
                match self.board.revert_last_move() {
                    Some(m) => println!(" reverted the jump from {} to {}", m.source, m.target),
                    None => println!(" nothing to undo"),
                }
                self.render();
            }
            Command::Reset => {
                self.selected.clear();
                self.board.reset();
                println!(" board restored to the opening layout");
                self.render();
            }
            Command::Help => print_help(),
            Command::Quit => {}
        }
    }

    /// The pointer flow of the game: picking a marble selects it and shows
    /// its jump targets, picking a highlighted hole performs that jump,
    /// anything else drops the selection.
    fn pick(&mut self, coords: game::Vec2) -> game::Result<()> {
        use game::CellState::*;

        match self.board.cell_at(coords)? {
            Occupied => {
                self.selected = self.board.moves_from(coords)?;
                if self.selected.is_empty() {
                    println!(" the marble at {coords} has nowhere to jump");
                }
            }
            Empty => {
                let pending = self.selected.iter().find(|m| m.target == coords).copied();
                self.selected.clear();
                if let Some(m) = pending {
                    self.board.try_apply_move(m)?;
                    self.announce();
                } else {
                    println!(" pick a marble first, then one of its * targets");
                }
            }
            Absent => {
                self.selected.clear();
                println!(" {coords} is not part of the board");
            }
        }
        Ok(())
    }

    fn list_moves(&self) {
        let moves = self.board.all_moves();
        if moves.is_empty() {
            println!(" no legal jumps");
            return;
        }
        for m in moves {
            println!(" {} -> {} ({:?})", m.source, m.target, m.direction);
        }
    }

    fn announce(&self) {
        use game::GameStatus::*;

        match self.board.status() {
            Won => println!(" solved! the last marble rests in the center"),
            Stuck => println!(
                " no jumps left with {} marbles remaining; 'undo' or 'reset' to keep going",
                self.board.marbles_left()
            ),
            InProgress => {}
        }
    }

    fn render(&self) {
        println!();
        print!("   ");
        for x in 0..self.board.size() {
            print!(" {x}");
        }
        println!();
        for y in 0..self.board.size() {
            print!(" {y} ");
            for x in 0..self.board.size() {
                print!(" {}", self.glyph(game::Vec2::new(x, y)));
            }
            println!();
        }
        println!();
        println!(
            "  {} marbles left, {} moves made",
            self.board.marbles_left(),
            self.board.moves_made()
        );
    }

    fn glyph(&self, coords: game::Vec2) -> char {
        use game::CellState::*;

        if self.selected.iter().any(|m| m.target == coords) {
            return '*';
        }
        match self.board.cell_at(coords).unwrap_or(Absent) {
            Absent => ' ',
            Empty => '.',
            Occupied => 'o',
        }
    }
}

fn print_help() {
    println!(" x y     pick the hole at column x, row y");
    println!("         a marble shows its jump targets as *");
    println!("         a * hole performs that jump");
    println!(" moves   list every legal jump (m)");
    println!(" undo    revert the last jump (u)");
    println!(" reset   restore the opening layout (r)");
    println!(" quit    leave the game (q)");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    println!("saltito, the 33-hole peg solitaire");
    println!("type 'help' for commands");

    let mut session = Session::new();
    session.render();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match Command::parse(input) {
            Some(Command::Quit) => break,
            Some(command) => session.run(command),
            None => println!(" unrecognized input, type 'help' for commands"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_shortcuts_parse() {
        assert_eq!(Command::parse("undo"), Some(Command::Undo));
        assert_eq!(Command::parse("u"), Some(Command::Undo));
        assert_eq!(Command::parse("reset"), Some(Command::Reset));
        assert_eq!(Command::parse("moves"), Some(Command::Moves));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn coordinate_pairs_parse_as_picks() {
        assert_eq!(
            Command::parse("3 1"),
            Some(Command::Pick(game::Vec2::new(3, 1)))
        );
        assert_eq!(
            Command::parse("0 6"),
            Some(Command::Pick(game::Vec2::new(0, 6)))
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(Command::parse("3"), None);
        assert_eq!(Command::parse("3 1 4"), None);
        assert_eq!(Command::parse("a b"), None);
        assert_eq!(Command::parse("best"), None);
    }

    #[test]
    fn picking_a_marble_then_a_target_plays_the_jump() {
        let mut session = Session::new();

        session.pick(game::Vec2::new(3, 1)).unwrap();
        assert_eq!(session.selected.len(), 1);

        session.pick(game::Vec2::new(3, 3)).unwrap();
        assert!(session.selected.is_empty());
        assert_eq!(session.board.moves_made(), 1);
    }

    #[test]
    fn picking_elsewhere_drops_the_selection() {
        let mut session = Session::new();
        session.pick(game::Vec2::new(3, 1)).unwrap();

        session.pick(game::Vec2::new(0, 0)).unwrap();

        assert!(session.selected.is_empty());
        assert_eq!(session.board.moves_made(), 0);
    }
}
