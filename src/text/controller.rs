//! Text command interpreter.
//!
//! Reads whitespace-separated commands and plays them against a `Klondike`
//! engine, echoing the board after every accepted move.
//!
//! ## Commands
//!
//! | Command              | Move                                     |
//! |----------------------|------------------------------------------|
//! | `mpp src count dest` | move `count` cards between cascades      |
//! | `md dest`            | draw card onto a cascade                 |
//! | `mpf src foundation` | cascade top onto a foundation            |
//! | `mdf foundation`     | draw card onto a foundation              |
//! | `dd`                 | discard the front draw card              |
//! | `q` / `Q`            | quit, accepted anywhere, even mid-command |
//!
//! Pile and foundation numbers are 1-based; `count` is not. Tokens that are
//! not numbers are skipped while reading a command's arguments.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::view::TextView;
use crate::cards::Card;
use crate::core::{GameError, Move};
use crate::engine::Klondike;

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("cannot start game: {0}")]
    Start(#[source] GameError),
    #[error("game rendering failed: {0}")]
    Render(#[source] GameError),
    #[error("no more input to read")]
    OutOfInput,
}

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every card reached the foundations.
    Won,
    /// No moves left.
    Lost { score: usize },
    /// The player quit.
    Quit { score: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    MovePile,
    MoveDraw,
    MoveToFoundation,
    MoveDrawToFoundation,
    DiscardDraw,
}

impl Command {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "mpp" => Some(Command::MovePile),
            "md" => Some(Command::MoveDraw),
            "mpf" => Some(Command::MoveToFoundation),
            "mdf" => Some(Command::MoveDrawToFoundation),
            "dd" => Some(Command::DiscardDraw),
            _ => None,
        }
    }
}

/// Control flow out of the input loop.
enum Stop {
    Quit,
    Fail(ControllerError),
}

impl From<ControllerError> for Stop {
    fn from(err: ControllerError) -> Self {
        Stop::Fail(err)
    }
}

impl From<io::Error> for Stop {
    fn from(err: io::Error) -> Self {
        Stop::Fail(err.into())
    }
}

/// Whitespace tokenizer over a line reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn next(&mut self) -> Result<String, Stop> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ControllerError::OutOfInput.into());
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn is_quit(token: &str) -> bool {
    token == "q" || token == "Q"
}

fn one_based(n: i64) -> Option<usize> {
    usize::try_from(n).ok()?.checked_sub(1)
}

/// Interactive text front end.
///
/// ```
/// use std::io::Cursor;
/// use klondike_rules::engine::Klondike;
/// use klondike_rules::rules::ClassicRules;
/// use klondike_rules::text::{Outcome, TextController};
///
/// let mut game = Klondike::new(ClassicRules);
/// let deck = game.create_deck();
/// let mut out = Vec::new();
/// let mut controller = TextController::new(Cursor::new("mpf 1 1 q"), &mut out);
///
/// let outcome = controller.play_game(&mut game, &deck, false, 7, 3).unwrap();
/// assert_eq!(outcome, Outcome::Quit { score: 1 });
/// ```
pub struct TextController<R, W> {
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> TextController<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens {
                reader: input,
                pending: VecDeque::new(),
            },
            out,
        }
    }

    /// Start a game and play it until it ends, the player quits, or input
    /// runs out.
    pub fn play_game(
        &mut self,
        game: &mut Klondike,
        deck: &[Card],
        shuffle: bool,
        num_piles: usize,
        num_draw: usize,
    ) -> Result<Outcome, ControllerError> {
        game.start_game(deck, shuffle, num_piles, num_draw)
            .map_err(ControllerError::Start)?;

        match self.play_turns(game) {
            Ok(()) => self.finish(game),
            Err(Stop::Quit) => self.quit(game),
            Err(Stop::Fail(err)) => Err(err),
        }
    }

    fn play_turns(&mut self, game: &mut Klondike) -> Result<(), Stop> {
        while !game.is_game_over().map_err(ControllerError::Render)? {
            self.show_board(game)?;
            self.show_score(game)?;
            self.next_accepted_move(game)?;
        }
        Ok(())
    }

    /// Read commands until one is accepted by the engine.
    fn next_accepted_move(&mut self, game: &mut Klondike) -> Result<(), Stop> {
        loop {
            let command = self.next_command()?;
            let mv = match self.read_move(command)? {
                Ok(mv) => mv,
                Err(n) => {
                    self.invalid(&format!("{n} is out of range"))?;
                    continue;
                }
            };

            match game.apply(&mv) {
                Ok(()) => {
                    debug!(%mv, "command accepted");
                    return Ok(());
                }
                Err(err) => self.invalid(&err.to_string())?,
            }
        }
    }

    fn next_command(&mut self) -> Result<Command, Stop> {
        loop {
            let token = self.input.next()?;
            if is_quit(&token) {
                return Err(Stop::Quit);
            }
            match Command::parse(&token) {
                Some(command) => return Ok(command),
                None => self.invalid("Need valid command prompt")?,
            }
        }
    }

    fn next_number(&mut self) -> Result<i64, Stop> {
        loop {
            let token = self.input.next()?;
            if is_quit(&token) {
                return Err(Stop::Quit);
            }
            if let Ok(n) = token.parse::<i64>() {
                return Ok(n);
            }
        }
    }

    fn next_index(&mut self) -> Result<Result<usize, i64>, Stop> {
        let n = self.next_number()?;
        Ok(one_based(n).ok_or(n))
    }

    /// Read a command's arguments. The inner `Err` carries a number that
    /// cannot name a pile, foundation or count.
    fn read_move(&mut self, command: Command) -> Result<Result<Move, i64>, Stop> {
        Ok(match command {
            Command::MovePile => {
                let src = self.next_index()?;
                let count = self.next_number()?;
                let dest = self.next_index()?;
                match (src, usize::try_from(count), dest) {
                    (Ok(src), Ok(count), Ok(dest)) => Ok(Move::Pile { src, count, dest }),
                    (Err(n), _, _) | (_, _, Err(n)) => Err(n),
                    (_, Err(_), _) => Err(count),
                }
            }
            Command::MoveDraw => self.next_index()?.map(|dest| Move::Draw { dest }),
            Command::MoveToFoundation => {
                let src = self.next_index()?;
                let foundation = self.next_index()?;
                src.and_then(|src| {
                    foundation.map(|foundation| Move::ToFoundation { src, foundation })
                })
            }
            Command::MoveDrawToFoundation => self
                .next_index()?
                .map(|foundation| Move::DrawToFoundation { foundation }),
            Command::DiscardDraw => Ok(Move::DiscardDraw),
        })
    }

    fn finish(&mut self, game: &Klondike) -> Result<Outcome, ControllerError> {
        self.show_board(game)?;
        let score = game.score().map_err(ControllerError::Render)?;
        if score == game.deck_size().map_err(ControllerError::Render)? {
            writeln!(self.out, "You win!")?;
            Ok(Outcome::Won)
        } else {
            writeln!(self.out, "Game over. Score: {score}")?;
            Ok(Outcome::Lost { score })
        }
    }

    fn quit(&mut self, game: &Klondike) -> Result<Outcome, ControllerError> {
        writeln!(self.out, "Game quit!")?;
        writeln!(self.out, "State of game when quit:")?;
        self.show_board(game)?;
        let score = self.show_score(game)?;
        Ok(Outcome::Quit { score })
    }

    fn invalid(&mut self, reason: &str) -> Result<(), ControllerError> {
        writeln!(self.out, "Invalid move. Play again. {reason}")?;
        Ok(())
    }

    fn show_board(&mut self, game: &Klondike) -> Result<(), ControllerError> {
        let board = TextView::new(game).render().map_err(ControllerError::Render)?;
        self.out.write_all(board.as_bytes())?;
        Ok(())
    }

    fn show_score(&mut self, game: &Klondike) -> Result<usize, ControllerError> {
        let score = game.score().map_err(ControllerError::Render)?;
        writeln!(self.out, "Score: {score}")?;
        Ok(score)
    }
}
