#![cfg(feature = "std")]

//! Console front end: prompts both players in turn on one terminal.
//!
//! Input is read line by line; every malformed or refused line is answered
//! with an error message and the same step is asked again. Only I/O failure
//! or end of input stops the game early.

use std::io::{BufRead, Write};
use std::string::String;

use anyhow::{anyhow, bail};
use log::warn;

use crate::common::{GameError, ShotResult};
use crate::config::CLEAR_LINES;
use crate::coord::Coord;
use crate::game::{GameEngine, Phase, PlayerId};
use crate::player::PlayerState;

const WRONG_COORDS: &str = "Error! You entered the wrong coordinates! Try again:";
const SEPARATOR: &str = "---------------------";

/// Text console driving a [`GameEngine`] for two players sharing a screen.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    /// Whether to scroll the board out of sight when the move passes.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until one fleet is sunk and return the winner.
    pub fn run(&mut self, engine: &mut GameEngine) -> anyhow::Result<PlayerId> {
        loop {
            match engine.phase() {
                Phase::Setup(id) => self.setup_player(engine, id)?,
                Phase::Shooting(id) => self.take_turn(engine, id)?,
                Phase::GameOver { winner } => return Ok(winner),
            }
        }
    }

    fn setup_player(&mut self, engine: &mut GameEngine, id: PlayerId) -> anyhow::Result<()> {
        writeln!(self.output, "{}, place your ships on the game field", id)?;
        write!(self.output, "{}", engine.player(id).board().own_view())?;
        while let Some(ship) = engine.current_ship() {
            let placement = loop {
                writeln!(
                    self.output,
                    "Enter the coordinates of the {} ({} cells):",
                    ship.name(),
                    ship.length()
                )?;
                let line = self.read_line()?;
                let Some((a, b)) = self.parse_endpoints(&line)? else {
                    continue;
                };
                match engine.place_ship(a, b) {
                    Ok(placement) => break placement,
                    Err(GameError::Placement(e)) => {
                        warn!("{} rejected placement '{}': {:?}", id, line, e);
                        writeln!(self.output, "Error! {} Try again:", e)?;
                    }
                    Err(e) => return Err(anyhow!(e)),
                }
            };
            write!(self.output, "{}", engine.player(id).board().own_view())?;
            if placement.fleet_complete {
                break;
            }
        }
        self.pass_move()?;
        if let Phase::Shooting(_) = engine.phase() {
            writeln!(self.output, "The game starts!")?;
        }
        Ok(())
    }

    /// Two whitespace-separated coordinates, or `None` after reporting why not.
    fn parse_endpoints(&mut self, line: &str) -> anyhow::Result<Option<(Coord, Coord)>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [first, second] = tokens.as_slice() else {
            writeln!(self.output, "Error! Invalid input. Try again:")?;
            return Ok(None);
        };
        match (Coord::parse(first), Coord::parse(second)) {
            (Ok(a), Ok(b)) => Ok(Some((a, b))),
            (Err(e), _) | (_, Err(e)) => {
                warn!("bad coordinate in '{}': {}", line, e);
                writeln!(self.output, "{}", WRONG_COORDS)?;
                Ok(None)
            }
        }
    }

    fn take_turn(&mut self, engine: &mut GameEngine, id: PlayerId) -> anyhow::Result<()> {
        let opponent = id.opponent();
        write!(self.output, "{}", engine.player(opponent).board().fog_view())?;
        writeln!(self.output, "{}", SEPARATOR)?;
        write!(self.output, "{}", engine.player(id).board().own_view())?;
        self.print_fleet_status(engine.player(id))?;
        writeln!(self.output, "{}, it's your turn:", id)?;
        loop {
            let line = self.read_line()?;
            let target = match Coord::parse(&line) {
                Ok(target) => target,
                Err(e) => {
                    warn!("{} entered bad target '{}': {}", id, line, e);
                    writeln!(self.output, "{}", WRONG_COORDS)?;
                    continue;
                }
            };
            let result = match engine.fire(target) {
                Ok(result) => result,
                Err(GameError::Board(_)) => {
                    writeln!(self.output, "Error! Unexpected value in the board! Try again:")?;
                    continue;
                }
                Err(e) => return Err(anyhow!(e)),
            };
            if result.is_fresh() {
                write!(self.output, "{}", engine.player(opponent).board().fog_view())?;
            }
            match result {
                ShotResult::Miss => writeln!(self.output, "You missed!")?,
                ShotResult::Hit => writeln!(self.output, "You hit a ship!")?,
                ShotResult::Sink(_) => {
                    writeln!(self.output, "You hit a ship!")?;
                    writeln!(self.output, "You sank a ship! Specify a new target:")?;
                }
                ShotResult::Win(_) => {
                    writeln!(self.output, "You hit a ship!")?;
                    writeln!(
                        self.output,
                        "You sank the last ship. You won. Congratulations!"
                    )?;
                    self.output.flush()?;
                    return Ok(());
                }
                ShotResult::AlreadyHit => writeln!(
                    self.output,
                    "You already hit this cell! Specify a new target:"
                )?,
                ShotResult::AlreadyMissed => writeln!(
                    self.output,
                    "You already missed this cell! Specify a new target:"
                )?,
            }
            if result.passes_turn() {
                return self.pass_move();
            }
        }
    }

    fn print_fleet_status(&mut self, player: &PlayerState) -> anyhow::Result<()> {
        for entry in player.fleet().iter() {
            let ship = entry.ship();
            let status = if entry.is_sunk() { "sunk" } else { "afloat" };
            writeln!(self.output, "  {} ({}): {}", ship.name(), ship.length(), status)?;
        }
        Ok(())
    }

    fn pass_move(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Press Enter and pass the move to another player")?;
        self.read_line()?;
        if self.clear_screen {
            write!(self.output, "{}", "\n".repeat(CLEAR_LINES))?;
        }
        Ok(())
    }

    /// Next input line, trimmed. End of input is an error.
    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        Ok(line.trim().to_string())
    }
}
