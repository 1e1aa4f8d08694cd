use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_HANDICAP_RADIUS: Coord = 3;

/// Derived session status. Loss is checked before win: a revealed hazard
/// ends the session even if the counter were somehow at zero in the same
/// tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a primary action ended up doing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PrimaryOutcome {
    Handicap(HandicapOutcome),
    Reveal(RevealOutcome),
}

/// One play session: a board, the two abstract input commands, and the
/// one-shot first-action handicap. Commands are rejected once the session
/// is won or lost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    handicap_available: bool,
    handicap_radius: Coord,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self::with_handicap_radius(board, DEFAULT_HANDICAP_RADIUS)
    }

    pub fn with_handicap_radius(board: Board, handicap_radius: Coord) -> Self {
        Self {
            board,
            handicap_available: true,
            handicap_radius,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn handicap_available(&self) -> bool {
        self.handicap_available
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_lost() {
            GameStatus::Lost
        } else if self.board.all_hazards_flagged() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Primary action: the very first one spends the handicap and
    /// pre-solves a neighborhood; every later one is a plain reveal. The
    /// handicap is spent even when its board call fails — one shot, period.
    pub fn primary(&mut self, pos: GridPos) -> Result<PrimaryOutcome> {
        self.check_in_progress()?;

        if self.handicap_available {
            let outcome = self.board.apply_handicap(pos, self.handicap_radius);
            self.handicap_available = false;
            Ok(PrimaryOutcome::Handicap(outcome?))
        } else {
            Ok(PrimaryOutcome::Reveal(self.board.reveal(pos)?))
        }
    }

    /// Secondary action: always a flag toggle, handicap or not.
    pub fn secondary(&mut self, pos: GridPos) -> Result<FlagOutcome> {
        self.check_in_progress()?;
        self.board.toggle_flag(pos)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status().is_finished() {
            Err(GameError::SessionEnded)
        } else {
            Ok(())
        }
    }
}
