//! Game coordination between two players.
//!
//! The [`Orchestrator`] owns the board and both players and runs the game
//! loop:
//!
//! ```text
//! [Side to move stuck?] -> yes -> [Opponent wins]
//!   -> no -> [Request Move] -> [Validate + Execute] -> [Notify Opponent]
//!   -> [Switch Turn] -> ...
//! ```
//!
//! `Side::One` always moves first. Players only ever see the board by shared
//! reference; every move goes through [`Board::play`], so an illegal move is
//! rejected before it touches the position.

use crate::agent::player::{GameResult, Player};
use crate::error::{Error, Result};
use crate::game_repr::{Board, Cell, Side};

/// What a single call to [`Orchestrator::play_turn`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The side to move went to this cell
    Moved(Cell),
    /// The game is over
    Finished(GameResult),
}

/// Root component running one game of Isolation.
pub struct Orchestrator {
    board: Board,

    /// Indexed by [`Side::index`]
    players: [Box<dyn Player>; 2],

    /// Whose turn it is
    current_turn: Side,

    /// Every executed move, in order
    history: Vec<(Side, Cell)>,

    /// Set once the game has ended
    game_result: Option<GameResult>,
}

impl Orchestrator {
    /// Create a game on `board` with `one` moving first.
    pub fn new(board: Board, one: Box<dyn Player>, two: Box<dyn Player>) -> Self {
        log::debug!("new game: {} vs {}", one.name(), two.name());
        Self {
            board,
            players: [one, two],
            current_turn: Side::One,
            history: Vec::new(),
            game_result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn history(&self) -> &[(Side, Cell)] {
        &self.history
    }

    pub fn result(&self) -> Option<GameResult> {
        self.game_result
    }

    pub fn player_name(&self, side: Side) -> &str {
        self.players[side.index()].name()
    }

    /// Ask the side to move for a move and execute it.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] when called after the game ended
    /// - [`Error::IllegalMove`] when the player proposes an illegal move; the
    ///   board and turn are left unchanged
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        if self.game_result.is_some() {
            return Err(Error::GameOver);
        }

        let side = self.current_turn;
        if self.board.is_stuck(side) {
            log::debug!("{} ({}) has no legal move", side, self.player_name(side));
            return Ok(TurnOutcome::Finished(self.finish(side.opposite())));
        }

        let proposed = self.players[side.index()].get_move(&self.board, side);
        let Some(mv) = proposed else {
            log::info!("{} ({}) resigned", side, self.player_name(side));
            return Ok(TurnOutcome::Finished(self.finish(side.opposite())));
        };

        let from = self.board.play(side, mv)?;
        log::debug!("ply {}: {} {} -> {}", self.history.len() + 1, side, from, mv);

        self.history.push((side, mv));
        self.players[side.opposite().index()].opponent_moved(mv);
        self.current_turn = side.opposite();
        Ok(TurnOutcome::Moved(mv))
    }

    /// Play turns until the game ends.
    pub fn play_to_end(&mut self) -> Result<GameResult> {
        loop {
            if let TurnOutcome::Finished(result) = self.play_turn()? {
                return Ok(result);
            }
        }
    }

    fn finish(&mut self, winner: Side) -> GameResult {
        let result = GameResult::from_winner(winner);
        self.game_result = Some(result);
        for player in self.players.iter_mut() {
            player.game_ended(result);
        }
        log::info!(
            "{} ({}) after {} plies",
            result,
            self.player_name(winner),
            self.history.len()
        );
        result
    }
}
