//! SearchPlayer - Isolation AI using minimax with alpha-beta pruning
//!
//! Delegates move selection to [`search`](super::search::search) (or the
//! parallel variant) on a private copy of the board, so the game's board is
//! never mutated by the AI.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 1
//! - **Medium**: Depth 3
//! - **Hard**: Depth 5
//! - **Expert**: Depth 7

use std::fmt;
use std::str::FromStr;

use super::search::{search, search_parallel, SearchConfig, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::error::Error;
use crate::game_repr::{Board, Cell, Side};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Looks at its own move only
    Easy,
    #[default]
    Medium,
    Hard,
    /// Slow on open queen boards, especially without `--parallel`
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Number of plies to search
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
            Difficulty::Expert => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::with_depth(self.max_depth())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .iter()
            .copied()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownName {
                kind: "difficulty",
                name: s.to_string(),
                expected: "easy, medium, hard, expert",
            })
    }
}

/// AI Player backed by the minimax search
pub struct SearchPlayer {
    config: SearchConfig,
    /// Spread root moves over the rayon pool
    parallel: bool,
    name: String,
    /// Outcome of the most recent search, for reporting
    last_result: Option<SearchResult<Cell>>,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig, name: String) -> Self {
        Self {
            config,
            parallel: false,
            name,
            last_result: None,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config(), format!("Minimax ({})", difficulty))
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn last_result(&self) -> Option<&SearchResult<Cell>> {
        self.last_result.as_ref()
    }
}

impl Player for SearchPlayer {
    fn get_move(&mut self, board: &Board, side: Side) -> Option<Cell> {
        let result = if self.parallel {
            search_parallel(board, side, &self.config)
        } else {
            let mut scratch = board.clone();
            search(&mut scratch, side, &self.config)
        };

        let mv = result.best_move;
        self.last_result = Some(result);
        mv
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("{} finished: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::Score;
    use crate::game_repr::{GameBoard, MovePattern};

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 1);
        assert_eq!(Difficulty::default().max_depth(), 3);
        assert!(Difficulty::all()
            .windows(2)
            .all(|w| w[0].max_depth() < w[1].max_depth()));
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("EXPERT".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_player_leaves_board_untouched() {
        let board = Board::default();
        let mut player = SearchPlayer::with_difficulty(Difficulty::Easy);
        let mv = player.get_move(&board, Side::One).expect("moves available");

        assert!(board.legal_moves(board.current_position(Side::One)).contains(&mv));
        assert_eq!(board, Board::default());
        assert_eq!(player.last_result().map(|r| r.depth), Some(1));
    }

    #[test]
    fn test_parallel_player_finds_win() {
        let board = Board::from_layout(
            ".1.
             ##.
             ##2",
            MovePattern::King,
        )
        .unwrap();
        let mut player = SearchPlayer::with_difficulty(Difficulty::Medium).parallel(true);

        assert_eq!(player.get_move(&board, Side::One), Some(Cell::new(1, 2)));
        assert_eq!(player.last_result().map(|r| r.score), Some(Score::ForcedWin));
    }
}
