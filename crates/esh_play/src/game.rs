//! Random self-play: the turn-alternation loop the rules core leaves to its
//! caller.

use esh_core::{Board, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::PlayConfig;
use crate::error::PlayError;
use crate::record::{GameRecord, MatchSummary};
use crate::setup::standard_board;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Side },
    Stalemate,
    /// The ply limit was reached first
    MoveLimit,
}

impl Outcome {
    /// Score from White's point of view
    pub fn score(self) -> &'static str {
        match self {
            Outcome::Checkmate { winner: Side::White } => "1-0",
            Outcome::Checkmate { winner: Side::Black } => "0-1",
            Outcome::Stalemate | Outcome::MoveLimit => "1/2",
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Outcome::Checkmate { .. } => "checkmate",
            Outcome::Stalemate => "stalemate",
            Outcome::MoveLimit => "move limit",
        }
    }
}

/// A finished game
#[derive(Debug, Clone)]
pub struct PlayedGame {
    pub outcome: Outcome,
    pub plies: u32,
    pub final_board: Board,
}

/// Plays games between two random movers
pub struct GameRunner {
    config: PlayConfig,
    rng: StdRng,
}

impl GameRunner {
    pub fn new(config: PlayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// Play every configured game from the standard setup
    pub fn run(&mut self) -> Result<MatchSummary, PlayError> {
        let start = standard_board()?;
        let mut summary = MatchSummary::default();

        for game in 1..=self.config.games {
            let played = self.play_game(&start, Side::White);
            info!(
                game,
                plies = played.plies,
                result = played.outcome.score(),
                reason = played.outcome.reason(),
                "game finished"
            );
            summary.add(GameRecord::new(game, &played));
        }

        Ok(summary)
    }

    /// Play a single game from `start` with `first` to move
    pub fn play_game(&mut self, start: &Board, first: Side) -> PlayedGame {
        let mut board = start.clone();
        let mut side = first;
        let mut plies = 0;

        loop {
            let moves: Vec<Board> = board.moves_for_side(side).collect();
            let Some(next) = moves.choose(&mut self.rng) else {
                let outcome = if board.is_side_in_check(side) {
                    Outcome::Checkmate {
                        winner: side.opponent(),
                    }
                } else {
                    Outcome::Stalemate
                };
                return PlayedGame {
                    outcome,
                    plies,
                    final_board: board,
                };
            };

            if plies >= self.config.max_plies {
                return PlayedGame {
                    outcome: Outcome::MoveLimit,
                    plies,
                    final_board: board,
                };
            }

            debug!(ply = plies + 1, side = %side, options = moves.len(), "move chosen");
            board = next.clone();
            side = side.opponent();
            plies += 1;
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
