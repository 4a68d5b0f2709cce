//! Game records and match summaries

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PlayError;
use crate::game::PlayedGame;

/// One game as stored in the summary file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: u32,
    pub plies: u32,
    /// "1-0", "0-1" or "1/2"
    pub result: String,
    pub reason: String,
}

impl GameRecord {
    pub fn new(game: u32, played: &PlayedGame) -> Self {
        Self {
            game,
            plies: played.plies,
            result: played.outcome.score().to_string(),
            reason: played.outcome.reason().to_string(),
        }
    }
}

/// Aggregate over a run of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn add(&mut self, record: GameRecord) {
        match record.result.as_str() {
            "1-0" => self.white_wins += 1,
            "0-1" => self.black_wins += 1,
            _ => self.draws += 1,
        }
        self.games.push(record);
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }

    /// Save summary to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), PlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load(path: &Path) -> Result<Self, PlayError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Self-play Summary ===\n");
        for record in &self.games {
            out.push_str(&format!(
                "Game {:>3}: {:<4} ({}, {} plies)\n",
                record.game, record.result, record.reason, record.plies
            ));
        }
        out.push_str(&format!(
            "White {} - Black {} - Draws {} ({} games)\n",
            self.white_wins,
            self.black_wins,
            self.draws,
            self.total_games()
        ));
        out
    }
}
