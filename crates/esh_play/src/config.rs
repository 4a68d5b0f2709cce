//! Self-play configuration: an optional TOML file overridden by flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PlayError;

/// Settings for a self-play run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an unfinished game is scored a draw
    pub max_plies: u32,
    /// RNG seed (None = seed from OS entropy)
    pub seed: Option<u64>,
    /// Where to write the JSON summary (None = don't write one)
    pub output: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            seed: None,
            output: None,
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, PlayError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, PlayError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Build a config from command-line arguments (program name excluded).
    ///
    /// `--config FILE` is read first wherever it appears; the other flags
    /// then override what it set.
    pub fn from_args(args: &[String]) -> Result<Self, PlayError> {
        let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
            Some(i) => Self::load(Path::new(value(args, i)?))?,
            None => Self::default(),
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {}
                "--games" | "-g" => config.games = parsed(args, i)?,
                "--max-plies" | "-m" => config.max_plies = parsed(args, i)?,
                "--seed" | "-s" => config.seed = Some(parsed(args, i)?),
                "--out" | "-o" => config.output = Some(PathBuf::from(value(args, i)?)),
                other => {
                    return Err(PlayError::InvalidArgument(format!("unknown flag {other}")));
                }
            }
            i += 2;
        }
        Ok(config)
    }
}

fn value(args: &[String], i: usize) -> Result<&str, PlayError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| PlayError::InvalidArgument(format!("{} requires a value", args[i])))
}

fn parsed<T: FromStr>(args: &[String], i: usize) -> Result<T, PlayError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| PlayError::InvalidArgument(format!("invalid value for {}: {raw}", args[i])))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
