//! Self-play driver for the esh rules core
//!
//! This crate is the collaborator the core leaves out:
//! - Building the starting board
//! - Alternating turns and picking moves at random
//! - Recording outcomes and writing a JSON summary
//!
//! # Usage
//!
//! ```bash
//! # Ten random games with a fixed seed
//! cargo run -p esh_play -- --games 10 --seed 7 --out summary.json
//!
//! # Settings from a TOML file, with a flag overriding it
//! cargo run -p esh_play -- --config play.toml --max-plies 400
//! ```

mod config;
mod error;
mod game;
mod record;
mod setup;

pub use config::*;
pub use error::*;
pub use game::*;
pub use record::*;
pub use setup::*;
