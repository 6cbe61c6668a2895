//! Terminal front end for the tic-tac-toe engine.
//!
//! - **cli**: clap command definitions
//! - **config**: TOML play settings
//! - **input**: reading human moves
//! - **play**: the interactive, analysis and self-play drivers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod play;

pub use cli::{Cli, Command, Mark};
pub use config::{ConfigError, PlayConfig};
pub use input::{InputError, parse_human_move};
