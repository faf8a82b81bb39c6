//! Configuration file parsing for the Aether shell preview
//!
//! Supports `~/.aetheros/config.toml` (or a path given on the command line).

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, parse_settings, read_settings,
};
pub use types::*;
