//! # aether-core - Core Domain Types
//!
//! Foundation crate for the Aether desktop shell preview. Provides the embedded
//! section data, terminal line formatting, command-preview domain types and
//! error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`SectionRecord`] - Display payload for one navigation entry
//! - [`SectionRegistry`] - Ordered key to record mapping, immutable after construction
//! - [`DEFAULT_SECTION`] - Key selected at startup
//!
//! ### Terminal lines (`terminal_line`)
//! - [`TerminalLine`] - A prompted or plain line in the mock terminal
//! - [`PROMPT`] - The fixed prompt literal
//!
//! ### Command preview (`command`)
//! - [`CommandRequest`], [`CommandContext`], [`SafetyLevel`]
//! - [`CommandIntent`], [`TranslationResult`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aether_core::prelude::*;
//! ```

pub mod command;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod section;
pub mod terminal_line;

pub use command::{CommandContext, CommandIntent, CommandRequest, SafetyLevel, TranslationResult};
pub use error::{Error, Result, ResultExt};
pub use section::{SectionRecord, SectionRegistry, DEFAULT_SECTION};
pub use terminal_line::{strip_prompt, TerminalLine, PROMPT};
