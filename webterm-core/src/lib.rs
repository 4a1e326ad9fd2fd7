//! Webterm Core - Fundamental types
//!
//! This crate provides the types every other Webterm crate builds on:
//! - `TermError`: Structured errors returned by commands
//! - `escape_html` / `to_plain_text`: Markup handling for output lines
//! - `DisplaySink`: The surface output lines are emitted to

mod error;
mod markup;
mod sink;

pub use error::{codes, StorageError, TermError};
pub use markup::{escape_html, to_plain_text};
pub use sink::{DisplaySink, Transcript};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{escape_html, DisplaySink, TermError};
}
