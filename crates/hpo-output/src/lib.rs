//! JSON output for generated code systems.
//!
//! Output is pretty printed with two-space indentation and keeps non-ASCII
//! characters literal. Files are written to a temporary sibling and renamed
//! into place, so a failed run never leaves a truncated file behind.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{to_json_string, write_code_system, write_json};
