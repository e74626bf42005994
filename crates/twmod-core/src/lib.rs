//! twmod-core: Core abstractions for class-name rewriting
//!
//! This crate provides:
//! - `Edit`: A span-based code modification
//! - `apply_edits()`: Function to apply edits preserving formatting
//! - `RenameMap`: The old-to-new class token table
//! - `js_string_literal()` / `jsx_attribute_literal()`: Quoting for rewritten strings

mod edit;
pub mod literal;
mod rename_map;

pub use edit::{apply_edits, dedup_edits, Edit, EditError};
pub use literal::{js_string_literal, jsx_attribute_literal};
pub use rename_map::{MapError, RenameMap};
