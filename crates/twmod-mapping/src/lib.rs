//! twmod-mapping: Build the class rename map from two color token trees
//!
//! Leaves of the legacy and current trees whose color values are equal
//! (ignoring case) are paired, and every pair is expanded into one class
//! rename per utility prefix (`text-`, `bg-`, `border-`).

pub mod builder;
pub mod tokens;

pub use builder::{
    AmbiguousToken, Mapping, MappingBuilder, CLASSES_MAP_FILE, COLORS_MAP_FILE, DEFAULT_PREFIXES,
};
pub use tokens::{load_color_tokens, parse_color_tokens, ColorToken, TokenError};
