//! Color token trees
//!
//! A token file is either a bare color tree or a Tailwind-config-shaped
//! object, in which case `theme.colors` is used.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to read token file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid color tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// A color value, or a named group of further tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorToken {
    Value(String),
    Group(IndexMap<String, ColorToken>),
}

impl ColorToken {
    /// Depth-first `(path, value)` pairs in document order, path segments
    /// joined with `-` (`primary.main` becomes `primary-main`).
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut output = Vec::new();
        self.flatten_into("", &mut output);
        output
    }

    fn flatten_into(&self, prefix: &str, output: &mut Vec<(String, String)>) {
        match self {
            ColorToken::Value(value) => {
                if !prefix.is_empty() {
                    output.push((prefix.to_string(), value.clone()));
                }
            }
            ColorToken::Group(children) => {
                for (segment, child) in children {
                    let path = if prefix.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}-{}", prefix, segment)
                    };
                    child.flatten_into(&path, output);
                }
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenFile {
    Config { theme: Theme },
    Tree(ColorToken),
}

#[derive(Deserialize)]
struct Theme {
    colors: ColorToken,
}

/// Parse a token tree from JSON
pub fn parse_color_tokens(json: &str) -> Result<ColorToken, TokenError> {
    let file: TokenFile = serde_json::from_str(json)?;
    Ok(match file {
        TokenFile::Config { theme } => theme.colors,
        TokenFile::Tree(tree) => tree,
    })
}

/// Load a token tree from a JSON file
pub fn load_color_tokens(path: &Path) -> Result<ColorToken, TokenError> {
    let contents = std::fs::read_to_string(path).map_err(|source| TokenError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_color_tokens(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested() {
        let tree = parse_color_tokens(
            r##"{ "primary": { "main": "#f00", "light": { "1": "#faa" } }, "white": "#fff" }"##,
        )
        .unwrap();

        assert_eq!(
            tree.flatten(),
            vec![
                ("primary-main".to_string(), "#f00".to_string()),
                ("primary-light-1".to_string(), "#faa".to_string()),
                ("white".to_string(), "#fff".to_string()),
            ]
        );
    }

    #[test]
    fn test_document_order_kept() {
        let tree = parse_color_tokens(r#"{ "zeta": "a", "alpha": "b", "mid": "c" }"#).unwrap();
        let paths: Vec<String> = tree.flatten().into_iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_tailwind_config_shape() {
        let tree = parse_color_tokens(
            r#"{ "content": ["./src/**/*.tsx"], "theme": { "colors": { "danger": { "500": "red" } } } }"#,
        )
        .unwrap();
        assert_eq!(
            tree.flatten(),
            vec![("danger-500".to_string(), "red".to_string())]
        );
    }

    #[test]
    fn test_bare_value_has_no_path() {
        let tree = parse_color_tokens(r#""red""#).unwrap();
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn test_rejects_numbers() {
        let result = parse_color_tokens(r#"{ "primary": 5 }"#);
        assert!(matches!(result, Err(TokenError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_color_tokens(Path::new("/nonexistent/tokens.json"));
        assert!(matches!(result, Err(TokenError::Read { .. })));
    }
}
