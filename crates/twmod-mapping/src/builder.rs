//! Derive class renames from matching color values

use std::path::Path;

use twmod_core::{MapError, RenameMap};

use crate::tokens::ColorToken;

/// Utility prefixes Tailwind generates color classes for
pub const DEFAULT_PREFIXES: &[&str] = &["text", "bg", "border"];

/// Class rename table consumed by the rewriter
pub const CLASSES_MAP_FILE: &str = "tw-classes-map.json";

/// Color path rename table, kept for spot checks
pub const COLORS_MAP_FILE: &str = "tw-colors-map.json";

/// A legacy color whose value matches more than one current color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousToken {
    pub legacy_path: String,
    pub candidates: Vec<String>,
    /// The candidate that ended up in the maps
    pub chosen: String,
}

/// Output of a mapping build
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    /// Legacy color path to current color path
    pub colors: RenameMap,
    /// Legacy class to current class, per prefix
    pub classes: RenameMap,
    pub ambiguous: Vec<AmbiguousToken>,
}

impl Mapping {
    /// Write both tables into `out_dir`
    pub fn write(&self, out_dir: &Path) -> Result<(), MapError> {
        self.colors.save(&out_dir.join(COLORS_MAP_FILE))?;
        self.classes.save(&out_dir.join(CLASSES_MAP_FILE))
    }
}

pub struct MappingBuilder {
    prefixes: Vec<String>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::with_prefixes(DEFAULT_PREFIXES.iter().copied())
    }

    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Pair every legacy leaf with every current leaf of equal value,
    /// compared case-insensitively. Order follows the legacy tree, then the
    /// current tree.
    pub fn color_pairs(legacy: &ColorToken, current: &ColorToken) -> Vec<(String, String)> {
        let current: Vec<(String, String)> = current
            .flatten()
            .into_iter()
            .map(|(path, value)| (path, value.to_lowercase()))
            .collect();

        let mut pairs = Vec::new();
        for (legacy_path, legacy_value) in legacy.flatten() {
            let legacy_value = legacy_value.to_lowercase();
            for (current_path, current_value) in &current {
                if *current_value == legacy_value {
                    pairs.push((legacy_path.clone(), current_path.clone()));
                }
            }
        }
        pairs
    }

    /// Build the color and class tables.
    ///
    /// Every matching pair is inserted in order, so for an ambiguous legacy
    /// color the last matching current color wins. Ambiguities are reported
    /// in [`Mapping::ambiguous`].
    pub fn build(&self, legacy: &ColorToken, current: &ColorToken) -> Mapping {
        let pairs = Self::color_pairs(legacy, current);

        let mut mapping = Mapping::default();
        for (legacy_path, current_path) in &pairs {
            mapping.colors.insert(legacy_path.as_str(), current_path.as_str());
        }

        for prefix in &self.prefixes {
            for (legacy_path, current_path) in &pairs {
                mapping.classes.insert(
                    format!("{}-{}", prefix, legacy_path),
                    format!("{}-{}", prefix, current_path),
                );
            }
        }

        mapping.ambiguous = find_ambiguous(&pairs, &mapping.colors);
        for token in &mapping.ambiguous {
            tracing::warn!(
                legacy = %token.legacy_path,
                candidates = ?token.candidates,
                chosen = %token.chosen,
                "Legacy color matches several current colors"
            );
        }

        mapping
    }
}

impl Default for MappingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn find_ambiguous(pairs: &[(String, String)], colors: &RenameMap) -> Vec<AmbiguousToken> {
    let mut ambiguous: Vec<AmbiguousToken> = Vec::new();

    for (legacy_path, current_path) in pairs {
        match ambiguous.iter_mut().find(|t| &t.legacy_path == legacy_path) {
            Some(token) => token.candidates.push(current_path.clone()),
            None => ambiguous.push(AmbiguousToken {
                legacy_path: legacy_path.clone(),
                candidates: vec![current_path.clone()],
                chosen: colors.get(legacy_path).unwrap_or_default().to_string(),
            }),
        }
    }

    ambiguous.retain(|token| token.candidates.len() > 1);
    ambiguous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::parse_color_tokens;
    use tempfile::TempDir;

    fn tokens(json: &str) -> ColorToken {
        parse_color_tokens(json).unwrap()
    }

    #[test]
    fn test_case_insensitive_match() {
        let legacy = tokens(r#"{ "primary": { "main": "RED" } }"#);
        let current = tokens(r#"{ "danger": { "500": "red" } }"#);

        let mapping = MappingBuilder::new().build(&legacy, &current);

        assert_eq!(mapping.colors.get("primary-main"), Some("danger-500"));
        assert_eq!(mapping.classes.get("text-primary-main"), Some("text-danger-500"));
        assert_eq!(mapping.classes.get("bg-primary-main"), Some("bg-danger-500"));
        assert_eq!(mapping.classes.get("border-primary-main"), Some("border-danger-500"));
        assert_eq!(mapping.classes.len(), 3);
        assert!(mapping.ambiguous.is_empty());
    }

    #[test]
    fn test_unmatched_values_dropped() {
        let legacy = tokens(r##"{ "primary": "#111", "accent": "#222" }"##);
        let current = tokens(r##"{ "gray": { "900": "#111" } }"##);

        let mapping = MappingBuilder::new().build(&legacy, &current);

        assert_eq!(mapping.colors.len(), 1);
        assert_eq!(mapping.classes.get("text-accent"), None);
    }

    #[test]
    fn test_ambiguous_last_writer_wins() {
        let legacy = tokens(r##"{ "primary": "#ff0000" }"##);
        let current = tokens(r##"{ "red": { "500": "#FF0000" }, "danger": "#ff0000" }"##);

        let pairs = MappingBuilder::color_pairs(&legacy, &current);
        assert_eq!(
            pairs,
            vec![
                ("primary".to_string(), "red-500".to_string()),
                ("primary".to_string(), "danger".to_string()),
            ]
        );

        let mapping = MappingBuilder::new().build(&legacy, &current);
        assert_eq!(mapping.classes.get("text-primary"), Some("text-danger"));
        assert_eq!(
            mapping.ambiguous,
            vec![AmbiguousToken {
                legacy_path: "primary".to_string(),
                candidates: vec!["red-500".to_string(), "danger".to_string()],
                chosen: "danger".to_string(),
            }]
        );
    }

    #[test]
    fn test_custom_prefixes() {
        let legacy = tokens(r#"{ "primary": "red" }"#);
        let current = tokens(r#"{ "red": "red" }"#);

        let mapping = MappingBuilder::with_prefixes(["fill", "stroke"]).build(&legacy, &current);

        assert_eq!(mapping.classes.get("fill-primary"), Some("fill-red"));
        assert_eq!(mapping.classes.get("stroke-primary"), Some("stroke-red"));
        assert_eq!(mapping.classes.get("text-primary"), None);
    }

    #[test]
    fn test_generated_map_is_idempotent() {
        let legacy = tokens(r##"{ "primary": { "main": "#f00", "dark": "#900" } }"##);
        let current = tokens(r##"{ "red": { "500": "#f00", "900": "#900" } }"##);

        let mapping = MappingBuilder::new().build(&legacy, &current);
        assert!(mapping.classes.chained_keys().is_empty());
    }

    #[test]
    fn test_write_both_tables() {
        let temp = TempDir::new().unwrap();
        let legacy = tokens(r#"{ "primary": { "main": "RED" } }"#);
        let current = tokens(r#"{ "danger": { "500": "red" } }"#);

        let mapping = MappingBuilder::new().build(&legacy, &current);
        mapping.write(temp.path()).unwrap();

        let classes = RenameMap::load(&temp.path().join(CLASSES_MAP_FILE)).unwrap();
        let colors = RenameMap::load(&temp.path().join(COLORS_MAP_FILE)).unwrap();
        assert_eq!(classes, mapping.classes);
        assert_eq!(colors.get("primary-main"), Some("danger-500"));
    }
}
