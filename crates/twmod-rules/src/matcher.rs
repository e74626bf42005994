//! Class token matching against a rename map
//!
//! All keys are compiled into one alternation, longest key first, wrapped in
//! word boundaries. Every match is replaced at its own byte range, so two
//! keys sharing a prefix (`bg-primary`, `bg-primary-light`) or a key that
//! occurs twice in one value are each rewritten where they were found.

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use twmod_core::RenameMap;

const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// Failure compiling the rename map into a pattern
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Failed to compile class pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failure matching a single value.
///
/// Every pattern match is a map key, so this only surfaces if the pattern and
/// the map were built from different tables.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("Matched class '{0}' has no entry in the rename map")]
    Unmapped(String),
}

/// A rewritten class string and the tokens renamed in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRewrite {
    pub value: String,
    pub renamed: Vec<(String, String)>,
}

impl ClassRewrite {
    pub fn describe(&self) -> String {
        self.renamed
            .iter()
            .map(|(old, new)| format!("Rename class '{}' to '{}'", old, new))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The rename map with its compiled pattern, built once per run and shared
/// read-only by every worker.
#[derive(Debug)]
pub struct ClassMatcher {
    map: RenameMap,
    pattern: Option<Regex>,
}

impl ClassMatcher {
    pub fn new(map: RenameMap) -> Result<Self, MatcherError> {
        let mut keys: Vec<&str> = map.keys().filter(|key| !key.is_empty()).collect();
        // Leftmost-first alternation: longer keys must come first to win ties.
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = if keys.is_empty() {
            None
        } else {
            let alternation = keys
                .iter()
                .map(|key| regex::escape(key))
                .collect::<Vec<_>>()
                .join("|");
            // ASCII word boundaries: `é` next to a class does not glue onto it.
            let regex = RegexBuilder::new(&format!(r"(?-u:\b)(?:{})(?-u:\b)", alternation))
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()?;
            Some(regex)
        };

        Ok(Self { map, pattern })
    }

    #[cfg(test)]
    pub(crate) fn with_pattern(map: RenameMap, pattern: &str) -> Self {
        Self {
            map,
            pattern: Regex::new(pattern).ok(),
        }
    }

    pub fn map(&self) -> &RenameMap {
        &self.map
    }

    /// Return the rewritten class string, or `None` when nothing matched.
    pub fn match_class_name(&self, value: &str) -> Result<Option<String>, MatchError> {
        Ok(self.rewrite_value(value)?.map(|rewrite| rewrite.value))
    }

    /// Like [`match_class_name`](Self::match_class_name), also reporting
    /// which tokens were renamed.
    pub fn rewrite_value(&self, value: &str) -> Result<Option<ClassRewrite>, MatchError> {
        if value.is_empty() {
            return Ok(None);
        }
        let Some(pattern) = &self.pattern else {
            return Ok(None);
        };

        let mut output = String::with_capacity(value.len());
        let mut renamed = Vec::new();
        let mut last = 0;

        for found in pattern.find_iter(value) {
            let old = found.as_str();
            let new = self
                .map
                .get(old)
                .ok_or_else(|| MatchError::Unmapped(old.to_string()))?;

            output.push_str(&value[last..found.start()]);
            output.push_str(new);
            last = found.end();
            renamed.push((old.to_string(), new.to_string()));
        }

        if renamed.is_empty() {
            return Ok(None);
        }
        output.push_str(&value[last..]);

        if output == value {
            return Ok(None);
        }

        Ok(Some(ClassRewrite {
            value: output,
            renamed,
        }))
    }
}
