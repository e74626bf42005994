//! One file's text, parsed and rewritten as a unit

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use thiserror::Error;
use twmod_core::{apply_edits, Edit, EditError};

use crate::matcher::ClassMatcher;
use crate::registry::RuleRegistry;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Parse error ({count} diagnostics): {message}")]
    Parse { count: usize, message: String },

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Result of rewriting one source unit
#[derive(Debug)]
pub struct Rewritten {
    /// Edits that were applied
    pub edits: Vec<Edit>,
    /// New source text, only if edits were found
    pub new_source: Option<String>,
}

/// A file's original text and how to parse it
pub struct SourceUnit {
    source: String,
    source_type: SourceType,
}

impl SourceUnit {
    pub fn new(source: impl Into<String>, source_type: SourceType) -> Self {
        Self {
            source: source.into(),
            source_type,
        }
    }

    /// Pick the dialect from the file extension, TSX when unknown
    pub fn for_path(path: &Path, source: impl Into<String>) -> Self {
        let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx());
        Self::new(source, source_type)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// Parse, run every rule on the tree, and apply the resulting edits.
    ///
    /// The tree lives only for the duration of this call; unchanged code
    /// keeps its exact original text.
    pub fn rewrite(
        &self,
        registry: &RuleRegistry,
        matcher: &ClassMatcher,
    ) -> Result<Rewritten, RewriteError> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, &self.source, self.source_type).parse();

        if ret.panicked || !ret.errors.is_empty() {
            let message = ret
                .errors
                .first()
                .map(|err| err.to_string())
                .unwrap_or_else(|| "parser aborted".to_string());
            return Err(RewriteError::Parse {
                count: ret.errors.len(),
                message,
            });
        }

        let edits = registry.check_all(&ret.program, &self.source, matcher);
        if edits.is_empty() {
            return Ok(Rewritten {
                edits,
                new_source: None,
            });
        }

        let new_source = apply_edits(&self.source, &edits)?;
        Ok(Rewritten {
            edits,
            new_source: Some(new_source),
        })
    }
}
