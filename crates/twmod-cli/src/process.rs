//! File discovery and per-file rewriting for twmod
//!
//! Rewrites happen in place and are not transactional: when a filesystem
//! error aborts a run, files already written stay rewritten. The tool is
//! meant to run against version-controlled sources.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use twmod_rules::{ClassMatcher, RewriteError, RuleRegistry, SourceUnit};

use crate::config::Config;
use crate::output::EditInfo;

/// A stat, readdir, read or write failure. Aborts the whole run.
#[derive(Error, Debug)]
#[error("Failed to {op} {}", .path.display())]
pub struct FileSystemError {
    pub op: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileSystemError {
    fn new(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Outcome of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// File had no matches
    Unchanged,
    /// File was rewritten
    Rewritten(Vec<EditInfo>),
    /// File could not be parsed and was left alone
    ParseError(String),
    /// File could not be decoded or its edits could not be applied; file left alone
    Error(String),
}

/// Collect the files to rewrite under `root`.
///
/// A file root is taken as is when its extension qualifies. Directories are
/// walked recursively; every subdirectory is descended.
pub fn collect_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>, FileSystemError> {
    let metadata = std::fs::metadata(root).map_err(|e| FileSystemError::new("stat", root, e))?;

    if !metadata.is_dir() {
        let eligible = config.has_source_extension(root) && !config.should_exclude(root);
        return Ok(if eligible { vec![root.to_path_buf()] } else { Vec::new() });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            FileSystemError::new("read directory", &path, source)
        })?;

        let path = entry.path();
        if entry.file_type().is_file()
            && config.has_source_extension(path)
            && !config.should_exclude(path)
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Rewrite a single file in place
pub fn process_file(
    path: &Path,
    registry: &RuleRegistry,
    matcher: &ClassMatcher,
) -> Result<FileOutcome, FileSystemError> {
    let bytes = std::fs::read(path).map_err(|e| FileSystemError::new("read", path, e))?;
    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            let message = format!("Not valid UTF-8: {}", err.utf8_error());
            tracing::warn!(path = %path.display(), "{}", message);
            return Ok(FileOutcome::Error(message));
        }
    };
    let unit = SourceUnit::for_path(path, source);

    let rewritten = match unit.rewrite(registry, matcher) {
        Ok(rewritten) => rewritten,
        Err(RewriteError::Parse { count, message }) => {
            tracing::warn!(path = %path.display(), count, "Skipping file with parse errors: {}", message);
            return Ok(FileOutcome::ParseError(message));
        }
        Err(err @ RewriteError::Edit(_)) => {
            tracing::warn!(path = %path.display(), "{}", err);
            return Ok(FileOutcome::Error(err.to_string()));
        }
    };

    let Some(new_source) = rewritten.new_source else {
        tracing::debug!(path = %path.display(), "No classes to rename");
        return Ok(FileOutcome::Unchanged);
    };

    write_file(path, &new_source)?;
    tracing::debug!(path = %path.display(), edits = rewritten.edits.len(), "Rewrote file");

    let edit_infos = rewritten
        .edits
        .iter()
        .map(|edit| {
            let (line, column) = offset_to_line_column(unit.source(), edit.start_offset());
            EditInfo {
                line,
                column,
                message: edit.message.clone(),
            }
        })
        .collect();

    Ok(FileOutcome::Rewritten(edit_infos))
}

/// Rewrite every eligible file under `root`, in parallel.
///
/// Results are sorted by path. The first filesystem error is returned and
/// stops the run.
pub fn rewrite_path(
    root: &Path,
    config: &Config,
    registry: &RuleRegistry,
    matcher: &ClassMatcher,
) -> Result<Vec<(PathBuf, FileOutcome)>, FileSystemError> {
    let files = collect_files(root, config)?;
    tracing::debug!(root = %root.display(), files = files.len(), "Collected source files");

    files
        .into_par_iter()
        .map(|path| -> Result<_, FileSystemError> {
            let outcome = process_file(&path, registry, matcher)?;
            Ok((path, outcome))
        })
        .collect()
}

/// Write the processed result to the file
pub fn write_file(path: &Path, content: &str) -> Result<(), FileSystemError> {
    std::fs::write(path, content).map_err(|e| FileSystemError::new("write", path, e))
}

/// Convert byte offset to line and column numbers (1-based)
fn offset_to_line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}
