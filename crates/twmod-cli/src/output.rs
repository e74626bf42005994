//! Terminal reporting for twmod

use colored::*;
use std::path::Path;

/// Information about a single applied edit
#[derive(Debug, Clone)]
pub struct EditInfo {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_processed: usize,
    pub files_rewritten: usize,
    pub total_edits: usize,
    pub errors: usize,
}

/// Reporter for accumulating and printing results
pub struct Reporter {
    verbose: bool,
    summary: Summary,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            summary: Summary::default(),
        }
    }

    /// Report a file that was rewritten in place
    pub fn report_rewrite(&mut self, path: &Path, edits: &[EditInfo]) {
        self.summary.files_processed += 1;
        self.summary.files_rewritten += 1;
        self.summary.total_edits += edits.len();

        println!(
            "{} {} ({} edit{})",
            "Rewrote".green(),
            path.display().to_string().bold(),
            edits.len(),
            if edits.len() == 1 { "" } else { "s" }
        );
        if self.verbose {
            for edit in edits {
                println!(
                    "  {}:{} {} {}",
                    edit.line,
                    edit.column,
                    "->".green(),
                    edit.message
                );
            }
        }
    }

    /// Report a file with nothing to rename
    pub fn report_unchanged(&mut self, path: &Path) {
        self.summary.files_processed += 1;
        if self.verbose {
            println!("{}: No changes needed", path.display());
        }
    }

    /// Report a file that was skipped because of an error
    pub fn report_error(&mut self, path: &Path, message: &str) {
        self.summary.files_processed += 1;
        self.summary.errors += 1;
        eprintln!("{} {}: {}", "Skipped".yellow(), path.display(), message);
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Print the final summary line
    pub fn finish(&self) {
        let s = &self.summary;
        println!();
        println!(
            "{} {} file{} scanned, {} rewritten, {} edit{}{}",
            "Done:".bold(),
            s.files_processed,
            if s.files_processed == 1 { "" } else { "s" },
            s.files_rewritten,
            s.total_edits,
            if s.total_edits == 1 { "" } else { "s" },
            if s.errors > 0 {
                format!(", {} skipped", s.errors).yellow().to_string()
            } else {
                String::new()
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(message: &str) -> EditInfo {
        EditInfo {
            line: 1,
            column: 1,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut reporter = Reporter::new(false);
        reporter.report_rewrite(Path::new("a.tsx"), &[edit("one"), edit("two")]);
        reporter.report_unchanged(Path::new("b.tsx"));
        reporter.report_error(Path::new("c.tsx"), "Parse error");

        assert_eq!(
            reporter.summary(),
            &Summary {
                files_processed: 3,
                files_rewritten: 1,
                total_edits: 2,
                errors: 1,
            }
        );
    }
}
