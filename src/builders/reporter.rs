use std::fmt;

/// The tagged result of processing a single target file.
///
/// Every per-file condition, including failures, is captured as a value
/// so the engine loop never has to abort: one bad path never prevents
/// processing of the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one pattern matched and the stripped content was written
    /// back in place.
    Updated(String),
    /// No pattern matched; the file was left untouched and no write was
    /// performed.
    Skipped(String),
    /// The target path does not resolve to an existing file.
    NotFound(String),
    /// The file exists but could not be read, or the stripped content
    /// could not be written back. The message carries the underlying
    /// failure detail.
    Error { path: String, message: String },
}

impl FileOutcome {
    /// The target path this outcome is about.
    pub fn path(&self) -> &str {
        match self {
            FileOutcome::Updated(path)
            | FileOutcome::Skipped(path)
            | FileOutcome::NotFound(path)
            | FileOutcome::Error { path, .. } => path,
        }
    }
}

/// One human-readable report line per outcome. These are the lines the
/// operator sees, so the wording stays stable.
impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Updated(path) => write!(f, "Updated {path}"),
            FileOutcome::Skipped(path) => {
                write!(f, "Skipped {path} (no changes needed)")
            }
            FileOutcome::NotFound(path) => {
                write!(f, "Error: File not found {path}")
            }
            FileOutcome::Error { path, message } => {
                write!(f, "Error: Failed to process {path}: {message}")
            }
        }
    }
}

/// Reporting seam between the engine loop and the operator.
///
/// The console implementation below is the only one the binary uses;
/// the trait exists so tests can collect outcomes without capturing
/// stdout.
pub trait OutcomeReporter {
    /// Reports a single per-file outcome.
    fn report(&self, outcome: &FileOutcome);

    /// Marks the end of the batch, after the last target.
    fn finish(&self);
}

/// Prints the report to the console, one line per target plus the
/// trailing completion marker.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeReporter for ConsoleReporter {
    fn report(&self, outcome: &FileOutcome) {
        println!("{outcome}");
    }

    fn finish(&self) {
        println!("\nDone!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        assert_eq!(
            FileOutcome::Updated("a.tsx".to_string()).to_string(),
            "Updated a.tsx"
        );
        assert_eq!(
            FileOutcome::Skipped("a.tsx".to_string()).to_string(),
            "Skipped a.tsx (no changes needed)"
        );
        assert_eq!(
            FileOutcome::NotFound("a.tsx".to_string()).to_string(),
            "Error: File not found a.tsx"
        );
        assert_eq!(
            FileOutcome::Error {
                path: "a.tsx".to_string(),
                message: "permission denied".to_string(),
            }
            .to_string(),
            "Error: Failed to process a.tsx: permission denied"
        );
    }
}
