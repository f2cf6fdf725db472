use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::builders::patterns::{PropPattern, strip_lines};
use crate::builders::reporter::FileOutcome;
use crate::core::config::{PATTERN_SPECS, TARGET_FILES};

/// The batch driver: owns the target list and the compiled patterns and
/// processes each target to completion, in order, before moving to the
/// next. There is no shared state between targets; a failure on one is
/// reported and the batch continues.
pub struct StripEngine {
    targets: Vec<PathBuf>,
    patterns: Vec<PropPattern>,
}

impl StripEngine {
    /// Builds an engine over an explicit target and pattern list. The
    /// binary only ever uses `with_builtin_targets`; this constructor is
    /// the seam the tests drive temporary directories through.
    pub fn new(targets: Vec<PathBuf>, patterns: Vec<PropPattern>) -> Self {
        Self { targets, patterns }
    }

    /// Builds the engine over the built-in tables in `core::config`.
    pub fn with_builtin_targets() -> Result<Self> {
        let targets = TARGET_FILES.iter().map(PathBuf::from).collect();
        let patterns = PATTERN_SPECS
            .iter()
            .map(PropPattern::from_spec)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(targets, patterns))
    }

    /// Processes the targets lazily, yielding one outcome per target in
    /// list order. Nothing touches a file until the iterator reaches it.
    pub fn run(&self) -> impl Iterator<Item = FileOutcome> + '_ {
        self.targets.iter().map(|target| self.process_file(target))
    }

    /// Processes a single target: read, strip, conditional write-back.
    ///
    /// Re-running on an already-clean file finds no matches and skips
    /// the write, so repeated invocations converge to a fixed point.
    pub fn process_file(&self, target: &Path) -> FileOutcome {
        let path = target.display().to_string();

        let content = match fs::read_to_string(target) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return FileOutcome::NotFound(path);
            }
            Err(err) => {
                return FileOutcome::Error {
                    path,
                    message: format!("read failed: {err}"),
                };
            }
        };

        match strip_lines(&content, &self.patterns) {
            None => FileOutcome::Skipped(path),
            Some(stripped) => match replace_contents(target, &stripped) {
                Ok(()) => FileOutcome::Updated(path),
                Err(err) => FileOutcome::Error {
                    path,
                    message: format!("{err:#}"),
                },
            },
        }
    }
}

/// Overwrites `target` with `content` via write-to-temp-then-rename.
///
/// The temporary file lives in the target's own directory so the final
/// rename stays on one filesystem. A failure at any step leaves the
/// target exactly as it was; the half-written temp file is cleaned up
/// when it drops.
fn replace_contents(target: &Path, content: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .context("failed to write temp file")?;
    tmp.persist(target)
        .with_context(|| format!("failed to replace {}", target.display()))?;

    Ok(())
}
