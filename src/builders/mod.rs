// This file is the module declaration file for the `builders` module.
// It declares and makes public the sub-modules within `src/builders`.

// `patterns` module:
// Defines `PropSpec` (the declarative description of one removable
// attribute line) and `PropPattern` (its compiled whole-line regex),
// plus the pure `strip_lines` transform the engine applies to each
// file's content.
pub mod patterns;

// `reporter` module:
// Defines `FileOutcome`, the tagged per-file result (Updated, Skipped,
// NotFound, Error), and the `OutcomeReporter` trait with its
// `ConsoleReporter` implementation that prints one line per target and
// the final completion marker.
pub mod reporter;
