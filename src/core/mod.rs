// This file is the module declaration file for the `core` module.
// It declares the submodules contained within `src/core/` and exposes
// them to the rest of the crate.

// `config` module:
// Holds the built-in configuration data: the ordered table of target file
// paths and the ordered table of attribute-line specifications. Keeping
// these as constant tables, separate from the engine, keeps the transform
// generic and testable against arbitrary paths and patterns.
pub mod config;

// `engine` module:
// The batch driver. `StripEngine` owns the targets and the compiled
// patterns and processes each target in order: read, strip matching
// lines, and write back only when something changed. Every per-file
// condition (missing file, read failure, write failure) becomes an
// outcome record rather than aborting the batch.
pub mod engine;
