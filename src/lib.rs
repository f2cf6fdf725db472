// Library root for `remove-credits-props`.
//
// The binary in `main.rs` is a thin driver; everything it does is exposed
// here so the integration tests can run the same engine against temporary
// directories instead of the built-in target list.

pub mod builders;
pub mod core;
