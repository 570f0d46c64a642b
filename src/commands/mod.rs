//! # CLI Command Implementations
//!
//! The tool has a single behaviour, syncing the repositories of a source
//! list, implemented in [`sync`]. Its `execute` function wires the library
//! pieces together: environment, settings, configuration, source list, and
//! the sync engine.

pub mod sync;
