//! Documentation tests
//!
//! This crate runs tests on the code examples in the documentation
//! files. Each documentation file gets its own test struct that includes
//! the markdown file, so `cargo test --doc` compiles and runs every
//! Rust code block.
//!
//! Code blocks are tested based on their annotations:
//! - ``` rust ``` - Compiles and runs
//! - ``` rust,no_run ``` - Compiles but doesn't run
//! - ``` rust,ignore ``` - Skipped (for pseudocode)

// Quickstart
#[doc = include_str!("../../../docs/quickstart.md")]
#[cfg(doctest)]
pub struct _DocTestQuickstart;
