#![allow(dead_code)]
//! Shared test utilities for clinote integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Helpers panic on invalid input rather than returning
//! `Result` — readability in assertions beats recoverability here.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
