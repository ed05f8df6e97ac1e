//! # Lexicon Common
//!
//! Shared logging setup and test utilities for the Lexicon workspace.
//!
//! This crate provides the ambient pieces every other crate in the workspace
//! leans on: structured logging initialization and, behind the `testing`
//! feature, fixture helpers for unit and integration tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
