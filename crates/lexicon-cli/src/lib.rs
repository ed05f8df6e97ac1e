//! # Lexicon CLI
//!
//! Command line front-end for inspecting translation bundles.
//!
//! Loads a Lexicon configuration, installs its bundles and resolves keys the
//! same way a host application would.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::*;
