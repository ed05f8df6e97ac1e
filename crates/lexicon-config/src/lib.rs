//! # Lexicon Config
//!
//! Configuration loading and translator setup for Lexicon.
//!
//! This crate reads the host's configuration file, applies environment
//! overrides, validates the result and installs the configured bundles into
//! any [`Translate`](lexicon_i18n::Translate) implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod setup;
pub mod validator;

pub use defaults::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
pub use setup::*;
pub use validator::*;
