//! # kwic-core
//!
//! Foundation types, errors, tokenizer and logging setup for the KWIC index.
//!
//! This crate provides the shared vocabulary that the other KWIC crates depend on:
//!
//! - **Words and lines**: [`Word`] and [`Line`] newtypes with value equality
//! - **Tokenizer**: [`text::tokenize`] splits raw input text into a [`Line`]
//! - **Errors**: [`CoreError`] via `thiserror`
//! - **Logging**: [`logging::init_subscriber`] and the [`logging::capture_logs`] test helper
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other kwic crates.

#![deny(unsafe_code)]

pub mod errors;
pub mod line;
pub mod logging;
pub mod text;

pub use errors::{CoreError, Result};
pub use line::{Line, Word};
