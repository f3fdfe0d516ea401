//! A small command-line argument tokenizer.
//!
//! This crate turns a flat list of argument strings into named options,
//! positional arguments and a record of how each option was interpreted. It
//! is meant for small tools that want typed flags without declaring a full
//! command-line interface up front.
//!
//! Each flag's value type comes from an explicit [`Hint`] when the caller
//! registered one, and is guessed from the following token otherwise. A
//! `--` token makes every later token positional.
//!
//! The main entry points are [`parse_argv`] and the configurable
//! [`ArgvParser`]. The [`env`] module reads the configuration of the
//! `clef-parse` binary from process environment variables.

pub mod env;
mod error;
mod hint;
pub mod normalize;
pub mod number;
mod parser;
mod paths;
mod value;

pub use error::{Error, Result};
pub use hint::{Hint, HintSource, Hints, resolve_hint};
pub use normalize::normalize_name;
pub use parser::{ArgvParser, Metadata, ParseResult, parse_argv};
pub use paths::{PathContext, SystemPaths, WorkingDir};
pub use value::OptionValue;
