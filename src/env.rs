use crate::error::{Error, Result};
use crate::hint::{Hint, Hints};
use crate::normalize::normalize_name;
use crate::paths::PathContext;
use regex::Regex;
use std::collections::HashMap;
use std::env as stdenv;
use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

/// Number of leading process arguments to skip before parsing.
pub const OFFSET_VAR: &str = "CLEF_PARSE_ARGV_OFFSET";

/// Skips the executable name.
pub const DEFAULT_OFFSET: usize = 1;

static HINT_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CLEF_PARSE_HINT_([A-Za-z0-9_]+)$").expect("hint variable pattern is valid")
});

/// Snapshot of the process state the `clef-parse` binary is configured by.
///
/// The environment contains:
/// - `vars`: environment variables, read for the offset and hint declarations.
/// - `current_dir`: the directory relative path values resolve against, if
///   the process had one.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub vars: HashMap<String, String>,
    pub current_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process variables and working directory.
    pub fn new() -> Self {
        Self {
            vars: stdenv::vars().collect(),
            current_dir: stdenv::current_dir().ok(),
        }
    }

    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Value of `CLEF_PARSE_ARGV_OFFSET`, or [`DEFAULT_OFFSET`] when unset.
    pub fn argv_offset(&self) -> Result<usize> {
        match self.get_var(OFFSET_VAR) {
            None => Ok(DEFAULT_OFFSET),
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| Error::InvalidOffset(raw.to_string())),
        }
    }

    /// Hints declared as `CLEF_PARSE_HINT_<NAME>=<type>`.
    ///
    /// `<NAME>` goes through the same normalizer as flags, so
    /// `CLEF_PARSE_HINT_SOME_FLAG` applies to `--some-flag`.
    pub fn hints(&self) -> Result<Hints> {
        let mut hints = Hints::new();
        for (key, value) in &self.vars {
            let Some(caps) = HINT_VAR.captures(key) else {
                continue;
            };
            let name = normalize_name(&caps[1]);
            let hint = Hint::parse_for(&name, value.trim())?;
            debug!(%key, %name, %hint, "hint from environment");
            hints.insert(name, hint);
        }
        Ok(hints)
    }
}

impl PathContext for Environment {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no working directory captured")
        })
    }
}
