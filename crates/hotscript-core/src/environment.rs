//! Built-in runtime state exposed to scripts through properties.

use std::path::PathBuf;
use std::time::Instant;

use crate::Value;

/// How window titles are matched by title-based commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleMatchMode {
    /// Title must start with the pattern.
    StartsWith,
    /// Title must contain the pattern.
    #[default]
    Contains,
    /// Title must equal the pattern.
    Exact,
    /// Pattern is a regular expression.
    RegEx,
}

impl TitleMatchMode {
    /// Script spelling of the mode (`1`, `2`, `3` or `RegEx`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleMatchMode::StartsWith => "1",
            TitleMatchMode::Contains => "2",
            TitleMatchMode::Exact => "3",
            TitleMatchMode::RegEx => "RegEx",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(TitleMatchMode::StartsWith),
            "2" => Some(TitleMatchMode::Contains),
            "3" => Some(TitleMatchMode::Exact),
            mode if mode.eq_ignore_ascii_case("regex") => Some(TitleMatchMode::RegEx),
            _ => None,
        }
    }
}

/// Runtime state read and written by built-in property accessors.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Result status of the last command.
    pub error_level: Value,
    /// Current working directory as seen by scripts.
    pub working_dir: PathBuf,
    pub title_match_mode: TitleMatchMode,
    /// Whether title matching may inspect hidden text (`Slow`) or not (`Fast`).
    pub title_match_slow: bool,
    /// File name of the running script.
    pub script_name: String,
    started: Instant,
}

impl Environment {
    pub fn new(script_name: impl Into<String>) -> Self {
        Self {
            error_level: Value::Int(0),
            working_dir: std::env::current_dir().unwrap_or_default(),
            title_match_mode: TitleMatchMode::default(),
            title_match_slow: false,
            script_name: script_name.into(),
            started: Instant::now(),
        }
    }

    /// Milliseconds since this environment was created.
    pub fn tick_count(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new("")
    }
}
