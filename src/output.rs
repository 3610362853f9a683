// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet, and JSON-lines output modes.

use serde::Serialize;

use crate::fdu::{Ros2Fdu, State, Transition};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Only final results
    Quiet,
    /// JSON lines for scripting
    Json,
}

impl OutputMode {
    pub fn from_flags(quiet: bool, json: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => emit(&JsonEvent::Success { message }),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(&JsonEvent::Error { message }) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Print a whole record: its summary line, or the full record as JSON.
    pub fn record(&self, fdu: &Ros2Fdu) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => println!("{fdu}"),
            OutputMode::Json => emit(&JsonEvent::Record { record: fdu }),
        }
    }

    /// Report the status reached after one transition.
    pub fn transition(&self, transition: Transition, fdu: &Ros2Fdu) {
        let status = fdu.status();
        match self.mode {
            OutputMode::Normal => println!(
                "  → {transition}: {status} (pid {})",
                fdu.pid().map_or_else(|| "none".to_string(), |p| p.to_string())
            ),
            OutputMode::Quiet => {}
            OutputMode::Json => emit(&JsonEvent::Transition {
                transition: transition.to_string(),
                status,
                pid: fdu.pid_raw(),
            }),
        }
    }
}

fn emit(event: &JsonEvent<'_>) {
    if let Ok(json) = serde_json::to_string(event) {
        println!("{json}");
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Success {
        message: &'a str,
    },
    Error {
        message: &'a str,
    },
    Record {
        record: &'a Ros2Fdu,
    },
    Transition {
        transition: String,
        status: State,
        pid: i64,
    },
}
