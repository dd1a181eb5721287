//! Opening a directory in the host file manager
//!
//! The platform command is chosen once at startup; callers only see the
//! [`DirectoryRevealer`] capability.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// What happened when a reveal was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The file manager command was launched
    Launched,
    /// No file manager command is known for this platform
    Unsupported,
}

/// Capability to show a directory in a file browser
pub trait DirectoryRevealer {
    fn reveal(&self, dir: &Path) -> Result<RevealOutcome>;
}

/// Reveals directories by running an external program with the path argument
#[derive(Debug, Clone)]
pub struct CommandRevealer {
    program: String,
}

impl CommandRevealer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DirectoryRevealer for CommandRevealer {
    fn reveal(&self, dir: &Path) -> Result<RevealOutcome> {
        let status = Command::new(&self.program)
            .arg(dir)
            .status()
            .with_context(|| format!("Failed to launch '{}'", self.program))?;

        // explorer.exe reports exit code 1 even when the window opened
        if !status.success() {
            tracing::debug!(program = %self.program, %status, "file manager exited with non-zero status");
        }
        Ok(RevealOutcome::Launched)
    }
}

/// Fallback for platforms without a known file manager command
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRevealer;

impl DirectoryRevealer for UnsupportedRevealer {
    fn reveal(&self, _dir: &Path) -> Result<RevealOutcome> {
        Ok(RevealOutcome::Unsupported)
    }
}

/// File manager command for an OS name as reported by `std::env::consts::OS`
pub fn reveal_program(os: &str) -> Option<&'static str> {
    match os {
        "windows" => Some("explorer"),
        "macos" => Some("open"),
        "linux" => Some("xdg-open"),
        _ => None,
    }
}

/// Revealer for the given OS name
pub fn revealer_for_os(os: &str) -> Box<dyn DirectoryRevealer> {
    match reveal_program(os) {
        Some(program) => Box::new(CommandRevealer::new(program)),
        None => Box::new(UnsupportedRevealer),
    }
}

/// Revealer for the platform this binary runs on
pub fn platform_revealer() -> Box<dyn DirectoryRevealer> {
    revealer_for_os(std::env::consts::OS)
}
