//! Terminal styling utilities
//!
//! All colored output goes through this module. Colors follow `console`'s
//! global switch, so `--plain` or a non-terminal stdout yields plain text.

use console::{style, Emoji};

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Apply the color for `level` to `message`
pub fn styled(level: Level, message: &str) -> String {
    match level {
        Level::Info => message.to_string(),
        Level::Success => style(message).green().to_string(),
        Level::Warning => style(message).yellow().to_string(),
        Level::Error => style(message).red().to_string(),
    }
}

/// Bold prompt heading
pub fn heading(text: &str) -> String {
    style(text).bold().to_string()
}

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}",
        style(" Airbuzz Code Generator ").blue().bold().reverse()
    );
    println!();
    println!("    Version: {}", version);
    println!("    License: MIT License");
    println!("    Copyright (c) 2024 Airbuzz, s.r.o.");
    println!("    {}", style("═".repeat(56)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), styled(Level::Success, message));
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, styled(Level::Warning, message));
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("    {}{}", ROCKET, style("All done!").green().bold());
    println!();
}
