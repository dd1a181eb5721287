//! Interactive prompt drivers
//!
//! Two drivers share the validation rules of [`PromptFlow`]:
//! [`TerminalPrompter`] uses dialoguer when a person is at the keyboard, and
//! [`LinePrompter`] reads plain lines from any `BufRead` (piped stdin, tests).

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::{Context, Result};
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};

use super::flow::{parse_open_directory, InputError, PromptFlow, Question, StepOutcome};
use crate::pipeline::GenerationRequest;
use crate::utils::{heading, styled, Level};

/// Message shown when the empty file name selects the default
pub const DEFAULT_SELECTED: &str = "Default value selected.";

/// Console surface the prompt loops talk to
pub trait Prompter {
    /// Show a question title and its menu entries
    fn show(&mut self, question: &Question) -> Result<()>;

    /// Read one answer, without the line terminator
    fn read_answer(&mut self) -> Result<String>;

    /// Report a rejected answer before the next read
    fn reject(&mut self, error: &InputError) -> Result<()>;

    /// Show an informational line
    fn note(&mut self, message: &str) -> Result<()>;
}

fn render_question(question: &Question) -> Vec<String> {
    let mut lines = vec![String::new(), heading(&question.title)];
    lines.extend(
        question
            .options
            .iter()
            .map(|o| format!("{}. {}", o.token, o.label)),
    );
    lines
}

// ============================================================================
// Line driver
// ============================================================================

/// Plain line-based prompter over arbitrary reader and writer
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn show(&mut self, question: &Question) -> Result<()> {
        for line in render_question(question) {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            anyhow::bail!("Input stream closed before all answers were given");
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(trimmed.to_string())
    }

    fn reject(&mut self, error: &InputError) -> Result<()> {
        writeln!(self.output, "{}", styled(Level::Error, &error.to_string()))?;
        self.output.flush()?;
        Ok(())
    }

    fn note(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

// ============================================================================
// Terminal driver
// ============================================================================

/// Prompter for an attended terminal, reading answers with dialoguer
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn show(&mut self, question: &Question) -> Result<()> {
        for line in render_question(question) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    fn read_answer(&mut self) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(answer)
    }

    fn reject(&mut self, error: &InputError) -> Result<()> {
        self.term
            .write_line(&styled(Level::Error, &error.to_string()))?;
        Ok(())
    }

    fn note(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }
}

// ============================================================================
// Prompt loops
// ============================================================================

/// Read answers until `accept` takes one
pub fn ask_until_valid<P, T, F>(prompter: &mut P, mut accept: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: FnMut(&str) -> Result<T, InputError>,
{
    loop {
        let raw = prompter.read_answer()?;
        match accept(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => prompter.reject(&err)?,
        }
    }
}

/// Run the full prompt sequence and build the generation request
pub fn collect_request<P: Prompter + ?Sized>(
    prompter: &mut P,
    default_file_name: &str,
) -> Result<GenerationRequest> {
    let mut flow = PromptFlow::new(default_file_name);

    while let Some(question) = flow.question() {
        prompter.show(&question)?;
        let outcome = ask_until_valid(prompter, |raw| flow.submit(raw))?;
        if outcome == StepOutcome::DefaultUsed {
            prompter.note(DEFAULT_SELECTED)?;
        }
    }

    tracing::debug!(answers = ?flow.answers, "prompt flow complete");
    flow.finish()
        .context("Prompt flow ended without a complete request")
}

/// Ask whether to open the output directory
pub fn ask_open_directory<P: Prompter + ?Sized>(prompter: &mut P) -> Result<bool> {
    prompter.show(&Question::open_directory())?;
    ask_until_valid(prompter, parse_open_directory)
}
