//! Prompt state machine for collecting a generation request
//!
//! The flow is strictly linear and knows nothing about terminals: a driver
//! asks the current [`Question`], feeds the raw answer to
//! [`PromptFlow::submit`] and, on [`InputError`], shows the message and asks
//! again.
//!
//! # Flow
//!
//! 1. Code count
//! 2. Code length
//! 3. Character set
//! 4. Custom characters (custom set only) or letter case (built-in sets)
//! 5. File encoding
//! 6. Output file name (empty selects the timestamped default)

use thiserror::Error;

use crate::pipeline::{build_character_set, CharsetChoice, GenerationRequest, LetterCase, TextEncoding};

// ============================================================================
// Validation
// ============================================================================

/// Rejected answer; the Display text is shown before re-prompting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter a valid number.")]
    NotANumber,
    #[error("Enter a positive number.")]
    NotPositive,
    #[error("Choose one of the valid options: {}", .valid.join(", "))]
    InvalidOption { valid: Vec<&'static str> },
    #[error("Character set must not be empty.")]
    EmptyCharset,
}

/// One numbered entry of a menu prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub token: &'static str,
    pub label: &'static str,
}

const fn opt(token: &'static str, label: &'static str) -> MenuOption {
    MenuOption { token, label }
}

pub const CHARSET_OPTIONS: [MenuOption; 4] = [
    opt("1", "Letters and digits (recommended)"),
    opt("2", "Letters"),
    opt("3", "Digits"),
    opt("4", "Custom character set"),
];

pub const CASE_OPTIONS: [MenuOption; 3] = [
    opt("1", "Uppercase (recommended)"),
    opt("2", "Lowercase"),
    opt("3", "Both"),
];

pub const ENCODING_OPTIONS: [MenuOption; 3] = [
    opt("1", "UTF-8 (recommended)"),
    opt("2", "ISO-8859-2"),
    opt("3", "Windows-1250"),
];

pub const OPEN_DIRECTORY_OPTIONS: [MenuOption; 2] = [opt("1", "Yes"), opt("2", "No")];

/// Parse a strictly positive integer
pub fn parse_positive_int(raw: &str) -> Result<usize, InputError> {
    let value: i64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if value <= 0 {
        return Err(InputError::NotPositive);
    }
    usize::try_from(value).map_err(|_| InputError::NotANumber)
}

/// Match a menu token, ignoring case and surrounding whitespace
pub fn parse_option(raw: &str, options: &[MenuOption]) -> Result<MenuOption, InputError> {
    let choice = raw.trim().to_lowercase();
    options
        .iter()
        .find(|o| o.token == choice)
        .copied()
        .ok_or_else(|| InputError::InvalidOption {
            valid: options.iter().map(|o| o.token).collect(),
        })
}

/// Parse the yes/no answer to the open-directory question
pub fn parse_open_directory(raw: &str) -> Result<bool, InputError> {
    Ok(parse_option(raw, &OPEN_DIRECTORY_OPTIONS)?.token == "1")
}

fn charset_for(token: &str, custom: Option<String>) -> CharsetChoice {
    match token {
        "2" => CharsetChoice::Letters,
        "3" => CharsetChoice::Numeric,
        "4" => CharsetChoice::Custom(custom.unwrap_or_default()),
        _ => CharsetChoice::Alphanumeric,
    }
}

fn case_for(token: &str) -> LetterCase {
    match token {
        "2" => LetterCase::Lower,
        "3" => LetterCase::Mixed,
        _ => LetterCase::Upper,
    }
}

fn encoding_for(token: &str) -> TextEncoding {
    match token {
        "2" => TextEncoding::Iso8859_2,
        "3" => TextEncoding::Windows1250,
        _ => TextEncoding::Utf8,
    }
}

// ============================================================================
// Steps
// ============================================================================

/// Individual prompt in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    CodeCount,
    CodeLength,
    CharsetChoice,
    CustomCharset,
    CaseChoice,
    EncodingChoice,
    OutputFileName,
}

impl PromptStep {
    pub fn title(&self) -> &'static str {
        match self {
            PromptStep::CodeCount => "Enter the number of codes:",
            PromptStep::CodeLength => "Number of characters:",
            PromptStep::CharsetChoice => "Choose a character set:",
            PromptStep::CustomCharset => "Enter a custom character set:",
            PromptStep::CaseChoice => "Choose letter case:",
            PromptStep::EncodingChoice => "Choose the file encoding:",
            PromptStep::OutputFileName => "Enter the file name",
        }
    }

    pub fn options(&self) -> &'static [MenuOption] {
        match self {
            PromptStep::CharsetChoice => &CHARSET_OPTIONS,
            PromptStep::CaseChoice => &CASE_OPTIONS,
            PromptStep::EncodingChoice => &ENCODING_OPTIONS,
            _ => &[],
        }
    }
}

impl std::fmt::Display for PromptStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Text and menu entries shown for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub title: String,
    pub options: &'static [MenuOption],
}

impl Question {
    pub fn open_directory() -> Self {
        Self {
            title: "Open the folder with the generated codes?".to_string(),
            options: &OPEN_DIRECTORY_OPTIONS,
        }
    }
}

/// Result of an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Answer stored, moved to the next step
    Advanced,
    /// Empty file name, the default name was used
    DefaultUsed,
}

// ============================================================================
// Flow state
// ============================================================================

/// Answers accumulated so far
#[derive(Debug, Clone, Default)]
pub struct PromptAnswers {
    pub code_count: Option<usize>,
    pub code_length: Option<usize>,
    pub charset: Option<CharsetChoice>,
    pub case: LetterCase,
    pub encoding: TextEncoding,
    pub output_file_name: Option<String>,
}

/// Linear prompt state machine
#[derive(Debug, Clone)]
pub struct PromptFlow {
    step: Option<PromptStep>,
    visited: Vec<PromptStep>,
    default_file_name: String,
    pub answers: PromptAnswers,
}

impl PromptFlow {
    /// `default_file_name` is used when the file name answer is empty
    pub fn new(default_file_name: impl Into<String>) -> Self {
        Self {
            step: Some(PromptStep::CodeCount),
            visited: Vec::new(),
            default_file_name: default_file_name.into(),
            answers: PromptAnswers::default(),
        }
    }

    pub fn current_step(&self) -> Option<PromptStep> {
        self.step
    }

    /// Steps answered so far, in order
    pub fn visited(&self) -> &[PromptStep] {
        &self.visited
    }

    pub fn is_complete(&self) -> bool {
        self.step.is_none()
    }

    /// Question for the current step
    pub fn question(&self) -> Option<Question> {
        let step = self.step?;
        let title = match step {
            PromptStep::OutputFileName => {
                format!("{} (default: {})", step.title(), self.default_file_name)
            }
            _ => step.title().to_string(),
        };
        Some(Question {
            title,
            options: step.options(),
        })
    }

    /// Validate `raw` for the current step and advance on success.
    ///
    /// `raw` must not include the line terminator. Has no effect once the flow
    /// is complete.
    pub fn submit(&mut self, raw: &str) -> Result<StepOutcome, InputError> {
        let Some(step) = self.step else {
            return Ok(StepOutcome::Advanced);
        };
        let mut outcome = StepOutcome::Advanced;

        let next = match step {
            PromptStep::CodeCount => {
                self.answers.code_count = Some(parse_positive_int(raw)?);
                Some(PromptStep::CodeLength)
            }
            PromptStep::CodeLength => {
                self.answers.code_length = Some(parse_positive_int(raw)?);
                Some(PromptStep::CharsetChoice)
            }
            PromptStep::CharsetChoice => {
                let choice = parse_option(raw, &CHARSET_OPTIONS)?;
                let charset = charset_for(choice.token, None);
                let next = if charset.is_custom() {
                    PromptStep::CustomCharset
                } else {
                    PromptStep::CaseChoice
                };
                self.answers.charset = Some(charset);
                Some(next)
            }
            PromptStep::CustomCharset => {
                if raw.is_empty() {
                    return Err(InputError::EmptyCharset);
                }
                self.answers.charset = Some(charset_for("4", Some(raw.to_string())));
                self.answers.case = LetterCase::Upper;
                Some(PromptStep::EncodingChoice)
            }
            PromptStep::CaseChoice => {
                self.answers.case = case_for(parse_option(raw, &CASE_OPTIONS)?.token);
                Some(PromptStep::EncodingChoice)
            }
            PromptStep::EncodingChoice => {
                self.answers.encoding = encoding_for(parse_option(raw, &ENCODING_OPTIONS)?.token);
                Some(PromptStep::OutputFileName)
            }
            PromptStep::OutputFileName => {
                let name = raw.trim();
                let name = if name.is_empty() {
                    outcome = StepOutcome::DefaultUsed;
                    self.default_file_name.clone()
                } else {
                    name.to_string()
                };
                self.answers.output_file_name = Some(name);
                None
            }
        };

        self.visited.push(step);
        self.step = next;
        Ok(outcome)
    }

    /// Build the request once every step is answered
    pub fn finish(self) -> Option<GenerationRequest> {
        if !self.is_complete() {
            return None;
        }
        let answers = self.answers;
        let charset = answers.charset?;

        Some(GenerationRequest {
            code_count: answers.code_count?,
            code_length: answers.code_length?,
            pool: build_character_set(&charset, answers.case),
            output_file_name: answers.output_file_name?,
            encoding: answers.encoding,
        })
    }
}
