//! Generation request and the selections it is built from

use chrono::NaiveDateTime;
use encoding_rs::Encoding;

use super::charset::CharacterPool;

/// Character set chosen at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetChoice {
    /// Digits followed by letters
    Alphanumeric,
    /// Letters only
    Letters,
    /// Digits only, letter case does not apply
    Numeric,
    /// User-supplied characters, used verbatim
    Custom(String),
}

impl CharsetChoice {
    pub fn is_custom(&self) -> bool {
        matches!(self, CharsetChoice::Custom(_))
    }
}

/// Letter case applied to the built-in alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
    /// Upper and lower alphabets concatenated
    Mixed,
}

/// Text encoding of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Iso8859_2,
    Windows1250,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Iso8859_2,
        TextEncoding::Windows1250,
    ];

    /// Display name as shown at the prompt
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Iso8859_2 => "ISO-8859-2",
            TextEncoding::Windows1250 => "Windows-1250",
        }
    }

    pub fn encoding(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8,
            TextEncoding::Iso8859_2 => encoding_rs::ISO_8859_2,
            TextEncoding::Windows1250 => encoding_rs::WINDOWS_1250,
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed for one run, built once from validated input
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub code_count: usize,
    pub code_length: usize,
    pub pool: CharacterPool,
    pub output_file_name: String,
    pub encoding: TextEncoding,
}

/// Default output file name: `codes_<YYYYMMDDHHMMSS>.csv`
pub fn default_file_name(now: NaiveDateTime) -> String {
    format!("codes_{}.csv", now.format("%Y%m%d%H%M%S"))
}
