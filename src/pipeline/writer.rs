//! CSV persistence for generated codes
//!
//! Rows are serialized with the `csv` crate (one field, no header, CRLF
//! terminators) and then transcoded into the requested encoding. Every code
//! is checked against the encoding before the file is created, so an
//! unrepresentable character never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::CodegenError;
use super::generator::CodeSet;
use super::request::TextEncoding;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "generated_codes";

/// Writes code sets into a fixed output directory
#[derive(Debug, Clone)]
pub struct CodeWriter {
    directory: PathBuf,
}

impl CodeWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_directory(&self) -> Result<&Path, CodegenError> {
        fs::create_dir_all(&self.directory).map_err(|source| CodegenError::Io {
            path: self.directory.clone(),
            source,
        })?;
        Ok(&self.directory)
    }

    /// Write `codes` to `<directory>/<file_name>` and return the absolute path.
    ///
    /// An existing file with the same name is overwritten.
    pub fn save(
        &self,
        codes: &CodeSet,
        file_name: &str,
        encoding: TextEncoding,
    ) -> Result<PathBuf, CodegenError> {
        self.ensure_directory()?;
        let path = self.directory.join(file_name);

        let bytes = encode_csv(codes, encoding)?;
        fs::write(&path, bytes).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), rows = codes.len(), %encoding, "codes written");

        std::path::absolute(&path).map_err(|source| CodegenError::Io { path, source })
    }
}

/// Serialize `codes` as single-column CSV bytes in `encoding`
pub fn encode_csv(codes: &CodeSet, encoding: TextEncoding) -> Result<Vec<u8>, CodegenError> {
    for code in codes {
        check_representable(code, encoding)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    for code in codes {
        writer.write_record([code.as_str()])?;
    }
    let utf8 = writer
        .into_inner()
        .map_err(|err| CodegenError::Csv(csv::Error::from(err.into_error())))?;

    if encoding == TextEncoding::Utf8 {
        return Ok(utf8);
    }

    let text = String::from_utf8_lossy(&utf8);
    let (bytes, _, had_errors) = encoding.encoding().encode(&text);
    debug_assert!(!had_errors, "codes were checked before encoding");
    Ok(bytes.into_owned())
}

/// Fail with the first character of `code` that `encoding` cannot represent
pub fn check_representable(code: &str, encoding: TextEncoding) -> Result<(), CodegenError> {
    if encoding == TextEncoding::Utf8 {
        return Ok(());
    }

    let target = encoding.encoding();
    let (_, _, had_errors) = target.encode(code);
    if !had_errors {
        return Ok(());
    }

    let mut buf = [0u8; 4];
    let character = code
        .chars()
        .find(|c| target.encode(c.encode_utf8(&mut buf)).2)
        .unwrap_or_default();

    Err(CodegenError::Unrepresentable {
        code: code.to_string(),
        character,
        encoding: encoding.name(),
    })
}
