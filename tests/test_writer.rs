//! Tests for CSV persistence

mod common;

use codegen::pipeline::{CodeWriter, CodegenError, TextEncoding};
use common::{generate, read_back};
use tempfile::TempDir;

#[test]
fn test_round_trip_all_encodings() {
    // č and ř exist in both ISO-8859-2 and Windows-1250
    let codes = generate("ABCčř123", 6, 100, 21).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let writer = CodeWriter::new(temp_dir.path().join("generated_codes"));

    for encoding in TextEncoding::ALL {
        let file_name = format!("codes_{}.csv", encoding.name());
        let path = writer.save(&codes, &file_name, encoding).unwrap();

        assert!(path.is_absolute(), "Saved path should be absolute");
        assert!(path.exists(), "{} file should be created", encoding);
        assert_eq!(
            read_back(&path, encoding),
            codes.clone().into_inner(),
            "Codes should round-trip through {}",
            encoding
        );
    }
}

#[test]
fn test_single_byte_encoding_bytes() {
    let codes = generate("Ř", 1, 1, 0).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let writer = CodeWriter::new(temp_dir.path());

    let path = writer.save(&codes, "latin2.csv", TextEncoding::Iso8859_2).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), vec![0xD8, b'\r', b'\n']);

    let path = writer.save(&codes, "utf8.csv", TextEncoding::Utf8).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), "Ř\r\n".as_bytes());
}

#[test]
fn test_rows_have_no_header_and_one_field() {
    let codes = generate("0123456789", 4, 25, 3).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = CodeWriter::new(temp_dir.path())
        .save(&codes, "codes.csv", TextEncoding::Utf8)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 25, "One row per code, no header");
    assert!(content.lines().all(|line| !line.contains(',')));
    assert!(content.ends_with("\r\n"));
}

#[test]
fn test_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let writer = CodeWriter::new(&nested);

    let codes = generate("AB", 2, 4, 0).unwrap();
    writer.save(&codes, "codes.csv", TextEncoding::Utf8).unwrap();
    assert!(nested.join("codes.csv").exists());

    // Second save into the existing directory overwrites
    let fewer = generate("AB", 2, 1, 0).unwrap();
    let path = writer.save(&fewer, "codes.csv", TextEncoding::Utf8).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 1);
}

#[test]
fn test_unrepresentable_character_aborts_save() {
    let codes = generate("€", 2, 1, 0).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let writer = CodeWriter::new(temp_dir.path());

    let result = writer.save(&codes, "euro.csv", TextEncoding::Iso8859_2);
    assert!(matches!(
        result,
        Err(CodegenError::Unrepresentable { character: '€', .. })
    ));
    assert!(
        !temp_dir.path().join("euro.csv").exists(),
        "No partial file should be left behind"
    );
}

#[test]
fn test_custom_symbols_are_quoted_and_recoverable() {
    let codes = generate(",\"", 3, 8, 2).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = CodeWriter::new(temp_dir.path())
        .save(&codes, "symbols.csv", TextEncoding::Utf8)
        .unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .unwrap();
    let read: std::collections::HashSet<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(read, codes.into_inner());
}
