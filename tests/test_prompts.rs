//! Tests for the line-based prompt driver

mod common;

use std::io::Cursor;

use codegen::cli::{ask_open_directory, collect_request, LinePrompter, DEFAULT_SELECTED};
use codegen::pipeline::TextEncoding;
use common::answers;

fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    console::set_colors_enabled(false);
    LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(prompter: LinePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(prompter.into_output()).unwrap()
}

#[test]
fn test_collect_request_happy_path() {
    let mut p = prompter(&answers(&["20", "5", "1", "3", "3", "vouchers.csv"]));
    let request = collect_request(&mut p, "codes_20240101000000.csv").unwrap();

    assert_eq!(request.code_count, 20);
    assert_eq!(request.code_length, 5);
    assert_eq!(request.pool.len(), 62);
    assert_eq!(request.encoding, TextEncoding::Windows1250);
    assert_eq!(request.output_file_name, "vouchers.csv");

    let output = output_of(p);
    assert!(output.contains("Enter the number of codes:"));
    assert!(output.contains("1. Letters and digits (recommended)"));
    assert!(output.contains("3. Windows-1250"));
}

#[test]
fn test_reprompts_after_invalid_input() {
    let input = answers(&["abc", "-2", "3", "0", "2", "7", "2", "", "AB", "1", "1", ""]);
    let mut p = prompter(&input);
    let request = collect_request(&mut p, "codes_20240101000000.csv").unwrap();

    assert_eq!(request.code_count, 3);
    assert_eq!(request.code_length, 2);
    assert_eq!(request.output_file_name, "codes_20240101000000.csv");

    let output = output_of(p);
    assert!(output.contains("Enter a valid number."));
    assert!(output.contains("Enter a positive number."));
    assert!(output.contains("Choose one of the valid options: 1, 2, 3, 4"));
    assert!(output.contains(DEFAULT_SELECTED));
    assert_eq!(
        output.matches("Enter the number of codes:").count(),
        1,
        "The question is shown once, only the error repeats"
    );
}

#[test]
fn test_custom_set_path() {
    let input = answers(&["2", "3", "4", "", "QRS", "2", "q.csv"]);
    let mut p = prompter(&input);
    let request = collect_request(&mut p, "unused.csv").unwrap();

    assert_eq!(request.pool.chars(), &['Q', 'R', 'S']);
    assert_eq!(request.encoding, TextEncoding::Iso8859_2);

    let output = output_of(p);
    assert!(output.contains("Character set must not be empty."));
    assert!(!output.contains("Choose letter case:"));
}

#[test]
fn test_crlf_answers_are_accepted() {
    let mut p = prompter("1\r\n1\r\n3\r\n1\r\n1\r\nwin.csv\r\n");
    let request = collect_request(&mut p, "unused.csv").unwrap();
    assert_eq!(request.output_file_name, "win.csv");
}

#[test]
fn test_closed_input_is_an_error() {
    let mut p = prompter(&answers(&["10", "abc"]));
    let err = collect_request(&mut p, "unused.csv").unwrap_err();
    assert!(err.to_string().contains("Input stream closed"));
}

#[test]
fn test_ask_open_directory() {
    let mut p = prompter(&answers(&["maybe", "1"]));
    assert!(ask_open_directory(&mut p).unwrap());
    let output = output_of(p);
    assert!(output.contains("Open the folder with the generated codes?"));
    assert!(output.contains("Choose one of the valid options: 1, 2"));

    let mut p = prompter(&answers(&["2"]));
    assert!(!ask_open_directory(&mut p).unwrap());
}
