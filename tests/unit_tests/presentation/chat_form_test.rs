use std::collections::HashMap;

use docchat::domain::BackendKind;
use docchat::presentation::handlers::{ChatFormError, parse_chat_fields};

use crate::common::file_field;

fn fields(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn given_declared_files_when_parsing_then_reads_them_in_index_order() {
    let request = parse_chat_fields(
        fields(&[
            ("message", "compare".to_string()),
            ("fileCount", "2".to_string()),
            ("file_1", file_field("second.txt", "text/plain", "b")),
            ("file_0", file_field("first.txt", "text/plain", "a")),
        ]),
        BackendKind::Local,
    )
    .unwrap();

    assert_eq!(request.message.as_deref(), Some("compare"));
    assert_eq!(request.files.len(), 2);
    assert_eq!(request.files[0].name, "first.txt");
    assert_eq!(request.files[1].name, "second.txt");
}

#[test]
fn given_missing_file_field_when_parsing_then_skips_it() {
    let request = parse_chat_fields(
        fields(&[
            ("fileCount", "3".to_string()),
            ("file_0", file_field("a.txt", "text/plain", "a")),
            ("file_2", file_field("c.txt", "text/plain", "c")),
        ]),
        BackendKind::Cloud,
    )
    .unwrap();

    let names: Vec<&str> = request.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "c.txt"]);
}

#[test]
fn given_unparsable_file_count_when_parsing_then_ignores_files() {
    let request = parse_chat_fields(
        fields(&[
            ("fileCount", "two".to_string()),
            ("file_0", file_field("a.txt", "text/plain", "a")),
        ]),
        BackendKind::Local,
    )
    .unwrap();

    assert!(request.files.is_empty());
}

#[test]
fn given_undeclared_extra_file_when_parsing_then_ignores_it() {
    let request = parse_chat_fields(
        fields(&[
            ("fileCount", "1".to_string()),
            ("file_0", file_field("a.txt", "text/plain", "a")),
            ("file_1", file_field("b.txt", "text/plain", "b")),
        ]),
        BackendKind::Local,
    )
    .unwrap();

    assert_eq!(request.files.len(), 1);
}

#[test]
fn given_malformed_descriptor_when_parsing_then_reports_its_index() {
    let result = parse_chat_fields(
        fields(&[
            ("fileCount", "2".to_string()),
            ("file_0", file_field("a.txt", "text/plain", "a")),
            ("file_1", "[1, 2".to_string()),
        ]),
        BackendKind::Local,
    );

    assert!(matches!(
        result,
        Err(ChatFormError::InvalidFilePayload { index: 1, .. })
    ));
}

#[test]
fn given_model_field_when_parsing_then_only_local_keeps_it() {
    let form = fields(&[
        ("message", "hi".to_string()),
        ("model", "phi3".to_string()),
    ]);

    let local = parse_chat_fields(form.clone(), BackendKind::Local).unwrap();
    let cloud = parse_chat_fields(form, BackendKind::Cloud).unwrap();

    assert_eq!(local.model.as_deref(), Some("phi3"));
    assert_eq!(cloud.model, None);
}

#[test]
fn given_huge_file_count_when_parsing_then_reads_only_present_fields() {
    let request = parse_chat_fields(
        fields(&[
            ("message", "hi".to_string()),
            ("fileCount", usize::MAX.to_string()),
            ("file_0", file_field("a.txt", "text/plain", "a")),
        ]),
        BackendKind::Local,
    )
    .unwrap();

    assert_eq!(request.files.len(), 1);
    assert_eq!(request.files[0].name, "a.txt");
}

#[test]
fn given_large_file_count_without_files_when_parsing_then_returns_no_files() {
    let request = parse_chat_fields(
        fields(&[
            ("message", "hi".to_string()),
            ("fileCount", "100000000000".to_string()),
        ]),
        BackendKind::Cloud,
    )
    .unwrap();

    assert!(request.files.is_empty());
    assert_eq!(request.message.as_deref(), Some("hi"));
}

#[test]
fn given_sparse_high_index_when_parsing_then_still_reads_it() {
    let request = parse_chat_fields(
        fields(&[
            ("fileCount", "6".to_string()),
            ("file_5", file_field("last.txt", "text/plain", "z")),
            ("file_05", file_field("padded.txt", "text/plain", "p")),
        ]),
        BackendKind::Local,
    )
    .unwrap();

    let names: Vec<&str> = request.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["last.txt"]);
}
