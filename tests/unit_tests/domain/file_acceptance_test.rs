use docchat::domain::{DOCX_MIME, FileAcceptancePolicy, FileRejection, MAX_FILE_SIZE_BYTES};

#[test]
fn given_supported_mime_under_limit_when_checking_then_accepts() {
    let policy = FileAcceptancePolicy::default();

    assert!(policy.check("notes.txt", "text/plain", 12).is_ok());
    assert!(policy.check("report.docx", DOCX_MIME, 1024).is_ok());
    assert!(policy.check("photo.webp", "image/webp", 1024).is_ok());
}

#[test]
fn given_unknown_mime_with_allowed_extension_when_checking_then_accepts() {
    let policy = FileAcceptancePolicy::default();

    assert!(policy.check("script.js", "", 10).is_ok());
    assert!(policy.check("README.md", "application/octet-stream", 10).is_ok());
}

#[test]
fn given_unsupported_type_when_checking_then_rejects_with_name() {
    let policy = FileAcceptancePolicy::default();

    let result = policy.check("setup.exe", "application/x-msdownload", 10);

    assert_eq!(
        result,
        Err(FileRejection::UnsupportedType {
            name: "setup.exe".to_string()
        })
    );
}

#[test]
fn given_file_over_ten_megabytes_when_checking_then_rejects_as_too_large() {
    let policy = FileAcceptancePolicy::default();

    let result = policy.check("big.pdf", "application/pdf", MAX_FILE_SIZE_BYTES + 1);

    assert!(matches!(result, Err(FileRejection::TooLarge { .. })));
    assert!(result.unwrap_err().to_string().contains("big.pdf"));
}

#[test]
fn given_file_exactly_at_limit_when_checking_then_accepts() {
    let policy = FileAcceptancePolicy::default();

    assert!(policy.check("big.pdf", "application/pdf", MAX_FILE_SIZE_BYTES).is_ok());
}
