//! Descriptor file loading tests using real temp files.

#![allow(clippy::expect_used)]

use std::io::Write as _;

use lambda_deploy::infra::descriptor::load_file;

fn write_descriptor(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn descriptor_file_loads_and_applies_defaults() {
    let file = write_descriptor(
        "\
lambda:
  function_name: python-hello
  handler: handler.main
  runtime: python3.12
  role: arn:aws:iam::123456789012:role/lambda
",
    );
    let spec = load_file(file.path()).expect("valid descriptor");
    assert_eq!(spec.function_name, "python-hello");
    assert_eq!(spec.timeout, 3);
    assert_eq!(spec.memory_size, 128);
}

#[test]
fn missing_descriptor_file_is_an_error() {
    let err = load_file(std::path::Path::new("/nonexistent/lambda.yml"))
        .expect_err("must fail")
        .to_string();
    assert!(err.contains("cannot read descriptor"), "got: {err}");
}

#[test]
fn invalid_descriptor_error_names_the_file() {
    let file = write_descriptor("lambda:\n  function_name: python-hello\n");
    let err = load_file(file.path()).expect_err("must fail");
    let chain = format!("{err:#}");
    assert!(
        chain.contains(&file.path().display().to_string()),
        "got: {chain}"
    );
    assert!(chain.contains("missing handler"), "got: {chain}");
}
