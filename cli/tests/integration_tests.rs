use std::io::Cursor;

use mdbook_flagtable::config::FlagTableConfig;
use mdbook_flagtable::error::PreprocessorError;
use mdbook_flagtable::generator::{FlagTables, generate_flag_table};
use mdbook_flagtable::preprocess;
use serde_json::{Value, json};

fn tables() -> FlagTables {
    FlagTables {
        run: "RUN-TABLE".to_string(),
        compile: "COMPILE-TABLE".to_string(),
    }
}

fn preprocess_payload(payload: &Value) -> Vec<u8> {
    let input = serde_json::to_vec(payload).expect("payload serializes");
    let mut output = Vec::new();
    preprocess::run(&tables(), Cursor::new(input), &mut output).expect("preprocess succeeds");
    output
}

#[test]
fn test_preprocess_rewrites_content_fields_and_drops_context() {
    let payload = json!([
        { "root": "/book", "renderer": "html" },
        {
            "sections": [
                {
                    "Chapter": {
                        "name": "Running",
                        "content": "# Flags\n\n{{#custom run-flags}}\n",
                        "sub_items": [
                            {
                                "Chapter": {
                                    "name": "Compiling",
                                    "content": "{{#custom compile-flags}} and {{#custom run-flags}}"
                                }
                            }
                        ]
                    }
                },
                "Separator"
            ],
            "__non_exhaustive": null
        }
    ]);

    let output = preprocess_payload(&payload);
    assert_eq!(output.last(), Some(&b'\n'));

    let book: Value = serde_json::from_slice(&output).expect("output is one JSON document");
    assert!(book.get("root").is_none(), "context must not be echoed back");
    assert_eq!(
        book["sections"][0]["Chapter"]["content"],
        "# Flags\n\nRUN-TABLE\n"
    );
    assert_eq!(
        book["sections"][0]["Chapter"]["sub_items"][0]["Chapter"]["content"],
        "COMPILE-TABLE and RUN-TABLE"
    );
    // Untouched structure survives the round trip.
    assert_eq!(book["sections"][1], "Separator");
    assert_eq!(book["sections"][0]["Chapter"]["name"], "Running");
}

#[test]
fn test_preprocess_without_placeholders_preserves_book_exactly() {
    let book = json!({
        "sections": [
            { "Chapter": { "name": "Intro", "content": "no tokens here", "number": [1] } }
        ]
    });
    let payload = json!([{}, book]);

    let output = preprocess_payload(&payload);
    let roundtripped: Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(roundtripped, book);
}

#[test]
fn test_preprocess_rejects_malformed_payload() {
    let mut output = Vec::new();
    let err = preprocess::run(
        &tables(),
        Cursor::new(br#"{"not": "an array"}"#.to_vec()),
        &mut output,
    )
    .unwrap_err();
    assert!(matches!(err, PreprocessorError::MalformedInput));
    assert!(output.is_empty(), "no partial output on failure");
}

#[test]
fn test_preprocess_rejects_invalid_json() {
    let mut output = Vec::new();
    let err = preprocess::run(&tables(), Cursor::new(b"{notjson".to_vec()), &mut output).unwrap_err();
    assert!(matches!(err, PreprocessorError::Json(_)));
    assert!(output.is_empty());
}

#[cfg(unix)]
mod fake_tool {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use super::*;

    const FAKE_TOOL: &str = r#"#!/bin/sh
case "$1" in
  run)
    printf 'Run a program\n\nUsage: basm run [OPTIONS] <FILE>\n\nOptions:\n'
    printf '  -v, --verbose  Enable verbose output\n'
    printf '  --memory <CELLS>  Memory size in cells\n'
    printf '  -h, --help  Print help\n'
    ;;
  compile)
    printf 'Compile a program\n\nUsage: basm compile [OPTIONS] <FILE>\n\nOptions:\n'
    printf '  -o, --output <PATH>  Output file\n'
    printf '  -h, --help  Print help\n'
    ;;
  broken)
    printf 'Usage: basm broken\n\nNo options section here\n'
    ;;
  *)
    exit 2
    ;;
esac
"#;

    fn install_fake_tool(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("fake-basm");
        fs::write(&path, FAKE_TOOL).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
        path
    }

    #[test]
    fn test_generate_tables_from_fake_tool() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tool = install_fake_tool(&dir);
        let config = FlagTableConfig::new(tool.to_str().expect("utf-8 temp path"));

        let tables = FlagTables::generate(&config).expect("fake tool produces both tables");

        assert!(tables.run.starts_with("Shorthand | Longhand | Description | \n"));
        assert!(tables.run.contains("`-v` | `--verbose` | Enable verbose output | \n"));
        assert!(tables.run.contains(" | `--memory <CELLS>` | Memory size in cells | \n"));
        assert!(tables.compile.contains("`-o` | `--output <PATH>` | Output file | \n"));
    }

    #[test]
    fn test_generate_fails_without_options_section() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tool = install_fake_tool(&dir);
        let config = FlagTableConfig::new(tool.to_str().expect("utf-8 temp path"));

        let err = generate_flag_table(&config, "broken").unwrap_err();
        assert!(matches!(
            err,
            PreprocessorError::MissingOptionsSection { .. }
        ));
    }

    #[test]
    fn test_supports_invocation_exits_zero_with_no_stdout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tool = install_fake_tool(&dir);

        let output = std::process::Command::new(env!("CARGO_BIN_EXE_mdbook-flagtable"))
            .args(["--command", tool.to_str().expect("utf-8 temp path")])
            .args(["supports", "html"])
            .stdin(std::process::Stdio::null())
            .output()
            .expect("binary should spawn");

        assert!(output.status.success(), "capability query must exit 0");
        assert!(
            output.stdout.is_empty(),
            "capability query must emit no stdout payload"
        );
    }

    #[test]
    fn test_supports_fails_when_tool_is_missing() {
        // Table generation runs before the capability answer, so a missing
        // tool fails the query too.
        let output = std::process::Command::new(env!("CARGO_BIN_EXE_mdbook-flagtable"))
            .args(["--command", "definitely-not-a-real-binary-4729"])
            .args(["supports", "html"])
            .stdin(std::process::Stdio::null())
            .output()
            .expect("binary should spawn");

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_generate_fails_on_nonzero_exit() {
        let dir = tempfile::tempdir().expect("temp dir");
        let tool = install_fake_tool(&dir);
        let config = FlagTableConfig::new(tool.to_str().expect("utf-8 temp path"));

        let err = generate_flag_table(&config, "unknown").unwrap_err();
        assert!(matches!(err, PreprocessorError::HelpFailed { .. }));
    }
}
