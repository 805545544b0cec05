// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stylesheet loading tests

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use crate::config::{check_stylesheet, AppConfig, ResourceError, StylesheetSource};

/// Helper: Writes a stylesheet into a fresh temp dir
fn create_test_stylesheet(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("styles.css");

    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.title, "Tyche App");
    assert_eq!(config.stylesheet, StylesheetSource::Embedded);
    assert!(config.default_width > 0 && config.default_height > 0);
}

#[test]
fn test_embedded_stylesheet_loads() {
    let css = StylesheetSource::Embedded.load();
    assert!(css.is_ok(), "Embedded stylesheet should pass checks: {:?}", css.err());
}

#[test]
fn test_file_stylesheet_loads() {
    let (_temp_dir, path) = create_test_stylesheet(b".form-toggle { padding: 6px; }\n");

    let css = StylesheetSource::File(path).load().unwrap();
    assert!(css.contains(".form-toggle"));
}

#[test]
fn test_missing_stylesheet_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.css");

    let result = StylesheetSource::File(path.clone()).load();
    match result {
        Err(ResourceError::StylesheetNotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected StylesheetNotFound, got {:?}", other),
    }
}

#[test]
fn test_non_utf8_stylesheet_is_unreadable() {
    let (_temp_dir, path) = create_test_stylesheet(&[0xff, 0xfe, 0x00, 0x7b]);

    let result = StylesheetSource::File(path).load();
    assert!(matches!(result, Err(ResourceError::StylesheetUnreadable { .. })));
}

#[test]
fn test_empty_stylesheet_is_malformed() {
    let (_temp_dir, path) = create_test_stylesheet(b"  \n\t");

    let result = StylesheetSource::File(path).load();
    assert!(matches!(result, Err(ResourceError::StylesheetMalformed(_))));
}

#[test]
fn test_unbalanced_braces() {
    assert!(check_stylesheet("window { padding: 4px;").is_err());
    assert!(check_stylesheet("window { padding: 4px; } }").is_err());
    assert!(check_stylesheet("window { padding: 4px; }").is_ok());
}

#[test]
fn test_braces_inside_comments_and_strings_ignored() {
    let css = r#"
/* { not a block */
label { font-family: "Brace { Sans"; }
"#;
    assert!(check_stylesheet(css).is_ok());
}

#[test]
fn test_unterminated_comment() {
    let err = check_stylesheet("label { }\n/* open").unwrap_err();
    assert!(err.to_string().contains("line 2"), "Got: {}", err);
}

#[test]
fn test_unterminated_string() {
    assert!(check_stylesheet("label { font-family: \"Sans; }").is_err());
}
