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


//! Application configuration and startup resources
//!
//! Everything the shell needs before the GTK main loop starts:
//!
//! - **Window settings**: title, application id, default size
//! - **Stylesheet**: embedded at compile time or read from a file
//!
//! # Example
//!
//! ```no_run
//! use tyche::config::{AppConfig, StylesheetSource};
//!
//! let config = AppConfig {
//!     stylesheet: StylesheetSource::File("~/tyche.css".into()),
//!     ..AppConfig::default()
//! };
//!
//! let css = config.stylesheet.load()?;
//! println!("Loaded {} bytes of CSS", css.len());
//! # Ok::<(), tyche::config::ResourceError>(())
//! ```

pub mod error;

pub use error::ResourceError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stylesheet compiled into the binary
const EMBEDDED_STYLESHEET: &str = include_str!("../ui/style.css");

pub const DEFAULT_TITLE: &str = "Tyche App";
pub const DEFAULT_APPLICATION_ID: &str = "com.tyche.app";
pub const DEFAULT_WIDTH: i32 = 420;
pub const DEFAULT_HEIGHT: i32 = 480;

/// Where the stylesheet comes from
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StylesheetSource {
    /// The sheet shipped inside the binary
    #[default]
    Embedded,
    /// A sheet on disk; `~` is expanded on load
    File(PathBuf),
}

impl StylesheetSource {
    /// Reads and checks the stylesheet
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - CSS text ready to hand to GTK
    /// * `Err(ResourceError)` - Missing, unreadable or malformed sheet
    pub fn load(&self) -> Result<String, ResourceError> {
        let css = match self {
            StylesheetSource::Embedded => EMBEDDED_STYLESHEET.to_string(),
            StylesheetSource::File(path) => {
                let path = expand_path(path)?;
                read_stylesheet(&path)?
            }
        };

        check_stylesheet(&css)?;
        Ok(css)
    }
}

/// Window and resource settings for one run of the application
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub application_id: String,
    pub default_width: i32,
    pub default_height: i32,
    pub stylesheet: StylesheetSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            application_id: DEFAULT_APPLICATION_ID.to_string(),
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            stylesheet: StylesheetSource::Embedded,
        }
    }
}

/// Expands a leading `~` in the given path
fn expand_path(path: &Path) -> Result<PathBuf, ResourceError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ResourceError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn read_stylesheet(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ResourceError::StylesheetNotFound(path.to_path_buf()),
        _ => ResourceError::StylesheetUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Structural check run before GTK sees the sheet
///
/// Rejects empty sheets, unbalanced braces, and unterminated comments or
/// strings. GTK reports finer-grained errors when the sheet is attached.
pub fn check_stylesheet(css: &str) -> Result<(), ResourceError> {
    if css.trim().is_empty() {
        return Err(ResourceError::StylesheetMalformed(
            "stylesheet is empty".to_string(),
        ));
    }

    let mut depth: usize = 0;
    let mut line = 1;
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let start = line;
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\n' {
                        line += 1;
                    } else if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(ResourceError::StylesheetMalformed(format!(
                        "unterminated comment starting on line {start}"
                    )));
                }
            }
            '"' | '\'' => {
                let quote = c;
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        }
                        '\n' => break,
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(ResourceError::StylesheetMalformed(format!(
                        "unterminated string on line {line}"
                    )));
                }
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ResourceError::StylesheetMalformed(format!("unexpected '}}' on line {line}"))
                })?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ResourceError::StylesheetMalformed(format!(
            "{depth} unclosed block(s) at end of stylesheet"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests;
