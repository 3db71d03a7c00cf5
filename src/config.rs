// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation limits for the upload form.
//!
//! Everything the validators compare against lives here so integrators can
//! tune the rules without touching the algorithms. Values are loaded from an
//! optional JSON file; missing keys fall back to the defaults below.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted hashtag, including the leading `#`.
pub const DEFAULT_MAX_HASHTAG_LENGTH: usize = 20;

/// Upper bound for `max_hashtag_length`; keeps the compiled pattern small.
pub const MAX_SUPPORTED_HASHTAG_LENGTH: usize = 256;

/// Maximum number of hashtags per upload.
pub const DEFAULT_MAX_HASHTAG_COUNT: usize = 5;

/// Maximum comment length in characters.
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 140;

/// Characters allowed after the `#`, as the body of a regex character class.
pub const DEFAULT_HASHTAG_ALPHABET: &str = "A-Za-zА-Яа-яЁё0-9";

/// Photo file extensions the upload accepts.
pub const DEFAULT_ACCEPTED_FILE_TYPES: &[&str] = &["gif", "jpg", "jpeg", "png"];

/// Preview scale bounds and step, in percent.
pub const DEFAULT_SCALE_MIN: u32 = 25;
pub const DEFAULT_SCALE_MAX: u32 = 100;
pub const DEFAULT_SCALE_STEP: u32 = 25;

/// Precondition failures for a [`ValidationConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_hashtag_length must be at least 2 (got {0})")]
    HashtagLengthTooSmall(usize),

    #[error("max_hashtag_length must be at most {max} (got {0})", max = MAX_SUPPORTED_HASHTAG_LENGTH)]
    HashtagLengthTooLarge(usize),

    #[error("max_hashtag_count must be at least 1")]
    ZeroHashtagCount,

    #[error("hashtag_alphabet must not be empty")]
    EmptyAlphabet,

    #[error("hashtag_alphabet must stay inside a single character class")]
    AlphabetEscapesClass,

    #[error("hashtag_alphabet does not form a valid pattern: {0}")]
    InvalidAlphabet(String),

    #[error("hashtag pattern for length {0} exceeds the regex size limit")]
    PatternTooLarge(usize),

    #[error("accepted_file_types must list at least one extension")]
    NoAcceptedFileTypes,

    #[error("scale bounds are invalid: min {min}, max {max}, step {step}")]
    InvalidScale { min: u32, max: u32, step: u32 },
}

/// Configurable limits used by the form validators and the photo controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_hashtag_length: usize,
    pub max_hashtag_count: usize,
    pub max_comment_length: usize,
    pub hashtag_alphabet: String,
    /// Lower-case extensions without the leading dot.
    pub accepted_file_types: Vec<String>,
    pub scale_min: u32,
    pub scale_max: u32,
    pub scale_step: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_hashtag_length: DEFAULT_MAX_HASHTAG_LENGTH,
            max_hashtag_count: DEFAULT_MAX_HASHTAG_COUNT,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            hashtag_alphabet: DEFAULT_HASHTAG_ALPHABET.to_string(),
            accepted_file_types: DEFAULT_ACCEPTED_FILE_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
            scale_step: DEFAULT_SCALE_STEP,
        }
    }
}

impl ValidationConfig {
    /// Parse a config from a JSON document. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse validation config JSON")?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Anchored pattern a hashtag must match in full.
    ///
    /// The body length is bounded by `max_hashtag_length - 1` to leave room
    /// for the `#`.
    pub fn hashtag_pattern(&self) -> String {
        format!(
            "^#[{}]{{1,{}}}$",
            self.hashtag_alphabet,
            self.max_hashtag_length.saturating_sub(1)
        )
    }

    /// Check the preconditions the validators rely on.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.max_hashtag_length < 2 {
            return Err(ConfigError::HashtagLengthTooSmall(self.max_hashtag_length));
        }
        if self.max_hashtag_length > MAX_SUPPORTED_HASHTAG_LENGTH {
            return Err(ConfigError::HashtagLengthTooLarge(self.max_hashtag_length));
        }
        if self.max_hashtag_count == 0 {
            return Err(ConfigError::ZeroHashtagCount);
        }
        if self.hashtag_alphabet.trim().is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if !stays_in_class(&self.hashtag_alphabet) {
            return Err(ConfigError::AlphabetEscapesClass);
        }
        if self.accepted_file_types.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::NoAcceptedFileTypes);
        }
        if self.scale_step == 0 || self.scale_min == 0 || self.scale_min > self.scale_max {
            return Err(ConfigError::InvalidScale {
                min: self.scale_min,
                max: self.scale_max,
                step: self.scale_step,
            });
        }
        self.compile_pattern().map(|_| ())
    }

    /// Compile [`Self::hashtag_pattern`] into a regex.
    pub(crate) fn compile_pattern(&self) -> Result<Regex, ConfigError> {
        Regex::new(&self.hashtag_pattern()).map_err(|err| match err {
            regex::Error::CompiledTooBig(_) => {
                ConfigError::PatternTooLarge(self.max_hashtag_length)
            }
            other => ConfigError::InvalidAlphabet(other.to_string()),
        })
    }
}

/// Whether `alphabet`, placed inside `[...]`, closes only its own nested classes.
///
/// Tracks bracket depth with escapes skipped. A `]` directly after an opening
/// `[` (or `[^`) is a literal, matching the regex crate's class syntax.
fn stays_in_class(alphabet: &str) -> bool {
    let mut depth = 1usize;
    let mut class_start = true;
    let mut chars = alphabet.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '[' => {
                depth += 1;
                if chars.peek() == Some(&'^') {
                    chars.next();
                }
                class_start = true;
                continue;
            }
            ']' if !class_start => {
                depth -= 1;
                if depth == 0 {
                    return false;
                }
            }
            _ => {}
        }
        class_start = false;
    }

    depth == 1
}
