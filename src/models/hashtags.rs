// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hashtag field validation.
//!
//! The field holds whitespace-separated hashtags. Input is lower-cased before
//! tokenizing, so every comparison below is case-insensitive.

use std::collections::HashSet;

use regex::Regex;

use crate::config::{ConfigError, ValidationConfig};
use crate::models::validity::{ErrorKind, Validity};

/// Split raw field text into lower-cased hashtag tokens.
///
/// Runs of whitespace or U+FEFF separate tokens; leading and trailing
/// separators yield no empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    // U+FEFF is not Unicode whitespace.
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Validates the hashtag field against the configured limits.
#[derive(Clone, Debug)]
pub struct HashtagValidator {
    max_length: usize,
    max_count: usize,
    pattern: Regex,
}

impl HashtagValidator {
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self {
            max_length: config.max_hashtag_length,
            max_count: config.max_hashtag_count,
            pattern: config.compile_pattern()?,
        })
    }

    /// Validate raw field text. Only the highest-priority failure is reported.
    pub fn validate(&self, text: &str) -> Validity {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Validity::Valid;
        }

        ErrorKind::HASHTAG_CHECKS
            .into_iter()
            .find(|&kind| self.violates(kind, &tokens))
            .into()
    }

    fn violates(&self, kind: ErrorKind, tokens: &[String]) -> bool {
        match kind {
            ErrorKind::StartsWithHash => tokens.iter().any(|t| !t.starts_with('#')),
            ErrorKind::MaxHashLength => tokens.iter().any(|t| char_len(t) > self.max_length),
            ErrorKind::HashSpace => tokens
                .iter()
                .any(|t| t.chars().skip(1).any(|c| c == '#')),
            ErrorKind::MaxHashCount => tokens.len() > self.max_count,
            ErrorKind::EmptyHashtag => tokens.iter().any(|t| char_len(t) == 1),
            ErrorKind::NoProhibitedSymbols => tokens.iter().any(|t| !self.pattern.is_match(t)),
            ErrorKind::NoRepeat => !all_unique(tokens),
            ErrorKind::MaxCommentLength => false,
        }
    }
}

fn char_len(token: &str) -> usize {
    token.chars().count()
}

fn all_unique(tokens: &[String]) -> bool {
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() == tokens.len()
}
