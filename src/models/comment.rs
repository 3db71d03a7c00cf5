// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Comment field validation.

use crate::config::ValidationConfig;
use crate::models::validity::{ErrorKind, Validity};

/// Checks the optional free-text comment against the configured length limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentValidator {
    max_length: usize,
}

impl CommentValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            max_length: config.max_comment_length,
        }
    }

    /// Length is measured in characters; an empty comment is always valid.
    pub fn validate(&self, text: &str) -> Validity {
        if text.chars().count() > self.max_length {
            Validity::Invalid(ErrorKind::MaxCommentLength)
        } else {
            Validity::Valid
        }
    }
}
