// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Diagnostics produced by the form validators and the order they are checked in.

use serde::Serialize;
use thiserror::Error;

use crate::config::ValidationConfig;

/// A single structural rule that a field value broke.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("Each hashtag must start with #.")]
    StartsWithHash,
    #[error("A hashtag is too long.")]
    MaxHashLength,
    #[error("Separate hashtags with spaces.")]
    HashSpace,
    #[error("Too many hashtags.")]
    MaxHashCount,
    #[error("A hashtag cannot consist of # alone.")]
    EmptyHashtag,
    #[error("Hashtags may only contain letters and digits.")]
    NoProhibitedSymbols,
    #[error("The same hashtag cannot be used twice.")]
    NoRepeat,
    #[error("The comment is too long.")]
    MaxCommentLength,
}

impl ErrorKind {
    /// Hashtag rules in priority order; the first one that fails is reported.
    pub const HASHTAG_CHECKS: [ErrorKind; 7] = [
        ErrorKind::StartsWithHash,
        ErrorKind::MaxHashLength,
        ErrorKind::HashSpace,
        ErrorKind::MaxHashCount,
        ErrorKind::EmptyHashtag,
        ErrorKind::NoProhibitedSymbols,
        ErrorKind::NoRepeat,
    ];

    /// User-facing message with the configured limits filled in.
    pub fn message(self, config: &ValidationConfig) -> String {
        match self {
            ErrorKind::MaxHashLength => format!(
                "A hashtag can be at most {} characters long, including #.",
                config.max_hashtag_length
            ),
            ErrorKind::MaxHashCount => format!(
                "No more than {} hashtags are allowed.",
                config.max_hashtag_count
            ),
            ErrorKind::MaxCommentLength => format!(
                "The comment can be at most {} characters long.",
                config.max_comment_length
            ),
            other => other.to_string(),
        }
    }
}

/// Outcome of validating one field value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Validity {
    #[default]
    Valid,
    Invalid(ErrorKind),
}

impl Validity {
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The reported diagnostic, if any.
    pub fn error(self) -> Option<ErrorKind> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(kind) => Some(kind),
        }
    }
}

impl From<Option<ErrorKind>> for Validity {
    fn from(error: Option<ErrorKind>) -> Self {
        error.map_or(Validity::Valid, Validity::Invalid)
    }
}
