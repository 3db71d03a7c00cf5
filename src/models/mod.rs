// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure validators for the upload form fields, photo rules, and diagnostics.

pub mod comment;
pub mod hashtags;
pub mod photo;
pub mod validity;

pub use comment::CommentValidator;
pub use hashtags::HashtagValidator;
pub use photo::PhotoRules;
pub use validity::{ErrorKind, Validity};

use crate::config::{ConfigError, ValidationConfig};

/// Field validators and photo rules built from one config.
#[derive(Clone, Debug)]
pub struct Validators {
    pub hashtags: HashtagValidator,
    pub comment: CommentValidator,
    pub photo: PhotoRules,
}

impl Validators {
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            hashtags: HashtagValidator::new(config)?,
            comment: CommentValidator::new(config),
            photo: PhotoRules::new(config),
        })
    }
}
