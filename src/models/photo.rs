// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Photo selection rules: which files are accepted and how the preview scale steps.

use std::path::Path;

use thiserror::Error;

use crate::config::ValidationConfig;

/// True when `name` ends with `.<ext>` for one of `accepted_types`, ignoring case.
///
/// Entries may be given with or without the leading dot. A bare extension such
/// as `".png"` has no file stem and is not accepted.
pub fn is_accepted_file(name: &str, accepted_types: &[String]) -> bool {
    let name = name.to_lowercase();
    accepted_types
        .iter()
        .map(|t| t.trim().trim_start_matches('.').to_lowercase())
        .filter(|t| !t.is_empty())
        .any(|ext| {
            name.strip_suffix(ext.as_str())
                .and_then(|rest| rest.strip_suffix('.'))
                .is_some_and(|stem| !stem.is_empty())
        })
}

/// Rejection of a picked file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("{name} is not a supported photo. Choose one of: {accepted}.")]
    UnsupportedType { name: String, accepted: String },
}

/// Preview scale bounds in percent, moved in fixed steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl ScaleRange {
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            min: config.scale_min,
            max: config.scale_max,
            step: config.scale_step,
        }
    }

    /// Clamp an arbitrary value into `min..=max`.
    pub fn clamp(self, value: i64) -> u32 {
        let clamped = value.clamp(i64::from(self.min), i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.max)
    }

    pub fn smaller(self, current: u32) -> u32 {
        self.clamp(i64::from(current) - i64::from(self.step))
    }

    pub fn bigger(self, current: u32) -> u32 {
        self.clamp(i64::from(current) + i64::from(self.step))
    }
}

/// Accepted file types and scale range built from one config.
#[derive(Clone, Debug)]
pub struct PhotoRules {
    accepted_types: Vec<String>,
    pub scale: ScaleRange,
}

impl PhotoRules {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            accepted_types: config
                .accepted_file_types
                .iter()
                .map(|t| t.trim().trim_start_matches('.').to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            scale: ScaleRange::from_config(config),
        }
    }

    /// Lower-case extensions without the leading dot, as used for dialog filters.
    pub fn accepted_types(&self) -> &[String] {
        &self.accepted_types
    }

    /// Accept or reject a picked path by its file name.
    pub fn check(&self, path: &Path) -> Result<(), PhotoError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if is_accepted_file(&name, &self.accepted_types) {
            Ok(())
        } else {
            Err(PhotoError::UnsupportedType {
                name: if name.is_empty() {
                    path.display().to_string()
                } else {
                    name
                },
                accepted: self.accepted_types.join(", "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn types() -> Vec<String> {
        vec!["gif".into(), "jpg".into(), "jpeg".into(), "png".into()]
    }

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert!(is_accepted_file("cat.png", &types()));
        assert!(is_accepted_file("Holiday.JPEG", &types()));
        assert!(is_accepted_file("archive.tar.gif", &types()));
    }

    #[test]
    fn rejects_other_or_missing_extensions() {
        assert!(!is_accepted_file("notes.txt", &types()));
        assert!(!is_accepted_file("mypng", &types()));
        assert!(!is_accepted_file(".png", &types()));
        assert!(!is_accepted_file("", &types()));
        assert!(!is_accepted_file("cat.png", &[]));
    }

    #[test]
    fn dotted_type_entries_are_normalized() {
        let types = vec![".PNG".to_string(), "  ".to_string()];
        assert!(is_accepted_file("a.png", &types));
        assert!(!is_accepted_file("a.jpg", &types));
    }

    #[test]
    fn scale_steps_and_clamps() {
        let range = ScaleRange {
            min: 25,
            max: 100,
            step: 25,
        };
        assert_eq!(range.smaller(100), 75);
        assert_eq!(range.smaller(25), 25);
        assert_eq!(range.bigger(75), 100);
        assert_eq!(range.bigger(100), 100);
        assert_eq!(range.clamp(-10), 25);
        assert_eq!(range.clamp(1_000), 100);
    }

    #[test]
    fn scale_clamps_uneven_steps_to_bounds() {
        let range = ScaleRange {
            min: 10,
            max: 100,
            step: 40,
        };
        assert_eq!(range.smaller(100), 60);
        assert_eq!(range.smaller(60), 20);
        assert_eq!(range.smaller(20), 10);
        assert_eq!(range.bigger(90), 100);
    }

    #[test]
    fn rules_check_reports_name_and_accepted_list() {
        let rules = PhotoRules::new(&ValidationConfig::default());
        assert_eq!(rules.check(&PathBuf::from("/pics/sun.PNG")), Ok(()));

        let err = rules.check(&PathBuf::from("/pics/doc.pdf")).unwrap_err();
        assert_eq!(
            err,
            PhotoError::UnsupportedType {
                name: "doc.pdf".into(),
                accepted: "gif, jpg, jpeg, png".into(),
            }
        );
        assert!(err.to_string().contains("doc.pdf"));
    }
}
