// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hand-off of accepted form metadata to the submission target.
//!
//! The upload endpoint is outside this crate; accepted submissions are written
//! as a JSON document next to where the user chose to save them.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::models::hashtags::tokenize;

/// Form metadata captured once the submit gate allows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    /// Destination file for the JSON document.
    #[serde(skip)]
    pub output: PathBuf,
    /// Photo chosen in the picker.
    pub photo: PathBuf,
    /// Preview scale at submit time, in percent.
    pub scale_percent: u32,
    /// Hashtag field exactly as typed.
    pub hashtags_raw: String,
    /// Lower-cased hashtag tokens in input order.
    pub hashtags: Vec<String>,
    pub comment: String,
    /// RFC 3339 UTC timestamp of the submit request.
    pub submitted_at: String,
}

impl SubmissionPayload {
    pub fn new(
        output: PathBuf,
        photo: PathBuf,
        scale_percent: u32,
        hashtags_raw: &str,
        comment: &str,
    ) -> Result<Self> {
        let submitted_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("Failed to format submission timestamp")?;
        Ok(Self {
            output,
            photo,
            scale_percent,
            hashtags_raw: hashtags_raw.to_string(),
            hashtags: tokenize(hashtags_raw),
            comment: comment.to_string(),
            submitted_at,
        })
    }
}

/// Suggest a file name for the submission document.
pub fn suggested_file_name(hashtags_raw: &str) -> String {
    tokenize(hashtags_raw)
        .first()
        .map(|tag| tag.trim_start_matches('#'))
        .filter(|tag| !tag.is_empty() && tag.chars().all(char::is_alphanumeric))
        .map(|tag| format!("upload_{tag}.json"))
        .unwrap_or_else(|| "upload.json".to_string())
}

/// Force a specific extension onto a path when it is missing or different.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );
    if replace {
        path.set_extension(extension);
    }
    path
}

/// Serialize the payload as pretty JSON to `payload.output`.
pub fn write_submission(payload: &SubmissionPayload) -> Result<PathBuf> {
    write_json(&payload.output, payload)?;
    Ok(payload.output.clone())
}

fn write_json(path: &Path, payload: &SubmissionPayload) -> Result<()> {
    let json =
        serde_json::to_vec_pretty(payload).context("Failed to serialize submission metadata")?;
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(&json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn payload_normalizes_tokens_but_keeps_raw_text() {
        let payload = SubmissionPayload::new(
            PathBuf::from("out.json"),
            PathBuf::from("cat.png"),
            100,
            "  #Cat  #DOG ",
            "hi",
        )
        .unwrap();

        assert_eq!(payload.hashtags, vec!["#cat", "#dog"]);
        assert_eq!(payload.hashtags_raw, "  #Cat  #DOG ");
        assert!(OffsetDateTime::parse(&payload.submitted_at, &Rfc3339).is_ok());
    }

    #[test]
    fn writes_json_document() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("upload.json");
        let payload = SubmissionPayload::new(
            output.clone(),
            PathBuf::from("/photos/sea.jpg"),
            75,
            "#sea",
            "Sunset",
        )
        .unwrap();

        let written = write_submission(&payload).unwrap();

        assert_eq!(written, output);
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["hashtags"], serde_json::json!(["#sea"]));
        assert_eq!(value["comment"], "Sunset");
        assert_eq!(value["photo"], "/photos/sea.jpg");
        assert_eq!(value["scale_percent"], 75);
        assert!(value.get("output").is_none());
    }

    #[test]
    fn write_into_missing_directory_fails_with_context() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("nope").join("upload.json");
        let payload =
            SubmissionPayload::new(output, PathBuf::from("a.png"), 100, "", "").unwrap();

        let err = write_submission(&payload).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }

    #[test]
    fn suggested_name_uses_first_tag() {
        assert_eq!(suggested_file_name("#Beach #sun"), "upload_beach.json");
        assert_eq!(suggested_file_name("   "), "upload.json");
        assert_eq!(suggested_file_name("#"), "upload.json");
        assert_eq!(suggested_file_name("#a/b"), "upload.json");
    }

    #[test]
    fn ensure_extension_replaces_or_keeps() {
        assert_eq!(
            ensure_extension(PathBuf::from("a.txt"), "json"),
            PathBuf::from("a.json")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("a.JSON"), "json"),
            PathBuf::from("a.JSON")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("a"), "json"),
            PathBuf::from("a.json")
        );
    }
}
