// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring field state, the submit gate, and commands.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{ConfigError, ValidationConfig};
use crate::logic::submission::{SubmissionPayload, write_submission};
use crate::logic::submit_gate::{FieldId, SubmitGate};
use crate::models::{PhotoRules, Validators, Validity};
use crate::ui::components::comment::{self, CommentModel, CommentMsg};
use crate::ui::components::hashtags::{self, HashtagsModel, HashtagsMsg};
use crate::ui::components::photo::{self, PhotoCommand, PhotoModel, PhotoMsg};

/// Top-level application state.
pub struct AppModel {
    /// Limits the validators were built from; also used to render messages.
    pub config: ValidationConfig,
    validators: Validators,
    /// Chosen photo and preview scale.
    pub photo: PhotoModel,
    /// Hashtag field state.
    pub hashtags: HashtagsModel,
    /// Comment field state.
    pub comment: CommentModel,
    /// Per-field validity and in-flight tracking.
    pub gate: SubmitGate,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(config: ValidationConfig) -> Result<Self, ConfigError> {
        let validators = Validators::new(&config)?;
        Ok(Self {
            config,
            photo: PhotoModel::new(&validators.photo),
            validators,
            hashtags: HashtagsModel::default(),
            comment: CommentModel::default(),
            gate: SubmitGate::default(),
            status: None,
            error: None,
            pending_commands: 0,
        })
    }

    /// Whether the submit control should be enabled right now.
    ///
    /// Needs an open gate and a chosen photo.
    pub fn submit_allowed(&self) -> bool {
        self.gate.is_allowed() && self.photo.path().is_some()
    }

    /// Rules the photo component checks picks and scale steps against.
    pub fn photo_rules(&self) -> &PhotoRules {
        &self.validators.photo
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    Photo(PhotoMsg),
    Hashtags(HashtagsMsg),
    Comment(CommentMsg),
    SubmitRequested(PathBuf),
    SubmitCancelled,
    SubmitCompleted(Result<PathBuf, String>),
    ResetForm,
    /// Escape key; ignored while a text field has keyboard focus.
    EscapePressed {
        text_focused: bool,
    },
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    PickPhoto { accepted_types: Vec<String> },
    WriteSubmission(SubmissionPayload),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Photo(m) => {
            let mut photo_cmds = Vec::new();
            if let Some(event) =
                photo::update(&mut model.photo, m, &model.validators.photo, &mut photo_cmds)
            {
                surface_event(model, event.message, event.is_error);
            }
            for c in photo_cmds {
                match c {
                    PhotoCommand::PickPhoto { accepted_types } => {
                        cmds.push(Command::PickPhoto { accepted_types })
                    }
                }
            }
        }
        Msg::Hashtags(m) => {
            let outcome = hashtags::update(&mut model.hashtags, m, &model.validators.hashtags);
            record(model, FieldId::Hashtags, outcome);
        }
        Msg::Comment(m) => {
            let outcome = comment::update(&mut model.comment, m, &model.validators.comment);
            record(model, FieldId::Comment, outcome);
        }
        Msg::DismissError => model.error = None,
        Msg::ResetForm => reset_form(model),
        Msg::EscapePressed { text_focused } => {
            if text_focused || model.gate.in_flight() || model.photo.path().is_none() {
                return;
            }
            debug!("escape closed the form");
            reset_form(model);
            surface_event(model, "Upload closed.".into(), false);
        }
        Msg::SubmitRequested(output_path) => {
            if model.gate.in_flight() {
                surface_event(model, "A submission is already in progress.".into(), false);
                return;
            }
            match validate_for_submit(model, output_path) {
                Ok(payload) => {
                    info!(output = %payload.output.display(), "submission started");
                    model.gate.begin_submission();
                    surface_event(model, "Submitting…".into(), false);
                    cmds.push(Command::WriteSubmission(payload));
                }
                Err(err) => {
                    warn!(reason = %err, "submission rejected");
                    surface_event(model, err, true);
                }
            }
        }
        Msg::SubmitCancelled => surface_event(model, "Submission cancelled.".to_string(), false),
        Msg::SubmitCompleted(result) => {
            model.gate.finish_submission();
            match result {
                Ok(path) => {
                    info!(output = %path.display(), "submission completed");
                    reset_form(model);
                    surface_event(model, format!("Upload saved: {}", path.display()), false);
                }
                Err(err) => {
                    warn!(error = %err, "submission failed");
                    surface_event(model, format!("Failed to submit the upload:\n\n{err}"), true);
                }
            }
        }
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickPhoto { accepted_types } => {
            let file = rfd::FileDialog::new()
                .set_title("Select a photo")
                .add_filter("Images", accepted_types.as_slice())
                .pick_file();
            match file {
                Some(path) => Msg::Photo(PhotoMsg::Picked(path)),
                None => Msg::Photo(PhotoMsg::PickCancelled),
            }
        }
        Command::WriteSubmission(payload) => {
            let res = write_submission(&payload).map_err(|e| format!("{e:#}"));
            Msg::SubmitCompleted(res)
        }
    }
}

fn record(model: &mut AppModel, field: FieldId, outcome: Validity) {
    debug!(field = field.label(), ?outcome, "field validated");
    model.gate.record(field, outcome);
}

/// Drop the photo, clear both fields, and return the gate to its initial state.
fn reset_form(model: &mut AppModel) {
    photo::update(
        &mut model.photo,
        PhotoMsg::Clear,
        &model.validators.photo,
        &mut Vec::new(),
    );
    hashtags::update(&mut model.hashtags, HashtagsMsg::Clear, &model.validators.hashtags);
    comment::update(&mut model.comment, CommentMsg::Clear, &model.validators.comment);
    model.gate.reset();
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Re-validate every field and build the payload for the submission target.
fn validate_for_submit(model: &mut AppModel, output_path: PathBuf) -> Result<SubmissionPayload, String> {
    let hashtags = model.validators.hashtags.validate(model.hashtags.text());
    let comment = model.validators.comment.validate(model.comment.text());
    model.gate.record(FieldId::Hashtags, hashtags);
    model.gate.record(FieldId::Comment, comment);

    if let Some((field, outcome)) = model.gate.first_error() {
        let reason = outcome
            .error()
            .map(|kind| kind.message(&model.config))
            .unwrap_or_default();
        return Err(format!("{}: {reason}", field.label()));
    }

    let Some(photo) = model.photo.path() else {
        return Err("Photo: choose a photo to upload.".to_string());
    };

    SubmissionPayload::new(
        output_path,
        photo.to_path_buf(),
        model.photo.scale_percent(),
        model.hashtags.text(),
        model.comment.text(),
    )
    .map_err(|e| format!("{e:#}"))
}
