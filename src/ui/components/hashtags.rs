// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hashtag input in an MVU-friendly shape.

use eframe::egui;

use crate::config::ValidationConfig;
use crate::models::{HashtagValidator, Validity};

/// UI model for the hashtag field: raw text plus the outcome of its last validation.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct HashtagsModel {
    text: String,
    validity: Validity,
}

/// Messages emitted by the hashtag view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashtagsMsg {
    InputChanged(String),
    Clear,
}

impl HashtagsModel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }
}

/// Apply a message and re-validate. Returns the fresh outcome for the submit gate.
pub fn update(model: &mut HashtagsModel, msg: HashtagsMsg, validator: &HashtagValidator) -> Validity {
    match msg {
        HashtagsMsg::InputChanged(text) => model.text = text,
        HashtagsMsg::Clear => model.text.clear(),
    }
    model.validity = validator.validate(&model.text);
    model.validity
}

/// Render the hashtag field with its inline error text.
pub fn view(ui: &mut egui::Ui, model: &HashtagsModel, config: &ValidationConfig) -> Vec<HashtagsMsg> {
    let mut msgs = Vec::new();

    ui.label(format!("{} Hashtags", egui_phosphor::regular::HASH));
    ui.add_space(4.0);

    let mut buffer = model.text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text("#sunset #sea")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(HashtagsMsg::InputChanged(buffer));
    }

    ui.label(
        egui::RichText::new(format!(
            "Up to {} hashtags separated by spaces; letters and digits only.",
            config.max_hashtag_count
        ))
        .small()
        .color(egui::Color32::from_gray(110)),
    );

    if let Some(kind) = model.validity().error() {
        ui.colored_label(ui.visuals().error_fg_color, kind.message(config));
    }

    msgs
}
