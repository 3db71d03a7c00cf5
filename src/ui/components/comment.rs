// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Multiline comment input with a live character counter.

use eframe::egui;

use crate::config::ValidationConfig;
use crate::models::{CommentValidator, Validity};

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct CommentModel {
    text: String,
    validity: Validity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentMsg {
    InputChanged(String),
    Clear,
}

impl CommentModel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }
}

pub fn update(model: &mut CommentModel, msg: CommentMsg, validator: &CommentValidator) -> Validity {
    match msg {
        CommentMsg::InputChanged(text) => model.text = text,
        CommentMsg::Clear => model.text.clear(),
    }
    model.validity = validator.validate(&model.text);
    model.validity
}

pub fn view(ui: &mut egui::Ui, model: &CommentModel, config: &ValidationConfig) -> Vec<CommentMsg> {
    let mut msgs = Vec::new();

    ui.label(format!("{} Comment", egui_phosphor::regular::CHAT_TEXT));
    ui.add_space(4.0);

    let mut buffer = model.text.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut buffer)
            .hint_text("Say something about the photo")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(CommentMsg::InputChanged(buffer));
    }

    let used = model.text.chars().count();
    let counter_color = if used > config.max_comment_length {
        ui.visuals().error_fg_color
    } else {
        egui::Color32::from_gray(110)
    };
    ui.label(
        egui::RichText::new(format!("{used}/{}", config.max_comment_length))
            .small()
            .color(counter_color),
    );

    if let Some(kind) = model.validity().error() {
        ui.colored_label(ui.visuals().error_fg_color, kind.message(config));
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorKind;

    #[test]
    fn overlong_comment_is_flagged_then_cleared() {
        let config = ValidationConfig {
            max_comment_length: 5,
            ..Default::default()
        };
        let validator = CommentValidator::new(&config);
        let mut model = CommentModel::default();

        let outcome = update(&mut model, CommentMsg::InputChanged("123456".into()), &validator);
        assert_eq!(outcome, Validity::Invalid(ErrorKind::MaxCommentLength));

        let outcome = update(&mut model, CommentMsg::InputChanged("12345".into()), &validator);
        assert_eq!(outcome, Validity::Valid);
        assert_eq!(model.text(), "12345");
    }
}
