// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Photo picker and preview scale controls for MVU-style updates.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::models::PhotoRules;

/// Chosen photo plus its preview scale in percent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoModel {
    path: Option<PathBuf>,
    scale_percent: u32,
}

/// Messages emitted by the photo view or the picker command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoMsg {
    RequestPick,
    Picked(PathBuf),
    PickCancelled,
    ScaleSmaller,
    ScaleBigger,
    Clear,
}

/// Side effects the photo component asks the kernel to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoCommand {
    PickPhoto { accepted_types: Vec<String> },
}

/// User-facing events for status/error surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoEvent {
    pub message: String,
    pub is_error: bool,
}

impl PhotoModel {
    /// No photo selected; the scale starts at its maximum.
    pub fn new(rules: &PhotoRules) -> Self {
        Self {
            path: None,
            scale_percent: rules.scale.max,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }
}

/// Apply a message to the photo model. Returns a user-facing event when relevant.
pub fn update(
    model: &mut PhotoModel,
    msg: PhotoMsg,
    rules: &PhotoRules,
    cmds: &mut Vec<PhotoCommand>,
) -> Option<PhotoEvent> {
    match msg {
        PhotoMsg::RequestPick => {
            cmds.push(PhotoCommand::PickPhoto {
                accepted_types: rules.accepted_types().to_vec(),
            });
            None
        }
        PhotoMsg::Picked(path) => match rules.check(&path) {
            Ok(()) => {
                let message = format!("Photo selected: {}", path.display());
                model.path = Some(path);
                model.scale_percent = rules.scale.max;
                Some(PhotoEvent {
                    message,
                    is_error: false,
                })
            }
            Err(err) => Some(PhotoEvent {
                message: err.to_string(),
                is_error: true,
            }),
        },
        PhotoMsg::PickCancelled => None,
        // Scale controls only act while a photo is open.
        PhotoMsg::ScaleSmaller if model.path.is_some() => {
            model.scale_percent = rules.scale.smaller(model.scale_percent);
            None
        }
        PhotoMsg::ScaleBigger if model.path.is_some() => {
            model.scale_percent = rules.scale.bigger(model.scale_percent);
            None
        }
        PhotoMsg::ScaleSmaller | PhotoMsg::ScaleBigger => None,
        PhotoMsg::Clear => {
            *model = PhotoModel::new(rules);
            None
        }
    }
}

/// Render the picker button, the chosen file name, and the scale stepper.
pub fn view(ui: &mut egui::Ui, model: &PhotoModel, rules: &PhotoRules) -> Vec<PhotoMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .button(format!("{} Choose photo…", egui_phosphor::regular::IMAGE))
            .clicked()
        {
            msgs.push(PhotoMsg::RequestPick);
        }

        match model.path() {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui.label(name).on_hover_text(path.display().to_string());
            }
            None => {
                ui.label(
                    egui::RichText::new("No photo selected")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
            }
        }
    });

    ui.label(
        egui::RichText::new(format!("Accepted: {}", rules.accepted_types().join(", ")))
            .small()
            .color(egui::Color32::from_gray(110)),
    );

    let open = model.path.is_some();
    ui.horizontal(|ui| {
        ui.label("Scale");
        let smaller = ui.add_enabled(
            open && model.scale_percent > rules.scale.min,
            egui::Button::new(egui_phosphor::regular::MINUS),
        );
        if smaller.clicked() {
            msgs.push(PhotoMsg::ScaleSmaller);
        }
        ui.monospace(format!("{}%", model.scale_percent));
        let bigger = ui.add_enabled(
            open && model.scale_percent < rules.scale.max,
            egui::Button::new(egui_phosphor::regular::PLUS),
        );
        if bigger.clicked() {
            msgs.push(PhotoMsg::ScaleBigger);
        }
    });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;

    fn rules() -> PhotoRules {
        PhotoRules::new(&ValidationConfig::default())
    }

    fn picked(model: &mut PhotoModel, name: &str) -> Option<PhotoEvent> {
        let mut cmds = Vec::new();
        let event = update(model, PhotoMsg::Picked(PathBuf::from(name)), &rules(), &mut cmds);
        assert!(cmds.is_empty());
        event
    }

    #[test]
    fn request_pick_emits_command_with_filter() {
        let mut model = PhotoModel::new(&rules());
        let mut cmds = Vec::new();

        let event = update(&mut model, PhotoMsg::RequestPick, &rules(), &mut cmds);

        assert!(event.is_none());
        assert_eq!(
            cmds,
            vec![PhotoCommand::PickPhoto {
                accepted_types: vec!["gif".into(), "jpg".into(), "jpeg".into(), "png".into()],
            }]
        );
    }

    #[test]
    fn accepted_pick_stores_path_and_resets_scale() {
        let mut model = PhotoModel::new(&rules());
        picked(&mut model, "first.png");
        let mut cmds = Vec::new();
        update(&mut model, PhotoMsg::ScaleSmaller, &rules(), &mut cmds);
        assert_eq!(model.scale_percent(), 75);

        let event = picked(&mut model, "second.JPG").unwrap();

        assert!(!event.is_error);
        assert_eq!(model.path(), Some(Path::new("second.JPG")));
        assert_eq!(model.scale_percent(), 100);
    }

    #[test]
    fn rejected_pick_keeps_previous_photo() {
        let mut model = PhotoModel::new(&rules());
        picked(&mut model, "keep.gif");

        let event = picked(&mut model, "readme.md").unwrap();

        assert!(event.is_error);
        assert!(event.message.contains("readme.md"));
        assert_eq!(model.path(), Some(Path::new("keep.gif")));
    }

    #[test]
    fn scale_buttons_clamp_and_need_a_photo() {
        let mut model = PhotoModel::new(&rules());
        let mut cmds = Vec::new();

        update(&mut model, PhotoMsg::ScaleSmaller, &rules(), &mut cmds);
        assert_eq!(model.scale_percent(), 100, "ignored without a photo");

        picked(&mut model, "a.png");
        for _ in 0..5 {
            update(&mut model, PhotoMsg::ScaleSmaller, &rules(), &mut cmds);
        }
        assert_eq!(model.scale_percent(), 25);

        update(&mut model, PhotoMsg::ScaleBigger, &rules(), &mut cmds);
        assert_eq!(model.scale_percent(), 50);
        assert!(cmds.is_empty());
    }

    #[test]
    fn clear_drops_photo_and_scale() {
        let mut model = PhotoModel::new(&rules());
        picked(&mut model, "a.png");
        let mut cmds = Vec::new();
        update(&mut model, PhotoMsg::ScaleSmaller, &rules(), &mut cmds);

        update(&mut model, PhotoMsg::Clear, &rules(), &mut cmds);

        assert_eq!(model, PhotoModel::new(&rules()));
    }
}
