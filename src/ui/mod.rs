// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the image upload form.
//! Handles layout, the submit control, and wiring to the submission worker.

pub mod components;

use eframe::egui;

use crate::logic::submission::{ensure_extension, suggested_file_name};
use crate::logic::submit_gate::FieldId;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{comment, hashtags, photo};

/// Stateful egui application for editing upload metadata.
pub struct UploadFormApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl UploadFormApp {
    pub fn new(model: AppModel) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd);
                let _ = msg_tx.send(msg);
            }
        });

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for UploadFormApp {
    /// Drains worker results, applies queued messages in arrival order, then renders the form.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            // Read before the widgets run: a focused TextEdit drops focus on Escape.
            let text_focused = ctx.memory(|mem| mem.focused().is_some());
            self.inbox.push(Msg::EscapePressed { text_focused });
        }

        // Field events must be applied in dispatch order.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Upload photo");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_submit_button(ui);
                    ui.separator();
                    self.render_reset_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let photo_msgs = photo::view(ui, &self.model.photo, self.model.photo_rules());
                self.inbox.extend(photo_msgs.into_iter().map(Msg::Photo));
                ui.add_space(12.0);

                let tag_msgs = hashtags::view(ui, &self.model.hashtags, &self.model.config);
                self.inbox.extend(tag_msgs.into_iter().map(Msg::Hashtags));
                ui.add_space(12.0);

                let comment_msgs = comment::view(ui, &self.model.comment, &self.model.config);
                self.inbox.extend(comment_msgs.into_iter().map(Msg::Comment));
            });
        });

        if !self.inbox.is_empty() || self.model.pending_commands > 0 {
            ctx.request_repaint();
        }
    }
}

impl UploadFormApp {
    /// Submit button, enabled only while the gate is open.
    ///
    /// Clicking opens a save dialog for the JSON document and queues
    /// `Msg::SubmitRequested`, or `Msg::SubmitCancelled` when the dialog is dismissed.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!(
            "{} Publish",
            egui_phosphor::regular::PAPER_PLANE_TILT
        ));
        let hint = self.submit_blocked_hint();

        if ui
            .add_enabled(self.model.submit_allowed(), button)
            .on_disabled_hover_text(hint)
            .clicked()
        {
            let dialog = rfd::FileDialog::new()
                .set_title("Save upload metadata")
                .add_filter("JSON", &["json"])
                .set_file_name(suggested_file_name(self.model.hashtags.text()));

            match dialog.save_file() {
                Some(path) => self
                    .inbox
                    .push(Msg::SubmitRequested(ensure_extension(path, "json"))),
                None => self.inbox.push(Msg::SubmitCancelled),
            }
        }
    }

    /// Why the submit button is disabled, one line per blocking reason.
    fn submit_blocked_hint(&self) -> String {
        if self.model.gate.in_flight() {
            return "Submission in progress".to_string();
        }
        let mut reasons: Vec<String> = FieldId::ALL
            .into_iter()
            .filter_map(|id| {
                self.model
                    .gate
                    .field(id)
                    .error()
                    .map(|kind| format!("{}: {}", id.label(), kind.message(&self.model.config)))
            })
            .collect();
        if self.model.photo.path().is_none() {
            reasons.push("Choose a photo first".to_string());
        }
        reasons.join("\n")
    }

    fn render_reset_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(format!("{} Reset", egui_phosphor::regular::X));
        if ui
            .add_enabled(!self.model.gate.in_flight(), button)
            .clicked()
        {
            self.inbox.push(Msg::ResetForm);
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Upload error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
