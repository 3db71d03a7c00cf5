// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the upload form.

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::config::ValidationConfig;
use crate::mvu::AppModel;
use crate::ui::UploadFormApp;

/// Build the model from `config` and run the main egui event loop.
pub fn run(config: ValidationConfig) -> Result<()> {
    let model = AppModel::new(config).context("Invalid validation config")?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "imgupload",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(UploadFormApp::new(model)))
        }),
    )
    .map_err(|err| anyhow!("UI event loop failed: {err}"))
}
