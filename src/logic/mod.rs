// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form-level logic built on top of the field validators.

pub mod submission;
pub mod submit_gate;
