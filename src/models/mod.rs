// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: switch appearance, overlays and theme files, free of UI side effects.

pub mod configuration;
pub mod overlay;
pub mod theme;
