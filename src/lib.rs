// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Compact animated toggle switch for egui.
//!
//! The switch is a 36×20 track with a sliding 16×16 knob, per-state
//! background/border colors, optional two-letter titles and icon overlays,
//! and an optional haptic hook fired on every user toggle.
//!
//! ```no_run
//! use alphaswitch::{AlphaSwitch, SwitchModel, Title};
//!
//! let mut power = AlphaSwitch::new(SwitchModel::new().with_title(Title::new("I", "O")));
//! # fn frame(ui: &mut egui::Ui, power: &mut AlphaSwitch) {
//! if ui.add(&mut *power).changed() {
//!     tracing::info!(on = power.is_on(), "power toggled");
//! }
//! # }
//! # let _ = &mut power;
//! ```

pub mod app;
pub mod error;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;

pub use error::ThemeError;
pub use models::configuration::{Configuration, StateColors};
pub use models::overlay::{Icon, IconSource, Title};
pub use models::theme::{ThemeFile, load_theme, save_theme};
pub use ui::components::switch::haptics::{HapticFeedback, ImpactStyle, TracingHaptics};
pub use ui::components::switch::style::{SwitchVisuals, restyle};
pub use ui::components::switch::{
    AlphaSwitch, SwitchCommand, SwitchEvent, SwitchModel, SwitchMsg, update,
};
