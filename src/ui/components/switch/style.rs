// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Re-style: every visual property of a switch computed from its model.
//!
//! Nothing here touches egui's painter, so the geometry and colors can be
//! checked without a running context.

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use super::SwitchModel;
use crate::models::overlay::IconSource;

/// Intrinsic size reported to the layout.
pub const SWITCH_SIZE: Vec2 = vec2(36.0, 20.0);
pub const KNOB_SIZE: Vec2 = vec2(16.0, 16.0);
/// Gap between the knob and the container edge.
pub const KNOB_MARGIN: f32 = 2.0;
pub const BORDER_WIDTH: f32 = 1.0;
pub const ICON_SIZE: f32 = 14.0;
pub const TITLE_FONT_SIZE: f32 = 8.0;
pub const KNOB_FILL: Color32 = Color32::WHITE;
pub const DISABLED_OPACITY: f32 = 0.5;

/// Paint layers, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Icon = 1,
    Title = 2,
    Knob = 3,
}

impl Layer {
    pub const PAINT_ORDER: [Layer; 3] = [Layer::Icon, Layer::Title, Layer::Knob];
}

/// One half of an overlay row.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayCell<T> {
    pub content: T,
    /// Placement relative to the control's top-left corner.
    pub rect: Rect,
    pub color: Color32,
}

/// Title labels, on cell left and off cell right.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleRow {
    pub on: OverlayCell<String>,
    pub off: OverlayCell<String>,
    pub font_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconRow {
    pub on: OverlayCell<IconSource>,
    pub off: OverlayCell<IconSource>,
}

/// Fully resolved appearance of a switch for one frame.
///
/// Colors are stored at full strength; `opacity` is applied when painting.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchVisuals {
    pub size: Vec2,
    pub corner_radius: f32,
    pub border_width: f32,
    pub background: Color32,
    pub border: Color32,
    /// Knob placement relative to the control's top-left corner.
    pub knob: Rect,
    pub knob_corner_radius: f32,
    pub knob_fill: Color32,
    pub title: Option<TitleRow>,
    pub icon: Option<IconRow>,
    pub opacity: f32,
}

impl SwitchVisuals {
    /// True for an overlay cell covered by the knob while the switch is dimmed.
    /// Such cells are not painted, so the half-transparent knob stays solid-looking.
    pub fn hides_under_knob(&self, cell: Rect) -> bool {
        self.opacity < 1.0 && self.knob.contains(cell.center())
    }
}

/// Horizontal knob offset for a progress between off (`0.0`) and on (`1.0`).
pub fn knob_x(width: f32, progress: f32) -> f32 {
    egui::lerp(KNOB_MARGIN..=width - KNOB_MARGIN - KNOB_SIZE.x, progress)
}

/// Knob rectangle relative to the control origin. The knob never moves vertically.
pub fn knob_rect(size: Vec2, progress: f32) -> Rect {
    Rect::from_min_size(pos2(knob_x(size.x, progress), KNOB_MARGIN), KNOB_SIZE)
}

/// Recompute all visuals from `model` as seen at frame time `now`.
pub fn restyle(model: &SwitchModel, now: f64) -> SwitchVisuals {
    let config = model.configuration();
    let size = model.intrinsic_size();
    let progress = model.progress(now);

    let (on_cell, off_cell) = half_cells(size);

    let title = model.title().map(|title| TitleRow {
        on: OverlayCell {
            content: title.display_on(),
            rect: on_cell,
            color: config.foreground.on,
        },
        off: OverlayCell {
            content: title.display_off(),
            rect: off_cell,
            color: config.foreground.off,
        },
        font_size: TITLE_FONT_SIZE,
    });

    let icon = model.icon().map(|icon| IconRow {
        on: OverlayCell {
            content: icon.on.clone(),
            rect: centered_square(on_cell.center(), ICON_SIZE),
            color: config.foreground.on,
        },
        off: OverlayCell {
            content: icon.off.clone(),
            rect: centered_square(off_cell.center(), ICON_SIZE),
            color: config.foreground.off,
        },
    });

    SwitchVisuals {
        size,
        corner_radius: config.corner_radius,
        border_width: BORDER_WIDTH,
        background: config.background.blend(progress),
        border: config.border.blend(progress),
        knob: knob_rect(size, progress),
        knob_corner_radius: config.corner_radius - KNOB_MARGIN,
        knob_fill: KNOB_FILL,
        title,
        icon,
        opacity: if model.is_enabled() {
            1.0
        } else {
            DISABLED_OPACITY
        },
    }
}

fn half_cells(size: Vec2) -> (Rect, Rect) {
    let half = vec2(size.x / 2.0, size.y);
    (
        Rect::from_min_size(Pos2::ZERO, half),
        Rect::from_min_size(pos2(half.x, 0.0), half),
    )
}

fn centered_square(center: Pos2, side: f32) -> Rect {
    Rect::from_center_size(center, Vec2::splat(side))
}
