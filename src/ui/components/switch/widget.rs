// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! egui host for a switch: input handling, haptics and painting.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind};

use super::haptics::HapticFeedback;
use super::style::{self, Layer, OverlayCell, SwitchVisuals};
use super::{SwitchCommand, SwitchEvent, SwitchModel, SwitchMsg, update};
use crate::models::overlay::IconSource;

/// A switch the owner keeps across frames and draws with [`AlphaSwitch::show`].
///
/// ```no_run
/// # use alphaswitch::AlphaSwitch;
/// # fn frame(ui: &mut egui::Ui, wifi: &mut AlphaSwitch) {
/// if ui.add(&mut *wifi).changed() {
///     println!("wifi is now {}", wifi.is_on());
/// }
/// # }
/// ```
#[derive(Default)]
pub struct AlphaSwitch {
    model: SwitchModel,
    haptics: Option<Box<dyn HapticFeedback>>,
}

impl AlphaSwitch {
    pub fn new(model: SwitchModel) -> Self {
        Self {
            model,
            haptics: None,
        }
    }

    /// Attach a haptic actuator. Without one, impacts are skipped.
    pub fn with_haptics(mut self, haptics: impl HapticFeedback + 'static) -> Self {
        self.haptics = Some(Box::new(haptics));
        self
    }

    pub fn model(&self) -> &SwitchModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SwitchModel {
        &mut self.model
    }

    pub fn is_on(&self) -> bool {
        self.model.is_on()
    }

    /// Apply a message and run whatever side effects it asked for.
    pub fn send(&mut self, msg: SwitchMsg) -> Option<SwitchEvent> {
        let mut cmds = Vec::new();
        let event = update(&mut self.model, msg, &mut cmds);
        for cmd in cmds {
            self.run_command(cmd);
        }
        event
    }

    fn run_command(&mut self, cmd: SwitchCommand) {
        match cmd {
            SwitchCommand::Impact(impact) => match self.haptics.as_mut() {
                Some(haptics) => {
                    haptics.prepare();
                    haptics.impact(impact);
                }
                None => tracing::trace!("no haptic capability, impact skipped"),
            },
        }
    }

    /// Allocate the switch's intrinsic size, handle a click and paint.
    ///
    /// The response is marked changed only when the user flipped the switch.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let sense = if self.model.is_enabled() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, mut response) = ui.allocate_exact_size(self.model.intrinsic_size(), sense);
        let now = ui.input(|i| i.time);

        if response.clicked() {
            let at = response
                .interact_pointer_pos()
                .map(|pos| (pos - rect.min).to_pos2());
            if self.send(SwitchMsg::Tapped { at, now }).is_some() {
                response.mark_changed();
            }
        }

        if ui.is_rect_visible(rect) {
            paint(ui, rect, &style::restyle(&self.model, now));
        }

        if self.model.settle(now) {
            ui.ctx().request_repaint();
        }

        response
    }
}

impl egui::Widget for &mut AlphaSwitch {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        self.show(ui)
    }
}

/// Paint resolved visuals into `rect`, honoring layer order and opacity.
pub fn paint(ui: &egui::Ui, rect: Rect, visuals: &SwitchVisuals) {
    let painter = ui.painter();
    let fade = |color: Color32| color.gamma_multiply(visuals.opacity);
    let radius = visuals.corner_radius.max(0.0);

    painter.rect_filled(rect, radius, fade(visuals.background));
    painter.rect_stroke(
        rect,
        radius,
        Stroke::new(visuals.border_width, fade(visuals.border)),
        StrokeKind::Inside,
    );

    for layer in Layer::PAINT_ORDER {
        match layer {
            Layer::Icon => {
                if let Some(row) = &visuals.icon {
                    for cell in [&row.on, &row.off] {
                        if !visuals.hides_under_knob(cell.rect) {
                            paint_icon(ui, rect.min, cell, fade(cell.color));
                        }
                    }
                }
            }
            Layer::Title => {
                if let Some(row) = &visuals.title {
                    for cell in [&row.on, &row.off] {
                        if visuals.hides_under_knob(cell.rect) {
                            continue;
                        }
                        painter.text(
                            cell.rect.translate(rect.min.to_vec2()).center(),
                            Align2::CENTER_CENTER,
                            &cell.content,
                            FontId::proportional(row.font_size),
                            fade(cell.color),
                        );
                    }
                }
            }
            Layer::Knob => {
                painter.rect_filled(
                    visuals.knob.translate(rect.min.to_vec2()),
                    visuals.knob_corner_radius.max(0.0),
                    fade(visuals.knob_fill),
                );
            }
        }
    }
}

fn paint_icon(ui: &egui::Ui, origin: Pos2, cell: &OverlayCell<IconSource>, tint: Color32) {
    let rect = cell.rect.translate(origin.to_vec2());
    match &cell.content {
        IconSource::Glyph(glyph) => {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(rect.height()),
                tint,
            );
        }
        IconSource::Uri(uri) => {
            egui::Image::from_uri(uri.clone())
                .tint(tint)
                .paint_at(ui, rect);
        }
        IconSource::Texture(id) => {
            egui::Image::from_texture(egui::load::SizedTexture::new(*id, rect.size()))
                .tint(tint)
                .paint_at(ui, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::switch::haptics::ImpactStyle;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_switch(model: SwitchModel) -> (AlphaSwitch, Rc<RefCell<Vec<ImpactStyle>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let switch = AlphaSwitch::new(model)
            .with_haptics(move |style: ImpactStyle| sink.borrow_mut().push(style));
        (switch, log)
    }

    #[test]
    fn tap_fires_one_impact_and_one_event() {
        let (mut switch, log) = recording_switch(SwitchModel::default());

        let event = switch.send(SwitchMsg::Tapped { at: None, now: 0.0 });

        assert_eq!(event, Some(SwitchEvent::ValueChanged));
        assert!(switch.is_on());
        assert_eq!(*log.borrow(), vec![ImpactStyle::Light]);
    }

    #[test]
    fn programmatic_set_on_is_silent() {
        let (mut switch, log) = recording_switch(SwitchModel::default());

        assert_eq!(switch.send(SwitchMsg::SetOn(true)), None);
        assert!(switch.is_on());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn feedback_disabled_skips_actuator() {
        let (mut switch, log) = recording_switch(SwitchModel::default().with_feedback(false));

        switch.send(SwitchMsg::Tapped { at: None, now: 0.0 });

        assert!(switch.is_on());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn missing_haptics_is_a_no_op() {
        let mut switch = AlphaSwitch::default();

        assert_eq!(
            switch.send(SwitchMsg::Tapped { at: None, now: 0.0 }),
            Some(SwitchEvent::ValueChanged)
        );
        assert!(switch.is_on());
    }

    #[test]
    fn model_mut_setters_reach_the_host() {
        let mut switch = AlphaSwitch::default();
        switch.model_mut().set_enabled(false);

        assert_eq!(switch.send(SwitchMsg::Tapped { at: None, now: 0.0 }), None);
        assert!(!switch.model().is_enabled());
    }

    /// Drive one headless frame with `switch` inside a central panel.
    /// Returns the allocated rect and whether the response changed.
    fn run_frame(
        ctx: &egui::Context,
        switch: &mut AlphaSwitch,
        events: Vec<egui::Event>,
        time: f64,
    ) -> (Rect, bool) {
        let input = egui::RawInput {
            events,
            time: Some(time),
            ..Default::default()
        };
        let mut outcome = (Rect::NOTHING, false);
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = switch.show(ui);
                outcome = (response.rect, response.changed());
            });
        });
        outcome
    }

    fn button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Press and release the primary button at `offset` from the switch's corner.
    /// Returns how many frames reported a change.
    fn click(
        ctx: &egui::Context,
        switch: &mut AlphaSwitch,
        rect: Rect,
        offset: egui::Vec2,
        time: f64,
    ) -> usize {
        let pos = rect.min + offset;
        let press = vec![egui::Event::PointerMoved(pos), button(pos, true)];
        let (_, pressed) = run_frame(ctx, switch, press, time);
        let (_, released) = run_frame(ctx, switch, vec![button(pos, false)], time + 0.02);
        let (_, idle) = run_frame(ctx, switch, Vec::new(), time + 0.04);
        [pressed, released, idle].into_iter().filter(|c| *c).count()
    }

    #[test]
    fn pointer_click_toggles_and_marks_changed_once() {
        let ctx = egui::Context::default();
        let (mut switch, log) = recording_switch(SwitchModel::default());
        let (rect, changed) = run_frame(&ctx, &mut switch, Vec::new(), 0.0);
        assert_eq!(rect.size(), style::SWITCH_SIZE);
        assert!(!changed);

        let changes = click(&ctx, &mut switch, rect, egui::vec2(30.0, 10.0), 1.0);

        assert!(switch.is_on());
        assert_eq!(changes, 1);
        assert_eq!(*log.borrow(), vec![ImpactStyle::Light]);
    }

    #[test]
    fn read_only_pointer_on_knob_is_ignored_but_track_toggles() {
        let ctx = egui::Context::default();
        let mut switch = AlphaSwitch::new(SwitchModel::default().read_only());
        let (rect, _) = run_frame(&ctx, &mut switch, Vec::new(), 0.0);

        // The knob covers x 2..18 relative to the switch while off.
        let changes = click(&ctx, &mut switch, rect, egui::vec2(10.0, 10.0), 1.0);
        assert!(!switch.is_on());
        assert_eq!(changes, 0);

        let changes = click(&ctx, &mut switch, rect, egui::vec2(30.0, 10.0), 2.0);
        assert!(switch.is_on());
        assert_eq!(changes, 1);
    }

    #[test]
    fn disabled_switch_ignores_pointer_clicks() {
        let ctx = egui::Context::default();
        let (mut switch, log) = recording_switch(SwitchModel::default().disabled());
        let (rect, _) = run_frame(&ctx, &mut switch, Vec::new(), 0.0);

        let changes = click(&ctx, &mut switch, rect, egui::vec2(30.0, 10.0), 1.0);

        assert!(!switch.is_on());
        assert_eq!(changes, 0);
        assert!(log.borrow().is_empty());

        switch.model_mut().set_enabled(true);
        let changes = click(&ctx, &mut switch, rect, egui::vec2(30.0, 10.0), 2.0);
        assert!(switch.is_on());
        assert_eq!(changes, 1);
    }

    #[test]
    fn animation_settles_after_frames_past_its_duration() {
        let ctx = egui::Context::default();
        let mut switch = AlphaSwitch::default();
        let (rect, _) = run_frame(&ctx, &mut switch, Vec::new(), 0.0);

        let pos = rect.min + egui::vec2(30.0, 10.0);
        run_frame(
            &ctx,
            &mut switch,
            vec![egui::Event::PointerMoved(pos), button(pos, true)],
            1.0,
        );
        run_frame(&ctx, &mut switch, vec![button(pos, false)], 1.01);
        assert!(switch.model().is_animating(1.02));

        run_frame(&ctx, &mut switch, Vec::new(), 2.0);
        assert!(!switch.model().is_animating(2.0));
        assert_eq!(switch.model().progress(2.0), 1.0);
    }
}
