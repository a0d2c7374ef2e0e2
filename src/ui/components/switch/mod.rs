// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Animated on/off switch with optional title and icon overlays, split MVU-style.
//!
//! [`SwitchModel`] holds the state, [`update`] applies [`SwitchMsg`]s and
//! returns haptic [`SwitchCommand`]s plus an optional [`SwitchEvent`] for
//! the owner, [`style::restyle`] turns the model into paintable visuals, and
//! [`AlphaSwitch`] wires all of it into an egui widget.

pub mod animation;
pub mod haptics;
pub mod style;
pub mod widget;

use egui::{Pos2, Vec2};

use crate::models::configuration::Configuration;
use crate::models::overlay::{Icon, Title};
use animation::KnobAnimation;
use haptics::ImpactStyle;

pub use widget::AlphaSwitch;

/// UI model for one switch, kept free of side effects.
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchModel {
    configuration: Configuration,
    title: Option<Title>,
    icon: Option<Icon>,
    is_on: bool,
    enabled: bool,
    read_only: bool,
    feedback: bool,
    impact: ImpactStyle,
    size: Vec2,
    animation: Option<KnobAnimation>,
}

impl Default for SwitchModel {
    fn default() -> Self {
        Self {
            configuration: Configuration::default(),
            title: None,
            icon: None,
            is_on: false,
            enabled: true,
            read_only: false,
            feedback: true,
            impact: ImpactStyle::Light,
            size: style::SWITCH_SIZE,
            animation: None,
        }
    }
}

/// Messages accepted by a switch.
#[derive(Clone, Debug, PartialEq)]
pub enum SwitchMsg {
    /// A click or keyboard activation. `at` is relative to the control's
    /// top-left corner and `None` when there is no pointer; `now` is frame time in seconds.
    Tapped { at: Option<Pos2>, now: f64 },
    SetOn(bool),
    SetEnabled(bool),
    SetReadOnly(bool),
    EnableFeedback(bool),
    SetTitle(Option<Title>),
    SetIcon(Option<Icon>),
    SetConfiguration(Configuration),
}

/// Side effects requested by [`update`], executed by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchCommand {
    Impact(ImpactStyle),
}

/// Notification for the owner. Read the new state through [`SwitchModel::is_on`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchEvent {
    ValueChanged,
}

impl SwitchModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.set_configuration(configuration);
        self
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.set_title(title);
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.set_icon(icon);
        self
    }

    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.enable_feedback(enabled);
        self
    }

    pub fn with_impact(mut self, style: ImpactStyle) -> Self {
        self.set_impact(style);
        self
    }

    /// Start in the given state.
    pub fn on(mut self, value: bool) -> Self {
        self.set_on(value);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.set_enabled(false);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.set_read_only(true);
        self
    }

    pub fn set_title(&mut self, title: Title) -> &mut Self {
        self.title = Some(title);
        self.restyle("title")
    }

    pub fn remove_title(&mut self) -> &mut Self {
        self.title = None;
        self.restyle("title")
    }

    pub fn set_icon(&mut self, icon: Icon) -> &mut Self {
        self.icon = Some(icon);
        self.restyle("icon")
    }

    pub fn remove_icon(&mut self) -> &mut Self {
        self.icon = None;
        self.restyle("icon")
    }

    pub fn set_configuration(&mut self, configuration: Configuration) -> &mut Self {
        self.configuration = configuration;
        self.restyle("configuration")
    }

    /// Whether a tap asks the host for a haptic impact (on by default).
    pub fn enable_feedback(&mut self, enabled: bool) -> &mut Self {
        self.feedback = enabled;
        self
    }

    /// Strength of the impact requested on each tap (light by default).
    pub fn set_impact(&mut self, style: ImpactStyle) -> &mut Self {
        self.impact = style;
        self
    }

    /// Set the state programmatically. Snaps into place and emits no event.
    pub fn set_on(&mut self, value: bool) -> &mut Self {
        self.is_on = value;
        self.restyle("state")
    }

    /// Disabled switches ignore taps and paint at half opacity.
    pub fn set_enabled(&mut self, value: bool) -> &mut Self {
        self.enabled = value;
        self
    }

    /// Ignore taps that land on the knob; the rest of the track stays active.
    pub fn set_read_only(&mut self, value: bool) -> &mut Self {
        self.read_only = value;
        self
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn feedback_enabled(&self) -> bool {
        self.feedback
    }

    pub fn impact(&self) -> ImpactStyle {
        self.impact
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Fixed footprint the widget allocates; it does not grow with content.
    pub fn intrinsic_size(&self) -> Vec2 {
        self.size
    }

    /// Knob progress at `now`: `0.0` off, `1.0` on, in between while animating.
    pub fn progress(&self, now: f64) -> f32 {
        match &self.animation {
            Some(animation) => animation.progress(now),
            None if self.is_on => 1.0,
            None => 0.0,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animation.is_some_and(|a| !a.is_finished(now))
    }

    /// Drop a finished animation. Returns `true` while one is still running.
    pub fn settle(&mut self, now: f64) -> bool {
        if self.animation.is_some_and(|a| a.is_finished(now)) {
            self.animation = None;
        }
        self.animation.is_some()
    }

    fn restyle(&mut self, reason: &'static str) -> &mut Self {
        self.animation = None;
        tracing::debug!(reason, is_on = self.is_on, "switch restyled");
        self
    }
}

/// Apply a message to the model. Returns an event when the user flipped the switch.
pub fn update(
    model: &mut SwitchModel,
    msg: SwitchMsg,
    cmds: &mut Vec<SwitchCommand>,
) -> Option<SwitchEvent> {
    match msg {
        SwitchMsg::Tapped { at, now } => return tap(model, at, now, cmds),
        SwitchMsg::SetOn(value) => {
            model.set_on(value);
        }
        SwitchMsg::SetEnabled(value) => {
            model.set_enabled(value);
        }
        SwitchMsg::SetReadOnly(value) => {
            model.set_read_only(value);
        }
        SwitchMsg::EnableFeedback(value) => {
            model.enable_feedback(value);
        }
        SwitchMsg::SetTitle(Some(title)) => {
            model.set_title(title);
        }
        SwitchMsg::SetTitle(None) => {
            model.remove_title();
        }
        SwitchMsg::SetIcon(Some(icon)) => {
            model.set_icon(icon);
        }
        SwitchMsg::SetIcon(None) => {
            model.remove_icon();
        }
        SwitchMsg::SetConfiguration(configuration) => {
            model.set_configuration(configuration);
        }
    }
    None
}

fn tap(
    model: &mut SwitchModel,
    at: Option<Pos2>,
    now: f64,
    cmds: &mut Vec<SwitchCommand>,
) -> Option<SwitchEvent> {
    if !model.enabled {
        return None;
    }

    let progress = model.progress(now);
    if model.read_only && at.is_some_and(|p| style::knob_rect(model.size, progress).contains(p)) {
        tracing::trace!("tap on read-only knob ignored");
        return None;
    }

    if model.feedback {
        cmds.push(SwitchCommand::Impact(model.impact));
    }

    model.is_on = !model.is_on;
    model.animation = Some(KnobAnimation::start(progress, model.is_on, now));
    tracing::debug!(is_on = model.is_on, "switch toggled");

    Some(SwitchEvent::ValueChanged)
}
