// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Optional haptic capability injected into a switch host.

/// Strength of an impact, mirroring common platform impact generators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImpactStyle {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Something that can produce a short tactile pulse.
///
/// Implementations must not fail: a device without an actuator simply does nothing.
pub trait HapticFeedback {
    /// Warm up the actuator; called right before [`HapticFeedback::impact`].
    fn prepare(&mut self) {}

    fn impact(&mut self, style: ImpactStyle);
}

impl<F: FnMut(ImpactStyle)> HapticFeedback for F {
    fn impact(&mut self, style: ImpactStyle) {
        self(style)
    }
}

/// Records impacts in the log; for desktop hosts with no actuator.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn impact(&mut self, style: ImpactStyle) {
        tracing::trace!(?style, "haptic impact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_haptics() {
        let mut seen: Vec<ImpactStyle> = Vec::new();
        {
            let mut haptics = |style: ImpactStyle| seen.push(style);
            haptics.prepare();
            haptics.impact(ImpactStyle::Heavy);
            HapticFeedback::impact(&mut haptics, ImpactStyle::Light);
        }
        assert_eq!(seen, vec![ImpactStyle::Heavy, ImpactStyle::Light]);
    }
}
