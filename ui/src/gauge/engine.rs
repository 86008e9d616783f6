//! Count-up animation for the productivity gauge.
//!
//! `Idle → Animating → Settled`. The view drives [`GaugeAnimator::tick`] on a
//! timer every [`GaugeAnimator::step_interval_ms`] and stops once it settles.

use crate::core::config::GaugeConfig;
use crate::core::format::round_tenths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugePhase {
    /// Waiting for the target; displays 0.
    Idle,
    /// `step` of `steps` ticks applied so far.
    Animating { step: u32 },
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeAnimator {
    config: GaugeConfig,
    target: f64,
    display: f64,
    phase: GaugePhase,
}

impl Default for GaugeAnimator {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}

impl GaugeAnimator {
    pub fn new(config: GaugeConfig) -> Self {
        Self {
            config,
            target: 0.0,
            display: 0.0,
            phase: GaugePhase::Idle,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn display(&self) -> f64 {
        self.display
    }

    pub fn phase(&self) -> GaugePhase {
        self.phase
    }

    /// True until the animation settles (including while waiting for the target).
    pub fn is_animating(&self) -> bool {
        self.phase != GaugePhase::Settled
    }

    pub fn is_settled(&self) -> bool {
        self.phase == GaugePhase::Settled
    }

    pub fn step_interval_ms(&self) -> u64 {
        self.config.step_interval_ms()
    }

    /// Leave `Idle` towards `target`. Ignored (returns `false`) once started:
    /// a later value does not restart the count-up.
    pub fn start(&mut self, target: f64) -> bool {
        if self.phase != GaugePhase::Idle {
            return false;
        }
        self.target = if target.is_finite() { target } else { 0.0 };
        self.display = 0.0;
        self.phase = if self.config.steps == 0 {
            self.display = self.target;
            GaugePhase::Settled
        } else {
            GaugePhase::Animating { step: 0 }
        };
        tracing::debug!("gauge animating towards {:.1}", self.target);
        true
    }

    /// Apply one animation step and return the phase afterwards.
    /// No-op outside `Animating`.
    pub fn tick(&mut self) -> GaugePhase {
        let GaugePhase::Animating { step } = self.phase else {
            return self.phase;
        };

        let step = step + 1;
        let steps = self.config.steps;
        if step >= steps {
            self.display = self.target;
            self.phase = GaugePhase::Settled;
            tracing::debug!("gauge settled at {:.1}", self.display);
        } else {
            let increment = self.target / f64::from(steps);
            let next = round_tenths(f64::from(step) * increment);
            self.display = self.clamp_towards_target(next);
            self.phase = GaugePhase::Animating { step };
        }
        self.phase
    }

    /// Run every remaining step at once.
    pub fn finish(&mut self) {
        while let GaugePhase::Animating { .. } = self.tick() {}
    }

    fn clamp_towards_target(&self, value: f64) -> f64 {
        if self.target > 0.0 {
            value.min(self.target)
        } else {
            value.max(self.target)
        }
    }
}
