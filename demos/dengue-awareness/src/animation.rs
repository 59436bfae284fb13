//! Scalar phases that drive the cosmetic animations.
//!
//! Every phase advances at a fixed rate per second, so playback speed does
//! not depend on frame rate. Phases either wrap back to zero or bounce
//! between their bounds.

use awareness_engine::RandomSource;

const WATER_RATE: f32 = 0.01;
const RIPPLE_RATE: f32 = 1.0;
const RIPPLE_PERIOD: f32 = 2.0;
const LIFE_CYCLE_RATE: f32 = 0.1;
const PULSE_RATE: f32 = 0.5;
const RAIN_RATE: f32 = 0.2;
const RAIN_PERIOD: f32 = 2.0;
const KILL_EFFECT_RATE: f32 = 2.0;

/// Mosquito development stage shown by the life-cycle prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    Egg,
    Larva,
    Pupa,
    Adult,
}

impl LifeStage {
    /// Stage for a life-cycle phase in [0, 1].
    pub fn from_phase(phase: f32) -> Self {
        if phase < 0.25 {
            LifeStage::Egg
        } else if phase < 0.5 {
            LifeStage::Larva
        } else if phase < 0.75 {
            LifeStage::Pupa
        } else {
            LifeStage::Adult
        }
    }
}

/// Advance `value` by `delta` and wrap to 0 once it exceeds `period`.
fn wrap(value: f32, delta: f32, period: f32) -> f32 {
    let next = value + delta;
    if next > period {
        0.0
    } else {
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub water_level: f32,
    pub water_rising: bool,
    pub ripple: f32,
    pub life_cycle: f32,
    pub pulse: f32,
    pub rain: f32,
    pub raining: bool,
    /// Visual progress of the active kill, saturating at 1.
    pub kill_effect: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            water_level: 0.0,
            water_rising: true,
            ripple: 0.0,
            life_cycle: 0.0,
            pulse: 0.0,
            rain: 0.0,
            raining: false,
            kill_effect: 0.0,
        }
    }
}

impl AnimationState {
    /// Advance every phase by `dt` seconds. `killing` tells whether a kill
    /// animation is in flight.
    pub fn advance(&mut self, dt: f32, killing: bool) {
        let dt = dt.max(0.0);
        self.advance_water(dt);
        self.ripple = wrap(self.ripple, RIPPLE_RATE * dt, RIPPLE_PERIOD);
        self.life_cycle = wrap(self.life_cycle, LIFE_CYCLE_RATE * dt, 1.0);
        self.pulse = wrap(self.pulse, PULSE_RATE * dt, 1.0);
        self.rain = wrap(self.rain, RAIN_RATE * dt, RAIN_PERIOD);
        if killing {
            self.kill_effect = (self.kill_effect + KILL_EFFECT_RATE * dt).min(1.0);
        }
    }

    fn advance_water(&mut self, dt: f32) {
        let step = WATER_RATE * dt;
        if self.water_rising {
            self.water_level += step;
            if self.water_level >= 1.0 {
                self.water_level = 1.0;
                self.water_rising = false;
            }
        } else {
            self.water_level -= step;
            if self.water_level <= 0.0 {
                self.water_level = 0.0;
                self.water_rising = true;
            }
        }
    }

    /// Flip the weather with probability `chance`. Returns true on a flip.
    pub fn maybe_toggle_rain(&mut self, rng: &mut dyn RandomSource, chance: f32) -> bool {
        if rng.chance(chance) {
            self.raining = !self.raining;
            log::debug!("rain {}", if self.raining { "started" } else { "stopped" });
            true
        } else {
            false
        }
    }

    /// Kill animation finished or was cancelled.
    pub fn reset_kill_effect(&mut self) {
        self.kill_effect = 0.0;
    }

    pub fn life_stage(&self) -> LifeStage {
        LifeStage::from_phase(self.life_cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awareness_engine::SequenceRng;

    #[test]
    fn water_level_stays_in_bounds_and_bounces() {
        let mut anim = AnimationState::default();
        let mut flips = 0;
        let mut rising = anim.water_rising;
        for _ in 0..4500 {
            anim.advance(0.1, false);
            assert!((0.0..=1.0).contains(&anim.water_level));
            if anim.water_rising != rising {
                flips += 1;
                rising = anim.water_rising;
                assert!(anim.water_level == 0.0 || anim.water_level == 1.0);
            }
        }
        // 450 s at 0.01/s crosses a bound four times.
        assert_eq!(flips, 4);
    }

    #[test]
    fn water_flips_exactly_at_the_top() {
        let mut anim = AnimationState {
            water_level: 0.995,
            ..Default::default()
        };
        anim.advance(1.0, false);
        assert_eq!(anim.water_level, 1.0);
        assert!(!anim.water_rising);
        anim.advance(1.0, false);
        assert!(anim.water_level < 1.0);
    }

    #[test]
    fn huge_delta_still_clamps() {
        let mut anim = AnimationState::default();
        anim.advance(1000.0, false);
        assert_eq!(anim.water_level, 1.0);
        anim.advance(-3.0, false);
        assert_eq!(anim.water_level, 1.0);
    }

    #[test]
    fn phases_wrap() {
        let mut anim = AnimationState::default();
        anim.advance(1.5, false);
        assert!((anim.ripple - 1.5).abs() < 1e-6);
        assert_eq!(anim.pulse, 0.75);
        anim.advance(1.0, false);
        assert_eq!(anim.ripple, 0.0);
        assert_eq!(anim.pulse, 0.0);
    }

    #[test]
    fn zero_delta_holds() {
        let mut anim = AnimationState::default();
        anim.advance(0.4, true);
        let before = anim.clone();
        anim.advance(0.0, true);
        assert_eq!(anim, before);
    }

    #[test]
    fn kill_effect_saturates_only_while_killing() {
        let mut anim = AnimationState::default();
        anim.advance(0.25, false);
        assert_eq!(anim.kill_effect, 0.0);
        anim.advance(0.25, true);
        assert_eq!(anim.kill_effect, 0.5);
        anim.advance(0.75, true);
        assert_eq!(anim.kill_effect, 1.0);
        anim.reset_kill_effect();
        assert_eq!(anim.kill_effect, 0.0);
    }

    #[test]
    fn life_stages() {
        assert_eq!(LifeStage::from_phase(0.0), LifeStage::Egg);
        assert_eq!(LifeStage::from_phase(0.25), LifeStage::Larva);
        assert_eq!(LifeStage::from_phase(0.6), LifeStage::Pupa);
        assert_eq!(LifeStage::from_phase(0.75), LifeStage::Adult);
    }

    #[test]
    fn rain_toggles_from_injected_source() {
        let mut anim = AnimationState::default();
        let mut rng = SequenceRng::new(vec![0.0005, 0.5]);
        assert!(anim.maybe_toggle_rain(&mut rng, 0.001));
        assert!(anim.raining);
        assert!(!anim.maybe_toggle_rain(&mut rng, 0.001));
        assert!(anim.raining);
    }
}
