use serde::{de::Error as _, Deserialize, Serialize};

/// Largest population ceiling a host may ask for.
pub const MOSQUITO_CEILING: usize = 500;

/// Tuning knobs for the awareness animation.
///
/// Every field has a default, so a host may send any subset as JSON:
///
/// ```json
/// { "scene_duration": 20.0, "reset_timer_on_select": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwarenessConfig {
    /// Seconds each scene stays up before auto-advancing.
    pub scene_duration: f32,
    /// Seconds each info line stays up before rotating.
    pub message_duration: f32,
    /// Seconds between automatic mosquito spawns.
    pub spawn_interval: f32,
    /// Population ceiling for the mosquito pool.
    pub max_mosquitoes: usize,
    /// Mosquitoes placed by a swarm reset.
    pub swarm_size: usize,
    /// Seconds between a kill and the removal of the dead mosquito.
    pub kill_duration: f32,
    /// Per-frame probability of the weather flipping.
    pub rain_toggle_chance: f32,
    /// Whether choosing a scene with a digit key restarts the scene timer.
    pub reset_timer_on_select: bool,
    /// Seed for the random source.
    pub seed: u64,
}

impl Default for AwarenessConfig {
    fn default() -> Self {
        Self {
            scene_duration: 15.0,
            message_duration: 5.0,
            spawn_interval: 2.0,
            max_mosquitoes: 20,
            swarm_size: 10,
            kill_duration: 1.0,
            rain_toggle_chance: 0.001,
            reset_timer_on_select: false,
            seed: 42,
        }
    }
}

impl AwarenessConfig {
    /// Parse a (possibly partial) JSON configuration. Values that would
    /// stall or flood the animation are rejected like malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(serde_json::Error::custom)?;
        Ok(config)
    }

    /// Check every knob against the range the animation can run with.
    pub fn validate(&self) -> Result<(), String> {
        let durations = [
            ("scene_duration", self.scene_duration),
            ("message_duration", self.message_duration),
            ("spawn_interval", self.spawn_interval),
            ("kill_duration", self.kill_duration),
        ];
        for (name, value) in durations {
            if !(value > 0.0) || !value.is_finite() {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.rain_toggle_chance) {
            return Err(format!(
                "rain_toggle_chance must be within [0, 1], got {}",
                self.rain_toggle_chance
            ));
        }
        if self.max_mosquitoes > MOSQUITO_CEILING {
            return Err(format!(
                "max_mosquitoes must be at most {}, got {}",
                MOSQUITO_CEILING, self.max_mosquitoes
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AwarenessConfig::from_json("{}").unwrap();
        assert_eq!(config, AwarenessConfig::default());
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let config =
            AwarenessConfig::from_json(r#"{"scene_duration": 20.0, "reset_timer_on_select": true}"#)
                .unwrap();
        assert_eq!(config.scene_duration, 20.0);
        assert!(config.reset_timer_on_select);
        assert_eq!(config.max_mosquitoes, 20);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AwarenessConfig::from_json("{\"scene_duration\": \"long\"}").is_err());
        assert!(AwarenessConfig::from_json("not json").is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AwarenessConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_timings_are_rejected() {
        for field in ["scene_duration", "message_duration", "spawn_interval", "kill_duration"] {
            let zero = format!(r#"{{"{}": 0.0}}"#, field);
            let negative = format!(r#"{{"{}": -1.5}}"#, field);
            assert!(AwarenessConfig::from_json(&zero).is_err(), "{} = 0", field);
            assert!(AwarenessConfig::from_json(&negative).is_err(), "{} < 0", field);
        }
    }

    #[test]
    fn rain_chance_must_be_a_probability() {
        assert!(AwarenessConfig::from_json(r#"{"rain_toggle_chance": -0.1}"#).is_err());
        assert!(AwarenessConfig::from_json(r#"{"rain_toggle_chance": 1.5}"#).is_err());
        let certain = AwarenessConfig::from_json(r#"{"rain_toggle_chance": 1.0}"#).unwrap();
        assert_eq!(certain.rain_toggle_chance, 1.0);
    }

    #[test]
    fn huge_population_ceiling_is_rejected() {
        let err = AwarenessConfig::from_json(r#"{"max_mosquitoes": 4611686018427387903}"#)
            .unwrap_err();
        assert!(err.to_string().contains("max_mosquitoes"));
        let at_cap = format!(r#"{{"max_mosquitoes": {}}}"#, MOSQUITO_CEILING);
        assert!(AwarenessConfig::from_json(&at_cap).is_ok());
    }
}
