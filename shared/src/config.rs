use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::*;

/// Which renderer draws the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WheelVariant {
    /// Canvas wheel with radial labels.
    #[default]
    Classic,
    /// SVG wheel with labels following each segment's arc.
    Curved,
}

/// Settings for the spin mechanic.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Validate)]
#[serde(default)]
pub struct SpinSettings {
    #[validate(range(min = 1, max = 60000))]
    pub spin_duration_ms: u32,
    #[validate(range(min = 1, max = 50))]
    pub min_turns: u32,
    #[validate(range(min = 1, max = 50))]
    pub max_turns: u32,
    pub pointer_angle_deg: f64,
    /// Fraction of a segment's width the landing point may stray from its centre.
    #[validate(range(min = 0.0, max = 0.95))]
    pub landing_jitter: f64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            pointer_angle_deg: POINTER_ANGLE_DEG,
            landing_jitter: LANDING_JITTER,
        }
    }
}

impl SpinSettings {
    pub fn normalized(mut self) -> Self {
        if let Err(errors) = self.validate() {
            log::warn!("Adjusting out-of-range spin settings: {}", errors);
        }
        self.spin_duration_ms = self.spin_duration_ms.clamp(1, 60_000);
        self.min_turns = self.min_turns.clamp(1, 50);
        self.max_turns = self.max_turns.clamp(self.min_turns, 50);
        self.pointer_angle_deg = if self.pointer_angle_deg.is_finite() {
            self.pointer_angle_deg.rem_euclid(360.0)
        } else {
            POINTER_ANGLE_DEG
        };
        self.landing_jitter = if self.landing_jitter.is_finite() {
            self.landing_jitter.clamp(0.0, 0.95)
        } else {
            LANDING_JITTER
        };
        self
    }
}

/// Page-level configuration, usually embedded in the host page as JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub title: String,
    pub tagline: String,
    pub seed_names: Vec<String>,
    pub variant: WheelVariant,
    pub spin: SpinSettings,
    pub show_winner_modal: bool,
    pub announce_delay_ms: u32,
    pub allow_fullscreen: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            seed_names: DEFAULT_NAMES.iter().map(|name| name.to_string()).collect(),
            variant: WheelVariant::default(),
            spin: SpinSettings::default(),
            show_winner_modal: true,
            announce_delay_ms: ANNOUNCE_DELAY_MS,
            allow_fullscreen: true,
        }
    }
}

impl WheelConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: WheelConfig = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    pub fn normalized(mut self) -> Self {
        self.spin = self.spin.normalized();
        if self.title.trim().is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = WheelConfig::from_json("{}").unwrap();
        assert_eq!(config, WheelConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = WheelConfig::from_json(
            r#"{"variant": "curved", "seed_names": ["Kai"], "spin": {"spin_duration_ms": 2000}}"#,
        )
        .unwrap();
        assert_eq!(config.variant, WheelVariant::Curved);
        assert_eq!(config.seed_names, vec!["Kai".to_string()]);
        assert_eq!(config.spin.spin_duration_ms, 2000);
        assert_eq!(config.spin.min_turns, MIN_TURNS);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(WheelConfig::from_json("{variant:").is_err());
        assert!(WheelConfig::from_json(r#"{"variant": "hexagonal"}"#).is_err());
    }

    #[test]
    fn test_normalized_clamps() {
        let settings = SpinSettings {
            spin_duration_ms: 0,
            min_turns: 7,
            max_turns: 3,
            pointer_angle_deg: -90.0,
            landing_jitter: 4.0,
        }
        .normalized();
        assert_eq!(settings.spin_duration_ms, 1);
        assert_eq!(settings.min_turns, 7);
        assert_eq!(settings.max_turns, 7);
        assert_eq!(settings.pointer_angle_deg, 270.0);
        assert_eq!(settings.landing_jitter, 0.95);
    }

    #[test]
    fn test_blank_title_restored() {
        let config = WheelConfig::from_json(r#"{"title": "  "}"#).unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}
