//! Indicator configuration and its JSON loader.

use serde::Deserialize;
use thiserror::Error;

use super::theme::ColorToken;
use super::types::NavItem;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("malformed navigation config: {0}")]
	Json(#[from] serde_json::Error),
	#[error("navigation needs at least one item")]
	NoItems,
	#[error("particle_count must be at least 1")]
	NoParticles,
	#[error("colors palette must not be empty")]
	NoColors,
	#[error("{field} must be finite and non-negative, got {value}")]
	OutOfRange { field: &'static str, value: f64 },
}

/// Timing, trajectory and palette of a particle burst.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
	/// Base unit (ms) scaling staging delay and particle lifetime.
	pub animation_time: f64,
	pub particle_count: usize,
	/// `(start_radius, end_radius)` in pixels.
	pub particle_distances: (f64, f64),
	/// Rotation jitter amplitude.
	pub particle_r: f64,
	/// Lifetime jitter amplitude (ms).
	pub time_variance: f64,
	pub colors: Vec<ColorToken>,
}

impl Default for BurstConfig {
	fn default() -> Self {
		Self {
			animation_time: 600.0,
			particle_count: 15,
			particle_distances: (90.0, 10.0),
			particle_r: 100.0,
			time_variance: 300.0,
			colors: [1, 2, 3, 1, 2, 3, 1, 4].into_iter().map(ColorToken).collect(),
		}
	}
}

impl BurstConfig {
	/// Duration hint written to the burst anchor: the longest a particle lives.
	pub fn bubble_time(&self) -> f64 {
		self.animation_time * 2.0 + self.time_variance
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.particle_count == 0 {
			return Err(ConfigError::NoParticles);
		}
		if self.colors.is_empty() {
			return Err(ConfigError::NoColors);
		}
		for (field, value) in [
			("animation_time", self.animation_time),
			("time_variance", self.time_variance),
			("particle_r", self.particle_r),
			("particle_distances.0", self.particle_distances.0),
			("particle_distances.1", self.particle_distances.1),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::OutOfRange { field, value });
			}
		}
		Ok(())
	}
}

/// Everything a navigation indicator is built from.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GooeyNavConfig {
	pub items: Vec<NavItem>,
	#[serde(flatten)]
	pub burst: BurstConfig,
}

impl Default for GooeyNavConfig {
	fn default() -> Self {
		Self {
			items: vec![
				NavItem::new("Home", "/"),
				NavItem::new("About", "/about"),
				NavItem::new("Contact", "/contact"),
			],
			burst: BurstConfig::default(),
		}
	}
}

impl GooeyNavConfig {
	/// Parses and validates a JSON document such as
	/// `{"items": [{"label": "Home", "href": "/"}], "particle_count": 12}`.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.items.is_empty() {
			return Err(ConfigError::NoItems);
		}
		self.burst.validate()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn omitted_fields_take_defaults() {
		let config = GooeyNavConfig::from_json(
			r#"{"items": [{"label": "Home", "href": "/"}], "particle_count": 12}"#,
		)
		.unwrap();
		assert_eq!(config.burst.particle_count, 12);
		assert_eq!(config.burst.animation_time, 600.0);
		assert_eq!(config.burst.colors.len(), 8);
		assert_eq!(config.burst.bubble_time(), 1500.0);
	}

	#[test]
	fn colors_parse_as_bare_numbers() {
		let config = GooeyNavConfig::from_json(
			r#"{"items": [{"label": "A", "href": "/a"}], "colors": [2, 4]}"#,
		)
		.unwrap();
		assert_eq!(config.burst.colors, vec![ColorToken(2), ColorToken(4)]);
	}

	#[test]
	fn rejects_unusable_configs() {
		assert!(matches!(
			GooeyNavConfig::from_json(r#"{"items": []}"#),
			Err(ConfigError::NoItems)
		));
		assert!(matches!(
			GooeyNavConfig::from_json(r#"{"items": [{"label": "A", "href": "/"}], "colors": []}"#),
			Err(ConfigError::NoColors)
		));
		assert!(matches!(
			GooeyNavConfig::from_json(
				r#"{"items": [{"label": "A", "href": "/"}], "time_variance": -1}"#
			),
			Err(ConfigError::OutOfRange {
				field: "time_variance",
				..
			})
		));
		assert!(matches!(
			GooeyNavConfig::from_json("{"),
			Err(ConfigError::Json(_))
		));
	}

	#[test]
	fn default_config_is_valid() {
		assert!(GooeyNavConfig::default().validate().is_ok());
	}
}
