//! Particle color tokens and the palette that backs them.
//!
//! Particles never carry concrete colors. They reference a numbered token
//! rendered as the CSS custom property `--color-<n>`, and the container
//! declares the token values, so a host theme can restyle a burst without
//! touching the engine.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Numbered color slot sampled per particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub u8);

impl Default for ColorToken {
	fn default() -> Self {
		Self(1)
	}
}

impl ColorToken {
	/// Name of the custom property this token resolves through.
	pub fn property(self) -> String {
		format!("--color-{}", self.0)
	}

	/// CSS value for a particle's `--color`, falling back to white when the
	/// token is not declared.
	pub fn to_css(self) -> String {
		format!("var({}, white)", self.property())
	}
}

/// Concrete values for tokens `1..=colors.len()`.
#[derive(Clone, Debug)]
pub struct TokenPalette {
	pub colors: Vec<Color>,
}

impl Default for TokenPalette {
	/// Cool highlight tones that read on both light and dark backgrounds.
	fn default() -> Self {
		Self {
			colors: vec![
				Color::rgb(16, 44, 229),   // Cobalt
				Color::rgb(228, 236, 255), // Ice
				Color::rgb(255, 255, 255), // White
				Color::rgb(255, 196, 61),  // Amber spark
			],
		}
	}
}

impl TokenPalette {
	/// Inline style declarations for the indicator container.
	pub fn declarations(&self) -> String {
		self.colors
			.iter()
			.enumerate()
			.map(|(i, c)| format!("{}: {};", ColorToken(i as u8 + 1).property(), c.to_css()))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokens_resolve_through_custom_properties() {
		assert_eq!(ColorToken(4).to_css(), "var(--color-4, white)");
	}

	#[test]
	fn palette_declares_numbered_tokens() {
		let palette = TokenPalette {
			colors: vec![Color::rgb(255, 0, 0), Color { a: 0.5, ..Color::rgb(0, 0, 0) }],
		};
		assert_eq!(
			palette.declarations(),
			"--color-1: #ff0000; --color-2: rgba(0, 0, 0, 0.5);"
		);
	}
}
