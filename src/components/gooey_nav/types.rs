//! Navigation items and geometry values shared by the indicator parts.

use serde::Deserialize;

/// A navigation entry. Position in the item list is its index.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavItem {
	/// Visible link text, also copied into the label overlay.
	pub label: String,
	/// Route identifier matched against the host's current route.
	pub href: String,
}

impl NavItem {
	/// Convenience constructor.
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
		}
	}
}

/// Axis-aligned rectangle in viewport pixels, as reported by an element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	/// Builds a rectangle from its origin and size.
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}
}

/// Overlay layout box relative to the indicator container's origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectPosition {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl EffectPosition {
	/// Translates `target` into the coordinate space of `origin`.
	pub fn relative_to(target: Rect, origin: Rect) -> Self {
		Self {
			left: target.x - origin.x,
			top: target.y - origin.y,
			width: target.width,
			height: target.height,
		}
	}

	/// CSS property/value pairs for an absolutely positioned overlay.
	pub fn css_properties(&self) -> [(&'static str, String); 4] {
		[
			("left", format!("{}px", self.left)),
			("top", format!("{}px", self.top)),
			("width", format!("{}px", self.width)),
			("height", format!("{}px", self.height)),
		]
	}
}
