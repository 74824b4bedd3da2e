//! Applies indicator geometry to the two overlay elements.
//!
//! The highlight surface carries the gooey filter and the particles; the label
//! clone sits exactly on top of it and shows the active item's text.

use super::handle::ElementHandle;
use super::particles::ACTIVE_CLASS;
use super::types::EffectPosition;

/// Highlight surface plus label clone of one indicator.
#[derive(Clone)]
pub struct IndicatorEffectRenderer<H: ElementHandle> {
	pub highlight: H,
	pub label: H,
}

impl<H: ElementHandle> IndicatorEffectRenderer<H> {
	pub fn new(highlight: H, label: H) -> Self {
		Self { highlight, label }
	}

	/// Moves both overlays onto `position` and updates the label text.
	pub fn place(&self, position: &EffectPosition, label_text: &str) {
		for (name, value) in position.css_properties() {
			self.highlight.set_style_property(name, &value);
			self.label.set_style_property(name, &value);
		}
		self.label.set_text(label_text);
	}

	/// Restarts the label transition even if it is already active.
	///
	/// Browsers only restart a transition when the class removal is flushed
	/// by a layout read before the class comes back.
	pub fn restart_transition(&self) {
		self.label.remove_class(ACTIVE_CLASS);
		self.label.force_reflow();
		self.label.add_class(ACTIVE_CLASS);
	}

	/// [`place`](Self::place) followed by a transition restart.
	pub fn render(&self, position: &EffectPosition, label_text: &str) {
		self.place(position, label_text);
		self.restart_transition();
	}
}
