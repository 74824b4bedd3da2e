//! Polar particle offsets and container-relative overlay geometry.

use log::debug;

use super::handle::ElementHandle;
use super::noise::NoiseSource;
use super::types::EffectPosition;

/// Angular jitter (degrees, full amplitude) applied to the whole ring.
const ANGLE_JITTER: f64 = 8.0;

/// Offset of point `point_index` among `total_points` evenly spaced around a
/// circle of radius `distance`, with the ring's angular step jittered.
pub fn position_at(
	distance: f64,
	point_index: usize,
	total_points: usize,
	noise: &mut dyn NoiseSource,
) -> (f64, f64) {
	let jitter = noise.noise(ANGLE_JITTER);
	if total_points == 0 {
		return (distance, 0.0);
	}
	let angle = ((360.0 + jitter) / total_points as f64 * point_index as f64).to_radians();
	(distance * angle.cos(), distance * angle.sin())
}

/// Container-relative layout box of `active`.
///
/// `None` while the container, the active element or either overlay is
/// missing or detached, so callers can invoke this before mount or
/// redundantly from late resize callbacks.
pub fn track<H: ElementHandle>(
	container: Option<&H>,
	active: Option<&H>,
	overlays: [Option<&H>; 2],
) -> Option<EffectPosition> {
	let (Some(container), Some(active), [Some(highlight), Some(label)]) = (container, active, overlays)
	else {
		debug!("gooey-nav: geometry skipped, handles not attached");
		return None;
	};
	if highlight.bounding_box().is_none() || label.bounding_box().is_none() {
		debug!("gooey-nav: geometry skipped, overlays detached");
		return None;
	}
	let origin = container.bounding_box()?;
	let target = active.bounding_box()?;
	Some(EffectPosition::relative_to(target, origin))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::gooey_nav::noise::{ConstantNoise, SeededNoise};
	use crate::components::gooey_nav::testing::MockElement;
	use crate::components::gooey_nav::types::Rect;

	#[test]
	fn quarter_turn_without_jitter() {
		let mut calm = ConstantNoise::default();
		let (x, y) = position_at(10.0, 1, 4, &mut calm);
		assert!(x.abs() < 1e-9);
		assert!((y - 10.0).abs() < 1e-9);

		let (x, y) = position_at(10.0, 4, 4, &mut calm);
		assert!((x - 10.0).abs() < 1e-9);
		assert!(y.abs() < 1e-9);
	}

	#[test]
	fn magnitude_matches_distance_under_jitter() {
		let mut noise = SeededNoise::new(3);
		for i in 0..=15 {
			let (x, y) = position_at(90.0, i, 15, &mut noise);
			assert!(((x * x + y * y).sqrt() - 90.0).abs() < 1e-9);
		}
	}

	#[test]
	fn same_seed_same_trajectory() {
		let (mut a, mut b) = (SeededNoise::new(11), SeededNoise::new(11));
		for i in 0..15 {
			assert_eq!(position_at(42.0, i, 15, &mut a), position_at(42.0, i, 15, &mut b));
		}
	}

	#[test]
	fn jitter_skews_the_angle() {
		// Unit sample 1.0 gives the maximal +4 degree ring stretch.
		let mut high = ConstantNoise(1.0);
		let (x, y) = position_at(1.0, 1, 1, &mut high);
		let angle = y.atan2(x).to_degrees();
		assert!((angle - 4.0).abs() < 1e-6, "angle {angle}");
	}

	#[test]
	fn tracks_relative_to_container() {
		let container = MockElement::at(Rect::new(10.0, 20.0, 400.0, 60.0));
		let item = MockElement::at(Rect::new(110.0, 30.0, 80.0, 40.0));
		let overlay = MockElement::at(Rect::default());
		let pos = track(Some(&container), Some(&item), [Some(&overlay), Some(&overlay)]).unwrap();
		assert_eq!(
			pos,
			EffectPosition {
				left: 100.0,
				top: 10.0,
				width: 80.0,
				height: 40.0,
			}
		);
	}

	#[test]
	fn missing_or_detached_handles_yield_nothing() {
		let container = MockElement::at(Rect::new(0.0, 0.0, 400.0, 60.0));
		let overlay = MockElement::at(Rect::default());
		let overlays = [Some(&overlay), Some(&overlay)];
		let detached = MockElement::detached();
		assert_eq!(track(Some(&container), None, overlays), None);
		assert_eq!(track(None, Some(&container), overlays), None);
		assert_eq!(track(Some(&container), Some(&detached), overlays), None);
		assert_eq!(track(Some(&detached), Some(&container), overlays), None);
	}

	#[test]
	fn detached_or_missing_overlays_yield_nothing() {
		let container = MockElement::at(Rect::new(0.0, 0.0, 400.0, 60.0));
		let item = MockElement::at(Rect::new(10.0, 10.0, 80.0, 40.0));
		let overlay = MockElement::at(Rect::default());
		let detached = MockElement::detached();
		let track_with = |overlays: [Option<&MockElement>; 2]| track(Some(&container), Some(&item), overlays);
		assert_eq!(track_with([Some(&detached), Some(&overlay)]), None);
		assert_eq!(track_with([Some(&overlay), Some(&detached)]), None);
		assert_eq!(track_with([None, Some(&overlay)]), None);
		assert!(track_with([Some(&overlay), Some(&overlay)]).is_some());
	}
}
