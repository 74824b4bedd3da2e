//! Capabilities the indicator engine drives.
//!
//! The engine never touches the DOM, timers or observers directly. It talks to
//! these traits, which the browser bindings in `dom.rs` implement over
//! `web-sys` and the tests implement with recording fakes.

use super::particles::ParticleDescriptor;
use super::types::Rect;

/// An element the indicator can measure and mutate.
///
/// Every mutation is infallible from the caller's point of view. Operations on
/// detached elements, missing children or absent classes are silent no-ops.
pub trait ElementHandle: Clone + 'static {
	/// Viewport rectangle, or `None` while the element is not attached.
	fn bounding_box(&self) -> Option<Rect>;

	/// Creates a detached particle element styled from `descriptor`.
	fn spawn_particle(&self, descriptor: &ParticleDescriptor) -> Option<Self>;

	fn attach_child(&self, child: &Self);

	/// Detaches `child`. Returns `false` when it was not a child.
	fn remove_child(&self, child: &Self) -> bool;

	fn add_class(&self, class: &str);

	fn remove_class(&self, class: &str);

	fn set_style_property(&self, name: &str, value: &str);

	fn set_text(&self, text: &str);

	/// Synchronous layout read, flushing pending style changes.
	fn force_reflow(&self);
}

/// Opaque identifier of a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerId {
	Timeout(i32),
	Frame(i32),
}

/// Fire-and-forget callback scheduling on a single-threaded event loop.
pub trait Scheduler: Clone + 'static {
	/// Runs `callback` once after `delay_ms`. `None` if it could not be queued.
	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

	/// Runs `callback` before the next paint.
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

	/// Cancels a pending callback. Cancelling a fired or unknown id is a no-op.
	fn cancel(&self, timer: TimerId);
}

/// Releases a scoped resource when dropped.
pub struct Subscription {
	release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	pub fn new(release: impl FnOnce() + 'static) -> Self {
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// A subscription with nothing to release.
	pub fn none() -> Self {
		Self { release: None }
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.release.is_some())
			.finish()
	}
}

/// Notifies when an element's size changes.
pub trait ResizeNotifier<H: ElementHandle> {
	/// Starts observing `target`. Observation stops when the returned
	/// subscription is dropped.
	fn observe(&self, target: &H, on_resize: Box<dyn FnMut()>) -> Subscription;
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;

	#[test]
	fn subscription_releases_once_on_drop() {
		let released = Rc::new(Cell::new(0));
		let counter = released.clone();
		let sub = Subscription::new(move || counter.set(counter.get() + 1));
		assert_eq!(released.get(), 0);
		drop(sub);
		assert_eq!(released.get(), 1);
		drop(Subscription::none());
	}
}
