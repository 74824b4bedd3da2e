//! Browser implementations of the indicator capabilities over `web-sys`.
//!
//! DOM exceptions are discarded: the indicator is cosmetic and must never
//! interrupt navigation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ResizeObserver, Window};

use super::handle::{ElementHandle, ResizeNotifier, Scheduler, Subscription, TimerId};
use super::particles::ParticleDescriptor;
use super::types::Rect;

/// An `HtmlElement` driven by the indicator.
#[derive(Clone, Debug)]
pub struct DomElement(pub HtmlElement);

impl From<HtmlElement> for DomElement {
	fn from(el: HtmlElement) -> Self {
		Self(el)
	}
}

impl DomElement {
	fn create_span(&self, class: &str) -> Option<HtmlElement> {
		let document = self.0.owner_document()?;
		let span: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
		let _ = span.class_list().add_1(class);
		Some(span)
	}
}

impl ElementHandle for DomElement {
	fn bounding_box(&self) -> Option<Rect> {
		if !self.0.is_connected() {
			return None;
		}
		let rect = self.0.get_bounding_client_rect();
		Some(Rect::new(rect.x(), rect.y(), rect.width(), rect.height()))
	}

	fn spawn_particle(&self, descriptor: &ParticleDescriptor) -> Option<Self> {
		let particle = self.create_span("particle")?;
		let style = particle.style();
		for (name, value) in descriptor.css_properties() {
			let _ = style.set_property(name, &value);
		}
		let point = self.create_span("point")?;
		let _ = particle.append_child(&point);
		Some(Self(particle))
	}

	fn attach_child(&self, child: &Self) {
		let _ = self.0.append_child(&child.0);
	}

	fn remove_child(&self, child: &Self) -> bool {
		let is_child = child
			.0
			.parent_node()
			.is_some_and(|parent| parent.is_same_node(Some(self.0.as_ref())));
		is_child && self.0.remove_child(&child.0).is_ok()
	}

	fn add_class(&self, class: &str) {
		let _ = self.0.class_list().add_1(class);
	}

	fn remove_class(&self, class: &str) {
		let _ = self.0.class_list().remove_1(class);
	}

	fn set_style_property(&self, name: &str, value: &str) {
		let _ = self.0.style().set_property(name, value);
	}

	fn set_text(&self, text: &str) {
		self.0.set_inner_text(text);
	}

	fn force_reflow(&self) {
		let _ = self.0.offset_width();
	}
}

type Armed = Closure<dyn FnMut()>;

/// Scheduled callbacks still owned by the scheduler, keyed by timer.
type Registry<C> = Rc<RefCell<HashMap<TimerId, C>>>;

/// Runs `callback` once, then drops the `registry` entry under the id later
/// written to `own_id`. The registry is held weakly.
fn releasing<C: 'static>(
	registry: &Registry<C>,
	own_id: Rc<Cell<Option<TimerId>>>,
	callback: Box<dyn FnOnce()>,
) -> impl FnMut() + 'static {
	let registry = Rc::downgrade(registry);
	let mut callback = Some(callback);
	move || {
		if let Some(callback) = callback.take() {
			callback();
		}
		if let (Some(registry), Some(id)) = (registry.upgrade(), own_id.get()) {
			let spent = registry.borrow_mut().remove(&id);
			drop(spent);
		}
	}
}

/// `setTimeout` / `requestAnimationFrame` on the global window.
///
/// Each scheduled callback is kept in a registry keyed by its [`TimerId`]
/// until it fires or is cancelled, so cancelled callbacks are freed instead
/// of leaking. Clones share one registry.
#[derive(Clone, Default)]
pub struct BrowserScheduler {
	armed: Registry<Armed>,
}

impl BrowserScheduler {
	fn arm(
		&self,
		callback: Box<dyn FnOnce()>,
		schedule: impl FnOnce(&Window, &js_sys::Function) -> Option<TimerId>,
	) -> Option<TimerId> {
		let window = web_sys::window()?;
		let own_id: Rc<Cell<Option<TimerId>>> = Rc::default();
		// wasm-bindgen defers freeing a closure dropped during its own call.
		let closure: Armed = Closure::new(releasing(&self.armed, own_id.clone(), callback));
		let id = schedule(&window, closure.as_ref().unchecked_ref())?;
		own_id.set(Some(id));
		self.armed.borrow_mut().insert(id, closure);
		Some(id)
	}
}

impl Scheduler for BrowserScheduler {
	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
		self.arm(callback, |window, f| {
			window
				.set_timeout_with_callback_and_timeout_and_arguments_0(f, delay_ms.round() as i32)
				.ok()
				.map(TimerId::Timeout)
		})
	}

	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
		self.arm(callback, |window, f| {
			window.request_animation_frame(f).ok().map(TimerId::Frame)
		})
	}

	fn cancel(&self, timer: TimerId) {
		if let Some(window) = web_sys::window() {
			match timer {
				TimerId::Timeout(id) => window.clear_timeout_with_handle(id),
				TimerId::Frame(id) => {
					let _ = window.cancel_animation_frame(id);
				}
			}
		}
		let cancelled = self.armed.borrow_mut().remove(&timer);
		drop(cancelled);
	}
}

/// Container size changes via `ResizeObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserResizeNotifier;

impl ResizeNotifier<DomElement> for BrowserResizeNotifier {
	fn observe(&self, target: &DomElement, mut on_resize: Box<dyn FnMut()>) -> Subscription {
		let callback: Closure<dyn FnMut()> = Closure::new(move || on_resize());
		let Ok(observer) = ResizeObserver::new(callback.as_ref().unchecked_ref()) else {
			log::warn!("gooey-nav: ResizeObserver unavailable, overlays will not follow resizes");
			return Subscription::none();
		};
		observer.observe(&target.0);
		Subscription::new(move || {
			observer.disconnect();
			drop(callback);
		})
	}
}
