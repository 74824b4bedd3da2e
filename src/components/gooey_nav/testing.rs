//! Recording fakes for the indicator capabilities.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::handle::{ElementHandle, ResizeNotifier, Scheduler, Subscription, TimerId};
use super::particles::ParticleDescriptor;
use super::types::Rect;

#[derive(Default)]
struct MockNode {
	rect: Option<Rect>,
	children: Vec<MockElement>,
	classes: BTreeSet<String>,
	styles: HashMap<String, String>,
	text: String,
	reflows: usize,
	class_log: Vec<String>,
	descriptor: Option<ParticleDescriptor>,
}

/// In-memory element. Clones share the same node.
#[derive(Clone, Default)]
pub struct MockElement(Rc<RefCell<MockNode>>);

impl MockElement {
	pub fn at(rect: Rect) -> Self {
		let el = Self::default();
		el.0.borrow_mut().rect = Some(rect);
		el
	}

	pub fn detached() -> Self {
		Self::default()
	}

	pub fn set_rect(&self, rect: Option<Rect>) {
		self.0.borrow_mut().rect = rect;
	}

	pub fn same(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}

	pub fn child_count(&self) -> usize {
		self.0.borrow().children.len()
	}

	pub fn children(&self) -> Vec<MockElement> {
		self.0.borrow().children.clone()
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.0.borrow().classes.contains(class)
	}

	pub fn style(&self, name: &str) -> Option<String> {
		self.0.borrow().styles.get(name).cloned()
	}

	pub fn text(&self) -> String {
		self.0.borrow().text.clone()
	}

	pub fn reflows(&self) -> usize {
		self.0.borrow().reflows
	}

	/// `+class`, `-class` and `reflow` entries in call order.
	pub fn class_log(&self) -> Vec<String> {
		self.0.borrow().class_log.clone()
	}

	pub fn descriptor(&self) -> Option<ParticleDescriptor> {
		self.0.borrow().descriptor.clone()
	}
}

impl ElementHandle for MockElement {
	fn bounding_box(&self) -> Option<Rect> {
		self.0.borrow().rect
	}

	fn spawn_particle(&self, descriptor: &ParticleDescriptor) -> Option<Self> {
		let particle = Self::default();
		{
			let mut node = particle.0.borrow_mut();
			node.classes.insert("particle".into());
			for (name, value) in descriptor.css_properties() {
				node.styles.insert(name.into(), value);
			}
			node.descriptor = Some(descriptor.clone());
		}
		Some(particle)
	}

	fn attach_child(&self, child: &Self) {
		self.0.borrow_mut().children.push(child.clone());
	}

	fn remove_child(&self, child: &Self) -> bool {
		let mut node = self.0.borrow_mut();
		match node.children.iter().position(|c| c.same(child)) {
			Some(pos) => {
				node.children.remove(pos);
				true
			}
			None => false,
		}
	}

	fn add_class(&self, class: &str) {
		let mut node = self.0.borrow_mut();
		node.classes.insert(class.into());
		node.class_log.push(format!("+{class}"));
	}

	fn remove_class(&self, class: &str) {
		let mut node = self.0.borrow_mut();
		node.classes.remove(class);
		node.class_log.push(format!("-{class}"));
	}

	fn set_style_property(&self, name: &str, value: &str) {
		self.0.borrow_mut().styles.insert(name.into(), value.into());
	}

	fn set_text(&self, text: &str) {
		self.0.borrow_mut().text = text.into();
	}

	fn force_reflow(&self) {
		let mut node = self.0.borrow_mut();
		node.reflows += 1;
		node.class_log.push("reflow".into());
	}
}

/// Frame callbacks run this long after they are requested.
pub const FRAME_MS: f64 = 16.0;

struct Queued {
	due: f64,
	seq: u64,
	id: TimerId,
	callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
	now: f64,
	seq: u64,
	queue: Vec<Queued>,
}

/// Virtual-time scheduler driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
	clock: Rc<RefCell<Clock>>,
	ignore_cancel: bool,
}

impl ManualScheduler {
	/// A scheduler whose `cancel` does nothing, so every callback fires.
	pub fn without_cancel() -> Self {
		Self {
			ignore_cancel: true,
			..Self::default()
		}
	}

	pub fn now(&self) -> f64 {
		self.clock.borrow().now
	}

	pub fn pending(&self) -> usize {
		self.clock.borrow().queue.len()
	}

	fn push(&self, delay_ms: f64, frame: bool, callback: Box<dyn FnOnce()>) -> TimerId {
		let mut clock = self.clock.borrow_mut();
		clock.seq += 1;
		let seq = clock.seq;
		let id = if frame {
			TimerId::Frame(seq as i32)
		} else {
			TimerId::Timeout(seq as i32)
		};
		let due = clock.now + delay_ms;
		clock.queue.push(Queued {
			due,
			seq,
			id,
			callback,
		});
		id
	}

	/// Runs every callback due within the next `ms`, in due order, including
	/// callbacks scheduled by the ones that run.
	pub fn advance(&self, ms: f64) {
		let target = self.now() + ms;
		loop {
			let next = {
				let mut clock = self.clock.borrow_mut();
				let earliest = clock
					.queue
					.iter()
					.enumerate()
					.filter(|(_, q)| q.due <= target)
					.min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
					.map(|(i, _)| i);
				earliest.map(|i| {
					let queued = clock.queue.remove(i);
					clock.now = queued.due;
					queued.callback
				})
			};
			match next {
				Some(callback) => callback(),
				None => break,
			}
		}
		self.clock.borrow_mut().now = target;
	}

	/// Advances until the queue is empty.
	pub fn run_all(&self) {
		loop {
			let last = self.clock.borrow().queue.iter().map(|q| q.due).fold(f64::NAN, f64::max);
			if last.is_nan() {
				break;
			}
			self.advance((last - self.now()).max(0.0));
		}
	}
}

impl Scheduler for ManualScheduler {
	fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
		Some(self.push(delay_ms, false, callback))
	}

	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
		Some(self.push(FRAME_MS, true, callback))
	}

	fn cancel(&self, timer: TimerId) {
		if self.ignore_cancel {
			return;
		}
		self.clock.borrow_mut().queue.retain(|q| q.id != timer);
	}
}

/// Resize notifier fired by hand.
#[derive(Clone, Default)]
pub struct ManualResize {
	callbacks: Rc<RefCell<Vec<(u64, Box<dyn FnMut()>)>>>,
	next: Rc<Cell<u64>>,
}

impl ManualResize {
	pub fn observers(&self) -> usize {
		self.callbacks.borrow().len()
	}

	pub fn fire(&self) {
		let mut callbacks = std::mem::take(&mut *self.callbacks.borrow_mut());
		for (_, cb) in callbacks.iter_mut() {
			cb();
		}
		let mut current = self.callbacks.borrow_mut();
		callbacks.append(&mut current);
		*current = callbacks;
	}
}

impl<H: ElementHandle> ResizeNotifier<H> for ManualResize {
	fn observe(&self, _target: &H, on_resize: Box<dyn FnMut()>) -> Subscription {
		let id = self.next.get();
		self.next.set(id + 1);
		self.callbacks.borrow_mut().push((id, on_resize));
		let callbacks = Rc::downgrade(&self.callbacks);
		Subscription::new(move || {
			if let Some(callbacks) = callbacks.upgrade() {
				callbacks.borrow_mut().retain(|(i, _)| *i != id);
			}
		})
	}
}
