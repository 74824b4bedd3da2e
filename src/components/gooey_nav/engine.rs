//! Per-instance indicator engine.
//!
//! Owns the active index, the overlay handles, the burst scheduler and the
//! resize subscription of one navigation bar. The host feeds it clicks, route
//! changes and (through the resize notifier) container size changes; the
//! engine keeps the overlays on the active item and fires particle bursts on
//! clicks.
//!
//! Listeners registered with [`NavIndicator::on_geometry_change`] run while
//! the engine is mutably borrowed and must not call back into it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::config::BurstConfig;
use super::geometry;
use super::handle::{ElementHandle, ResizeNotifier, Scheduler, Subscription};
use super::noise::NoiseSource;
use super::particles::ParticleBurstScheduler;
use super::render::IndicatorEffectRenderer;
use super::state::ActiveIndex;
use super::types::{EffectPosition, NavItem};

/// Mounted elements of one indicator.
#[derive(Clone)]
pub struct IndicatorHandles<H: ElementHandle> {
	/// Reference frame for overlay coordinates; observed for resizes.
	pub container: H,
	/// One element per navigation item, in item order.
	pub items: Vec<H>,
	/// Gooey highlight surface, also the particle anchor.
	pub highlight: H,
	/// Label clone rendered over the highlight.
	pub label: H,
}

/// What caused the active index to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
	/// Route change observed from the host; no burst.
	RouteSync,
	/// Direct click on an item; fires a burst.
	Click,
}

type GeometryListener = Box<dyn FnMut(usize, &EffectPosition)>;

/// Morphing navigation indicator state machine.
pub struct NavIndicator<H: ElementHandle, S: Scheduler> {
	active: ActiveIndex,
	config: BurstConfig,
	mounted: Option<Mounted<H>>,
	bursts: ParticleBurstScheduler<H, S>,
	position: Option<EffectPosition>,
	revision: u64,
	listeners: Vec<GeometryListener>,
	resize: Option<Subscription>,
}

struct Mounted<H: ElementHandle> {
	container: H,
	items: Vec<H>,
	renderer: IndicatorEffectRenderer<H>,
}

impl<H: ElementHandle, S: Scheduler> NavIndicator<H, S> {
	/// Resolves the initial active index from `route`.
	pub fn new(
		items: Vec<NavItem>,
		route: &str,
		config: BurstConfig,
		scheduler: S,
		noise: Box<dyn NoiseSource>,
	) -> Self {
		let active = ActiveIndex::new(items, route);
		debug!("gooey-nav: initial route {route:?} resolved to {}", active.get());
		Self {
			active,
			config,
			mounted: None,
			bursts: ParticleBurstScheduler::new(scheduler, noise),
			position: None,
			revision: 0,
			listeners: Vec::new(),
			resize: None,
		}
	}

	pub fn active_index(&self) -> usize {
		self.active.get()
	}

	pub fn is_mounted(&self) -> bool {
		self.mounted.is_some()
	}

	/// Last computed overlay geometry.
	pub fn position(&self) -> Option<EffectPosition> {
		self.position
	}

	/// Bumped every time the overlay geometry is recomputed.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Particles of the current burst still attached.
	pub fn live_particles(&self) -> usize {
		self.bursts.live_count()
	}

	/// Registers a callback receiving `(active_index, position)` after each
	/// geometry recomputation.
	pub fn on_geometry_change(&mut self, listener: impl FnMut(usize, &EffectPosition) + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Binds the rendered elements and places the overlays on the active item.
	pub fn attach(&mut self, handles: IndicatorHandles<H>) {
		let IndicatorHandles {
			container,
			items,
			highlight,
			label,
		} = handles;
		if items.len() != self.active.items().len() {
			debug!(
				"gooey-nav: {} item elements for {} items",
				items.len(),
				self.active.items().len()
			);
		}
		self.mounted = Some(Mounted {
			container,
			items,
			renderer: IndicatorEffectRenderer::new(highlight, label),
		});
		self.refresh();
	}

	/// Subscribes `indicator` to container resizes. The subscription holds a
	/// weak reference and lives until [`teardown`](Self::teardown) or drop.
	pub fn observe_resizes<N: ResizeNotifier<H>>(indicator: &Rc<RefCell<Self>>, notifier: &N) {
		let Some(container) = indicator
			.borrow()
			.mounted
			.as_ref()
			.map(|m| m.container.clone())
		else {
			debug!("gooey-nav: resize observation skipped, not attached");
			return;
		};
		let weak = Rc::downgrade(indicator);
		let subscription = notifier.observe(
			&container,
			Box::new(move || {
				if let Some(indicator) = weak.upgrade() {
					if let Ok(mut indicator) = indicator.try_borrow_mut() {
						indicator.handle_resize();
					}
				}
			}),
		);
		indicator.borrow_mut().resize = Some(subscription);
	}

	/// Passive re-resolution from the host route. Never bursts.
	pub fn sync_route(&mut self, route: &str) -> bool {
		if !self.active.sync(route) {
			return false;
		}
		debug!("gooey-nav: route {route:?} -> item {}", self.active.get());
		self.transition(Activation::RouteSync);
		true
	}

	/// Click on item `index`. Clicking the active item is a no-op.
	pub fn click(&mut self, index: usize) -> bool {
		if !self.active.set(index) {
			return false;
		}
		debug!("gooey-nav: clicked item {index}");
		self.transition(Activation::Click);
		true
	}

	/// Direct setter for hosts that drive the index themselves.
	pub fn set_active_index(&mut self, index: usize) -> bool {
		if !self.active.set(index) {
			return false;
		}
		self.transition(Activation::RouteSync);
		true
	}

	/// Re-places the overlays without restarting transitions.
	pub fn handle_resize(&mut self) {
		let Some(position) = self.track() else {
			return;
		};
		if let (Some(m), Some(item)) = (&self.mounted, self.active.current()) {
			m.renderer.place(&position, &item.label);
		}
		self.publish(position);
	}

	/// Drops the resize subscription and wipes any burst in flight.
	pub fn teardown(&mut self) {
		let pending = self.bursts.pending_count();
		if pending > 0 {
			debug!("gooey-nav: teardown cancels {pending} burst timers");
		}
		self.resize = None;
		self.bursts.clear();
	}

	fn transition(&mut self, activation: Activation) {
		if self.refresh().is_none() {
			return;
		}
		if activation == Activation::Click {
			if let Some(m) = &self.mounted {
				self.bursts.burst(&m.renderer.highlight, &self.config);
			}
		}
	}

	/// Recomputes geometry for the active item and renders it.
	fn refresh(&mut self) -> Option<EffectPosition> {
		let position = self.track()?;
		let (m, item) = (self.mounted.as_ref()?, self.active.current()?);
		m.renderer.render(&position, &item.label);
		self.publish(position);
		Some(position)
	}

	fn track(&self) -> Option<EffectPosition> {
		let m = self.mounted.as_ref()?;
		geometry::track(
			Some(&m.container),
			m.items.get(self.active.get()),
			[Some(&m.renderer.highlight), Some(&m.renderer.label)],
		)
	}

	fn publish(&mut self, position: EffectPosition) {
		self.position = Some(position);
		self.revision += 1;
		let index = self.active.get();
		for listener in &mut self.listeners {
			listener(index, &position);
		}
	}
}

impl<H: ElementHandle, S: Scheduler> Drop for NavIndicator<H, S> {
	fn drop(&mut self) {
		self.teardown();
	}
}
