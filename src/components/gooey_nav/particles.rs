//! Particle bursts fired when the active item changes by click.
//!
//! A burst is a fixed-size batch of particles. Each one flies from a point on
//! an outer ring to a point on an inner ring and removes itself after its own
//! jittered lifetime. All scheduling is fire-and-forget; the session tracks
//! what is alive and pending so a new burst can wipe the previous one.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::config::BurstConfig;
use super::geometry::position_at;
use super::handle::{ElementHandle, Scheduler, TimerId};
use super::noise::NoiseSource;
use super::theme::ColorToken;

/// Delay between staging a burst and attaching its particles (ms).
pub const INSERT_DELAY_MS: f64 = 30.0;

/// Jitter applied to each particle's end radius (full amplitude, px).
const END_RADIUS_JITTER: f64 = 7.0;

/// Class toggled on the anchor to start particle transitions.
pub const ACTIVE_CLASS: &str = "active";

/// Trajectory, timing and look of one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleDescriptor {
	pub start: (f64, f64),
	pub end: (f64, f64),
	pub lifetime_ms: f64,
	pub scale: f64,
	pub color: ColorToken,
	pub rotation_deg: f64,
}

impl ParticleDescriptor {
	/// Custom properties consumed by the particle keyframes.
	pub fn css_properties(&self) -> Vec<(&'static str, String)> {
		vec![
			("--start-x", format!("{}px", self.start.0)),
			("--start-y", format!("{}px", self.start.1)),
			("--end-x", format!("{}px", self.end.0)),
			("--end-y", format!("{}px", self.end.1)),
			("--time", format!("{}ms", self.lifetime_ms)),
			("--scale", format!("{}", self.scale)),
			("--color", self.color.to_css()),
			("--rotate", format!("{}deg", self.rotation_deg)),
		]
	}
}

/// Spin for one particle: the sample keeps its sign, is pushed away from zero
/// by `particle_r / 20` and amplified tenfold.
fn rotation(sample: f64, particle_r: f64) -> f64 {
	let offset = particle_r / 20.0;
	if sample > 0.0 {
		(sample + offset) * 10.0
	} else {
		(sample - offset) * 10.0
	}
}

/// Descriptor for particle `index` of a burst.
pub fn describe(index: usize, config: &BurstConfig, noise: &mut dyn NoiseSource) -> ParticleDescriptor {
	let count = config.particle_count;
	let point = count.saturating_sub(index);
	let (start_r, end_r) = config.particle_distances;

	let lifetime_ms = config.animation_time * 2.0 + noise.noise(config.time_variance * 2.0);
	let spin = noise.noise(config.particle_r / 10.0);
	let start = position_at(start_r, point, count, noise);
	let end_radius = end_r + noise.noise(END_RADIUS_JITTER);
	let end = position_at(end_radius, point, count, noise);
	let scale = 1.0 + noise.noise(0.2);
	let color = if config.colors.is_empty() {
		ColorToken::default()
	} else {
		config.colors[noise.pick(config.colors.len())]
	};

	ParticleDescriptor {
		start,
		end,
		lifetime_ms,
		scale,
		color,
		rotation_deg: rotation(spin, config.particle_r),
	}
}

/// The complete, ordered descriptor batch for one burst.
pub fn describe_burst(config: &BurstConfig, noise: &mut dyn NoiseSource) -> Vec<ParticleDescriptor> {
	(0..config.particle_count)
		.map(|i| describe(i, config, noise))
		.collect()
}

/// Live particles and pending callbacks of the current burst.
struct BurstSession<H> {
	/// Bumped per burst; callbacks from older bursts see a mismatch and bail.
	generation: u64,
	next_key: u64,
	next_ticket: u64,
	live: Vec<(u64, H)>,
	/// Timers that have not fired yet, tagged with the ticket their callback
	/// settles when it runs.
	pending: Vec<(u64, TimerId)>,
}

impl<H> Default for BurstSession<H> {
	fn default() -> Self {
		Self {
			generation: 0,
			next_key: 0,
			next_ticket: 0,
			live: Vec::new(),
			pending: Vec::new(),
		}
	}
}

/// Stages particle bursts on an anchor element.
pub struct ParticleBurstScheduler<H: ElementHandle, S: Scheduler> {
	scheduler: S,
	noise: Box<dyn NoiseSource>,
	session: Rc<RefCell<BurstSession<H>>>,
	anchor: Option<H>,
}

impl<H> BurstSession<H> {
	fn ticket(&mut self) -> u64 {
		let ticket = self.next_ticket;
		self.next_ticket += 1;
		ticket
	}

	fn track_timer(&mut self, ticket: u64, timer: Option<TimerId>) {
		if let Some(timer) = timer {
			self.pending.push((ticket, timer));
		}
	}

	fn settle(&mut self, ticket: u64) {
		self.pending.retain(|(t, _)| *t != ticket);
	}
}

impl<H: ElementHandle, S: Scheduler> ParticleBurstScheduler<H, S> {
	pub fn new(scheduler: S, noise: Box<dyn NoiseSource>) -> Self {
		Self {
			scheduler,
			noise,
			session: Rc::new(RefCell::new(BurstSession::default())),
			anchor: None,
		}
	}

	/// Number of particles currently attached.
	pub fn live_count(&self) -> usize {
		self.session.borrow().live.len()
	}

	/// Number of callbacks of the current burst that may still fire.
	pub fn pending_count(&self) -> usize {
		self.session.borrow().pending.len()
	}

	/// Removes every live particle and cancels the current burst's timers.
	pub fn clear(&mut self) {
		let (live, pending) = {
			let mut session = self.session.borrow_mut();
			session.generation += 1;
			(
				std::mem::take(&mut session.live),
				std::mem::take(&mut session.pending),
			)
		};
		for (_, timer) in pending {
			self.scheduler.cancel(timer);
		}
		if let Some(anchor) = &self.anchor {
			for (_, particle) in &live {
				anchor.remove_child(particle);
			}
		}
	}

	/// Wipes any previous burst, then stages a new one on `anchor`.
	pub fn burst(&mut self, anchor: &H, config: &BurstConfig) {
		self.clear();
		self.anchor = Some(anchor.clone());

		anchor.set_style_property("--time", &format!("{}ms", config.bubble_time()));
		let descriptors = describe_burst(config, self.noise.as_mut());
		debug!("gooey-nav: staging burst of {} particles", descriptors.len());

		let generation = self.session.borrow().generation;
		for descriptor in descriptors {
			anchor.remove_class(ACTIVE_CLASS);
			let ticket = self.session.borrow_mut().ticket();
			let (session, scheduler, anchor) =
				(self.session.clone(), self.scheduler.clone(), anchor.clone());
			let timer = self.scheduler.set_timeout(
				INSERT_DELAY_MS,
				Box::new(move || {
					session.borrow_mut().settle(ticket);
					materialize(&session, &scheduler, &anchor, descriptor, generation);
				}),
			);
			self.session.borrow_mut().track_timer(ticket, timer);
		}
	}
}

impl<H: ElementHandle, S: Scheduler> Drop for ParticleBurstScheduler<H, S> {
	fn drop(&mut self) {
		self.clear();
	}
}

/// Attaches one particle, arms the anchor on the next frame, and schedules
/// the particle's removal.
fn materialize<H: ElementHandle, S: Scheduler>(
	session: &Rc<RefCell<BurstSession<H>>>,
	scheduler: &S,
	anchor: &H,
	descriptor: ParticleDescriptor,
	generation: u64,
) {
	if session.borrow().generation != generation {
		return;
	}
	let Some(particle) = anchor.spawn_particle(&descriptor) else {
		return;
	};
	anchor.attach_child(&particle);
	let (key, frame_ticket, reap_ticket) = {
		let mut s = session.borrow_mut();
		let key = s.next_key;
		s.next_key += 1;
		s.live.push((key, particle));
		(key, s.ticket(), s.ticket())
	};

	let (frame_session, frame_anchor) = (session.clone(), anchor.clone());
	let frame = scheduler.request_frame(Box::new(move || {
		frame_session.borrow_mut().settle(frame_ticket);
		frame_anchor.add_class(ACTIVE_CLASS);
	}));

	let (reap_session, reap_anchor) = (session.clone(), anchor.clone());
	let reap = scheduler.set_timeout(
		descriptor.lifetime_ms.max(0.0),
		Box::new(move || {
			reap_session.borrow_mut().settle(reap_ticket);
			reap_particle(&reap_session, &reap_anchor, key);
		}),
	);

	let mut s = session.borrow_mut();
	s.track_timer(frame_ticket, frame);
	s.track_timer(reap_ticket, reap);
}

/// Detaches particle `key` if it is still alive. Repeat calls do nothing.
fn reap_particle<H: ElementHandle>(session: &Rc<RefCell<BurstSession<H>>>, anchor: &H, key: u64) {
	let particle = {
		let mut s = session.borrow_mut();
		let Some(pos) = s.live.iter().position(|(k, _)| *k == key) else {
			return;
		};
		s.live.swap_remove(pos).1
	};
	anchor.remove_child(&particle);
}
