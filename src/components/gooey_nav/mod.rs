//! Morphing navigation indicator.
//!
//! A navigation bar whose highlight follows the active item:
//! - Active index resolved from the host route, retained on unknown routes
//! - Overlay geometry tracked relative to the container, including resizes
//! - Particle bursts with jittered polar trajectories on click activation
//! - Transition restarts forced through a layout flush
//!
//! The engine ([`NavIndicator`]) is written against the capabilities in
//! [`handle`], so it runs anywhere an element can be measured and a callback
//! can be scheduled. [`GooeyNav`] binds it to the DOM.
//!
//! # Example
//!
//! ```ignore
//! use gooey_nav::{GooeyNav, NavItem};
//!
//! let items = vec![NavItem::new("Home", "/"), NavItem::new("About", "/about")];
//! let route = RwSignal::new("/".to_string());
//!
//! view! { <GooeyNav items=items route=route /> }
//! ```

mod component;
pub mod config;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod handle;
pub mod noise;
pub mod particles;
mod render;
pub mod state;
mod style;
pub mod theme;
mod types;

#[cfg(test)]
mod testing;

pub use component::GooeyNav;
pub use config::{BurstConfig, ConfigError, GooeyNavConfig};
pub use engine::{IndicatorHandles, NavIndicator};
pub use render::IndicatorEffectRenderer;
pub use theme::{ColorToken, TokenPalette};
pub use types::{EffectPosition, NavItem, Rect};
