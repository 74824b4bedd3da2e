//! gooey-nav: Morphing navigation indicator for the gallery front-end.
//!
//! This crate provides a WASM navigation bar whose highlight tracks the active
//! route and releases a particle burst when an item is clicked.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::gooey_nav::{
	BurstConfig, ConfigError, GooeyNav, GooeyNavConfig, NavIndicator, NavItem,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("gooey-nav: logging initialized");
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("nav-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load navigation config from a script element with id="nav-config".
/// Expected format: JSON with { items: [{ label, href }], ...burst options }.
/// Falls back to the built-in Home/About/Contact bar.
fn load_nav_config() -> GooeyNavConfig {
	let Some(json_text) = config_script_text() else {
		return GooeyNavConfig::default();
	};

	match GooeyNavConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"gooey-nav: loaded {} items, {} particles per burst",
				config.items.len(),
				config.burst.particle_count
			);
			config
		}
		Err(e) => {
			warn!("gooey-nav: using default navigation, {}", e);
			GooeyNavConfig::default()
		}
	}
}

fn current_path() -> String {
	web_sys::window()
		.and_then(|w| w.location().pathname().ok())
		.unwrap_or_else(|| "/".to_string())
}

/// Main application component.
/// Keeps the route in sync with browser history and renders the navigation.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_nav_config();
	let route = RwSignal::new(current_path());
	let active = RwSignal::new(0usize);

	// Back/forward buttons change the route without a click.
	let on_popstate = Closure::<dyn FnMut()>::new(move || route.set(current_path()));
	if let Some(window) = web_sys::window() {
		let _ = window
			.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
	}
	on_popstate.forget();

	let navigate = Callback::new(move |href: String| {
		if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
			let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
		}
		route.set(href);
	});

	let labels: Vec<String> = config.items.iter().map(|i| i.label.clone()).collect();
	let current_label = move || labels.get(active.get()).cloned().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Gallery" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="top-nav">
			<GooeyNav
				items=config.items
				route=route
				config=config.burst
				active_index=active
				on_navigate=navigate
			/>
		</header>
		<main>
			<h1 class="section-title">{current_label}</h1>
		</main>
	}
}
