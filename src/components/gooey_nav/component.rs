//! Leptos component wrapping the navigation indicator engine.
//!
//! The component renders the link list plus two overlay spans (the gooey
//! highlight and its label clone). Once the elements are mounted it hands them
//! to a [`NavIndicator`] and subscribes it to container resizes. Clicks go to
//! the engine first and then to the host's `on_navigate`; route changes from
//! the host go through passive re-resolution.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Style;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::config::BurstConfig;
use super::dom::{BrowserResizeNotifier, BrowserScheduler, DomElement};
use super::engine::{IndicatorHandles, NavIndicator};
use super::noise::SeededNoise;
use super::style::{FILTER_ID, GOOEY_NAV_CSS};
use super::theme::TokenPalette;
use super::types::NavItem;

type DomIndicator = NavIndicator<DomElement, BrowserScheduler>;

/// Blur + alpha threshold + composite: the "gooey" merge of pill and particles.
fn filter_markup() -> String {
	format!(
		r#"<defs><filter id="{FILTER_ID}"><feGaussianBlur in="SourceGraphic" stdDeviation="10" result="blur" /><feColorMatrix in="blur" mode="matrix" values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 20 -7" result="goo" /><feComposite in="SourceGraphic" in2="goo" operator="atop" /></filter></defs>"#
	)
}

/// Navigation bar with a morphing highlight and click particle bursts.
///
/// `route` is the host's current route identifier; when it changes the
/// highlight follows without a burst. Pass `active_index` to observe (or
/// share) the selected index, and `on_navigate` to route clicks through the
/// host instead of letting the browser follow the link.
#[component]
pub fn GooeyNav(
	items: Vec<NavItem>,
	#[prop(into)] route: Signal<String>,
	#[prop(optional)] config: BurstConfig,
	#[prop(optional)] palette: TokenPalette,
	#[prop(optional)] active_index: Option<RwSignal<usize>>,
	#[prop(optional, into)] on_navigate: Option<Callback<String>>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let list_ref = NodeRef::<leptos::html::Ul>::new();
	let highlight_ref = NodeRef::<leptos::html::Span>::new();
	let label_ref = NodeRef::<leptos::html::Span>::new();

	let engine: Rc<RefCell<DomIndicator>> = Rc::new(RefCell::new(NavIndicator::new(
		items.clone(),
		&route.get_untracked(),
		config,
		BrowserScheduler::default(),
		Box::new(SeededNoise::new(js_sys::Date::now() as u64)),
	)));
	let active = active_index.unwrap_or_else(|| RwSignal::new(0));
	active.set(engine.borrow().active_index());

	let engine_mount = engine.clone();
	Effect::new(move |_| {
		let (Some(container), Some(list), Some(highlight), Some(label)) = (
			container_ref.get(),
			list_ref.get(),
			highlight_ref.get(),
			label_ref.get(),
		) else {
			return;
		};
		if engine_mount.borrow().is_mounted() {
			return;
		}
		let children = list.children();
		let item_elements = (0..children.length())
			.filter_map(|i| children.item(i))
			.filter_map(|el| el.dyn_into::<HtmlElement>().ok())
			.map(DomElement)
			.collect();
		let container: HtmlElement = container.into();
		let (highlight, label): (HtmlElement, HtmlElement) = (highlight.into(), label.into());
		engine_mount.borrow_mut().attach(IndicatorHandles {
			container: DomElement(container),
			items: item_elements,
			highlight: DomElement(highlight),
			label: DomElement(label),
		});
		NavIndicator::observe_resizes(&engine_mount, &BrowserResizeNotifier);
	});

	let engine_route = engine.clone();
	Effect::new(move |_| {
		let current = route.get();
		let mut nav = engine_route.borrow_mut();
		if nav.sync_route(&current) {
			active.set(nav.active_index());
		}
	});

	let links = items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			let engine_click = engine.clone();
			let href = item.href.clone();
			let on_click = move |ev: MouseEvent| {
				if on_navigate.is_some() {
					ev.prevent_default();
				}
				if engine_click.borrow_mut().click(index) {
					active.set(index);
				}
				if let Some(navigate) = on_navigate {
					navigate.run(href.clone());
				}
			};
			view! {
				<li class:active=move || active.get() == index>
					<a href=item.href on:click=on_click>
						{item.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<Style>{GOOEY_NAV_CSS}</Style>
		<div class="gooey-nav-container" node_ref=container_ref style=palette.declarations()>
			<nav>
				<ul node_ref=list_ref>{links}</ul>
			</nav>
			<span class="effect filter" node_ref=highlight_ref></span>
			<span class="effect text" node_ref=label_ref></span>
			<svg width="0" height="0" inner_html=filter_markup()></svg>
		</div>
	}
}
