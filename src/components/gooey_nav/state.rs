//! Active navigation index and its resolution from the host route.

use super::types::NavItem;

/// Index of the first item whose `href` equals `route`, or `previous` when
/// no item matches.
pub fn resolve(items: &[NavItem], route: &str, previous: usize) -> usize {
	items
		.iter()
		.position(|item| item.href == route)
		.unwrap_or(previous)
}

/// The selected item of one indicator instance.
///
/// The index always lies in `[0, len)` for a non-empty item list. Setters
/// report whether anything changed so callers can skip redundant geometry
/// work.
#[derive(Clone, Debug)]
pub struct ActiveIndex {
	items: Vec<NavItem>,
	index: usize,
}

impl ActiveIndex {
	/// Resolves the initial selection from `route`, defaulting to 0.
	pub fn new(items: Vec<NavItem>, route: &str) -> Self {
		let index = resolve(&items, route, 0);
		Self { items, index }
	}

	pub fn get(&self) -> usize {
		self.index
	}

	pub fn items(&self) -> &[NavItem] {
		&self.items
	}

	pub fn current(&self) -> Option<&NavItem> {
		self.items.get(self.index)
	}

	/// Selects `index`. Out-of-range and unchanged indices are ignored.
	pub fn set(&mut self, index: usize) -> bool {
		if index >= self.items.len() || index == self.index {
			return false;
		}
		self.index = index;
		true
	}

	/// Re-resolves against a new route, retaining the selection on a miss.
	pub fn sync(&mut self, route: &str) -> bool {
		let resolved = resolve(&self.items, route, self.index);
		self.set(resolved)
	}
}
