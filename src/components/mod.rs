//! UI components.

pub mod gooey_nav;
