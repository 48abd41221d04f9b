//! Presentation binder module
//!
//! Turns the loaded code tables and translator into ordered display
//! mappings, tracks the user's selections and renders the result text.

pub mod formatter;
pub mod mapping;
pub mod session;

pub use mapping::DisplayMapping;
pub use session::{Binder, Rendered, SelectionState, NO_TRANSLATION};
