//! Application services: the resolution-and-instantiation pipeline.

pub mod editor;
pub mod instantiate;
pub mod scaffold;
pub mod validate;

pub use scaffold::{ScaffoldOutcome, ScaffoldService};
