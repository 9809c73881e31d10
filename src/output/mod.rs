// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Callers describe where rendered text goes with an `OutputPlan`; only
//! `deliver` touches stdout or the filesystem.

mod paths;
mod types;
mod writer;

pub use paths::relative_display_path;
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
pub use writer::deliver;
