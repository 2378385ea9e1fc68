// WellScope - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library only.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod model;
pub mod stats;
