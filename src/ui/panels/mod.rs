// WellScope - ui/panels/mod.rs

pub mod alert;
pub mod controls;
pub mod interpretation;
pub mod plot;
pub mod stats;
