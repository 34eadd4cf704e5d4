//! Controller layer: egui input translation and kiosk startup wiring.

pub mod input;
pub mod startup;
