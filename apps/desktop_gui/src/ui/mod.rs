//! UI layer: app shell, views, overlays, and shared colours.

pub mod app;
mod landing;
mod overlays;
mod student;
mod teacher;
mod theme;

pub use app::KioskApp;
