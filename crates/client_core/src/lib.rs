//! Orchestration core of the attendance kiosk: view routing, overlays,
//! simulated recognition, timed demo prompts, and the typed backend client.

pub mod api;
pub mod camera;
pub mod chat;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod decision;
pub mod demo;
pub mod error;
pub mod events;
pub mod gesture;
pub mod keyboard;
pub mod modals;
pub mod notify;
pub mod timers;
mod uploader;

pub use api::{AttendanceApi, HttpAttendanceApi};
pub use camera::{CameraSource, FrameGrabber, StillFrameCamera, SyntheticCamera};
pub use config::{load_settings, KioskSettings};
pub use controller::{CameraStatus, KioskController, KioskDeps};
pub use decision::{DecisionSource, ScriptedDecisions, ThreadRngDecisions};
pub use error::{CameraError, ClientError};
pub use gesture::{GestureExtension, LoggingExtension};
pub use keyboard::{FocusTarget, KeyPress};
