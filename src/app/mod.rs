//! Application lifecycle and platform integration.
//!
//! - `startup`: the run-once sequencing on application ready
//! - `tray`: system tray setup and menu handling
//! - `events`: window event handlers

pub mod events;
pub mod startup;
pub mod tray;

pub use tray::TrayState;
