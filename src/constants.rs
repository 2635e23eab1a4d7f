//! Application constants and configuration

pub const APP_TITLE: &str = "News Story";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default window size, proportioned like a phone screen in portrait.
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 640.0;
