//! UI layer: app shell, panels, and tone palette.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::MoodScreenApp;
