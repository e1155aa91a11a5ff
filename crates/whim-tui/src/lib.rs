//! whim-tui: Terminal UI components
//!
//! A lightweight terminal UI layer built on ratatui and crossterm: the app
//! runner, input action mapping, theme, and the wheel widget.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
