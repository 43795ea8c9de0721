//! TUI entrypoint and layout.
pub mod app;
pub mod components;
pub mod ftui_adapter;

pub use app::{FolioApp, FolioMsg, InlineTuiConfig, TuiOptions, run_tui};
