//! Thin FrankenTUI adapter.
//!
//! Centralizes the ftui imports the terminal page uses.

pub use ftui::core::geometry::Rect;
pub use ftui::layout::{Constraint, Flex};
pub use ftui::render::budget::FrameBudgetConfig;
pub use ftui::widgets::Widget;
pub use ftui::{App, Cmd, Event, Frame, KeyCode, KeyEvent, Model, Modifiers, Style, UiAnchor};
