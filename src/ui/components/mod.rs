pub mod help_strip;
pub mod pills;
pub mod theme;
