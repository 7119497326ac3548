//! Live dashboard: snapshot model, text formatting, and the ratatui
//! render task.
pub mod format;
pub mod model;
pub mod render;

#[cfg(test)]
mod tests;
