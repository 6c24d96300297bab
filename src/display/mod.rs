// Display module for rendering listings as colored box tables
pub mod colors;
pub mod format;
pub mod layout;
pub mod renderer;

// Re-exports
pub use colors::{ColorAssignment, ColorAttributes, Hue};
pub use format::{format_size, pad};
pub use layout::{Alignment, BoxChars, Column, DisplayMode};
pub use renderer::BoxRenderer;
