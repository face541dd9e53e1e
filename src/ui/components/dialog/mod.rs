//! Dialog components for TUI

mod base;
mod image_prompt;

pub use base::wrap_text;
pub use image_prompt::render_image_prompt;
