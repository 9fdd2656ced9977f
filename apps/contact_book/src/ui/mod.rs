//! Terminal presentation surface: renders page state and turns input lines into page events.

pub mod prompt;
pub mod render;

pub use prompt::{parse_line, run_interactive, PromptInput};
pub use render::render_page;
