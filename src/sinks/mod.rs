//! Renderings of a completed run: terminal, JSON, and Markdown.
mod export;
mod format;
mod json;
mod markdown;
mod terminal;


pub use export::{ExportOutcome, export_report};
pub use json::{json_path, save_report_json};
pub use markdown::{markdown_path, save_report_markdown, to_markdown};
pub use terminal::{print_report, render_terminal};
