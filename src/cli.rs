//! CLI domain: parse, route, output, and presentation only.
//! Single route table dispatches to the fingerprinting library.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_capture_json, format_capture_text, format_diff_json, format_diff_summary,
    format_diff_text, format_poll_outcome,
};
pub use route::RunContext;
