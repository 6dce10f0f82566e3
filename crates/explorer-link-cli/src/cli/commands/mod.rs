//! CLI command handlers.

mod completions;
mod from_map;
mod link;

pub use completions::run_completions;
pub use from_map::run_from_map;
pub use link::run_link;
