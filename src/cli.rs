//! CLI domain: parse, route, replay and presentation.
//!
//! The replay commands stand in for a controller connection: they feed recorded
//! delta documents into a fresh model in order.

mod parse;
mod presentation;
mod replay;
mod route;

pub use parse::{Cli, Commands, OutputMode};
pub use presentation::{format_failures, format_summary};
pub use replay::{replay_file, replay_lines, ReplayFailure, ReplayStats};
pub use route::RunContext;
