//! Integration tests for the machine object model

mod config_integration;
mod delta_semantics;
mod model_changes;
mod replay_cli;
mod test_utils;
