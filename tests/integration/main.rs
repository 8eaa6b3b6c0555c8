//! End-to-end scenarios for the search pipeline.
//!
//! Run with: `cargo test --test integration`

mod search_scenarios;
mod stats_file;
