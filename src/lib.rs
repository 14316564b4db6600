//! Scrape AI coverage from a fixed set of news outlets.
//!
//! The pipeline is split into small layers:
//!
//! - [`fetcher`]: pooled HTTP client with timeouts
//! - [`extract`]: link and body extraction over parsed documents
//! - [`scrapers`]: per-source configuration and the generic scrape routine
//! - [`aggregator`]: fail-fast fan-out across every source
//! - [`routes`]: the axum router exposing it all as JSON
//! - [`cli`]: flags and environment configuration for the binary

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod routes;
pub mod scrapers;
pub mod utils;
