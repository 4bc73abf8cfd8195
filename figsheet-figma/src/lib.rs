//! # figsheet-figma
//!
//! Blocking fetcher for the design-file components API.
//!
//! Call [`FigmaClient::components`] for the raw list and
//! [`FigmaClient::usage_counts`] for the batched usage lookup; join the two
//! with [`join_usage`].

pub mod client;
pub mod error;

pub use client::{join_usage, FigmaClient};
pub use error::FetchError;
