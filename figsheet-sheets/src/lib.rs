//! # figsheet-sheets
//!
//! Spreadsheet publisher: service-account token exchange plus the three
//! values-API calls the pipeline needs (metadata probe, range clear, range
//! write).

pub mod auth;
pub mod client;
pub mod error;

pub use auth::{AccessToken, ServiceAccount};
pub use client::{SheetsClient, ValueInputOption};
pub use error::PublishError;
