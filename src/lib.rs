//! House price inference service.
//!
//! Loads a frozen training run from disk (estimator, categorical codebook, feature
//! schema and the known values clients may use), then validates, encodes and prices
//! house records one at a time or in batches over HTTP.

pub mod api;
pub mod artifacts;
pub mod codebook;
pub mod config;
pub mod encoding;
pub mod error;
pub mod estimator;
pub mod record;
pub mod service;
pub mod validation;
