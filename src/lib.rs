//! Priority scoring for pain-point clusters.
//!
//! Upstream stages cluster user signals and enrich them with an LLM; this crate
//! turns each cluster's derived signals into a comparable priority score and
//! ranks whole batches for triage.

pub mod config;
pub mod error;
pub mod ranking;
pub mod scoring;
pub mod telemetry;
