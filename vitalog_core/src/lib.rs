#![forbid(unsafe_code)]

//! Core analytics for the Vitalog lab-reading dashboard.
//!
//! This crate provides:
//! - Domain types (readings, metric keys, descriptors, statuses)
//! - The metric registry and bundled reading dataset
//! - Derived values (classification, deltas, per-metric summaries)
//! - Range filtering, stable sorting, and the CSV export codec
//!
//! Everything here is synchronous and in-memory; presentation layers
//! consume these APIs as immutable snapshots.

pub mod types;
pub mod error;
pub mod registry;
pub mod dataset;
pub mod store;
pub mod classify;
pub mod delta;
pub mod filter;
pub mod sort;
pub mod export;
pub mod summary;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use registry::{build_default_registry, registry, MetricRegistry};
pub use dataset::{build_default_dataset, default_store};
pub use store::ReadingStore;
pub use classify::classify;
pub use delta::delta;
pub use filter::{filter_since, HistoryRange};
pub use sort::{sort_readings, SortDirection, SortField};
pub use export::{encode, format_display_date, format_tenths};
pub use summary::{overview, summarize, MetricSummary};
pub use config::Config;
