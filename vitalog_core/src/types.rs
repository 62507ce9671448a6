//! Core domain types for the Vitalog dashboard.
//!
//! This module defines the fundamental types used throughout the system:
//! - Readings (one dated lab-test event with three biomarker values)
//! - Metric keys and their static descriptors
//! - Status classification results

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Metric Keys
// ============================================================================

/// Identifier for one of the tracked biomarkers
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    VitaminD,
    Calcium,
    Thiamine,
}

impl MetricKey {
    /// All tracked metrics, in registry order
    pub fn all() -> &'static [MetricKey] {
        &[MetricKey::VitaminD, MetricKey::Calcium, MetricKey::Thiamine]
    }

    /// Canonical key string as used by callers and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::VitaminD => "vitaminD",
            MetricKey::Calcium => "calcium",
            MetricKey::Thiamine => "thiamine",
        }
    }

    /// Read this metric's measurement out of a reading
    ///
    /// The field is resolved here, once, by enum tag; callers never index
    /// readings by runtime field name.
    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            MetricKey::VitaminD => reading.vitamin_d,
            MetricKey::Calcium => reading.calcium,
            MetricKey::Thiamine => reading.thiamine,
        }
    }
}

impl std::str::FromStr for MetricKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vitaminD" | "vitamin_d" => Ok(MetricKey::VitaminD),
            "calcium" => Ok(MetricKey::Calcium),
            "thiamine" => Ok(MetricKey::Thiamine),
            other => Err(Error::UnknownMetric {
                key: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Readings
// ============================================================================

/// One lab test event: three biomarker measurements on a calendar date
///
/// Dates are unique within a store. `notes` is an explicit optional value;
/// absent means "no note", which is distinct from an empty note everywhere
/// except inside the sort engine's defined comparison policy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub date: NaiveDate,
    pub vitamin_d: f64,
    pub calcium: f64,
    pub thiamine: f64,
    pub notes: Option<String>,
}

// ============================================================================
// Classification
// ============================================================================

/// Qualitative state of a measurement against its reference range
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Low,
    InRange,
    High,
}

impl Status {
    /// Display label for cards and tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Low => "Low",
            Status::InRange => "In Range",
            Status::High => "High",
        }
    }
}

// ============================================================================
// Metric Descriptors
// ============================================================================

/// Static reference data for one tracked biomarker
///
/// The descriptor is the single source of truth for display strings and the
/// reference range; the CSV export embeds `unit` from here at encode time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub label: String,
    pub unit: String,
    /// Inclusive lower bound of the reference range
    pub low: f64,
    /// Inclusive upper bound of the reference range
    pub high: f64,
    /// Target value used for progress comparisons
    pub goal: f64,
    pub description: String,
    pub tips: Vec<String>,
}
