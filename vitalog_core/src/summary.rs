//! Per-metric insight assembly for dashboard cards.
//!
//! A summary combines the store's two most recent readings with the metric
//! registry: latest value, status classification, change since the prior
//! check, and distance to goal.

use crate::{classify, delta, registry, MetricKey, ReadingStore, Result, Status};

/// Derived insight for one metric, ready for a card to render
#[derive(Clone, Debug)]
pub struct MetricSummary {
    pub key: MetricKey,
    pub label: String,
    pub unit: String,
    pub latest: f64,
    pub status: Status,
    /// Signed change since the previous reading, unrounded
    pub delta: f64,
    pub goal: f64,
    /// Signed distance from the latest value to the goal
    pub goal_gap: f64,
}

/// Summarize one metric from the store's two most recent readings
///
/// Fails with `InsufficientData` when the store holds fewer than two
/// readings; the presentation layer decides what placeholder to show.
pub fn summarize(store: &ReadingStore, key: MetricKey) -> Result<MetricSummary> {
    let current = store.latest()?;
    let previous = store.previous()?;
    let descriptor = registry().describe(key);

    let latest = key.value(current);

    Ok(MetricSummary {
        key,
        label: descriptor.label.clone(),
        unit: descriptor.unit.clone(),
        latest,
        status: classify(key, latest),
        delta: delta(key, current, previous),
        goal: descriptor.goal,
        goal_gap: descriptor.goal - latest,
    })
}

/// One summary per tracked metric, in registry order
pub fn overview(store: &ReadingStore) -> Result<Vec<MetricSummary>> {
    MetricKey::all()
        .iter()
        .map(|&key| summarize(store, key))
        .collect()
}
