//! Metric registry: static descriptors for the tracked biomarkers.
//!
//! This module provides the built-in reference data (labels, units, ranges,
//! goals, educational content) for each metric.

use crate::{MetricDescriptor, MetricKey, Result};
use once_cell::sync::Lazy;

/// Cached default registry - built once and reused across all operations
static DEFAULT_REGISTRY: Lazy<MetricRegistry> = Lazy::new(build_default_registry);

/// Get a reference to the cached default registry
pub fn registry() -> &'static MetricRegistry {
    &DEFAULT_REGISTRY
}

/// The complete registry of metric descriptors
#[derive(Clone, Debug)]
pub struct MetricRegistry {
    vitamin_d: MetricDescriptor,
    calcium: MetricDescriptor,
    thiamine: MetricDescriptor,
}

impl MetricRegistry {
    /// Look up the descriptor for a metric key
    pub fn describe(&self, key: MetricKey) -> &MetricDescriptor {
        match key {
            MetricKey::VitaminD => &self.vitamin_d,
            MetricKey::Calcium => &self.calcium,
            MetricKey::Thiamine => &self.thiamine,
        }
    }

    /// Look up a descriptor from an untrusted key string
    ///
    /// Fails with `UnknownMetric` for anything outside the tracked set.
    pub fn describe_key(&self, key: &str) -> Result<&MetricDescriptor> {
        Ok(self.describe(key.parse()?))
    }

    /// Validate the registry for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for &key in MetricKey::all() {
            let descriptor = self.describe(key);

            if descriptor.label.is_empty() {
                errors.push(format!("Metric '{}' has empty label", key.as_str()));
            }
            if descriptor.unit.is_empty() {
                errors.push(format!("Metric '{}' has empty unit", key.as_str()));
            }
            if descriptor.low > descriptor.high {
                errors.push(format!(
                    "Metric '{}': low bound {} > high bound {}",
                    key.as_str(),
                    descriptor.low,
                    descriptor.high
                ));
            }
            if descriptor.goal < descriptor.low || descriptor.goal > descriptor.high {
                errors.push(format!(
                    "Metric '{}': goal {} outside reference range {}-{}",
                    key.as_str(),
                    descriptor.goal,
                    descriptor.low,
                    descriptor.high
                ));
            }
        }

        errors
    }
}

/// Builds the default registry with built-in metric descriptors
///
/// **Note**: For production use, prefer `registry()` which returns a cached
/// reference. This function is retained for testing and custom registries.
pub fn build_default_registry() -> MetricRegistry {
    MetricRegistry {
        vitamin_d: MetricDescriptor {
            label: "Vitamin D".into(),
            unit: "ng/mL".into(),
            low: 30.0,
            high: 80.0,
            goal: 50.0,
            description: "Vitamin D supports calcium absorption, bone health, \
                          and immune function. Serum levels respond slowly to \
                          changes in supplementation or sun exposure."
                .into(),
            tips: vec![
                "Take D3 with a meal containing fat for better absorption".into(),
                "Midday sun exposure raises levels naturally".into(),
                "Retest 8-12 weeks after changing your dose".into(),
            ],
        },
        calcium: MetricDescriptor {
            label: "Calcium".into(),
            unit: "mg/dL".into(),
            low: 8.5,
            high: 10.2,
            goal: 9.5,
            description: "Serum calcium is tightly regulated by the body. \
                          Readings outside the range usually reflect regulation \
                          issues rather than diet alone."
                .into(),
            tips: vec![
                "Pair calcium-rich foods with vitamin D".into(),
                "Spread intake across the day; absorption drops above 500 mg at once".into(),
                "Discuss persistent out-of-range readings with your doctor".into(),
            ],
        },
        thiamine: MetricDescriptor {
            label: "B1".into(),
            unit: "nmol/L".into(),
            low: 70.0,
            high: 180.0,
            goal: 120.0,
            description: "Thiamine (vitamin B1) is a cofactor in carbohydrate \
                          metabolism. The body stores very little of it, so \
                          steady intake matters."
                .into(),
            tips: vec![
                "Whole grains, pork, and legumes are strong sources".into(),
                "Heavy alcohol use depletes thiamine".into(),
                "A B-complex supplement covers day-to-day variation".into(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = build_default_registry();
        assert_eq!(registry.describe(MetricKey::VitaminD).unit, "ng/mL");
        assert_eq!(registry.describe(MetricKey::Calcium).unit, "mg/dL");
        assert_eq!(registry.describe(MetricKey::Thiamine).unit, "nmol/L");
    }

    #[test]
    fn test_vitamin_d_reference_range() {
        let descriptor = registry().describe(MetricKey::VitaminD);
        assert_eq!(descriptor.low, 30.0);
        assert_eq!(descriptor.high, 80.0);
        assert_eq!(descriptor.goal, 50.0);
    }

    #[test]
    fn test_describe_key_accepts_tracked_set() {
        let registry = registry();
        assert_eq!(registry.describe_key("vitaminD").unwrap().label, "Vitamin D");
        assert_eq!(registry.describe_key("calcium").unwrap().label, "Calcium");
        assert_eq!(registry.describe_key("thiamine").unwrap().label, "B1");
    }

    #[test]
    fn test_describe_key_rejects_unknown() {
        let result = registry().describe_key("magnesium");
        match result {
            Err(crate::Error::UnknownMetric { key }) => assert_eq!(key, "magnesium"),
            other => panic!("Expected UnknownMetric, got {:?}", other.map(|d| &d.label)),
        }
    }

    #[test]
    fn test_default_registry_validates() {
        let errors = build_default_registry().validate();
        assert!(
            errors.is_empty(),
            "Default registry has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_metric_has_educational_content() {
        let registry = registry();
        for &key in MetricKey::all() {
            let descriptor = registry.describe(key);
            assert!(!descriptor.description.is_empty());
            assert!(!descriptor.tips.is_empty());
        }
    }
}
