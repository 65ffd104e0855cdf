use super::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A free-form note attached to a snapshot: either prose or a small
/// key/value table (the data files use the latter for normalization rules).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Note {
    Text(String),
    Table(BTreeMap<String, String>),
}

/// One analytical model's inputs and outputs at a point in time. Records are
/// authored offline, loaded once at startup, and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub id: String,
    pub as_of: String,
    pub title: String,
    pub probability_pct: f64,
    pub z: f64,
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
    #[serde(default)]
    pub contributions: BTreeMap<String, f64>,
    #[serde(default)]
    pub notes: BTreeMap<String, Note>,
}

impl SnapshotRecord {
    /// Check the integrity rules every registered record must satisfy:
    /// finite numerics everywhere and a probability within 0-100.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if !(0.0..=100.0).contains(&self.probability_pct) {
            return Err(RegistryError::ProbabilityOutOfRange(
                self.id.clone(),
                self.probability_pct,
            ));
        }
        if !self.z.is_finite() {
            return Err(RegistryError::NonFiniteValue(
                self.id.clone(),
                String::from("z"),
            ));
        }
        for (name, value) in self.features.iter().chain(self.contributions.iter()) {
            if !value.is_finite() {
                return Err(RegistryError::NonFiniteValue(self.id.clone(), name.clone()));
            }
        }
        Ok(())
    }

    /// Sum of all contribution terms, intercept included. By convention this
    /// tracks `z`, though authored data is not required to match it exactly.
    pub fn contribution_total(&self) -> f64 {
        self.contributions.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "sample",
        "as_of": "2025-06-01",
        "title": "Two-input sample",
        "probability_pct": 30.5,
        "z": -0.82268,
        "features": {"YieldSpread": -0.04, "SahmGap": 0.167},
        "contributions": {"YieldSpread": 0.12672, "SahmGap": 0.3006, "Intercept": -1.25},
        "notes": {
            "Source": "Hand-authored",
            "Normalization": {"Claims_YoY": "/10"}
        }
    }"#;

    fn sample() -> SnapshotRecord {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn deserializes_both_note_shapes() {
        let record = sample();
        assert_eq!(record.id, "sample");
        assert!(matches!(record.notes.get("Source"), Some(Note::Text(_))));
        assert!(matches!(
            record.notes.get("Normalization"),
            Some(Note::Table(_))
        ));
    }

    #[test]
    fn valid_record_passes_the_integrity_check() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut record = sample();
        record.features.insert(String::from("Broken"), f64::NAN);
        assert!(matches!(
            record.validate(),
            Err(RegistryError::NonFiniteValue(_, _))
        ));

        let mut record = sample();
        record.contributions.insert(String::from("Broken"), f64::INFINITY);
        assert!(matches!(
            record.validate(),
            Err(RegistryError::NonFiniteValue(_, _))
        ));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let mut record = sample();
        record.probability_pct = 130.0;
        assert!(matches!(
            record.validate(),
            Err(RegistryError::ProbabilityOutOfRange(_, _))
        ));
    }

    #[test]
    fn contribution_total_tracks_z() {
        let record = sample();
        assert!((record.contribution_total() - record.z).abs() < 1e-9);
    }
}
