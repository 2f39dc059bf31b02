use serde::{Deserialize, Serialize};
use std::fmt;

/// The four-axis mood vector that drives every derived scene parameter.
///
/// Ranges are documented, not enforced: the generator assumes a request
/// has already been checked with [`GenerationRequest::validate`].
///
/// [`GenerationRequest::validate`]: super::request::GenerationRequest::validate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mood {
    /// Unpleasant (-1) to pleasant (1). Drives palette brightness.
    pub valence: f64,
    /// Calm (-1) to excited (1). Drives time of day and layout scale.
    pub arousal: f64,
    /// Cold (0) to warm (1). Drives hue and bloom.
    pub warmth: f64,
    /// Present (0) to wistful (1). Drives desaturation and orb count.
    pub nostalgia: f64,
}

/// A mood field that fell outside its documented range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

impl Mood {
    pub const VALENCE_RANGE: (f64, f64) = (-1.0, 1.0);
    pub const AROUSAL_RANGE: (f64, f64) = (-1.0, 1.0);
    pub const WARMTH_RANGE: (f64, f64) = (0.0, 1.0);
    pub const NOSTALGIA_RANGE: (f64, f64) = (0.0, 1.0);

    pub fn new(valence: f64, arousal: f64, warmth: f64, nostalgia: f64) -> Self {
        Self {
            valence,
            arousal,
            warmth,
            nostalgia,
        }
    }

    /// Valence remapped from [-1, 1] to [0, 1].
    pub fn valence01(&self) -> f64 {
        (self.valence + 1.0) / 2.0
    }

    /// Arousal remapped from [-1, 1] to [0, 1].
    pub fn arousal01(&self) -> f64 {
        (self.arousal + 1.0) / 2.0
    }

    /// Every field outside its range, in declaration order. NaN is always
    /// out of range.
    pub fn violations(&self) -> Vec<FieldViolation> {
        [
            ("mood.valence", self.valence, Self::VALENCE_RANGE),
            ("mood.arousal", self.arousal, Self::AROUSAL_RANGE),
            ("mood.warmth", self.warmth, Self::WARMTH_RANGE),
            ("mood.nostalgia", self.nostalgia, Self::NOSTALGIA_RANGE),
        ]
        .into_iter()
        .filter(|(_, value, (min, max))| !(*min..=*max).contains(value))
        .map(|(field, value, (min, max))| FieldViolation {
            field,
            value,
            min,
            max,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        let mood = Mood::default();
        assert_eq!(mood, Mood::new(0.0, 0.0, 0.0, 0.0));
        assert!((mood.arousal01() - 0.5).abs() < 1e-12);
        assert!((mood.valence01() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(Mood::new(-1.0, 1.0, 0.0, 1.0).violations().is_empty());
        assert!(Mood::new(1.0, -1.0, 1.0, 0.0).violations().is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let violations = Mood::new(1.5, 0.0, -0.1, 2.0).violations();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, ["mood.valence", "mood.warmth", "mood.nostalgia"]);
        assert_eq!(violations[1].min, 0.0);
        assert_eq!(violations[1].max, 1.0);
    }

    #[test]
    fn nan_is_a_violation() {
        let violations = Mood::new(0.0, f64::NAN, 0.5, 0.5).violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "mood.arousal");
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let mood: Mood = serde_json::from_str(r#"{"warmth": 0.7}"#).unwrap();
        assert_eq!(mood, Mood::new(0.0, 0.0, 0.7, 0.0));
    }

    #[test]
    fn violation_display() {
        let v = FieldViolation {
            field: "mood.valence",
            value: 1.5,
            min: -1.0,
            max: 1.0,
        };
        assert_eq!(v.to_string(), "mood.valence = 1.5 is outside [-1, 1]");
    }
}
