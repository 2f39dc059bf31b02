use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::mood::{FieldViolation, Mood};

/// Rendering style hint. Echoed into the scene, never interpreted by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Stylized,
    Realistic,
    Lowpoly,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Stylized, Style::Realistic, Style::Lowpoly];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stylized => "stylized",
            Self::Realistic => "realistic",
            Self::Lowpoly => "lowpoly",
        }
    }
}

/// A mood field (or several) outside its documented range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid request: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything the generator needs to build one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub narrative: String,
    /// Accepted for forward compatibility; the generator ignores it.
    #[serde(default)]
    pub metaphors: Vec<String>,
    pub mood: Mood,
    /// Any integer; negative seeds are reinterpreted bit-for-bit as `u64`.
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub style: Style,
}

impl GenerationRequest {
    pub fn new(narrative: impl Into<String>, mood: Mood) -> Self {
        Self {
            narrative: narrative.into(),
            metaphors: Vec::new(),
            mood,
            seed: None,
            style: Style::default(),
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_metaphors(mut self, metaphors: Vec<String>) -> Self {
        self.metaphors = metaphors;
        self
    }

    /// Check the mood against its documented ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations = self.mood.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
