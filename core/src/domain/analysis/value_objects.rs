use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tier thresholds in mg/100g: high above this value.
pub const HIGH_PURINE_THRESHOLD: f64 = 150.0;
/// Medium from this value up to and including [`HIGH_PURINE_THRESHOLD`].
pub const MEDIUM_PURINE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Accepts only the three exact literals the model is instructed to emit.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    /// Whether items of this tier are expected to carry a bounding box.
    pub fn requires_bbox(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Medium)
    }
}

/// Derives the tier from the purine value alone.
pub fn classify_purine_value(purine_value: f64) -> RiskLevel {
    if purine_value > HIGH_PURINE_THRESHOLD {
        RiskLevel::High
    } else if purine_value >= MEDIUM_PURINE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Keeps a valid model-supplied label, otherwise recomputes it from the
/// purine value. This repairs replies that used correct numbers but an
/// inconsistent or missing label.
pub fn resolve_risk_level(label: Option<&str>, purine_value: f64) -> RiskLevel {
    label
        .and_then(RiskLevel::parse)
        .unwrap_or_else(|| classify_purine_value(purine_value))
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub extension: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_threshold() {
        assert_eq!(classify_purine_value(180.0), RiskLevel::High);
        assert_eq!(classify_purine_value(110.0), RiskLevel::Medium);
        assert_eq!(classify_purine_value(21.0), RiskLevel::Low);
    }

    #[test]
    fn classifies_boundary_values() {
        assert_eq!(classify_purine_value(150.0), RiskLevel::Medium);
        assert_eq!(classify_purine_value(50.0), RiskLevel::Medium);
        assert_eq!(classify_purine_value(49.9), RiskLevel::Low);
    }

    #[test]
    fn keeps_a_valid_model_label() {
        assert_eq!(resolve_risk_level(Some("low"), 180.0), RiskLevel::Low);
    }

    #[test]
    fn recomputes_a_missing_or_invalid_label() {
        assert_eq!(resolve_risk_level(None, 180.0), RiskLevel::High);
        assert_eq!(resolve_risk_level(Some("HIGH"), 180.0), RiskLevel::High);
        assert_eq!(resolve_risk_level(Some("severe"), 110.0), RiskLevel::Medium);
    }
}
