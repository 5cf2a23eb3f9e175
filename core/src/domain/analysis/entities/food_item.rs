use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analysis::value_objects::RiskLevel;

/// One detected food with its purine estimate and optional highlight geometry.
///
/// Items in the `high` and `medium` tiers normally carry a `bbox`; its absence
/// is accepted and simply leaves the item without a highlight region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    /// Estimated purine content in mg per 100 g.
    pub purine_value: f64,
    pub level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<HighlightRegion>,
    pub description: String,
}

/// Axis-aligned box in the model's 0-1000 coordinate space,
/// ordered `[ymin, xmin, ymax, xmax]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Vec<f64>)]
pub struct BoundingBox(pub [f64; 4]);

impl BoundingBox {
    pub fn ymin(&self) -> f64 {
        self.0[0]
    }

    pub fn xmin(&self) -> f64 {
        self.0[1]
    }

    pub fn ymax(&self) -> f64 {
        self.0[2]
    }

    pub fn xmax(&self) -> f64 {
        self.0[3]
    }

    /// Maps model space into percent-of-container units for rendering.
    ///
    /// No clamping: out-of-range or inverted coordinates pass through as
    /// computed, so the caller sees exactly what the model reported.
    pub fn to_region(&self) -> HighlightRegion {
        HighlightRegion {
            top: self.ymin() / 10.0,
            left: self.xmin() / 10.0,
            width: (self.xmax() - self.xmin()) / 10.0,
            height: (self.ymax() - self.ymin()) / 10.0,
        }
    }
}

/// Render rectangle in percent-of-container units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HighlightRegion {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_model_space_to_percent_units() {
        let region = BoundingBox([200.0, 200.0, 500.0, 500.0]).to_region();

        assert_eq!(region.top, 20.0);
        assert_eq!(region.left, 20.0);
        assert_eq!(region.width, 30.0);
        assert_eq!(region.height, 30.0);
    }

    #[test]
    fn passes_out_of_range_coordinates_through() {
        let region = BoundingBox([0.0, 900.0, 400.0, 1200.0]).to_region();

        assert_eq!(region.left, 90.0);
        assert_eq!(region.width, 30.0);
    }

    #[test]
    fn passes_inverted_coordinates_through() {
        let region = BoundingBox([500.0, 500.0, 200.0, 200.0]).to_region();

        assert_eq!(region.width, -30.0);
        assert_eq!(region.height, -30.0);
    }
}
