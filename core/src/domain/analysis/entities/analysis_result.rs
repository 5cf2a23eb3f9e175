use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analysis::entities::FoodItem;

/// Outcome of one analysis call. Items keep their detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub foods: Vec<FoodItem>,
    /// Set only by the fallback generator.
    pub is_mock: bool,
}

impl AnalysisResult {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self {
            foods,
            is_mock: false,
        }
    }

    pub fn mock(foods: Vec<FoodItem>) -> Self {
        Self {
            foods,
            is_mock: true,
        }
    }
}
