use crate::domain::analysis::{
    entities::{AnalysisResult, BoundingBox, FoodItem},
    value_objects::RiskLevel,
};

/// Fixed demonstration result served when the vision endpoint is
/// unauthorized, unreachable, or timed out. Deterministic and input-free.
pub fn demo_result() -> AnalysisResult {
    let crayfish_box = BoundingBox([200.0, 200.0, 500.0, 500.0]);
    let steak_box = BoundingBox([550.0, 300.0, 850.0, 700.0]);

    AnalysisResult::mock(vec![
        FoodItem {
            name: "Demo: spicy crayfish".to_string(),
            purine_value: 180.0,
            level: RiskLevel::High,
            bbox: Some(crayfish_box),
            region: Some(crayfish_box.to_region()),
            description: "Crayfish is a high-purine food, especially the head and innards. \
                Avoid it during acute gout flares and keep portions strictly limited in remission."
                .to_string(),
        },
        FoodItem {
            name: "Demo: steak".to_string(),
            purine_value: 110.0,
            level: RiskLevel::Medium,
            bbox: Some(steak_box),
            region: Some(steak_box.to_region()),
            description: "Beef is a medium-purine meat. Keep daily intake under 100 g and \
                prefer boiling or stewing to reduce fat."
                .to_string(),
        },
        FoodItem {
            name: "Demo: broccoli".to_string(),
            purine_value: 21.0,
            level: RiskLevel::Low,
            bbox: None,
            region: None,
            description: "Most vegetables are low in purine and rich in vitamin C, which \
                supports uric acid excretion. Safe to enjoy freely."
                .to_string(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic_and_clearly_labeled() {
        let result = demo_result();

        assert!(result.is_mock);
        assert_eq!(result.foods.len(), 3);
        assert!(result.foods.iter().all(|f| f.name.starts_with("Demo: ")));
        assert_eq!(result, demo_result());
    }

    #[test]
    fn covers_one_exemplar_per_tier() {
        let levels: Vec<RiskLevel> = demo_result().foods.iter().map(|f| f.level).collect();

        assert_eq!(levels, vec![RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]);
    }

    #[test]
    fn only_the_highlighted_tiers_carry_boxes() {
        let result = demo_result();

        assert!(result.foods[0].bbox.is_some());
        assert!(result.foods[1].bbox.is_some());
        assert!(result.foods[2].bbox.is_none());
    }
}
