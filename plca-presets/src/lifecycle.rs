//! Default lifecycle stage forest.
//!
//! Five root stages covering sourcing through end-of-life, with fourteen
//! stages in total. Only "Raw Material Sourcing" starts expanded; every
//! stage is editable so users can tune factors to their own supply chain.

use plca_core::{LifecycleStage, StageDef, StageTree};

// Factors ordered (CO2, energy, water, waste, fossil).
fn stage(id: &str, name: &str, icon: &str, description: &str, factors: [f64; 5]) -> LifecycleStage {
    LifecycleStage::new(id, name)
        .with_factors(factors[0], factors[1], factors[2], factors[3], factors[4])
        .with_icon(icon)
        .with_description(description)
}

/// The default stage forest.
pub fn default_lifecycle() -> StageTree {
    let defs = vec![
        StageDef::with_children(
            stage(
                "raw-materials",
                "Raw Material Sourcing",
                "leaf",
                "Extraction and production of raw materials",
                [1.0, 1.0, 1.0, 0.3, 1.0],
            )
            .with_expanded(true),
            vec![
                stage(
                    "farming",
                    "Farming/Extraction",
                    "recycle",
                    "Growing crops or extracting raw materials",
                    [0.6, 0.65, 0.8, 0.15, 0.7],
                )
                .into(),
                stage(
                    "processing-raw",
                    "Initial Processing",
                    "factory",
                    "Initial processing of raw materials",
                    [0.4, 0.35, 0.2, 0.15, 0.3],
                )
                .into(),
            ],
        ),
        StageDef::with_children(
            stage(
                "manufacturing",
                "Material Processing",
                "factory",
                "Converting raw materials into packaging materials",
                [1.2, 1.5, 0.8, 0.6, 1.3],
            ),
            vec![
                stage(
                    "refining",
                    "Refining",
                    "factory",
                    "Refining raw materials into usable forms",
                    [0.5, 0.7, 0.3, 0.3, 0.6],
                )
                .into(),
                stage(
                    "formation",
                    "Formation",
                    "box",
                    "Forming materials into packaging components",
                    [0.7, 0.8, 0.5, 0.3, 0.7],
                )
                .into(),
            ],
        ),
        StageDef::with_children(
            stage(
                "transportation",
                "Transportation",
                "truck",
                "Moving materials and products through the supply chain",
                [0.8, 0.9, 0.1, 0.05, 1.2],
            ),
            vec![
                stage(
                    "transport-1",
                    "Primary Transport",
                    "truck",
                    "Transportation from raw material to manufacturing",
                    [0.3, 0.35, 0.05, 0.02, 0.5],
                )
                .into(),
                stage(
                    "transport-2",
                    "Distribution",
                    "truck",
                    "Distribution to retailers or end-users",
                    [0.5, 0.55, 0.05, 0.03, 0.7],
                )
                .into(),
            ],
        ),
        StageDef::leaf(stage(
            "use-phase",
            "Use Phase",
            "box",
            "Product utilization by end consumers",
            [0.2, 0.15, 0.3, 0.1, 0.2],
        )),
        StageDef::with_children(
            stage(
                "end-of-life",
                "End-of-Life",
                "recycle",
                "Final disposal or recycling of the packaging",
                [0.5, 0.3, 0.2, 1.0, 0.3],
            ),
            vec![
                stage(
                    "recycling",
                    "Recycling",
                    "recycle",
                    "Processing for material recovery",
                    [0.2, 0.15, 0.15, 0.3, 0.15],
                )
                .into(),
                stage(
                    "composting",
                    "Composting",
                    "leaf",
                    "Biodegradation in composting facilities",
                    [0.1, 0.05, 0.05, 0.2, 0.05],
                )
                .into(),
                stage(
                    "landfill",
                    "Landfill",
                    "trash-2",
                    "Disposal in landfill",
                    [0.2, 0.1, 0.0, 0.5, 0.1],
                )
                .into(),
            ],
        ),
    ];
    defs.try_into().expect("builtin lifecycle stage ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use plca_core::Indicator;

    #[test]
    fn test_forest_shape() {
        let tree = default_lifecycle();
        assert_eq!(tree.len(), 14);
        assert_eq!(
            tree.root_ids(),
            ["raw-materials", "manufacturing", "transportation", "use-phase", "end-of-life"]
        );
        assert_eq!(tree.child_ids("end-of-life").unwrap().len(), 3);
        assert_eq!(tree.child_ids("use-phase").unwrap().len(), 0);
        tree.validate().unwrap();
    }

    #[test]
    fn test_only_raw_materials_starts_expanded() {
        let tree = default_lifecycle();
        for stage in tree.iter() {
            assert_eq!(
                stage.expanded,
                stage.id == "raw-materials",
                "unexpected expanded flag on '{}'",
                stage.id
            );
            assert!(stage.editable);
        }
    }

    #[test]
    fn test_factor_sums() {
        // The flat per-indicator factor sums everything downstream hinges on
        let tree = default_lifecycle();
        let sums: Vec<f64> = Indicator::ALL
            .iter()
            .map(|&indicator| tree.iter().map(|stage| stage.factor(indicator)).sum())
            .collect();
        let expected = [7.2, 7.55, 4.5, 4.0, 7.8];
        for (sum, expected) in sums.iter().zip(expected) {
            assert!(
                (sum - expected).abs() < 1e-9,
                "factor sum {} differs from {}",
                sum,
                expected
            );
        }
    }
}
