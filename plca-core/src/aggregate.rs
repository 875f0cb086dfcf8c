//! Impact aggregation over components and lifecycle stages.
//!
//! The model is deliberately simple. Each component contributes a base
//! impact per indicator (material coefficient times effective weight), and
//! every stage in the forest scales that base by its own factor. Stage
//! factors are flat: a child's contribution uses only the child's factor,
//! never the product of its ancestors'.
//!
//! All intermediate arithmetic is unrounded. Rounding to two decimals
//! happens exactly once, on the value a function returns, so sums never
//! accumulate rounding error from their parts.
//!
//! Reference failures are absorbing rather than fatal here: a component
//! whose material id is not in the catalog contributes zero, and an unknown
//! stage id reports zero. Callers that want hard errors validate ids before
//! aggregating.

use crate::component::PackagingComponent;
use crate::indicator::{ImpactTotals, Indicator};
use crate::material::MaterialCatalog;
use crate::stage::LifecycleStage;
use crate::tree::StageTree;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A component's unweighted impact for one indicator.
///
/// Material coefficient times effective weight; zero when the component's
/// material is not in the catalog.
pub fn base_impact(
    component: &PackagingComponent,
    catalog: &MaterialCatalog,
    indicator: Indicator,
) -> f64 {
    match catalog.get(&component.material_id) {
        Some(material) => material.impact_per_kg(indicator) * component.effective_weight_kg(),
        None => 0.0,
    }
}

/// A single stage's share of a base impact: the stage's own factor times the
/// base, independent of where the stage sits in the forest.
pub fn stage_contribution(stage: &LifecycleStage, base: f64, indicator: Indicator) -> f64 {
    stage.factor(indicator) * base
}

/// Total impacts of a set of components across a stage forest, rounded to
/// two decimals per indicator.
///
/// Every stage at every depth contributes `factor * base` for each
/// component and indicator. Empty components or an empty forest yield all
/// zeros.
pub fn total_impacts(
    components: &[PackagingComponent],
    tree: &StageTree,
    catalog: &MaterialCatalog,
) -> ImpactTotals {
    let mut base = ImpactTotals::default();
    for component in components {
        for indicator in Indicator::ALL {
            base.add(indicator, base_impact(component, catalog, indicator));
        }
    }

    let mut totals = ImpactTotals::default();
    for stage in tree.iter() {
        for indicator in Indicator::ALL {
            totals.add(indicator, stage_contribution(stage, base.get(indicator), indicator));
        }
    }

    let mut rounded = ImpactTotals::default();
    for indicator in Indicator::ALL {
        rounded.add(indicator, round2(totals.get(indicator)));
    }
    rounded
}

/// One component's total for one indicator across the whole forest, rounded
/// to two decimals.
pub fn component_impact(
    component: &PackagingComponent,
    tree: &StageTree,
    catalog: &MaterialCatalog,
    indicator: Indicator,
) -> f64 {
    let base = base_impact(component, catalog, indicator);
    let total: f64 = tree
        .iter()
        .map(|stage| stage_contribution(stage, base, indicator))
        .sum();
    round2(total)
}

/// One stage's total for one indicator across all components, rounded to two
/// decimals. An unknown stage id reports zero.
pub fn stage_impact(
    components: &[PackagingComponent],
    tree: &StageTree,
    catalog: &MaterialCatalog,
    stage_id: &str,
    indicator: Indicator,
) -> f64 {
    let Some(stage) = tree.get(stage_id) else {
        return 0.0;
    };
    let total: f64 = components
        .iter()
        .map(|component| {
            stage_contribution(stage, base_impact(component, catalog, indicator), indicator)
        })
        .sum();
    round2(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, MaterialCategory, Origin};

    fn material(id: &str, co2: f64, energy: f64, water: f64, waste: f64, fossil: f64) -> Material {
        Material {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: MaterialCategory::BioBased,
            co2_per_kg: co2,
            energy_per_kg: energy,
            water_per_kg: water,
            waste_per_kg: waste,
            fossil_fuel_per_kg: fossil,
            description: String::new(),
            recyclable: true,
            biodegradable: true,
            compostable: false,
            origin: Origin::National,
        }
    }

    fn single_stage_tree(factor: f64) -> StageTree {
        let mut tree = StageTree::new();
        tree.insert(
            None,
            LifecycleStage::new("production", "Production")
                .with_factors(factor, factor, factor, factor, factor),
        )
        .unwrap();
        tree
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.1026), 0.1);
        assert_eq!(round2(2.678), 2.68);
        // 0.125 is exactly representable, so the half rounds away from zero
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_single_component_single_stage() {
        // 100 g at 8% waste -> 0.108 kg effective; 0.95 kg CO2e/kg -> base
        // 0.1026; one stage with factor 1.0 -> 0.10 after rounding.
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 0.95, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components =
            vec![PackagingComponent::with_waste_fraction("c", "Component", "m", 100.0, 0.08)];
        let tree = single_stage_tree(1.0);

        let totals = total_impacts(&components, &tree, &catalog);
        assert_eq!(totals.co2, 0.1);
        assert_eq!(totals.energy, 0.0);
    }

    #[test]
    fn test_stage_factors_are_flat_not_inherited() {
        // Base CO2 impact: 2 kg * 1.0/kg = 2.0. Parent factor 2.0, child
        // factor 0.5. Flat weighting gives 2*2 + 2*0.5 = 5.0; inheriting the
        // parent factor would give 6.0.
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components =
            vec![PackagingComponent::with_waste_fraction("c", "Component", "m", 2000.0, 0.0)];
        let mut tree = StageTree::new();
        tree.insert(
            None,
            LifecycleStage::new("parent", "Parent").with_factors(2.0, 0.0, 0.0, 0.0, 0.0),
        )
        .unwrap();
        tree.insert(
            Some("parent"),
            LifecycleStage::new("child", "Child").with_factors(0.5, 0.0, 0.0, 0.0, 0.0),
        )
        .unwrap();

        let totals = total_impacts(&components, &tree, &catalog);
        assert_eq!(totals.co2, 5.0);

        assert_eq!(component_impact(&components[0], &tree, &catalog, Indicator::Co2), 5.0);
        assert_eq!(stage_impact(&components, &tree, &catalog, "parent", Indicator::Co2), 4.0);
        assert_eq!(stage_impact(&components, &tree, &catalog, "child", Indicator::Co2), 1.0);
    }

    #[test]
    fn test_unresolved_material_contributes_zero() {
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components = vec![
            PackagingComponent::with_waste_fraction("known", "Known", "m", 1000.0, 0.0),
            PackagingComponent::with_waste_fraction("unknown", "Unknown", "vibranium", 1000.0, 0.0),
        ];
        let tree = single_stage_tree(1.0);

        let totals = total_impacts(&components, &tree, &catalog);
        assert_eq!(totals.co2, 1.0);
        assert_eq!(component_impact(&components[1], &tree, &catalog, Indicator::Co2), 0.0);
    }

    #[test]
    fn test_empty_inputs_yield_zero() {
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 1.0, 1.0, 1.0, 1.0)]).unwrap();
        let components = vec![PackagingComponent::new("c", "Component", "m", 500.0)];

        let empty_components = total_impacts(&[], &single_stage_tree(1.0), &catalog);
        assert_eq!(empty_components, ImpactTotals::default());

        let empty_tree = total_impacts(&components, &StageTree::new(), &catalog);
        assert_eq!(empty_tree, ImpactTotals::default());
    }

    #[test]
    fn test_default_waste_fraction_applied() {
        // No explicit waste fraction: 1000 g -> 1.1 kg effective.
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components = vec![PackagingComponent::new("c", "Component", "m", 1000.0)];
        let totals = total_impacts(&components, &single_stage_tree(1.0), &catalog);
        assert_eq!(totals.co2, 1.1);
    }

    #[test]
    fn test_rounding_happens_once_at_the_edge() {
        // Two components each contribute 0.0049; per-part rounding would
        // report 0.0, summing first reports 0.01.
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 0.98, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components = vec![
            PackagingComponent::with_waste_fraction("a", "A", "m", 5.0, 0.0),
            PackagingComponent::with_waste_fraction("b", "B", "m", 5.0, 0.0),
        ];
        let tree = single_stage_tree(1.0);

        assert_eq!(component_impact(&components[0], &tree, &catalog, Indicator::Co2), 0.0);
        assert_eq!(total_impacts(&components, &tree, &catalog).co2, 0.01);
    }

    #[test]
    fn test_indicators_pair_coefficient_with_factor() {
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 2.0, 3.0, 4.0, 5.0)]).unwrap();
        let components =
            vec![PackagingComponent::with_waste_fraction("c", "Component", "m", 1000.0, 0.0)];
        let mut tree = StageTree::new();
        tree.insert(
            None,
            LifecycleStage::new("s", "Stage").with_factors(1.0, 0.5, 2.0, 0.25, 0.2),
        )
        .unwrap();

        let totals = total_impacts(&components, &tree, &catalog);
        assert_eq!(totals.co2, 1.0);
        assert_eq!(totals.energy, 1.0);
        assert_eq!(totals.water, 6.0);
        assert_eq!(totals.waste, 1.0);
        assert_eq!(totals.fossil_fuel, 1.0);
    }

    #[test]
    fn test_unknown_stage_reports_zero() {
        let catalog =
            MaterialCatalog::from_materials(vec![material("m", 1.0, 0.0, 0.0, 0.0, 0.0)]).unwrap();
        let components = vec![PackagingComponent::new("c", "Component", "m", 1000.0)];
        let tree = single_stage_tree(1.0);
        assert_eq!(stage_impact(&components, &tree, &catalog, "missing", Indicator::Co2), 0.0);
    }
}
