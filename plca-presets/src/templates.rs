//! Built-in product templates.
//!
//! Quick starting points for common packaging formats. Template components
//! carry no waste fraction of their own, so the engine's default applies
//! until the user tunes them.

use plca_core::{PackagingComponent, ProductTemplate};

fn component(id: &str, name: &str, material_id: &str, weight_g: f64) -> PackagingComponent {
    PackagingComponent::new(id, name, material_id, weight_g)
}

/// The built-in templates, loadable by id through the product store.
pub fn builtin_templates() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            id: "beverage-bottle".to_string(),
            name: "Beverage Bottle".to_string(),
            description: "PET bottle with a plastic cap".to_string(),
            components: vec![
                component("bottle-body", "Bottle Body", "pet", 25.0),
                component("bottle-cap", "Cap", "pe", 3.0),
                component("bottle-label", "Label", "kraft-paper", 1.0),
            ],
        },
        ProductTemplate {
            id: "food-container".to_string(),
            name: "Food Container".to_string(),
            description: "Biodegradable container for prepared food".to_string(),
            components: vec![
                component("container-body", "Container Body", "pla", 18.0),
                component("container-lid", "Lid", "pla", 7.0),
            ],
        },
        ProductTemplate {
            id: "cardboard-box".to_string(),
            name: "Cardboard Box".to_string(),
            description: "Cardboard box for shipping".to_string(),
            components: vec![
                component("box-body", "Box Body", "cardboard", 120.0),
                component("box-tape", "Adhesive Tape", "pe", 5.0),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::builtin_catalog;

    #[test]
    fn test_template_shapes() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].id, "beverage-bottle");
        assert_eq!(templates[0].components.len(), 3);
        assert_eq!(templates[1].components.len(), 2);
        assert_eq!(templates[2].components.len(), 2);
    }

    #[test]
    fn test_template_materials_exist_in_catalog() {
        let catalog = builtin_catalog();
        for template in builtin_templates() {
            for component in &template.components {
                assert!(
                    catalog.contains(&component.material_id),
                    "template '{}' references unknown material '{}'",
                    template.id,
                    component.material_id
                );
            }
        }
    }

    #[test]
    fn test_template_components_use_default_waste_fraction() {
        for template in builtin_templates() {
            for component in &template.components {
                assert!(component.waste_fraction.is_none());
            }
        }
    }
}
