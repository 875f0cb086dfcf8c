//! The seeded default product and a ready-to-use store.

use plca_core::{FunctionalUnit, PackagingComponent, Product, ProductStore};

use crate::equivalents::builtin_equivalents;
use crate::lifecycle::default_lifecycle;
use crate::materials::builtin_catalog;
use crate::templates::builtin_templates;

/// The seed product's components: a PLA container with a PLA cap and a PBAT
/// protective film.
pub fn default_components() -> Vec<PackagingComponent> {
    vec![
        PackagingComponent::with_waste_fraction("container", "Main Container", "pla", 25.0, 0.08),
        PackagingComponent::with_waste_fraction("cap", "Cap/Lid", "pla", 5.0, 0.05),
        PackagingComponent::with_waste_fraction("film", "Protective Film", "pbat", 2.0, 0.1),
    ]
}

pub fn default_functional_unit() -> FunctionalUnit {
    FunctionalUnit::new("1000 units", 1000.0)
        .with_description("Standard functional unit for comparative analysis")
}

/// The default seed product, marked as a prototype, with totals computed.
pub fn default_product() -> Product {
    Product::new(
        "default-product",
        "Eco Packaging",
        default_components(),
        default_lifecycle(),
        builtin_catalog(),
    )
    .with_functional_unit(default_functional_unit())
    .with_prototype(true)
}

/// A store around the default product with the built-in equivalents and
/// templates attached.
pub fn default_store() -> ProductStore {
    ProductStore::new(default_product())
        .with_equivalents(builtin_equivalents())
        .expect("builtin conversion factors are valid")
        .with_templates(builtin_templates())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_product_shape() {
        let product = default_product();
        assert_eq!(product.id, "default-product");
        assert_eq!(product.name, "Eco Packaging");
        assert!(product.is_prototype);
        assert_eq!(product.components.len(), 3);
        assert_eq!(product.lifecycle.len(), 14);
        assert_eq!(product.materials.len(), 13);
        assert_eq!(product.functional_unit.as_ref().unwrap().quantity, 1000.0);
    }

    #[test]
    fn test_default_store_attachments() {
        let store = default_store();
        assert_eq!(store.eco_equivalents().len(), 4);
        assert_eq!(store.templates().len(), 3);
        assert_eq!(store.materials().len(), 13);
    }
}
