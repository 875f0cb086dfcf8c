//! Built-in material catalog.
//!
//! Thirteen packaging materials across six categories, each with
//! five-indicator coefficients per kilogram. The figures are indicative
//! reference values for comparative design work, not certified inventory
//! data; applications with audited datasets supply their own catalog
//! instead.

use plca_core::{Material, MaterialCatalog, MaterialCategory, Origin};

// Coefficients ordered (CO2 kg, energy MJ, water L, waste kg, fossil MJ)
// per kg of material.
#[allow(clippy::too_many_arguments)]
fn material(
    id: &str,
    name: &str,
    category: MaterialCategory,
    per_kg: [f64; 5],
    description: &str,
    recyclable: bool,
    biodegradable: bool,
    compostable: bool,
    origin: Origin,
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        category,
        co2_per_kg: per_kg[0],
        energy_per_kg: per_kg[1],
        water_per_kg: per_kg[2],
        waste_per_kg: per_kg[3],
        fossil_fuel_per_kg: per_kg[4],
        description: description.to_string(),
        recyclable,
        biodegradable,
        compostable,
        origin,
    }
}

/// All built-in materials, ordered by category.
pub fn builtin_materials() -> Vec<Material> {
    vec![
        // ====================================================================
        // Bio-based materials
        // ====================================================================
        material(
            "pla",
            "PLA (Polylactic Acid)",
            MaterialCategory::BioBased,
            [3.8, 54.0, 235.0, 0.15, 42.0],
            "Biodegradable polyester derived from renewable resources like corn starch",
            true,
            true,
            true,
            Origin::International,
        ),
        material(
            "pbat",
            "PBAT",
            MaterialCategory::BioBased,
            [4.2, 59.0, 245.0, 0.18, 46.0],
            "Biodegradable aliphatic-aromatic copolyester suitable for film applications",
            false,
            true,
            true,
            Origin::International,
        ),
        material(
            "starch-blend",
            "Starch Blend",
            MaterialCategory::BioBased,
            [2.7, 45.0, 190.0, 0.12, 38.0],
            "Blend of starch with other biopolymers for improved mechanical properties",
            false,
            true,
            true,
            Origin::National,
        ),
        // ====================================================================
        // Conventional plastics
        // ====================================================================
        material(
            "pet",
            "PET (Polyethylene Terephthalate)",
            MaterialCategory::ConventionalPlastic,
            [6.5, 80.0, 294.0, 0.21, 70.0],
            "Commonly used in bottles and containers",
            true,
            false,
            false,
            Origin::International,
        ),
        material(
            "pe",
            "PE (Polyethylene)",
            MaterialCategory::ConventionalPlastic,
            [5.8, 76.0, 270.0, 0.19, 65.0],
            "Common plastic used in packaging, bags, and films",
            true,
            false,
            false,
            Origin::International,
        ),
        material(
            "pp",
            "PP (Polypropylene)",
            MaterialCategory::ConventionalPlastic,
            [4.9, 73.0, 260.0, 0.17, 62.0],
            "Versatile plastic used for containers and packaging",
            true,
            false,
            false,
            Origin::International,
        ),
        material(
            "ps",
            "PS (Polystyrene)",
            MaterialCategory::ConventionalPlastic,
            [7.8, 88.0, 310.0, 0.23, 78.0],
            "Rigid or foam plastic used for protective packaging",
            true,
            false,
            false,
            Origin::International,
        ),
        // ====================================================================
        // Paper and cardboard
        // ====================================================================
        material(
            "cardboard",
            "Corrugated Cardboard",
            MaterialCategory::PaperCardboard,
            [1.1, 25.0, 20.0, 0.05, 18.0],
            "Used for boxes and structural packaging",
            true,
            true,
            true,
            Origin::National,
        ),
        material(
            "kraft-paper",
            "Kraft Paper",
            MaterialCategory::PaperCardboard,
            [0.9, 22.0, 15.0, 0.04, 14.0],
            "Strong paper for bags and wrapping",
            true,
            true,
            true,
            Origin::National,
        ),
        // ====================================================================
        // Metals
        // ====================================================================
        material(
            "aluminum",
            "Aluminum",
            MaterialCategory::Metal,
            [11.0, 170.0, 1320.0, 0.15, 150.0],
            "Lightweight metal for cans and foils",
            true,
            false,
            false,
            Origin::International,
        ),
        material(
            "steel",
            "Steel",
            MaterialCategory::Metal,
            [2.8, 45.0, 55.0, 0.18, 40.0],
            "Durable metal for cans and containers",
            true,
            false,
            false,
            Origin::National,
        ),
        // ====================================================================
        // Glass and wood
        // ====================================================================
        material(
            "glass",
            "Glass",
            MaterialCategory::Glass,
            [1.4, 15.0, 12.0, 0.02, 12.0],
            "Inert material for bottles and jars",
            true,
            false,
            false,
            Origin::National,
        ),
        material(
            "wood",
            "Wood",
            MaterialCategory::Wood,
            [0.4, 8.0, 5.0, 0.12, 6.0],
            "Natural material for crates and pallets",
            true,
            true,
            true,
            Origin::National,
        ),
    ]
}

/// The built-in materials as an id-indexed catalog.
pub fn builtin_catalog() -> MaterialCatalog {
    MaterialCatalog::from_materials(builtin_materials()).expect("builtin material ids are unique")
}
