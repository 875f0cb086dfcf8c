//! Material reference data and the material catalog.
//!
//! Materials carry the per-kilogram impact coefficients everything else is
//! computed from, together with descriptive attributes used by selector UIs
//! (category, end-of-life properties, origin). They are immutable reference
//! data: products hold a bound copy of the catalog and refer to materials by
//! id, never mutating them.
//!
//! The catalog is read-only configuration supplied at startup, either built
//! in code (see the presets crate) or parsed from TOML:
//!
//! ```toml
//! [[materials]]
//! id = "pla"
//! name = "PLA (Polylactic Acid)"
//! category = "bio-based"
//! co2_per_kg = 3.8
//! energy_per_kg = 54.0
//! water_per_kg = 235.0
//! waste_per_kg = 0.15
//! fossil_fuel_per_kg = 42.0
//! description = "Biodegradable polyester"
//! recyclable = true
//! biodegradable = true
//! compostable = true
//! origin = "international"
//! ```

use crate::errors::{PLCAError, PLCAResult};
use crate::indicator::Indicator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Material family used to group catalog entries in selector UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialCategory {
    BioBased,
    ConventionalPlastic,
    PaperCardboard,
    Metal,
    Glass,
    Wood,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialCategory::BioBased => write!(f, "bio-based"),
            MaterialCategory::ConventionalPlastic => write!(f, "conventional-plastic"),
            MaterialCategory::PaperCardboard => write!(f, "paper-cardboard"),
            MaterialCategory::Metal => write!(f, "metal"),
            MaterialCategory::Glass => write!(f, "glass"),
            MaterialCategory::Wood => write!(f, "wood"),
        }
    }
}

/// Whether a material is sourced domestically or imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    National,
    International,
}

/// A packaging material with its per-kilogram impact coefficients.
///
/// The five coefficients are non-negative reals expressing the impact of one
/// kilogram of material before any lifecycle-stage weighting is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier within a catalog (e.g. "pla").
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    pub category: MaterialCategory,
    /// kg CO2e per kg of material.
    pub co2_per_kg: f64,
    /// MJ of primary energy per kg of material.
    pub energy_per_kg: f64,
    /// Litres of freshwater per kg of material.
    pub water_per_kg: f64,
    /// kg of solid waste per kg of material.
    pub waste_per_kg: f64,
    /// MJ of fossil resources per kg of material.
    pub fossil_fuel_per_kg: f64,
    #[serde(default)]
    pub description: String,
    /// End-of-life attributes.
    pub recyclable: bool,
    pub biodegradable: bool,
    pub compostable: bool,
    pub origin: Origin,
}

impl Material {
    /// The per-kilogram coefficient for a single indicator.
    pub fn impact_per_kg(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Co2 => self.co2_per_kg,
            Indicator::Energy => self.energy_per_kg,
            Indicator::Water => self.water_per_kg,
            Indicator::Waste => self.waste_per_kg,
            Indicator::FossilFuel => self.fossil_fuel_per_kg,
        }
    }
}

/// An id-indexed collection of materials.
///
/// Preserves insertion order for listing (catalog authors control how
/// materials are presented) while providing O(1) lookup by id. Duplicate ids
/// are rejected at registration so that id references are unambiguous.
///
/// Serializes as a plain material array, the shape catalogs are authored in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Material>", into = "Vec<Material>")]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    by_id: HashMap<String, usize>,
}

impl MaterialCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of materials.
    ///
    /// # Errors
    ///
    /// Returns [`PLCAError::DuplicateMaterial`] if two materials share an id.
    pub fn from_materials(materials: Vec<Material>) -> PLCAResult<Self> {
        let mut catalog = Self::new();
        for material in materials {
            catalog.register(material)?;
        }
        Ok(catalog)
    }

    /// Register a material.
    ///
    /// # Errors
    ///
    /// Returns [`PLCAError::DuplicateMaterial`] if the id is already present.
    pub fn register(&mut self, material: Material) -> PLCAResult<()> {
        if self.by_id.contains_key(&material.id) {
            return Err(PLCAError::DuplicateMaterial(material.id.clone()));
        }
        self.by_id
            .insert(material.id.clone(), self.materials.len());
        self.materials.push(material);
        Ok(())
    }

    /// Look up a material by id.
    pub fn get(&self, id: &str) -> Option<&Material> {
        self.by_id.get(id).map(|&index| &self.materials[index])
    }

    /// Whether a material with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Iterate over all materials in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    /// All materials of one category, in registration order.
    pub fn by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Parse a catalog from TOML text with a top-level `materials` array.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML and
    /// [`PLCAError::DuplicateMaterial`] for repeated ids.
    pub fn from_toml_str(content: &str) -> PLCAResult<Self> {
        #[derive(Deserialize)]
        struct CatalogFile {
            materials: Vec<Material>,
        }

        let file: CatalogFile = toml::from_str(content)?;
        Self::from_materials(file.materials)
    }
}

impl TryFrom<Vec<Material>> for MaterialCatalog {
    type Error = PLCAError;

    fn try_from(materials: Vec<Material>) -> PLCAResult<Self> {
        Self::from_materials(materials)
    }
}

impl From<MaterialCatalog> for Vec<Material> {
    fn from(catalog: MaterialCatalog) -> Self {
        catalog.materials
    }
}
