//! Physical parts of a packaging product.

use serde::{Deserialize, Serialize};

/// Waste fraction assumed when a component does not declare one.
pub const DEFAULT_WASTE_FRACTION: f64 = 0.1;

/// One physical part of a packaging product (body, cap, label, ...).
///
/// A component references exactly one material by id. The reference is
/// resolved against the product's bound catalog at computation time; an
/// unresolved id makes the component contribute zero impact rather than
/// failing, so a product stays editable while a material is temporarily
/// undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagingComponent {
    /// Unique identifier within a product.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Id of the material this component is made of.
    pub material_id: String,
    /// Nominal weight in grams (positive).
    pub weight_g: f64,
    /// Manufacturing scrap as a fraction of nominal weight.
    ///
    /// Defaults to [`DEFAULT_WASTE_FRACTION`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_fraction: Option<f64>,
}

impl PackagingComponent {
    /// Create a component without an explicit waste fraction.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        material_id: impl Into<String>,
        weight_g: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            material_id: material_id.into(),
            weight_g,
            waste_fraction: None,
        }
    }

    /// Create a component with an explicit waste fraction.
    pub fn with_waste_fraction(
        id: impl Into<String>,
        name: impl Into<String>,
        material_id: impl Into<String>,
        weight_g: f64,
        waste_fraction: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            material_id: material_id.into(),
            weight_g,
            waste_fraction: Some(waste_fraction),
        }
    }

    /// Weight in kilograms including manufacturing scrap.
    ///
    /// `(weight_g / 1000) * (1 + waste_fraction)`, with the waste fraction
    /// defaulting to [`DEFAULT_WASTE_FRACTION`]. This accessor is the single
    /// source of truth for both impact computation and display.
    pub fn effective_weight_kg(&self) -> f64 {
        let waste_fraction = self.waste_fraction.unwrap_or(DEFAULT_WASTE_FRACTION);
        (self.weight_g / 1000.0) * (1.0 + waste_fraction)
    }
}
