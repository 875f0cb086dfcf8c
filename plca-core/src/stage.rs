//! Lifecycle stage records and patches.
//!
//! A [`LifecycleStage`] holds the per-stage data: identity, presentation
//! fields, and five independent impact multipliers. Stage topology (which
//! stage is whose child) lives in the [`StageTree`](crate::tree::StageTree)
//! arena, not on the stage itself; [`StageDef`] is the nested external form
//! used for authoring and serialization.
//!
//! Edits go through [`StagePatch`], an explicit field mask: only the fields a
//! patch carries are written to the target stage, everything else (including
//! the id and the children) is untouched.

use crate::indicator::Indicator;
use serde::{Deserialize, Serialize};

fn default_editable() -> bool {
    true
}

/// A single lifecycle stage.
///
/// The five factors are independent multipliers applied to a component's base
/// impact for the matching indicator. Only the CO2 factor is required when
/// authoring; the others default to 0 so that indicators without authored
/// data contribute nothing (deliberately 0, not 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleStage {
    /// Unique identifier across the whole forest.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Free-form icon tag consumed by UIs (e.g. "leaf", "truck").
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    pub co2_factor: f64,
    #[serde(default)]
    pub energy_factor: f64,
    #[serde(default)]
    pub water_factor: f64,
    #[serde(default)]
    pub waste_factor: f64,
    #[serde(default)]
    pub fossil_fuel_factor: f64,
    /// Presentation state: whether the node is unfolded in tree views.
    #[serde(default)]
    pub expanded: bool,
    /// Whether end users may alter or delete this node.
    #[serde(default = "default_editable")]
    pub editable: bool,
}

impl LifecycleStage {
    /// Create a stage with all factors zero, collapsed and editable.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            description: String::new(),
            co2_factor: 0.0,
            energy_factor: 0.0,
            water_factor: 0.0,
            waste_factor: 0.0,
            fossil_fuel_factor: 0.0,
            expanded: false,
            editable: true,
        }
    }

    /// Set all five factors at once (CO2, energy, water, waste, fossil).
    pub fn with_factors(
        mut self,
        co2: f64,
        energy: f64,
        water: f64,
        waste: f64,
        fossil: f64,
    ) -> Self {
        self.co2_factor = co2;
        self.energy_factor = energy;
        self.water_factor = water;
        self.waste_factor = waste;
        self.fossil_fuel_factor = fossil;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// The multiplier for a single indicator.
    pub fn factor(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Co2 => self.co2_factor,
            Indicator::Energy => self.energy_factor,
            Indicator::Water => self.water_factor,
            Indicator::Waste => self.waste_factor,
            Indicator::FossilFuel => self.fossil_fuel_factor,
        }
    }
}

/// Nested stage definition: a stage plus its child definitions.
///
/// This is the shape forests are authored and serialized in; the arena form
/// used at runtime is rebuilt from it (see
/// [`StageTree`](crate::tree::StageTree)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDef {
    #[serde(flatten)]
    pub stage: LifecycleStage,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StageDef>,
}

impl StageDef {
    /// A definition without children.
    pub fn leaf(stage: LifecycleStage) -> Self {
        Self {
            stage,
            children: Vec::new(),
        }
    }

    /// A definition with children.
    pub fn with_children(stage: LifecycleStage, children: Vec<StageDef>) -> Self {
        Self { stage, children }
    }
}

impl From<LifecycleStage> for StageDef {
    fn from(stage: LifecycleStage) -> Self {
        Self::leaf(stage)
    }
}

/// An explicit field mask for stage updates.
///
/// Each slot is optional; [`apply_to`](StagePatch::apply_to) writes only the
/// slots that are set. The stage id and the children topology are not
/// patchable, which keeps updates shallow by construction.
///
/// ```rust
/// use plca_core::{LifecycleStage, StagePatch};
///
/// let mut stage =
///     LifecycleStage::new("use-phase", "Use Phase").with_factors(0.2, 0.15, 0.3, 0.1, 0.2);
/// StagePatch::new().with_name("Usage").with_co2_factor(0.25).apply_to(&mut stage);
///
/// assert_eq!(stage.name, "Usage");
/// assert_eq!(stage.co2_factor, 0.25);
/// assert_eq!(stage.energy_factor, 0.15);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagePatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub co2_factor: Option<f64>,
    pub energy_factor: Option<f64>,
    pub water_factor: Option<f64>,
    pub waste_factor: Option<f64>,
    pub fossil_fuel_factor: Option<f64>,
    pub expanded: Option<bool>,
    pub editable: Option<bool>,
}

impl StagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_co2_factor(mut self, factor: f64) -> Self {
        self.co2_factor = Some(factor);
        self
    }

    pub fn with_energy_factor(mut self, factor: f64) -> Self {
        self.energy_factor = Some(factor);
        self
    }

    pub fn with_water_factor(mut self, factor: f64) -> Self {
        self.water_factor = Some(factor);
        self
    }

    pub fn with_waste_factor(mut self, factor: f64) -> Self {
        self.waste_factor = Some(factor);
        self
    }

    pub fn with_fossil_fuel_factor(mut self, factor: f64) -> Self {
        self.fossil_fuel_factor = Some(factor);
        self
    }

    /// Set the factor slot for a single indicator.
    pub fn with_factor(self, indicator: Indicator, factor: f64) -> Self {
        match indicator {
            Indicator::Co2 => self.with_co2_factor(factor),
            Indicator::Energy => self.with_energy_factor(factor),
            Indicator::Water => self.with_water_factor(factor),
            Indicator::Waste => self.with_waste_factor(factor),
            Indicator::FossilFuel => self.with_fossil_fuel_factor(factor),
        }
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    /// Whether no slot is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.description.is_none()
            && self.co2_factor.is_none()
            && self.energy_factor.is_none()
            && self.water_factor.is_none()
            && self.waste_factor.is_none()
            && self.fossil_fuel_factor.is_none()
            && self.expanded.is_none()
            && self.editable.is_none()
    }

    /// Write the set slots into `stage`, leaving every other field untouched.
    pub fn apply_to(&self, stage: &mut LifecycleStage) {
        if let Some(name) = &self.name {
            stage.name = name.clone();
        }
        if let Some(icon) = &self.icon {
            stage.icon = icon.clone();
        }
        if let Some(description) = &self.description {
            stage.description = description.clone();
        }
        if let Some(factor) = self.co2_factor {
            stage.co2_factor = factor;
        }
        if let Some(factor) = self.energy_factor {
            stage.energy_factor = factor;
        }
        if let Some(factor) = self.water_factor {
            stage.water_factor = factor;
        }
        if let Some(factor) = self.waste_factor {
            stage.waste_factor = factor;
        }
        if let Some(factor) = self.fossil_fuel_factor {
            stage.fossil_fuel_factor = factor;
        }
        if let Some(expanded) = self.expanded {
            stage.expanded = expanded;
        }
        if let Some(editable) = self.editable {
            stage.editable = editable;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stage_defaults() {
        let stage = LifecycleStage::new("use-phase", "Use Phase");

        assert_eq!(stage.id, "use-phase");
        assert_eq!(stage.name, "Use Phase");
        assert_eq!(stage.co2_factor, 0.0);
        assert_eq!(stage.fossil_fuel_factor, 0.0);
        assert!(!stage.expanded);
        assert!(stage.editable);
    }

    #[test]
    fn test_factor_selects_indicator() {
        let stage = LifecycleStage::new("manufacturing", "Material Processing")
            .with_factors(1.2, 1.5, 0.8, 0.6, 1.3);

        assert_eq!(stage.factor(Indicator::Co2), 1.2);
        assert_eq!(stage.factor(Indicator::Energy), 1.5);
        assert_eq!(stage.factor(Indicator::Water), 0.8);
        assert_eq!(stage.factor(Indicator::Waste), 0.6);
        assert_eq!(stage.factor(Indicator::FossilFuel), 1.3);
    }

    #[test]
    fn test_deserialization_defaults() {
        // Only the CO2 factor is mandatory; absent factors fall back to 0 so
        // that unauthored indicators contribute nothing.
        let stage: LifecycleStage = toml::from_str(
            r#"
            id = "farming"
            name = "Farming/Extraction"
            co2_factor = 0.6
        "#,
        )
        .unwrap();

        assert_eq!(stage.co2_factor, 0.6);
        assert_eq!(stage.energy_factor, 0.0);
        assert_eq!(stage.water_factor, 0.0);
        assert_eq!(stage.waste_factor, 0.0);
        assert_eq!(stage.fossil_fuel_factor, 0.0);
        assert!(!stage.expanded);
        assert!(stage.editable);
    }

    #[test]
    fn test_stage_def_flattens_stage_fields() {
        let def = StageDef::with_children(
            LifecycleStage::new("raw-materials", "Raw Material Sourcing")
                .with_factors(1.0, 1.0, 1.0, 0.3, 1.0),
            vec![StageDef::leaf(
                LifecycleStage::new("farming", "Farming/Extraction")
                    .with_factors(0.6, 0.65, 0.8, 0.15, 0.7),
            )],
        );

        let json = serde_json::to_value(&def).unwrap();
        // Stage fields sit at the top level of the definition, not under a
        // nested "stage" key.
        assert_eq!(json["id"], "raw-materials");
        assert_eq!(json["children"][0]["id"], "farming");

        let round_tripped: StageDef = serde_json::from_value(json).unwrap();
        assert_eq!(round_tripped, def);
    }

    #[test]
    fn test_stage_def_toml_round_trip() {
        let def = StageDef::with_children(
            LifecycleStage::new("end-of-life", "End-of-Life").with_factors(0.5, 0.3, 0.2, 1.0, 0.3),
            vec![
                StageDef::leaf(
                    LifecycleStage::new("recycling", "Recycling")
                        .with_factors(0.2, 0.15, 0.15, 0.3, 0.15),
                ),
                StageDef::leaf(
                    LifecycleStage::new("landfill", "Landfill")
                        .with_factors(0.2, 0.1, 0.0, 0.5, 0.1),
                ),
            ],
        );

        let toml_text = toml::to_string(&def).unwrap();
        let round_tripped: StageDef = toml::from_str(&toml_text).unwrap();
        assert_eq!(round_tripped, def);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(StagePatch::new().is_empty());
        assert!(!StagePatch::new().with_expanded(true).is_empty());
    }

    #[test]
    fn test_patch_applies_only_set_slots() {
        let mut stage = LifecycleStage::new("transportation", "Transportation")
            .with_factors(0.8, 0.9, 0.1, 0.05, 1.2)
            .with_icon("truck")
            .with_expanded(true);

        StagePatch::new().with_name("Logistics").apply_to(&mut stage);

        assert_eq!(stage.name, "Logistics");
        // Everything else is untouched
        assert_eq!(stage.id, "transportation");
        assert_eq!(stage.icon, "truck");
        assert_eq!(stage.co2_factor, 0.8);
        assert_eq!(stage.energy_factor, 0.9);
        assert!(stage.expanded);
        assert!(stage.editable);
    }

    #[test]
    fn test_patch_with_factor_maps_indicator() {
        let mut stage = LifecycleStage::new("s", "S");
        StagePatch::new()
            .with_factor(Indicator::Water, 0.4)
            .with_factor(Indicator::FossilFuel, 0.9)
            .apply_to(&mut stage);

        assert_eq!(stage.water_factor, 0.4);
        assert_eq!(stage.fossil_fuel_factor, 0.9);
        assert_eq!(stage.co2_factor, 0.0);
    }
}
