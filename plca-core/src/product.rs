//! The product under assessment.
//!
//! A [`Product`] bundles everything one assessment needs: the component
//! list, the lifecycle stage forest and the bound material catalog, plus
//! cached impact totals. It is a passive container; the observable mutation
//! discipline lives in [`ProductStore`](crate::store::ProductStore).

use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::component::PackagingComponent;
use crate::errors::PLCAResult;
use crate::indicator::{ImpactTotals, Indicator};
use crate::material::MaterialCatalog;
use crate::tree::StageTree;

/// The reference quantity results are expressed against.
///
/// Impact numbers are only comparable between products sharing a functional
/// unit; the unit itself never enters the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalUnit {
    /// Display label (e.g. "1000 units").
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub description: String,
}

impl FunctionalUnit {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A named starting point: a component list that can be loaded into a
/// product wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub components: Vec<PackagingComponent>,
}

/// A packaging product with its lifecycle model and bound material catalog.
///
/// The cached totals are private and only written by
/// [`recompute_totals`](Product::recompute_totals); constructing through
/// [`Product::new`] or loading through [`Product::from_toml_str`] always
/// leaves them consistent with the rest of the product. Deserializing with
/// plain serde instead of `from_toml_str` skips the recompute, so prefer the
/// latter for snapshots from outside sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Marks an in-progress design as opposed to a finished assessment.
    #[serde(default)]
    pub is_prototype: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functional_unit: Option<FunctionalUnit>,
    #[serde(default)]
    totals: ImpactTotals,
    #[serde(default)]
    pub components: Vec<PackagingComponent>,
    #[serde(default)]
    pub lifecycle: StageTree,
    #[serde(default)]
    pub materials: MaterialCatalog,
}

impl Product {
    /// Assemble a product and compute its totals.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        components: Vec<PackagingComponent>,
        lifecycle: StageTree,
        materials: MaterialCatalog,
    ) -> Self {
        let mut product = Self {
            id: id.into(),
            name: name.into(),
            is_prototype: false,
            functional_unit: None,
            totals: ImpactTotals::default(),
            components,
            lifecycle,
            materials,
        };
        product.recompute_totals();
        product
    }

    pub fn with_functional_unit(mut self, functional_unit: FunctionalUnit) -> Self {
        self.functional_unit = Some(functional_unit);
        self
    }

    pub fn with_prototype(mut self, is_prototype: bool) -> Self {
        self.is_prototype = is_prototype;
        self
    }

    /// The cached per-indicator totals, rounded to two decimals.
    pub fn totals(&self) -> ImpactTotals {
        self.totals
    }

    /// Recompute the cached totals from components, lifecycle and catalog.
    pub fn recompute_totals(&mut self) {
        self.totals = aggregate::total_impacts(&self.components, &self.lifecycle, &self.materials);
    }

    /// Look up a component by id.
    pub fn component(&self, id: &str) -> Option<&PackagingComponent> {
        self.components.iter().find(|component| component.id == id)
    }

    /// One component's rounded total for one indicator; zero for an unknown
    /// component id.
    pub fn component_impact(&self, component_id: &str, indicator: Indicator) -> f64 {
        match self.component(component_id) {
            Some(component) => {
                aggregate::component_impact(component, &self.lifecycle, &self.materials, indicator)
            }
            None => 0.0,
        }
    }

    /// One stage's rounded total for one indicator; zero for an unknown
    /// stage id.
    pub fn stage_impact(&self, stage_id: &str, indicator: Indicator) -> f64 {
        aggregate::stage_impact(
            &self.components,
            &self.lifecycle,
            &self.materials,
            stage_id,
            indicator,
        )
    }

    /// Load a product snapshot from TOML.
    ///
    /// The lifecycle forest is structurally validated and the totals are
    /// recomputed, so whatever the snapshot carried in `[totals]` is
    /// replaced by authoritative values.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML and
    /// [`PLCAError::MalformedLifecycle`](crate::PLCAError::MalformedLifecycle)
    /// or a duplicate-id error for an inconsistent forest.
    pub fn from_toml_str(content: &str) -> PLCAResult<Self> {
        let mut product: Product = toml::from_str(content)?;
        product.lifecycle.validate()?;
        product.recompute_totals();
        Ok(product)
    }

    /// Serialize the product, totals included, as a TOML snapshot.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the product cannot be represented as
    /// TOML.
    pub fn to_toml_string(&self) -> PLCAResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
