//! Observable product state container.
//!
//! [`ProductStore`] is the single owner of mutable product state. Every
//! mutation funnels through one of its operations, which apply the change,
//! re-derive the five impact totals and the eco-equivalents, and hand the new
//! state to subscribed observers. Rejected mutations leave state untouched,
//! return an unchanged-state signal (`false` or `None`) and notify nobody, so
//! a UI can drive the store without wrapping every call in error handling.
//!
//! The store does no locking of its own. A multi-threaded host is expected to
//! serialize writes behind its own lock; observers are `Send + Sync` so the
//! store as a whole can live inside one.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::component::PackagingComponent;
use crate::equivalents::{compute_equivalents, EcoEquivalent};
use crate::errors::PLCAResult;
use crate::indicator::{ImpactTotals, Indicator};
use crate::material::MaterialCatalog;
use crate::product::{FunctionalUnit, Product, ProductTemplate};
use crate::stage::{LifecycleStage, StagePatch};

/// Callback interface for state-change notifications.
///
/// Observers receive the product after every applied mutation, together with
/// the freshly computed eco-equivalents. Rejected mutations do not notify.
pub trait ProductObserver: Send + Sync {
    fn product_changed(&self, product: &Product, equivalents: &[EcoEquivalent]);
}

/// The state container around one [`Product`].
///
/// Holds the live product, a pristine seed copy for [`reset`](ProductStore::reset),
/// the eco-equivalent definitions with their current computed values, the
/// loadable templates and the observer list.
///
/// ```rust
/// use plca_core::{PackagingComponent, Product, ProductStore};
///
/// let mut store = ProductStore::new(Product::new(
///     "demo",
///     "Demo",
///     Vec::new(),
///     Default::default(),
///     Default::default(),
/// ));
/// assert!(store.add_component(PackagingComponent::new("body", "Body", "pla", 25.0)));
/// assert!(!store.add_component(PackagingComponent::new("body", "Body again", "pla", 10.0)));
/// ```
pub struct ProductStore {
    product: Product,
    seed: Product,
    equivalents: Vec<EcoEquivalent>,
    templates: Vec<ProductTemplate>,
    observers: Vec<Arc<dyn ProductObserver>>,
}

impl fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductStore")
            .field("product", &self.product)
            .field("equivalents", &self.equivalents)
            .field("templates", &self.templates)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn component_rejection(component: &PackagingComponent) -> Option<&'static str> {
    if component.id.trim().is_empty() || component.name.trim().is_empty() {
        return Some("id and name must be non-empty");
    }
    if !component.weight_g.is_finite() || component.weight_g <= 0.0 {
        return Some("weight must be a positive number");
    }
    if let Some(fraction) = component.waste_fraction {
        if !fraction.is_finite() || fraction < 0.0 {
            return Some("waste fraction must be a non-negative number");
        }
    }
    None
}

impl ProductStore {
    /// Wrap a product, recomputing its totals and capturing the seed copy
    /// that [`reset`](ProductStore::reset) restores.
    pub fn new(mut product: Product) -> Self {
        product.recompute_totals();
        let seed = product.clone();
        Self {
            product,
            seed,
            equivalents: Vec::new(),
            templates: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Attach eco-equivalent definitions, computing their values against the
    /// current CO2 total.
    ///
    /// # Errors
    ///
    /// Returns [`PLCAError::InvalidConversionFactor`](crate::PLCAError::InvalidConversionFactor)
    /// if any definition has a non-positive or non-finite factor.
    pub fn with_equivalents(mut self, definitions: Vec<EcoEquivalent>) -> PLCAResult<Self> {
        for definition in &definitions {
            definition.validate()?;
        }
        self.equivalents = compute_equivalents(self.product.totals().co2, &definitions);
        Ok(self)
    }

    /// Attach the templates [`load_template`](ProductStore::load_template)
    /// can pull from.
    pub fn with_templates(mut self, templates: Vec<ProductTemplate>) -> Self {
        self.templates = templates;
        self
    }

    /// Register an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Arc<dyn ProductObserver>) {
        self.observers.push(observer);
    }

    /// The live product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// An owned copy of the live product, for report generation and other
    /// consumers that walk state outside the store.
    pub fn snapshot(&self) -> Product {
        self.product.clone()
    }

    /// The cached per-indicator totals, rounded to two decimals.
    pub fn total_impacts(&self) -> ImpactTotals {
        self.product.totals()
    }

    /// One indicator's cached total.
    pub fn total_impact(&self, indicator: Indicator) -> f64 {
        self.product.totals().get(indicator)
    }

    /// One component's rounded total for one indicator; zero for an unknown
    /// component id.
    pub fn component_impact(&self, component_id: &str, indicator: Indicator) -> f64 {
        self.product.component_impact(component_id, indicator)
    }

    /// One stage's rounded total for one indicator; zero for an unknown
    /// stage id.
    pub fn stage_impact(&self, stage_id: &str, indicator: Indicator) -> f64 {
        self.product.stage_impact(stage_id, indicator)
    }

    /// The eco-equivalents computed against the current CO2 total.
    pub fn eco_equivalents(&self) -> &[EcoEquivalent] {
        &self.equivalents
    }

    pub fn templates(&self) -> &[ProductTemplate] {
        &self.templates
    }

    /// The material catalog the product is bound to.
    pub fn materials(&self) -> &MaterialCatalog {
        &self.product.materials
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.product_changed(&self.product, &self.equivalents);
        }
    }

    // Every applied mutation that can move the numbers funnels through here:
    // recompute totals, re-derive equivalents from the rounded CO2 total,
    // then notify.
    fn refresh(&mut self) {
        self.product.recompute_totals();
        let totals = self.product.totals();
        self.equivalents = compute_equivalents(totals.co2, &self.equivalents);
        debug!(
            co2 = totals.co2,
            energy = totals.energy,
            water = totals.water,
            waste = totals.waste,
            fossil_fuel = totals.fossil_fuel,
            "Recomputed impact totals"
        );
        self.notify();
    }

    /// Add a component.
    ///
    /// Rejects blank ids or names, non-positive or non-finite weights,
    /// negative or non-finite waste fractions and ids already in use.
    pub fn add_component(&mut self, component: PackagingComponent) -> bool {
        if let Some(reason) = component_rejection(&component) {
            warn!(component = %component.id, reason, "Rejected component add");
            return false;
        }
        if self.product.component(&component.id).is_some() {
            warn!(component = %component.id, "Rejected component add; id already in use");
            return false;
        }
        self.product.components.push(component);
        self.refresh();
        true
    }

    /// Replace the component with the same id wholesale.
    ///
    /// Applies the same field validation as [`add_component`](ProductStore::add_component)
    /// and rejects unknown ids.
    pub fn update_component(&mut self, component: PackagingComponent) -> bool {
        if let Some(reason) = component_rejection(&component) {
            warn!(component = %component.id, reason, "Rejected component update");
            return false;
        }
        let Some(slot) = self
            .product
            .components
            .iter_mut()
            .find(|existing| existing.id == component.id)
        else {
            warn!(component = %component.id, "Rejected component update; no such component");
            return false;
        };
        *slot = component;
        self.refresh();
        true
    }

    /// Remove a component. An empty component list is a legal product state.
    pub fn remove_component(&mut self, id: &str) -> bool {
        let before = self.product.components.len();
        self.product.components.retain(|component| component.id != id);
        if self.product.components.len() == before {
            warn!(component = %id, "Cannot remove component; no such component");
            return false;
        }
        self.refresh();
        true
    }

    /// Clone a component under a fresh unique id and a decorated name,
    /// returning the new id.
    pub fn duplicate_component(&mut self, id: &str) -> Option<String> {
        let Some(original) = self.product.component(id).cloned() else {
            warn!(component = %id, "Cannot duplicate component; no such component");
            return None;
        };
        let mut copy = original;
        copy.id = self.fresh_component_id(id);
        copy.name = format!("{} (copy)", copy.name);
        let new_id = copy.id.clone();
        self.product.components.push(copy);
        self.refresh();
        Some(new_id)
    }

    fn fresh_component_id(&self, base: &str) -> String {
        let mut candidate = format!("{base}-copy");
        let mut counter = 2;
        while self.product.component(&candidate).is_some() {
            candidate = format!("{base}-copy-{counter}");
            counter += 1;
        }
        candidate
    }

    /// Add a stage, as a root when `parent` is `None`.
    ///
    /// Rejects blank identities, duplicate ids and unknown parents.
    pub fn add_stage(&mut self, parent: Option<&str>, stage: LifecycleStage) -> bool {
        match self.product.lifecycle.insert(parent, stage) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(error) => {
                warn!(error = %error, "Rejected stage add");
                false
            }
        }
    }

    /// Patch a stage. Rejects unknown ids, stages marked not editable and
    /// patches that would blank the name.
    pub fn update_stage(&mut self, id: &str, patch: &StagePatch) -> bool {
        if patch.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            warn!(stage = %id, "Rejected stage update; name cannot be blank");
            return false;
        }
        match self.product.lifecycle.get(id) {
            Some(stage) if !stage.editable => {
                warn!(stage = %id, "Rejected stage update; stage is locked");
                return false;
            }
            Some(_) => {}
            None => {
                warn!(stage = %id, "Rejected stage update; no such stage");
                return false;
            }
        }
        self.product.lifecycle.update(id, patch);
        self.refresh();
        true
    }

    /// Remove a stage and its subtree. Rejects unknown ids and stages marked
    /// not editable.
    pub fn remove_stage(&mut self, id: &str) -> bool {
        match self.product.lifecycle.get(id) {
            Some(stage) if !stage.editable => {
                warn!(stage = %id, "Rejected stage removal; stage is locked");
                return false;
            }
            Some(_) => {}
            None => {
                warn!(stage = %id, "Rejected stage removal; no such stage");
                return false;
            }
        }
        self.product.lifecycle.remove(id);
        self.refresh();
        true
    }

    /// Flip a stage's expanded flag. Locked stages may still be folded and
    /// unfolded; only their data is protected.
    pub fn toggle_expand_stage(&mut self, id: &str) -> bool {
        if self.product.lifecycle.toggle_expanded(id) {
            self.refresh();
            true
        } else {
            warn!(stage = %id, "Cannot toggle stage; no such stage");
            false
        }
    }

    /// Unfold or fold every stage in the forest.
    pub fn set_all_expanded(&mut self, expanded: bool) {
        self.product.lifecycle.set_all_expanded(expanded);
        self.refresh();
    }

    /// Replace the functional unit. The unit never enters the arithmetic, so
    /// observers are notified without a recompute.
    pub fn set_functional_unit(&mut self, functional_unit: FunctionalUnit) {
        self.product.functional_unit = Some(functional_unit);
        self.notify();
    }

    /// Replace the component list and product name from a template, leaving
    /// the stage forest as it is.
    pub fn load_template(&mut self, template_id: &str) -> bool {
        let Some(template) = self
            .templates
            .iter()
            .find(|template| template.id == template_id)
            .cloned()
        else {
            warn!(template = %template_id, "Cannot load template; no such template");
            return false;
        };
        info!(template = %template.id, name = %template.name, "Loading product template");
        self.product.name = template.name;
        self.product.components = template.components;
        self.refresh();
        true
    }

    /// Restore the product captured at construction time.
    pub fn reset(&mut self) {
        info!(product = %self.seed.id, "Resetting product to its seeded state");
        self.product = self.seed.clone();
        self.refresh();
    }
}
