//! Lifecycle environmental impact modelling for packaging products.
//!
//! This crate bundles the building blocks for estimating the environmental
//! footprint of a packaging design across its whole lifecycle:
//!
//! * [`plca_core`] holds the data model (materials, components, lifecycle
//!   stages), the impact aggregation engine and the observable product store.
//! * [`plca_presets`] ships a ready-made material catalog, a default lifecycle
//!   forest, eco-equivalent definitions and a handful of product templates.
//!
//! Most applications only need the re-exports below:
//!
//! ```rust
//! use plca::{default_store, Indicator};
//!
//! let store = default_store();
//! let totals = store.total_impacts();
//! assert_eq!(totals.get(Indicator::Co2), totals.co2);
//! ```

pub use plca_core::{
    aggregate, compute_equivalents, EcoEquivalent, FunctionalUnit, ImpactTotals, Indicator,
    LifecycleStage, Material, MaterialCatalog, MaterialCategory, Origin, PLCAError, PLCAResult,
    PackagingComponent, Product, ProductObserver, ProductStore, ProductTemplate, StageDef,
    StagePatch, StageTree,
};
pub use plca_presets::{
    builtin_catalog, builtin_equivalents, builtin_materials, builtin_templates,
    default_components, default_functional_unit, default_lifecycle, default_product,
    default_store,
};
