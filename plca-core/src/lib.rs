//! Core engine for multi-indicator packaging lifecycle assessment:
//! materials, components, the stage forest, aggregation and the observable
//! product store.

pub mod aggregate;
pub mod component;
pub mod equivalents;
pub mod errors;
pub mod indicator;
pub mod material;
pub mod product;
pub mod stage;
pub mod store;
pub mod tree;

pub use component::{PackagingComponent, DEFAULT_WASTE_FRACTION};
pub use equivalents::{compute_equivalents, EcoEquivalent};
pub use errors::{PLCAError, PLCAResult};
pub use indicator::{ImpactTotals, Indicator};
pub use material::{Material, MaterialCatalog, MaterialCategory, Origin};
pub use product::{FunctionalUnit, Product, ProductTemplate};
pub use stage::{LifecycleStage, StageDef, StagePatch};
pub use store::{ProductObserver, ProductStore};
pub use tree::StageTree;
