//! Built-in reference data for packaging lifecycle assessment: the material
//! catalog, the default lifecycle forest, eco-equivalent definitions,
//! product templates and the seeded default product.

pub mod defaults;
pub mod equivalents;
pub mod lifecycle;
pub mod materials;
pub mod templates;

pub use defaults::{default_components, default_functional_unit, default_product, default_store};
pub use equivalents::builtin_equivalents;
pub use lifecycle::default_lifecycle;
pub use materials::{builtin_catalog, builtin_materials};
pub use templates::builtin_templates;
