//! Material presets
//!
//! * `presets` - serialisable presets and the built-in lists
//! * `catalog` - ordered, selectable preset collection

pub mod catalog;
pub mod presets;

pub use catalog::MaterialCatalog;
pub use presets::{MaterialConfig, lab_presets, parse_custom_material, quick_presets};
