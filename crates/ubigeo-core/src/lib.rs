// crates/ubigeo-core/src/lib.rs

//! Peruvian ubigeo codes and place names.
//!
//! - [`code`]: validation and zero-padding of raw codes
//! - [`store`]: lazily-loaded reference tables
//! - [`normalize`]: free-text names to official names
//! - [`fuzzy`]: approximate matching behind the normalizer
//! - [`resolver`]: the [`Ubigeo`] query surface

pub mod code;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod store;
pub mod text;

// Re-exports
pub use crate::code::{validate_code, validate_level, GeoCode, Query};
pub use crate::error::{Result, UbigeoError};
pub use crate::fuzzy::FuzzyMatcher;
pub use crate::model::{
    DbStats, Institution, Level, MacroregionScheme, MetadataKey, MetadataRecord, MetadataValue,
};
pub use crate::normalize::{NameOptions, Normalizer, OnError};
pub use crate::resolver::{DepartmentOptions, LookupOptions, Ubigeo};
pub use crate::store::{Resource, ResourceStore};

/// Everything a typical caller needs: `use ubigeo_core::prelude::*;`
pub mod prelude {
    pub use crate::{
        DepartmentOptions, GeoCode, Institution, Level, LookupOptions, MacroregionScheme,
        MetadataKey, MetadataValue, NameOptions, OnError, Result, Ubigeo, UbigeoError,
    };
}
