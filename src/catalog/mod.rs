//! Store category wiring.
//!
//! `VirtualCategory` is the record itself; `bridge` ingests categories from a
//! native platform runtime and `CategoryIndex` holds every category of a
//! store-info document for lookup by name or by good id.

pub mod bridge;
pub mod index;
pub mod model;

pub use bridge::{BridgeCategory, BridgeItemId, PlatformCategorySource};
pub use index::CategoryIndex;
pub use model::VirtualCategory;
