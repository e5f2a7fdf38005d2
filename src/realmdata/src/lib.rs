//! # realmdata
//!
//! Game asset registry library - document ingestion, typed descriptors,
//! and id/type resolution.
//!
//! This library provides functionality to:
//! - Load game asset definitions from a tree of YAML documents
//! - Classify object elements and build typed descriptors
//! - Resolve 16-bit TypeIds and case-insensitive StringIds in both
//!   directions
//! - Surface duplicate keys and dropped descriptors as diagnostics
//!   instead of failures
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load every .yaml document under the data directory
//! let registry = realmdata::load_dir(Path::new("data"))?;
//!
//! // Resolve identities in either direction
//! let type_id = registry.object_type_of("Ring of Dexterity");
//! println!("Ring of Dexterity -> {type_id:?}");
//! if let Some(type_id) = type_id {
//!     println!("{type_id:#06x} -> {:?}", registry.object_id_of(type_id));
//! }
//!
//! // Inspect typed descriptor views
//! for (type_id, item) in registry.items() {
//!     println!("{type_id:#06x} tier {:?}", item.tier);
//! }
//! for diagnostic in registry.diagnostics() {
//!     eprintln!("warning: {diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod document;
pub mod literal;
pub mod load;
pub mod registry;

// Re-export commonly used items
#[doc(inline)]
pub use descriptor::{
    Descriptor, DescriptorError, Item, ObjectClass, ObjectDesc, PetSkin, PetStruct, PortalDesc,
    SetTypeSkin, TileDesc,
};
#[doc(inline)]
pub use document::{Document, DocumentError, Element, ElementKind};
#[doc(inline)]
pub use literal::{parse_i64, parse_u16, LiteralError};
#[doc(inline)]
pub use load::{from_documents, load_dir, LoadError};
#[doc(inline)]
pub use registry::{AssetRegistry, Diagnostic};
