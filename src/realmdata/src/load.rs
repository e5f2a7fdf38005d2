//! Document ingestion.
//!
//! Ingestion walks each document in three fixed passes (objects, grounds,
//! equipment sets) and fills an [`AssetRegistry`]. Unreadable directories
//! or files, malformed documents, and malformed identity attributes abort
//! the whole load; everything else (duplicate keys, descriptor
//! construction failures) is logged, recorded as a [`Diagnostic`], and
//! skipped past.

use std::path::Path;

use log::{info, warn};
use serde_yaml::Value;
use thiserror::Error;

use crate::descriptor::{Descriptor, DescriptorError, ObjectClass, SetTypeSkin, TileDesc};
use crate::document::{Document, DocumentError, Element, ElementKind};
use crate::literal::LiteralError;
use crate::registry::{AssetRegistry, Collision, Diagnostic};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Failed to scan asset directory: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("{kind} element has no `id` attribute")]
    MissingId { kind: ElementKind },

    #[error("{kind} element `{id}` has no usable `type` attribute")]
    MissingType { kind: ElementKind, id: String },

    #[error("{kind} element `{id}` has a malformed `{attr}` attribute: {source}")]
    InvalidAttribute {
        kind: ElementKind,
        id: String,
        attr: &'static str,
        source: LiteralError,
    },
}

/// Load every `.yaml` document under `base` into a fresh registry.
pub fn load_dir(base: &Path) -> Result<AssetRegistry, LoadError> {
    let documents = collect_documents(base)?;
    info!(
        "loading {} asset documents from {}",
        documents.len(),
        base.display()
    );
    from_documents(&documents)
}

/// Build a registry from already-parsed documents, in the order given.
///
/// On error nothing escapes; there is no partially filled registry to
/// observe.
pub fn from_documents(documents: &[Document]) -> Result<AssetRegistry, LoadError> {
    let mut registry = AssetRegistry::new();
    for doc in documents {
        ingest_document(&mut registry, doc)?;
    }
    info!(
        "loaded {} objects, {} tiles, {} items, {} portals, {} pets, {} pet skins, {} set skins ({} diagnostics, {} pending updates)",
        registry.object_elements().len(),
        registry.tile_elements().len(),
        registry.items().len(),
        registry.portals().len(),
        registry.pets().len(),
        registry.pet_skins().len(),
        registry.set_skins().len(),
        registry.diagnostics().len(),
        registry.pending_updates(),
    );
    Ok(registry)
}

fn collect_documents(base: &Path) -> Result<Vec<Document>, LoadError> {
    let mut documents = Vec::new();
    // A directory that cannot be enumerated is as fatal as a file that
    // cannot be read.
    for entry in walkdir::WalkDir::new(base).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);
        if is_yaml {
            documents.push(Document::from_file(path)?);
        }
    }
    Ok(documents)
}

fn ingest_document(registry: &mut AssetRegistry, doc: &Document) -> Result<(), LoadError> {
    if let Some(path) = doc.path() {
        info!("ingesting {}", path.display());
    }
    for elem in doc.select(ElementKind::Object) {
        ingest_object(registry, elem)?;
    }
    for elem in doc.select(ElementKind::Ground) {
        ingest_ground(registry, elem)?;
    }
    for elem in doc.select(ElementKind::EquipmentSet) {
        ingest_set(registry, &elem)?;
    }
    Ok(())
}

fn ingest_object(registry: &mut AssetRegistry, elem: Element) -> Result<(), LoadError> {
    // Elements without a classification are templates, not assets.
    let Some(class_tag) = elem.get_str("Class") else {
        return Ok(());
    };
    let class = ObjectClass::parse(class_tag);

    let id = elem
        .get_str("id")
        .ok_or(LoadError::MissingId {
            kind: ElementKind::Object,
        })?
        .to_string();
    let type_id = resolve_object_type(registry, &elem, &id)?;

    if class.is_behavior() {
        return Ok(());
    }

    let ext = is_ext(&elem);
    let had_type = elem.has("type");
    let built = Descriptor::build(class, type_id, &elem);

    for collision in registry.register_object(type_id, &id, elem) {
        record_collision(registry, ElementKind::Object, collision);
    }

    match built {
        Some(Ok(desc)) => registry.insert_descriptor(&id, desc),
        Some(Err(error)) => record_descriptor_failure(
            registry,
            ElementKind::Object,
            type_id,
            id.clone(),
            error,
        ),
        None => {}
    }

    if ext {
        // Patch elements that omitted their type get it written into the
        // retained copy, so re-exports carry the resolved binding.
        if !had_type {
            if let Some(stored) = registry.object_element_mut(type_id) {
                stored.set("type", Value::Number(type_id.into()));
            }
        }
        registry.note_pending_update();
    }

    Ok(())
}

fn ingest_ground(registry: &mut AssetRegistry, elem: Element) -> Result<(), LoadError> {
    let id = elem
        .get_str("id")
        .ok_or(LoadError::MissingId {
            kind: ElementKind::Ground,
        })?
        .to_string();
    let type_id = require_type(&elem, ElementKind::Ground, &id)?;

    let ext = is_ext(&elem);
    let built = TileDesc::new(type_id, &elem);

    for collision in registry.register_tile(type_id, &id, elem) {
        record_collision(registry, ElementKind::Ground, collision);
    }

    match built {
        Ok(tile) => registry.insert_descriptor(&id, Descriptor::Tile(tile)),
        Err(error) => record_descriptor_failure(
            registry,
            ElementKind::Ground,
            type_id,
            id.clone(),
            error,
        ),
    }

    if ext {
        registry.note_pending_update();
    }

    Ok(())
}

fn ingest_set(registry: &mut AssetRegistry, elem: &Element) -> Result<(), LoadError> {
    let id = elem
        .get_str("id")
        .ok_or(LoadError::MissingId {
            kind: ElementKind::EquipmentSet,
        })?
        .to_string();
    let type_id = require_type(elem, ElementKind::EquipmentSet, &id)?;

    // Set skins keep no id/type index and never report duplicates; a
    // later declaration simply wins.
    match SetTypeSkin::new(type_id, elem) {
        Ok(skin) => registry.insert_descriptor(&id, Descriptor::SetSkin(skin)),
        Err(error) => record_descriptor_failure(
            registry,
            ElementKind::EquipmentSet,
            type_id,
            id.clone(),
            error,
        ),
    }

    if is_ext(elem) {
        registry.note_pending_update();
    }

    Ok(())
}

fn is_ext(elem: &Element) -> bool {
    elem.get_bool("ext") == Some(true)
}

/// Resolve an object element's TypeId. Patch elements (`ext`) may omit
/// `type` when their id is already bound; anything else must declare it.
fn resolve_object_type(
    registry: &AssetRegistry,
    elem: &Element,
    id: &str,
) -> Result<u16, LoadError> {
    if is_ext(elem) && !elem.has("type") {
        if let Some(type_id) = registry.object_type_of(id) {
            return Ok(type_id);
        }
    }
    require_type(elem, ElementKind::Object, id)
}

fn require_type(elem: &Element, kind: ElementKind, id: &str) -> Result<u16, LoadError> {
    match elem.get_u16("type") {
        Ok(Some(type_id)) => Ok(type_id),
        Ok(None) => Err(LoadError::MissingType {
            kind,
            id: id.to_string(),
        }),
        Err(source) => Err(LoadError::InvalidAttribute {
            kind,
            id: id.to_string(),
            attr: "type",
            source,
        }),
    }
}

fn record_collision(registry: &mut AssetRegistry, kind: ElementKind, collision: Collision) {
    let diagnostic = match collision {
        Collision::Type {
            type_id,
            old_id,
            new_id,
        } => Diagnostic::DuplicateType {
            kind,
            type_id,
            old_id,
            new_id,
        },
        Collision::Id {
            id,
            old_type,
            new_type,
        } => Diagnostic::DuplicateId {
            kind,
            id,
            old_type,
            new_type,
        },
    };
    warn!("{diagnostic}");
    registry.push_diagnostic(diagnostic);
}

fn record_descriptor_failure(
    registry: &mut AssetRegistry,
    kind: ElementKind,
    type_id: u16,
    id: String,
    error: DescriptorError,
) {
    let diagnostic = Diagnostic::DescriptorFailed {
        kind,
        type_id,
        id,
        error,
    };
    warn!("{diagnostic}");
    registry.push_diagnostic(diagnostic);
}
