//! The in-memory asset registry.
//!
//! A registry is built once by the `load` module and read-only afterwards.
//! It holds the retained raw elements, the bidirectional id/type indexes
//! for the object and tile namespaces, one lookup table per descriptor
//! kind, and the diagnostics observed during the load.

mod index;

pub(crate) use index::Collision;
use index::{normalize, TypeIdIndex};

use std::collections::HashMap;
use std::fmt;

use crate::descriptor::{
    Descriptor, DescriptorError, Item, ObjectDesc, PetSkin, PetStruct, PortalDesc, SetTypeSkin,
    TileDesc,
};
use crate::document::{Element, ElementKind};

/// A non-fatal condition observed during a load.
///
/// Diagnostics are logged as they happen and kept on the registry so
/// callers can inspect them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A TypeId was re-declared with a different StringId.
    DuplicateType {
        kind: ElementKind,
        type_id: u16,
        old_id: String,
        new_id: String,
    },
    /// A StringId was re-declared with a different TypeId.
    DuplicateId {
        kind: ElementKind,
        id: String,
        old_type: u16,
        new_type: u16,
    },
    /// A descriptor constructor failed; the element keeps its identity
    /// registrations but contributes no descriptor.
    DescriptorFailed {
        kind: ElementKind,
        type_id: u16,
        id: String,
        error: DescriptorError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateType {
                kind,
                type_id,
                old_id,
                new_id,
            } => write!(
                f,
                "duplicate {kind} type 0x{type_id:04x}: `{old_id}` replaced by `{new_id}`"
            ),
            Diagnostic::DuplicateId {
                kind,
                id,
                old_type,
                new_type,
            } => write!(
                f,
                "duplicate {kind} id `{id}`: 0x{old_type:04x} replaced by 0x{new_type:04x}"
            ),
            Diagnostic::DescriptorFailed {
                kind,
                type_id,
                id,
                error,
            } => write!(
                f,
                "dropped {kind} descriptor for `{id}` (0x{type_id:04x}): {error}"
            ),
        }
    }
}

/// Every lookup view over the loaded asset data.
///
/// Built only by the `load` module; there is no public constructor.
#[derive(Debug)]
pub struct AssetRegistry {
    objects: TypeIdIndex,
    tiles: TypeIdIndex,
    object_elements: HashMap<u16, Element>,
    tile_elements: HashMap<u16, Element>,
    tiles_by_type: HashMap<u16, TileDesc>,
    items: HashMap<u16, Item>,
    object_descs: HashMap<u16, ObjectDesc>,
    portals: HashMap<u16, PortalDesc>,
    pets: HashMap<u16, PetStruct>,
    pet_skins: HashMap<String, PetSkin>,
    set_skins: HashMap<u16, SetTypeSkin>,
    diagnostics: Vec<Diagnostic>,
    pending: usize,
    watermark: Option<usize>,
}

impl AssetRegistry {
    pub(crate) fn new() -> Self {
        AssetRegistry {
            objects: TypeIdIndex::default(),
            tiles: TypeIdIndex::default(),
            object_elements: HashMap::new(),
            tile_elements: HashMap::new(),
            tiles_by_type: HashMap::new(),
            items: HashMap::new(),
            object_descs: HashMap::new(),
            portals: HashMap::new(),
            pets: HashMap::new(),
            pet_skins: HashMap::new(),
            set_skins: HashMap::new(),
            diagnostics: Vec::new(),
            pending: 0,
            watermark: None,
        }
    }

    /// Retained object elements, keyed by TypeId.
    pub fn object_elements(&self) -> &HashMap<u16, Element> {
        &self.object_elements
    }

    pub fn object_type_to_id(&self) -> &HashMap<u16, String> {
        self.objects.type_to_id()
    }

    /// Reverse object index. Keys are normalized to lowercase.
    pub fn id_to_object_type(&self) -> &HashMap<String, u16> {
        self.objects.id_to_type()
    }

    /// Retained tile elements, keyed by TypeId.
    pub fn tile_elements(&self) -> &HashMap<u16, Element> {
        &self.tile_elements
    }

    pub fn tile_type_to_id(&self) -> &HashMap<u16, String> {
        self.tiles.type_to_id()
    }

    /// Reverse tile index. Keys are normalized to lowercase.
    pub fn id_to_tile_type(&self) -> &HashMap<String, u16> {
        self.tiles.id_to_type()
    }

    pub fn tiles(&self) -> &HashMap<u16, TileDesc> {
        &self.tiles_by_type
    }

    pub fn items(&self) -> &HashMap<u16, Item> {
        &self.items
    }

    pub fn object_descs(&self) -> &HashMap<u16, ObjectDesc> {
        &self.object_descs
    }

    pub fn portals(&self) -> &HashMap<u16, PortalDesc> {
        &self.portals
    }

    pub fn pets(&self) -> &HashMap<u16, PetStruct> {
        &self.pets
    }

    /// Pet skins, keyed by normalized StringId.
    pub fn pet_skins(&self) -> &HashMap<String, PetSkin> {
        &self.pet_skins
    }

    pub fn set_skins(&self) -> &HashMap<u16, SetTypeSkin> {
        &self.set_skins
    }

    /// Resolve an object StringId, case-insensitively.
    pub fn object_type_of(&self, id: &str) -> Option<u16> {
        self.objects.get_type(id)
    }

    /// The StringId an object TypeId currently resolves to, in its
    /// declared casing.
    pub fn object_id_of(&self, type_id: u16) -> Option<&str> {
        self.objects.get_id(type_id)
    }

    /// Resolve a tile StringId, case-insensitively.
    pub fn tile_type_of(&self, id: &str) -> Option<u16> {
        self.tiles.get_type(id)
    }

    pub fn tile_id_of(&self, type_id: u16) -> Option<&str> {
        self.tiles.get_id(type_id)
    }

    /// Look up a pet skin by StringId, case-insensitively.
    pub fn pet_skin(&self, id: &str) -> Option<&PetSkin> {
        self.pet_skins.get(&normalize(id))
    }

    /// Everything non-fatal the load had to say.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// How many ext-flagged elements the load saw.
    pub fn pending_updates(&self) -> usize {
        self.pending
    }

    /// Compare the pending-update count against the last observed value,
    /// advancing the watermark. The first call always reports a change.
    pub fn check_updates(&mut self) -> bool {
        let changed = self.watermark != Some(self.pending);
        self.watermark = Some(self.pending);
        changed
    }

    pub(crate) fn register_object(
        &mut self,
        type_id: u16,
        id: &str,
        elem: Element,
    ) -> Vec<Collision> {
        let collisions = self.objects.insert(type_id, id);
        self.object_elements.insert(type_id, elem);
        collisions
    }

    pub(crate) fn register_tile(
        &mut self,
        type_id: u16,
        id: &str,
        elem: Element,
    ) -> Vec<Collision> {
        let collisions = self.tiles.insert(type_id, id);
        self.tile_elements.insert(type_id, elem);
        collisions
    }

    /// Route a built descriptor into its view. Later writes win.
    pub(crate) fn insert_descriptor(&mut self, id: &str, desc: Descriptor) {
        match desc {
            Descriptor::Item(item) => {
                self.items.insert(item.type_id, item);
            }
            Descriptor::Object(obj) => {
                self.object_descs.insert(obj.type_id, obj);
            }
            Descriptor::Portal(portal) => {
                self.portals.insert(portal.type_id, portal);
            }
            Descriptor::Pet(pet) => {
                self.pets.insert(pet.type_id, pet);
            }
            Descriptor::PetSkin(skin) => {
                self.pet_skins.insert(normalize(id), skin);
            }
            Descriptor::Tile(tile) => {
                self.tiles_by_type.insert(tile.type_id, tile);
            }
            Descriptor::SetSkin(skin) => {
                self.set_skins.insert(skin.type_id, skin);
            }
        }
    }

    pub(crate) fn object_element_mut(&mut self, type_id: u16) -> Option<&mut Element> {
        self.object_elements.get_mut(&type_id)
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn note_pending_update(&mut self) {
        self.pending += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = AssetRegistry::new();
        assert!(registry.object_elements().is_empty());
        assert!(registry.tile_elements().is_empty());
        assert!(registry.items().is_empty());
        assert!(registry.pet_skins().is_empty());
        assert!(registry.diagnostics().is_empty());
        assert_eq!(registry.pending_updates(), 0);
    }

    #[test]
    fn test_point_lookups_normalize_case() {
        let mut registry = AssetRegistry::new();
        let elem = Element::from_yaml("id: Ring of Vigor").unwrap();
        registry.register_object(0x0c01, "Ring of Vigor", elem);

        assert_eq!(registry.object_type_of("ring of vigor"), Some(0x0c01));
        assert_eq!(registry.object_type_of("RING OF VIGOR"), Some(0x0c01));
        assert_eq!(registry.object_id_of(0x0c01), Some("Ring of Vigor"));
        assert!(registry.id_to_object_type().contains_key("ring of vigor"));
    }

    #[test]
    fn test_pet_skin_lookup_normalizes() {
        let mut registry = AssetRegistry::new();
        let elem = Element::from_yaml("Class: PetSkin\nSkinId: 2").unwrap();
        let skin = crate::descriptor::PetSkin::new(7, &elem).unwrap();
        registry.insert_descriptor("Snowy Cat", Descriptor::PetSkin(skin));

        assert!(registry.pet_skin("snowy cat").is_some());
        assert!(registry.pet_skin("SNOWY CAT").is_some());
        assert!(registry.pet_skin("snowy dog").is_none());
    }

    #[test]
    fn test_check_updates_watermark() {
        let mut registry = AssetRegistry::new();
        // First check always reports a change, even at zero.
        assert!(registry.check_updates());
        assert!(!registry.check_updates());

        registry.note_pending_update();
        registry.note_pending_update();
        assert_eq!(registry.pending_updates(), 2);
        assert!(registry.check_updates());
        assert!(!registry.check_updates());
    }

    #[test]
    fn test_object_and_tile_namespaces_are_independent() {
        let mut registry = AssetRegistry::new();
        let obj = Element::from_yaml("id: Grass").unwrap();
        let tile = Element::from_yaml("id: Grass").unwrap();
        registry.register_object(0x0100, "Grass", obj);
        registry.register_tile(0x0036, "Grass", tile);

        assert_eq!(registry.object_type_of("grass"), Some(0x0100));
        assert_eq!(registry.tile_type_of("grass"), Some(0x0036));
        assert!(registry.diagnostics().is_empty());
    }
}
