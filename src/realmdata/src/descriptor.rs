//! Typed descriptors built from asset elements.
//!
//! Every object element carries a `Class` tag that decides which descriptor
//! kind it produces, if any. Construction reads fields leniently with
//! defaults; a failure (a missing required field, a garbled number) is
//! reported to the caller and never aborts a load.

mod item;
mod object;
mod pet;
mod portal;
mod set;
mod tile;

pub use item::Item;
pub use object::ObjectDesc;
pub use pet::{PetSkin, PetStruct};
pub use portal::PortalDesc;
pub use set::SetTypeSkin;
pub use tile::TileDesc;

use thiserror::Error;

use crate::document::Element;
use crate::literal::LiteralError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value for field `{field}`: {source}")]
    InvalidField {
        field: &'static str,
        source: LiteralError,
    },
}

impl DescriptorError {
    pub(crate) fn invalid(field: &'static str, source: LiteralError) -> Self {
        DescriptorError::InvalidField { field, source }
    }
}

/// Classification tag read from an object element's `Class` field.
///
/// Matching is exact; anything unrecognized is `Other` and still produces
/// a generic object descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Equipment,
    Dye,
    Portal,
    GuildHallPortal,
    Pet,
    PetSkin,
    PetBehavior,
    PetAbility,
    Other,
}

impl ObjectClass {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "Equipment" => ObjectClass::Equipment,
            "Dye" => ObjectClass::Dye,
            "Portal" => ObjectClass::Portal,
            "GuildHallPortal" => ObjectClass::GuildHallPortal,
            "Pet" => ObjectClass::Pet,
            "PetSkin" => ObjectClass::PetSkin,
            "PetBehavior" => ObjectClass::PetBehavior,
            "PetAbility" => ObjectClass::PetAbility,
            _ => ObjectClass::Other,
        }
    }

    /// Behavior and ability entries describe pet logic, not assets, and
    /// are skipped entirely during ingestion.
    pub fn is_behavior(self) -> bool {
        matches!(self, ObjectClass::PetBehavior | ObjectClass::PetAbility)
    }
}

/// A constructed descriptor, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Item(Item),
    Object(ObjectDesc),
    Portal(PortalDesc),
    Pet(PetStruct),
    PetSkin(PetSkin),
    Tile(TileDesc),
    SetSkin(SetTypeSkin),
}

impl Descriptor {
    /// Map an object classification to its descriptor constructor.
    ///
    /// Behavior and ability classes yield no descriptor at all and return
    /// `None`. Every other class maps to exactly one kind. Tile and
    /// set-skin descriptors are not classified; their ingestion passes
    /// construct them directly.
    pub fn build(
        class: ObjectClass,
        type_id: u16,
        elem: &Element,
    ) -> Option<Result<Descriptor, DescriptorError>> {
        match class {
            ObjectClass::PetBehavior | ObjectClass::PetAbility => None,
            ObjectClass::Equipment | ObjectClass::Dye => {
                Some(Item::new(type_id, elem).map(Descriptor::Item))
            }
            ObjectClass::Portal | ObjectClass::GuildHallPortal => {
                Some(PortalDesc::new(type_id, elem).map(Descriptor::Portal))
            }
            ObjectClass::Pet => Some(PetStruct::new(type_id, elem).map(Descriptor::Pet)),
            ObjectClass::PetSkin => Some(PetSkin::new(type_id, elem).map(Descriptor::PetSkin)),
            ObjectClass::Other => Some(ObjectDesc::new(type_id, elem).map(Descriptor::Object)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(text: &str) -> Element {
        Element::from_yaml(text).unwrap()
    }

    #[test]
    fn test_class_parse_is_exact() {
        assert_eq!(ObjectClass::parse("Equipment"), ObjectClass::Equipment);
        assert_eq!(ObjectClass::parse("GuildHallPortal"), ObjectClass::GuildHallPortal);
        assert_eq!(ObjectClass::parse("equipment"), ObjectClass::Other);
        assert_eq!(ObjectClass::parse("Character"), ObjectClass::Other);
    }

    #[test]
    fn test_behavior_classes_build_nothing() {
        let e = elem("Class: PetBehavior");
        assert!(Descriptor::build(ObjectClass::PetBehavior, 1, &e).is_none());
        assert!(Descriptor::build(ObjectClass::PetAbility, 1, &e).is_none());
    }

    #[test]
    fn test_dispatch_covers_every_class() {
        let item = elem("Class: Equipment\nSlotType: 9");
        match Descriptor::build(ObjectClass::Equipment, 1, &item) {
            Some(Ok(Descriptor::Item(_))) => {}
            other => panic!("expected item, got {other:?}"),
        }
        match Descriptor::build(ObjectClass::Dye, 2, &elem("Class: Dye")) {
            Some(Ok(Descriptor::Item(_))) => {}
            other => panic!("expected item, got {other:?}"),
        }

        let portal = elem("Class: Portal\nDungeonName: Abyss of Demons");
        match Descriptor::build(ObjectClass::Portal, 3, &portal) {
            Some(Ok(Descriptor::Portal(_))) => {}
            other => panic!("expected portal, got {other:?}"),
        }

        match Descriptor::build(ObjectClass::Pet, 4, &elem("Class: Pet")) {
            Some(Ok(Descriptor::Pet(_))) => {}
            other => panic!("expected pet, got {other:?}"),
        }
        match Descriptor::build(ObjectClass::PetSkin, 5, &elem("Class: PetSkin")) {
            Some(Ok(Descriptor::PetSkin(_))) => {}
            other => panic!("expected pet skin, got {other:?}"),
        }
        match Descriptor::build(ObjectClass::Other, 6, &elem("Class: Character")) {
            Some(Ok(Descriptor::Object(_))) => {}
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_portal_failure_surfaces_as_error() {
        let portal = elem("Class: Portal");
        match Descriptor::build(ObjectClass::Portal, 7, &portal) {
            Some(Err(DescriptorError::MissingField("DungeonName"))) => {}
            other => panic!("expected missing DungeonName, got {other:?}"),
        }
    }
}
