//! Companion and companion-skin descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for a companion (`Pet` class).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetStruct {
    pub type_id: u16,
    pub family: Option<String>,
    pub rarity: Option<String>,
    pub default_skin: Option<String>,
    pub size: i64,
}

impl PetStruct {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(PetStruct {
            type_id,
            family: elem.get_str("Family").map(str::to_string),
            rarity: elem.get_str("Rarity").map(str::to_string),
            default_skin: elem.get_str("DefaultSkin").map(str::to_string),
            size: elem
                .get_i64("Size")
                .map_err(|e| DescriptorError::invalid("Size", e))?
                .unwrap_or(100),
        })
    }
}

/// Descriptor for an alternate companion appearance (`PetSkin` class).
///
/// Unlike every other descriptor kind this one is looked up by StringId,
/// not TypeId.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSkin {
    pub type_id: u16,
    pub skin_id: u16,
    pub unlock_level: Option<i64>,
}

impl PetSkin {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(PetSkin {
            type_id,
            skin_id: elem
                .get_u16("SkinId")
                .map_err(|e| DescriptorError::invalid("SkinId", e))?
                .unwrap_or(0),
            unlock_level: elem
                .get_i64("UnlockLevel")
                .map_err(|e| DescriptorError::invalid("UnlockLevel", e))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_fields() {
        let e = Element::from_yaml(r#"
Class: Pet
Family: Feline
Rarity: Legendary
DefaultSkin: Snow Leopard
Size: 120
"#)
        .unwrap();
        let pet = PetStruct::new(0x0a00, &e).unwrap();
        assert_eq!(pet.family.as_deref(), Some("Feline"));
        assert_eq!(pet.rarity.as_deref(), Some("Legendary"));
        assert_eq!(pet.default_skin.as_deref(), Some("Snow Leopard"));
        assert_eq!(pet.size, 120);
    }

    #[test]
    fn test_pet_size_default() {
        let e = Element::from_yaml("Class: Pet").unwrap();
        assert_eq!(PetStruct::new(1, &e).unwrap().size, 100);
    }

    #[test]
    fn test_pet_skin_fields() {
        let e = Element::from_yaml(r#"
Class: PetSkin
SkinId: "0x12"
UnlockLevel: 30
"#)
        .unwrap();
        let skin = PetSkin::new(0x0a10, &e).unwrap();
        assert_eq!(skin.skin_id, 0x12);
        assert_eq!(skin.unlock_level, Some(30));

        let bare = Element::from_yaml("Class: PetSkin").unwrap();
        let skin = PetSkin::new(1, &bare).unwrap();
        assert_eq!(skin.skin_id, 0);
        assert_eq!(skin.unlock_level, None);
    }
}
