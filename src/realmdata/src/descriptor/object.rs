//! Generic object descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for any object class without a more specific kind:
/// characters, walls, props, and the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDesc {
    pub type_id: u16,
    /// The raw `Class` tag, kept so unrecognized classes stay queryable.
    pub class: String,
    pub max_hit_points: Option<i64>,
    pub defense: Option<i64>,
    pub enemy: bool,
    pub static_object: bool,
    pub occupy_square: bool,
    pub blocks_sight: bool,
}

impl ObjectDesc {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(ObjectDesc {
            type_id,
            class: elem.get_str("Class").unwrap_or_default().to_string(),
            max_hit_points: elem
                .get_i64("MaxHitPoints")
                .map_err(|e| DescriptorError::invalid("MaxHitPoints", e))?,
            defense: elem
                .get_i64("Defense")
                .map_err(|e| DescriptorError::invalid("Defense", e))?,
            enemy: elem.get_flag("Enemy"),
            static_object: elem.get_flag("Static"),
            occupy_square: elem.get_flag("OccupySquare"),
            blocks_sight: elem.get_flag("BlocksSight"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_raw_class() {
        let e = Element::from_yaml(r#"
Class: Character
MaxHitPoints: 5000
Defense: 30
Enemy: ~
"#)
        .unwrap();
        let desc = ObjectDesc::new(0x0500, &e).unwrap();
        assert_eq!(desc.class, "Character");
        assert_eq!(desc.max_hit_points, Some(5000));
        assert_eq!(desc.defense, Some(30));
        assert!(desc.enemy);
        assert!(!desc.static_object);
    }

    #[test]
    fn test_object_hex_hit_points() {
        let e = Element::from_yaml(r#"
Class: Wall
MaxHitPoints: "0x64"
Static: ~
OccupySquare: ~
BlocksSight: ~
"#)
        .unwrap();
        let desc = ObjectDesc::new(1, &e).unwrap();
        assert_eq!(desc.max_hit_points, Some(100));
        assert!(desc.static_object);
        assert!(desc.occupy_square);
        assert!(desc.blocks_sight);
    }

    #[test]
    fn test_object_garbled_number_fails() {
        let e = Element::from_yaml("Class: Wall\nDefense: lots").unwrap();
        assert!(ObjectDesc::new(1, &e).is_err());
    }
}
