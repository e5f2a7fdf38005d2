//! Equipment-set skin descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for an equipment-set appearance, built from an
/// `EquipmentSet` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetTypeSkin {
    pub type_id: u16,
    /// StringIds of the pieces that make up the set.
    pub setpieces: Vec<String>,
    pub activate_on_equip_all: bool,
}

impl SetTypeSkin {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(SetTypeSkin {
            type_id,
            setpieces: elem.get_str_list("Setpieces"),
            activate_on_equip_all: elem.get_flag("ActivateOnEquipAll"),
        })
    }
}
