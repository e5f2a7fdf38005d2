//! Equippable and consumable item descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for an equippable or consumable item (`Equipment` and `Dye`
/// classes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub type_id: u16,
    pub slot_type: u16,
    pub tier: Option<i64>,
    pub description: Option<String>,
    pub bag_type: u8,
    pub feed_power: Option<i64>,
    pub consumable: bool,
    pub soulbound: bool,
    pub usable: bool,
}

impl Item {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(Item {
            type_id,
            slot_type: elem
                .get_u16("SlotType")
                .map_err(|e| DescriptorError::invalid("SlotType", e))?
                .unwrap_or(0),
            tier: elem
                .get_i64("Tier")
                .map_err(|e| DescriptorError::invalid("Tier", e))?,
            description: elem.get_str("Description").map(str::to_string),
            bag_type: elem
                .get_i64("BagType")
                .map_err(|e| DescriptorError::invalid("BagType", e))?
                .map(|v| v as u8)
                .unwrap_or(0),
            feed_power: elem
                .get_i64("feedPower")
                .map_err(|e| DescriptorError::invalid("feedPower", e))?,
            consumable: elem.get_flag("Consumable"),
            soulbound: elem.get_flag("Soulbound"),
            usable: elem.get_flag("Usable"),
        })
    }
}
