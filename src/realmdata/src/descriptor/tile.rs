//! Terrain tile descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for one terrain tile kind, built from a `Ground` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileDesc {
    pub type_id: u16,
    pub sprite: Option<String>,
    pub no_walk: bool,
    /// Movement multiplier while standing on the tile.
    pub speed: f64,
    pub min_damage: Option<i64>,
    pub max_damage: Option<i64>,
    pub push: bool,
    pub sink: bool,
}

impl TileDesc {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        Ok(TileDesc {
            type_id,
            sprite: elem.get_str("Sprite").map(str::to_string),
            no_walk: elem.get_flag("NoWalk"),
            speed: elem
                .get_f64("Speed")
                .map_err(|e| DescriptorError::invalid("Speed", e))?
                .unwrap_or(1.0),
            min_damage: elem
                .get_i64("MinDamage")
                .map_err(|e| DescriptorError::invalid("MinDamage", e))?,
            max_damage: elem
                .get_i64("MaxDamage")
                .map_err(|e| DescriptorError::invalid("MaxDamage", e))?,
            push: elem.get_flag("Push"),
            sink: elem.get_flag("Sink"),
        })
    }
}
