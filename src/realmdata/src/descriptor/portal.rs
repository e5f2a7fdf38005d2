//! Portal descriptors.

use serde::Serialize;

use crate::document::Element;

use super::DescriptorError;

/// Descriptor for a dungeon entrance (`Portal` and `GuildHallPortal`
/// classes).
///
/// `DungeonName` is required. Elements without it are the one place
/// descriptor construction fails in shipped data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalDesc {
    pub type_id: u16,
    pub dungeon_name: String,
    /// Seconds before the portal closes.
    pub timeout: i64,
    pub nexus_portal: bool,
}

impl PortalDesc {
    pub fn new(type_id: u16, elem: &Element) -> Result<Self, DescriptorError> {
        let dungeon_name = elem
            .get_str("DungeonName")
            .ok_or(DescriptorError::MissingField("DungeonName"))?
            .to_string();
        Ok(PortalDesc {
            type_id,
            dungeon_name,
            timeout: elem
                .get_i64("Timeout")
                .map_err(|e| DescriptorError::invalid("Timeout", e))?
                .unwrap_or(30),
            nexus_portal: elem.get_flag("NexusPortal"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_requires_dungeon_name() {
        let e = Element::from_yaml("Class: Portal\nTimeout: 60").unwrap();
        assert_eq!(
            PortalDesc::new(1, &e).unwrap_err(),
            DescriptorError::MissingField("DungeonName")
        );
    }

    #[test]
    fn test_portal_defaults_and_fields() {
        let e = Element::from_yaml("Class: Portal\nDungeonName: Abyss of Demons").unwrap();
        let portal = PortalDesc::new(0x0703, &e).unwrap();
        assert_eq!(portal.dungeon_name, "Abyss of Demons");
        assert_eq!(portal.timeout, 30);
        assert!(!portal.nexus_portal);

        let e = Element::from_yaml(r#"
Class: Portal
DungeonName: Nexus
Timeout: 10
NexusPortal: ~
"#)
        .unwrap();
        let portal = PortalDesc::new(0x0704, &e).unwrap();
        assert_eq!(portal.timeout, 10);
        assert!(portal.nexus_portal);
    }
}
