//! Bidirectional id/type index for one element namespace.

use std::collections::HashMap;

/// A collision observed while inserting an id/type pairing.
///
/// Reported only when the previously held value actually differs;
/// re-declaring an identical pairing is silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Collision {
    Type {
        type_id: u16,
        old_id: String,
        new_id: String,
    },
    Id {
        id: String,
        old_type: u16,
        new_type: u16,
    },
}

/// Paired forward (type to id) and reverse (id to type) maps.
///
/// Reverse keys are normalized to lowercase; forward values keep the
/// casing they were declared with. The two maps always describe the same
/// set of pairings: replacing either side of a pair removes the stale
/// inverse entry.
#[derive(Debug, Default)]
pub(crate) struct TypeIdIndex {
    type_to_id: HashMap<u16, String>,
    id_to_type: HashMap<String, u16>,
}

pub(crate) fn normalize(id: &str) -> String {
    id.to_lowercase()
}

impl TypeIdIndex {
    /// Insert a pairing, letting the later write win in both directions.
    pub(crate) fn insert(&mut self, type_id: u16, id: &str) -> Vec<Collision> {
        let mut collisions = Vec::new();
        let norm = normalize(id);

        if let Some(old_id) = self.type_to_id.get(&type_id) {
            if normalize(old_id) != norm {
                let stale = normalize(old_id);
                collisions.push(Collision::Type {
                    type_id,
                    old_id: old_id.clone(),
                    new_id: id.to_string(),
                });
                if self.id_to_type.get(&stale) == Some(&type_id) {
                    self.id_to_type.remove(&stale);
                }
            }
        }

        if let Some(&old_type) = self.id_to_type.get(&norm) {
            if old_type != type_id {
                collisions.push(Collision::Id {
                    id: id.to_string(),
                    old_type,
                    new_type: type_id,
                });
                let stale_forward = self
                    .type_to_id
                    .get(&old_type)
                    .is_some_and(|held| normalize(held) == norm);
                if stale_forward {
                    self.type_to_id.remove(&old_type);
                }
            }
        }

        self.type_to_id.insert(type_id, id.to_string());
        self.id_to_type.insert(norm, type_id);
        collisions
    }

    pub(crate) fn type_to_id(&self) -> &HashMap<u16, String> {
        &self.type_to_id
    }

    pub(crate) fn id_to_type(&self) -> &HashMap<String, u16> {
        &self.id_to_type
    }

    pub(crate) fn get_id(&self, type_id: u16) -> Option<&str> {
        self.type_to_id.get(&type_id).map(String::as_str)
    }

    pub(crate) fn get_type(&self, id: &str) -> Option<u16> {
        self.id_to_type.get(&normalize(id)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve_both_ways() {
        let mut index = TypeIdIndex::default();
        assert!(index.insert(0x0c01, "Ring of Dexterity").is_empty());
        assert_eq!(index.get_id(0x0c01), Some("Ring of Dexterity"));
        assert_eq!(index.get_type("Ring of Dexterity"), Some(0x0c01));
        assert_eq!(index.get_type("RING OF DEXTERITY"), Some(0x0c01));
    }

    #[test]
    fn test_rekeyed_type_drops_stale_reverse_entry() {
        let mut index = TypeIdIndex::default();
        index.insert(5, "a");
        let collisions = index.insert(5, "b");

        assert_eq!(collisions.len(), 1);
        assert!(matches!(&collisions[0], Collision::Type { type_id: 5, .. }));
        assert_eq!(index.get_id(5), Some("b"));
        assert_eq!(index.get_type("b"), Some(5));
        assert_eq!(index.get_type("a"), None);
    }

    #[test]
    fn test_rekeyed_id_drops_stale_forward_entry() {
        let mut index = TypeIdIndex::default();
        index.insert(5, "a");
        let collisions = index.insert(6, "a");

        assert_eq!(collisions.len(), 1);
        assert!(matches!(&collisions[0], Collision::Id { old_type: 5, new_type: 6, .. }));
        assert_eq!(index.get_type("a"), Some(6));
        assert_eq!(index.get_id(6), Some("a"));
        assert_eq!(index.get_id(5), None);
    }

    #[test]
    fn test_identical_redeclaration_is_silent() {
        let mut index = TypeIdIndex::default();
        index.insert(5, "a");
        assert!(index.insert(5, "a").is_empty());
        // Case differences are not collisions either; the later casing wins.
        assert!(index.insert(5, "A").is_empty());
        assert_eq!(index.get_id(5), Some("A"));
        assert_eq!(index.get_type("a"), Some(5));
    }

    #[test]
    fn test_insert_colliding_in_both_directions() {
        let mut index = TypeIdIndex::default();
        index.insert(5, "a");
        index.insert(6, "b");
        let collisions = index.insert(5, "b");

        assert_eq!(collisions.len(), 2);
        assert_eq!(index.get_id(5), Some("b"));
        assert_eq!(index.get_type("b"), Some(5));
        assert_eq!(index.get_type("a"), None);
        assert_eq!(index.get_id(6), None);
    }
}
