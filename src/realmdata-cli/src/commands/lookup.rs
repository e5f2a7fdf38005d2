//! Identity resolution command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use realmdata::{AssetRegistry, Element};

use crate::commands::resolve_data_dir;

pub fn handle(query: &str, dir: Option<PathBuf>, tiles: bool, full: bool) -> Result<()> {
    let dir = resolve_data_dir(dir);
    let registry = realmdata::load_dir(&dir)
        .with_context(|| format!("Failed to load asset data from {}", dir.display()))?;

    let resolved = if tiles {
        resolve_tile(&registry, query)
    } else {
        resolve_object(&registry, query)
    };

    let Some((type_id, id)) = resolved else {
        println!("No match for `{query}`");
        return Ok(());
    };

    println!("{id} <-> 0x{type_id:04x} ({type_id})");
    if tiles {
        describe_tile(&registry, type_id);
    } else {
        describe_object(&registry, type_id);
    }

    if full {
        let element = if tiles {
            registry.tile_elements().get(&type_id)
        } else {
            registry.object_elements().get(&type_id)
        };
        if let Some(element) = element {
            print_element(element)?;
        }
    }

    Ok(())
}

/// Try the query as a StringId first, then as a numeric TypeId. Names win
/// when a StringId happens to look numeric.
fn resolve_object(registry: &AssetRegistry, query: &str) -> Option<(u16, String)> {
    if let Some(type_id) = registry.object_type_of(query) {
        let id = registry.object_id_of(type_id).unwrap_or(query);
        return Some((type_id, id.to_string()));
    }
    let type_id = realmdata::parse_u16(query).ok()?;
    let id = registry.object_id_of(type_id)?;
    Some((type_id, id.to_string()))
}

fn resolve_tile(registry: &AssetRegistry, query: &str) -> Option<(u16, String)> {
    if let Some(type_id) = registry.tile_type_of(query) {
        let id = registry.tile_id_of(type_id).unwrap_or(query);
        return Some((type_id, id.to_string()));
    }
    let type_id = realmdata::parse_u16(query).ok()?;
    let id = registry.tile_id_of(type_id)?;
    Some((type_id, id.to_string()))
}

fn describe_object(registry: &AssetRegistry, type_id: u16) {
    if let Some(item) = registry.items().get(&type_id) {
        println!("  item: slot {} tier {:?}", item.slot_type, item.tier);
    } else if let Some(portal) = registry.portals().get(&type_id) {
        println!(
            "  portal to {} (timeout {}s)",
            portal.dungeon_name, portal.timeout
        );
    } else if let Some(pet) = registry.pets().get(&type_id) {
        println!("  pet: family {:?} rarity {:?}", pet.family, pet.rarity);
    } else if let Some(desc) = registry.object_descs().get(&type_id) {
        println!("  class {}", desc.class);
    }
}

fn describe_tile(registry: &AssetRegistry, type_id: u16) {
    if let Some(tile) = registry.tiles().get(&type_id) {
        println!("  tile: speed {} no_walk {}", tile.speed, tile.no_walk);
    }
}

fn print_element(element: &Element) -> Result<()> {
    let yaml = serde_yaml::to_string(element).context("Failed to render element")?;
    println!();
    print!("{yaml}");
    Ok(())
}
