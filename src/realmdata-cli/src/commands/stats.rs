//! Registry statistics command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::commands::resolve_data_dir;

pub fn handle(dir: Option<PathBuf>) -> Result<()> {
    let dir = resolve_data_dir(dir);
    let registry = realmdata::load_dir(&dir)
        .with_context(|| format!("Failed to load asset data from {}", dir.display()))?;

    println!("Asset registry loaded from {}", dir.display());
    println!();
    println!("Objects:         {}", registry.object_elements().len());
    println!("Tiles:           {}", registry.tile_elements().len());
    println!("Items:           {}", registry.items().len());
    println!("Object catalog:  {}", registry.object_descs().len());
    println!("Portals:         {}", registry.portals().len());
    println!("Pets:            {}", registry.pets().len());
    println!("Pet skins:       {}", registry.pet_skins().len());
    println!("Set skins:       {}", registry.set_skins().len());
    println!("Pending updates: {}", registry.pending_updates());

    if registry.diagnostics().is_empty() {
        println!();
        println!("No diagnostics");
    } else {
        println!();
        println!("Diagnostics ({}):", registry.diagnostics().len());
        for diagnostic in registry.diagnostics() {
            println!("  {diagnostic}");
        }
    }

    Ok(())
}
