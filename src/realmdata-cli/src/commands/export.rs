//! JSON export of the loaded registry.
//!
//! Writes one JSON file per descriptor view plus an `index.json` naming
//! the exported files, so downstream tools can discover what is there.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::commands::resolve_data_dir;

/// Index of the exported view files
#[derive(Debug, Serialize)]
struct ExportIndex {
    version: String,
    source: String,
    files: Vec<String>,
    diagnostics: usize,
    pending_updates: usize,
}

pub fn handle(dir: Option<PathBuf>, output: &Path, elements: bool) -> Result<()> {
    let dir = resolve_data_dir(dir);
    let registry = realmdata::load_dir(&dir)
        .with_context(|| format!("Failed to load asset data from {}", dir.display()))?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let mut files = Vec::new();

    write_view(output, "items", registry.items(), &mut files)?;
    write_view(output, "objects", registry.object_descs(), &mut files)?;
    write_view(output, "portals", registry.portals(), &mut files)?;
    write_view(output, "pets", registry.pets(), &mut files)?;
    write_view(output, "tiles", registry.tiles(), &mut files)?;
    write_view(output, "set_skins", registry.set_skins(), &mut files)?;
    write_named_view(output, "pet_skins", registry.pet_skins(), &mut files)?;

    if elements {
        write_view(output, "object_elements", registry.object_elements(), &mut files)?;
        write_view(output, "tile_elements", registry.tile_elements(), &mut files)?;
    }

    let index = ExportIndex {
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: dir.display().to_string(),
        files,
        diagnostics: registry.diagnostics().len(),
        pending_updates: registry.pending_updates(),
    };
    write_json(output, "index", &index)?;

    println!(
        "Exported {} view files to {}",
        index.files.len(),
        output.display()
    );
    Ok(())
}

/// Write one TypeId-keyed view, with keys sorted for stable output.
fn write_view<T: Serialize>(
    output: &Path,
    name: &str,
    view: &HashMap<u16, T>,
    files: &mut Vec<String>,
) -> Result<()> {
    let sorted: BTreeMap<u16, &T> = view.iter().map(|(k, v)| (*k, v)).collect();
    write_json(output, name, &sorted)?;
    files.push(format!("{name}.json"));
    Ok(())
}

/// Write one StringId-keyed view, with keys sorted for stable output.
fn write_named_view<T: Serialize>(
    output: &Path,
    name: &str,
    view: &HashMap<String, T>,
    files: &mut Vec<String>,
) -> Result<()> {
    let sorted: BTreeMap<&str, &T> = view.iter().map(|(k, v)| (k.as_str(), v)).collect();
    write_json(output, name, &sorted)?;
    files.push(format!("{name}.json"));
    Ok(())
}

fn write_json<T: Serialize>(output: &Path, name: &str, data: &T) -> Result<()> {
    let path = output.join(format!("{name}.json"));
    let contents = serde_json::to_string_pretty(data)
        .with_context(|| format!("Failed to serialize {name}"))?;
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_views_and_index() {
        let data = tempfile::tempdir().unwrap();
        std::fs::write(
            data.path().join("objects.yaml"),
            "Object:\n  id: Blade\n  type: 7\n  Class: Equipment\n  Tier: 2\n",
        )
        .unwrap();
        let out = tempfile::tempdir().unwrap();

        handle(Some(data.path().to_path_buf()), out.path(), false).unwrap();

        let items = std::fs::read_to_string(out.path().join("items.json")).unwrap();
        assert!(items.contains("\"7\""));
        assert!(items.contains("\"tier\": 2"));
        assert!(out.path().join("index.json").exists());
        assert!(!out.path().join("object_elements.json").exists());
    }

    #[test]
    fn test_export_elements_flag() {
        let data = tempfile::tempdir().unwrap();
        std::fs::write(
            data.path().join("tiles.yaml"),
            "Ground:\n  id: Grass\n  type: 0x36\n",
        )
        .unwrap();
        let out = tempfile::tempdir().unwrap();

        handle(Some(data.path().to_path_buf()), out.path(), true).unwrap();

        assert!(out.path().join("tile_elements.json").exists());
        let index = std::fs::read_to_string(out.path().join("index.json")).unwrap();
        assert!(index.contains("tile_elements.json"));
    }
}
