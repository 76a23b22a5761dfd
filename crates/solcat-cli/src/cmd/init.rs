use anyhow::Context;
use solcat_core::{config::Config, io, paths, schema};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let catalog_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());

    println!("Initializing catalog in: {}", root.display());

    // 1. Create the directory tree
    let dirs = [
        paths::PROVIDERS_DIR,
        paths::PROVIDER_CATALOGS_DIR,
        paths::CATEGORY_CATALOGS_DIR,
        paths::EXPORTS_DIR,
        paths::SCHEMA_DIR,
    ];
    for dir in dirs {
        let p = root.join(dir);
        io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
    }

    // 2. Write catalog.yaml if missing
    let config_path = paths::config_path(root);
    if !config_path.exists() {
        let config = Config::new(&catalog_name);
        config.save(root).context("failed to write catalog.yaml")?;
        println!("  created: catalog.yaml");
    } else {
        println!("  exists:  catalog.yaml");
    }

    // 3. Write the metadata schema if missing
    let schema_path = paths::schema_path(root);
    let written = io::write_if_missing(&schema_path, schema::DEFAULT_METADATA_SCHEMA.as_bytes())
        .context("failed to write metadata schema")?;
    if written {
        println!("  created: {}", paths::SCHEMA_FILE);
    } else {
        println!("  exists:  {}", paths::SCHEMA_FILE);
    }

    println!("\nCatalog initialized.");
    println!("Next: solcat solution new <provider> <category> <slug> --name \"...\"");

    Ok(())
}
