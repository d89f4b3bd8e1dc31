use crate::adapters::storage::json_file_store::JsonFileStore;
use crate::cli::{context, output};
use crate::config::app_config::{AppConfig, CONFIG_FILE};
use crate::core::errors::{PetroError, Result};
use crate::core::models::asset::Asset;
use crate::core::services::asset_registry::AssetRegistry;

/// Execute the `petromanage init` command.
///
/// Creates the project directory with a default `config.toml`, empty
/// report and audit collections and a seeded asset registry.
pub fn execute() -> Result<()> {
    let dir = context::project_dir();

    if dir.join(CONFIG_FILE).exists() {
        return Err(PetroError::InvalidConfig {
            detail: format!(
                "PetroManage is already initialized here ({} exists)",
                dir.join(CONFIG_FILE).display()
            ),
        });
    }

    output::header("PetroManage: initializing project");

    std::fs::create_dir_all(dir)?;
    output::success(&format!("Created {}/", dir.display()));

    std::fs::write(dir.join(CONFIG_FILE), AppConfig::default_toml())?;
    output::success(&format!("Generated {CONFIG_FILE} with defaults"));

    let config = AppConfig::load(dir)?;
    for file in [&config.storage.reports_file, &config.storage.audit_file] {
        let path = dir.join(file);
        if !path.exists() {
            std::fs::write(&path, "[]\n")?;
            output::success(&format!("Created {file}"));
        }
    }

    let assets: JsonFileStore<Asset> = JsonFileStore::new(dir, &config.storage.assets_file);
    let seeded = AssetRegistry::new(&assets).seed()?;
    if seeded > 0 {
        output::success(&format!(
            "Registered {seeded} assets in {}",
            config.storage.assets_file
        ));
    }

    println!();
    output::info("Next: petromanage report create --help");
    Ok(())
}
