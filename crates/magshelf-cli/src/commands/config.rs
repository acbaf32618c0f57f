use std::path::Path;

use anyhow::Result;

use magshelf_core::AppConfig;

pub fn show(config: &AppConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    AppConfig::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
