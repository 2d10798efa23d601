use anyhow::Result;

use dronehub_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists: {}", path.display());
        } else {
            let written = AppConfig::default().save()?;
            println!("Wrote default config to {}", written.display());
        }
        return Ok(());
    }

    if path.exists() {
        println!("# {}\n", path.display());
    } else {
        println!("# {} (not found, using defaults)\n", path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
