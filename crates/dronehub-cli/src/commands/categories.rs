use anyhow::Result;

use dronehub_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let (service, mut events) = super::content_service(config)?;

    println!("Loading categories from {}...\n", config.api.base_url);
    let loaded = service.load_categories().await;

    println!("Categories ({}):\n", loaded.items.len());
    for category in &loaded.items {
        println!("  {} ({})", category.name, category.href);
        if let Some(ref description) = category.description {
            println!("    {}", description);
        }
        if let Some(ref image) = category.image_url {
            println!("    Image: {}", image);
        }
        println!();
    }

    super::print_notices(&mut events);
    Ok(())
}
