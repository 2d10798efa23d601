use anyhow::Result;

use dronehub_core::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let (service, mut events) = super::content_service(config)?;

    println!("Loading hero slides from {}...\n", config.api.base_url);
    let loaded = service.load_heros().await;

    println!("Hero slides ({}):\n", loaded.items.len());
    for (index, slide) in loaded.items.iter().enumerate() {
        println!("  {}. {}", index + 1, slide.title);
        if let Some(ref subtitle) = slide.subtitle {
            println!("     {}", subtitle);
        }
        println!("     [{}] -> {}", slide.cta_label, slide.cta_href);
        println!();
    }

    super::print_notices(&mut events);
    Ok(())
}
