use anyhow::Result;

use dronehub_core::seo::{head_tags, render_head, PageMeta};
use dronehub_core::AppConfig;

pub fn run(
    config: &AppConfig,
    path: &str,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let mut page = PageMeta::new(path);
    if let Some(title) = title {
        page = page.with_title(title);
    }
    if let Some(description) = description {
        page = page.with_description(description);
    }

    let tags = head_tags(&config.site, &page)?;
    println!("{}", render_head(&tags));

    Ok(())
}
