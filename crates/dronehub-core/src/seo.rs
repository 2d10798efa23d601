//! Document head tags (title, description, canonical, Open Graph, Twitter card)
//! built from the static site configuration and per-page metadata.

use url::Url;

use crate::config::SiteConfig;
use crate::Result;

/// Open Graph object type of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    #[default]
    Website,
    Product,
    Article,
}

impl PageKind {
    fn as_str(&self) -> &'static str {
        match self {
            PageKind::Website => "website",
            PageKind::Product => "product",
            PageKind::Article => "article",
        }
    }
}

/// Per-page metadata, unset fields use the site defaults
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub kind: PageKind,
    pub noindex: bool,
}

impl PageMeta {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single tag inside the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=... content=...>`
    Name { name: &'static str, content: String },
    /// `<meta property=... content=...>`
    Property {
        property: &'static str,
        content: String,
    },
    Link { rel: &'static str, href: String },
}

/// Build the ordered head tags for a page
pub fn head_tags(site: &SiteConfig, page: &PageMeta) -> Result<Vec<HeadTag>> {
    let base = Url::parse(&site.base_url)?;
    let canonical = base.join(&page.path)?;

    let title = match page.title.as_deref() {
        Some(title) if !title.trim().is_empty() => site.title_template.replace("{}", title),
        _ => site.name.clone(),
    };
    let description = page
        .description
        .clone()
        .unwrap_or_else(|| site.description.clone());
    let image = match page.image.as_deref().or(site.image.as_deref()) {
        Some(image) => Some(base.join(image)?.to_string()),
        None => None,
    };

    let mut tags = vec![
        HeadTag::Title(title.clone()),
        HeadTag::Name {
            name: "description",
            content: description.clone(),
        },
    ];

    if !site.keywords.is_empty() {
        tags.push(HeadTag::Name {
            name: "keywords",
            content: site.keywords.join(", "),
        });
    }
    if page.noindex {
        tags.push(HeadTag::Name {
            name: "robots",
            content: "noindex, nofollow".to_string(),
        });
    }

    tags.push(HeadTag::Link {
        rel: "canonical",
        href: canonical.to_string(),
    });

    tags.extend([
        HeadTag::Property {
            property: "og:site_name",
            content: site.name.clone(),
        },
        HeadTag::Property {
            property: "og:locale",
            content: site.locale.clone(),
        },
        HeadTag::Property {
            property: "og:type",
            content: page.kind.as_str().to_string(),
        },
        HeadTag::Property {
            property: "og:title",
            content: title.clone(),
        },
        HeadTag::Property {
            property: "og:description",
            content: description.clone(),
        },
        HeadTag::Property {
            property: "og:url",
            content: canonical.to_string(),
        },
    ]);
    if let Some(ref image) = image {
        tags.push(HeadTag::Property {
            property: "og:image",
            content: image.clone(),
        });
    }

    tags.push(HeadTag::Name {
        name: "twitter:card",
        content: if image.is_some() {
            "summary_large_image".to_string()
        } else {
            "summary".to_string()
        },
    });
    if let Some(ref handle) = site.twitter_handle {
        tags.push(HeadTag::Name {
            name: "twitter:site",
            content: handle.clone(),
        });
    }
    tags.push(HeadTag::Name {
        name: "twitter:title",
        content: title,
    });
    tags.push(HeadTag::Name {
        name: "twitter:description",
        content: description,
    });
    if let Some(image) = image {
        tags.push(HeadTag::Name {
            name: "twitter:image",
            content: image,
        });
    }

    Ok(tags)
}

/// Render head tags as HTML, one per line
pub fn render_head(tags: &[HeadTag]) -> String {
    tags.iter()
        .map(|tag| match tag {
            HeadTag::Title(title) => format!("<title>{}</title>", escape(title)),
            HeadTag::Name { name, content } => {
                format!(r#"<meta name="{}" content="{}">"#, name, escape(content))
            }
            HeadTag::Property { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                property,
                escape(content)
            ),
            HeadTag::Link { rel, href } => {
                format!(r#"<link rel="{}" href="{}">"#, rel, escape(href))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(tags: &'a [HeadTag], key: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Name { name, content } if *name == key => Some(content.as_str()),
            HeadTag::Property { property, content } if *property == key => Some(content.as_str()),
            HeadTag::Link { rel, href } if *rel == key => Some(href.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_defaults_for_home_page() {
        let site = SiteConfig::default();
        let tags = head_tags(&site, &PageMeta::new("/")).unwrap();

        assert_eq!(tags[0], HeadTag::Title("Dronehub".to_string()));
        assert_eq!(find(&tags, "description"), Some(site.description.as_str()));
        assert_eq!(find(&tags, "canonical"), Some("https://dronehub.example/"));
        assert_eq!(find(&tags, "twitter:card"), Some("summary"));
        assert_eq!(find(&tags, "og:image"), None);
        assert_eq!(find(&tags, "robots"), None);
    }

    #[test]
    fn test_page_overrides() {
        let site = SiteConfig {
            image: Some("/images/og.png".to_string()),
            twitter_handle: Some("@dronehub".to_string()),
            ..Default::default()
        };
        let page = PageMeta {
            kind: PageKind::Product,
            ..PageMeta::new("/shop/fpv-drones")
                .with_title("FPV Drones")
                .with_description("Race-ready quads")
        };
        let tags = head_tags(&site, &page).unwrap();

        assert_eq!(tags[0], HeadTag::Title("FPV Drones | Dronehub".to_string()));
        assert_eq!(find(&tags, "og:type"), Some("product"));
        assert_eq!(find(&tags, "og:description"), Some("Race-ready quads"));
        assert_eq!(
            find(&tags, "og:url"),
            Some("https://dronehub.example/shop/fpv-drones")
        );
        assert_eq!(
            find(&tags, "og:image"),
            Some("https://dronehub.example/images/og.png")
        );
        assert_eq!(find(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(find(&tags, "twitter:site"), Some("@dronehub"));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let html = render_head(&[
            HeadTag::Title("Parts & <Kits>".to_string()),
            HeadTag::Name {
                name: "description",
                content: "The \"best\" props".to_string(),
            },
        ]);

        assert_eq!(
            html,
            "<title>Parts &amp; &lt;Kits&gt;</title>\n<meta name=\"description\" content=\"The &quot;best&quot; props\">"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let site = SiteConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(head_tags(&site, &PageMeta::new("/")).is_err());
    }
}
