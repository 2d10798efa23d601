use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::client::ContentSource;
use super::fallback;
use super::models::{
    slugify, ApiCategory, ApiHero, ContentOrigin, HeroSlide, Loaded, ShopCategory,
};
use crate::{Error, Result};

/// Which content resource was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Categories,
    Heros,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Categories => f.write_str("categories"),
            ContentKind::Heros => f.write_str("heros"),
        }
    }
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    /// Remote content was loaded
    Loaded { kind: ContentKind, count: usize },
    /// The backend failed and static content is shown instead
    FallbackUsed { kind: ContentKind, message: String },
}

/// Loads storefront content and substitutes static content on failure
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    event_tx: Option<mpsc::UnboundedSender<ContentEvent>>,
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            event_tx: None,
        }
    }

    /// Set the event sender for transient notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<ContentEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: ContentEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send content event: receiver dropped");
            }
        }
    }

    /// Load shop categories, falling back to the static set
    pub async fn load_categories(&self) -> Loaded<ShopCategory> {
        let remote = self.fetch_categories().await;
        self.settle(ContentKind::Categories, remote, fallback::categories)
    }

    /// Load hero slides, falling back to the static set
    pub async fn load_heros(&self) -> Loaded<HeroSlide> {
        let remote = self.fetch_heros().await;
        self.settle(ContentKind::Heros, remote, fallback::heros)
    }

    async fn fetch_categories(&self) -> Result<Vec<ShopCategory>> {
        let response = self.source.categories().await?;
        if !response.success {
            return Err(Error::Api(
                response
                    .message
                    .unwrap_or_else(|| "category request was not successful".to_string()),
            ));
        }
        Ok(response
            .category
            .into_iter()
            .map(|category| self.to_shop_category(category))
            .collect())
    }

    async fn fetch_heros(&self) -> Result<Vec<HeroSlide>> {
        let response = self.source.heros().await?;
        if !response.success {
            return Err(Error::Api(
                response
                    .message
                    .unwrap_or_else(|| "hero request was not successful".to_string()),
            ));
        }
        Ok(response
            .heros
            .into_iter()
            .map(|hero| self.to_hero_slide(hero))
            .collect())
    }

    fn settle<T>(
        &self,
        kind: ContentKind,
        remote: Result<Vec<T>>,
        fallback: fn() -> Vec<T>,
    ) -> Loaded<T> {
        let remote = remote.and_then(|items| {
            if items.is_empty() {
                Err(Error::Api(format!("no {} returned", kind)))
            } else {
                Ok(items)
            }
        });

        match remote {
            Ok(items) => {
                debug!("Loaded {} {} from content API", items.len(), kind);
                self.send_event(ContentEvent::Loaded {
                    kind,
                    count: items.len(),
                });
                Loaded {
                    items,
                    origin: ContentOrigin::Remote,
                }
            }
            Err(e) => {
                warn!("Failed to load {}, using fallback: {}", kind, e);
                self.send_event(ContentEvent::FallbackUsed {
                    kind,
                    message: e.to_string(),
                });
                Loaded {
                    items: fallback(),
                    origin: ContentOrigin::Fallback,
                }
            }
        }
    }

    fn to_shop_category(&self, category: ApiCategory) -> ShopCategory {
        let slug = category
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&category.name));

        ShopCategory {
            href: format!("/shop/{}", slug),
            image_url: category.image.map(|path| self.source.asset_url(&path)),
            id: category.id,
            name: category.name,
            slug,
            description: category.description,
        }
    }

    fn to_hero_slide(&self, hero: ApiHero) -> HeroSlide {
        HeroSlide {
            title: hero.title,
            subtitle: hero.subtitle,
            image_url: hero.image.map(|path| self.source.asset_url(&path)),
            cta_label: hero.button_text.unwrap_or_else(|| "Shop now".to_string()),
            cta_href: hero.button_link.unwrap_or_else(|| "/shop".to_string()),
        }
    }
}
