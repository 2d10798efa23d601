use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /category`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    pub success: bool,
    #[serde(default)]
    pub category: Vec<ApiCategory>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by `GET /hero`
#[derive(Debug, Clone, Deserialize)]
pub struct HeroResponse {
    pub success: bool,
    #[serde(default)]
    pub heros: Vec<ApiHero>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Category record as stored by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Hero banner record as stored by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHero {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

/// Category tile shown in the shop grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Storefront route for the category page
    pub href: String,
}

/// Slide of the landing page hero carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
}

/// Where loaded content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentOrigin {
    Remote,
    Fallback,
}

/// Content together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub origin: ContentOrigin,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        self.origin == ContentOrigin::Fallback
    }
}

/// Turn a display name into a URL slug ("FPV Drones & Kits" -> "fpv-drones-kits")
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
