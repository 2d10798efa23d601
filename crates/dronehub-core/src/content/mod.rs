mod client;
pub mod fallback;
mod models;
mod service;

pub use client::{ContentClient, ContentSource};
pub use models::{
    slugify, ApiCategory, ApiHero, CategoryResponse, ContentOrigin, HeroResponse, HeroSlide,
    Loaded, ShopCategory,
};
pub use service::{ContentEvent, ContentKind, ContentService};
