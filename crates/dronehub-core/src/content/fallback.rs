//! Static content shown when the backend is unreachable

use super::models::{HeroSlide, ShopCategory};

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    (
        "fallback-camera-drones",
        "Camera Drones",
        "camera-drones",
        "/images/categories/camera-drones.webp",
    ),
    (
        "fallback-fpv",
        "FPV Drones",
        "fpv-drones",
        "/images/categories/fpv-drones.webp",
    ),
    (
        "fallback-parts",
        "Parts & Accessories",
        "parts-accessories",
        "/images/categories/parts.webp",
    ),
    (
        "fallback-training",
        "Pilot Training",
        "pilot-training",
        "/images/categories/training.webp",
    ),
];

pub fn categories() -> Vec<ShopCategory> {
    CATEGORIES
        .iter()
        .map(|(id, name, slug, image)| ShopCategory {
            id: (*id).to_string(),
            name: (*name).to_string(),
            slug: (*slug).to_string(),
            description: None,
            image_url: Some((*image).to_string()),
            href: format!("/shop/{}", slug),
        })
        .collect()
}

pub fn heros() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title: "Take your flying further".to_string(),
            subtitle: Some("Professional drones and parts, shipped fast.".to_string()),
            image_url: Some("/images/hero/hero-1.webp".to_string()),
            cta_label: "Shop drones".to_string(),
            cta_href: "/shop".to_string(),
        },
        HeroSlide {
            title: "Become a certified pilot".to_string(),
            subtitle: Some("Hands-on training courses for every level.".to_string()),
            image_url: Some("/images/hero/hero-2.webp".to_string()),
            cta_label: "View courses".to_string(),
            cta_href: "/training".to_string(),
        },
    ]
}
