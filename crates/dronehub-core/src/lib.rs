pub mod config;
pub mod content;
pub mod error;
pub mod seo;

pub use config::{AppConfig, EasingType, ScrollConfig, SiteConfig};
pub use error::{Error, Result};
