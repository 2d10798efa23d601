use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    /// Exponential decay: min(1, 1.001 - 2^(-10t))
    ExpoDecay,
}

/// Axis the page scrolls along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Axis of wheel and touch gestures that are turned into scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureAxis {
    Vertical,
    Horizontal,
    Both,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate wheel input (false = jump)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of animated scrolls in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Frame rate of the frame driver
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    #[serde(default = "default_scroll_axis")]
    pub direction: ScrollAxis,
    #[serde(default = "default_gesture_axis")]
    pub gesture_direction: GestureAxis,
    #[serde(default = "default_one")]
    pub mouse_multiplier: f64,
    #[serde(default = "default_one")]
    pub wheel_multiplier: f64,
    /// Animate touch input (false = follow the finger)
    #[serde(default)]
    pub smooth_touch: bool,
    #[serde(default = "default_touch_multiplier")]
    pub touch_multiplier: f64,
    /// Keep gliding after the finger lifts
    #[serde(default = "default_true")]
    pub touch_inertia: bool,
    /// Convert line/page wheel deltas to pixels and clamp them
    #[serde(default = "default_true")]
    pub normalize_wheel: bool,
    /// Do not clamp the scroll position to the content extent
    #[serde(default)]
    pub infinite: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
            direction: default_scroll_axis(),
            gesture_direction: default_gesture_axis(),
            mouse_multiplier: default_one(),
            wheel_multiplier: default_one(),
            smooth_touch: false,
            touch_multiplier: default_touch_multiplier(),
            touch_inertia: default_true(),
            normalize_wheel: default_true(),
            infinite: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the storefront backend (e.g., "https://api.example.com/api")
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            request_timeout_secs: default_timeout(),
            proxy_url: None,
        }
    }
}

/// Static site metadata used to build document head tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Public origin used for canonical and Open Graph URLs
    #[serde(default = "default_site_url")]
    pub base_url: String,
    /// Page title template, `{}` is replaced by the page title
    #[serde(default = "default_title_template")]
    pub title_template: String,
    #[serde(default = "default_site_description")]
    pub description: String,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    /// Default share image (absolute or relative to base_url)
    #[serde(default)]
    pub image: Option<String>,
    /// Twitter handle including the leading '@'
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_site_url(),
            title_template: default_title_template(),
            description: default_site_description(),
            keywords: default_keywords(),
            image: None,
            twitter_handle: None,
            locale: default_locale(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_animation_duration() -> u64 {
    1200
}

fn default_easing() -> EasingType {
    EasingType::ExpoDecay
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_axis() -> ScrollAxis {
    ScrollAxis::Vertical
}

fn default_gesture_axis() -> GestureAxis {
    GestureAxis::Vertical
}

fn default_touch_multiplier() -> f64 {
    2.0
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_site_name() -> String {
    "Dronehub".to_string()
}

fn default_site_url() -> String {
    "https://dronehub.example".to_string()
}

fn default_title_template() -> String {
    "{} | Dronehub".to_string()
}

fn default_site_description() -> String {
    "Drones, parts and pilot training.".to_string()
}

fn default_keywords() -> Vec<String> {
    vec![
        "drones".to_string(),
        "drone training".to_string(),
        "fpv".to_string(),
    ]
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(config_path)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/dronehub/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("dronehub")
            .join("config.toml")
    }
}
