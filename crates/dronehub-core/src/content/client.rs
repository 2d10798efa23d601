use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Proxy};
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{CategoryResponse, HeroResponse};
use crate::config::AppConfig;
use crate::{Error, Result};

const CLIENT_USER_AGENT: &str = concat!("dronehub/", env!("CARGO_PKG_VERSION"));

/// Backend that serves storefront content
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the shop categories envelope
    async fn categories(&self) -> Result<CategoryResponse>;

    /// Fetch the hero banner envelope
    async fn heros(&self) -> Result<HeroResponse>;

    /// Resolve an image path returned by the backend into a public URL
    fn asset_url(&self, path: &str) -> String {
        path.to_string()
    }
}

/// HTTP client for the storefront content API
pub struct ContentClient {
    client: Client,
    base_url: Url,
}

impl ContentClient {
    /// Create a new content client with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Self::build_client(config.api.request_timeout_secs, &config.api.proxy_url)?;
        let base_url = Self::normalize_base(&config.api.base_url)?;

        Ok(Self { client, base_url })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .default_headers(Self::build_headers());

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for content API");
        }

        builder.build().map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    /// Parse the base URL so that relative joins keep its last path segment
    fn normalize_base(base_url: &str) -> Result<Url> {
        let trimmed = base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}/", trimmed))?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint relative to the API base
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;

        tracing::debug!("Fetching content from: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {} for URL: {}", status, url)));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn categories(&self) -> Result<CategoryResponse> {
        self.get_json("category").await
    }

    async fn heros(&self) -> Result<HeroResponse> {
        self.get_json("hero").await
    }

    fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        // Uploaded assets are served from the API origin, not the /api prefix
        match self.base_url.join(&format!("/{}", path.trim_start_matches('/'))) {
            Ok(url) => url.to_string(),
            Err(_) => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config_with_base(base_url: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.api.base_url = base_url.to_string();
        config.api.request_timeout_secs = 5;
        config
    }

    /// Serve a single canned HTTP response and return the base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/api", addr)
    }

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        let client = ContentClient::new(&config_with_base("https://shop.example/api/")).unwrap();
        assert_eq!(
            client.endpoint("/category").unwrap().as_str(),
            "https://shop.example/api/category"
        );
        assert_eq!(
            client.endpoint("hero").unwrap().as_str(),
            "https://shop.example/api/hero"
        );
    }

    #[test]
    fn test_asset_url_resolution() {
        let client = ContentClient::new(&config_with_base("https://shop.example/api")).unwrap();
        assert_eq!(
            client.asset_url("uploads/cam.png"),
            "https://shop.example/uploads/cam.png"
        );
        assert_eq!(
            client.asset_url("https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
    }

    #[test]
    fn test_invalid_proxy_is_config_error() {
        let mut config = AppConfig::default();
        config.api.proxy_url = Some("not a proxy url".to_string());
        assert!(matches!(ContentClient::new(&config), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"success":true,"category":[{"_id":"c1","name":"FPV Drones"}]}"#,
        )
        .await;
        let client = ContentClient::new(&config_with_base(&base)).unwrap();

        let response = client.categories().await.unwrap();
        assert!(response.success);
        assert_eq!(response.category[0].name, "FPV Drones");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
        let client = ContentClient::new(&config_with_base(&base)).unwrap();

        let err = client.heros().await.unwrap_err();
        assert!(matches!(err, Error::Api(_)), "unexpected error: {}", err);
    }
}
