//! Client configuration.

/// Transport-level settings.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Upper bound on outgoing requests, enforced by the transport itself.
    pub max_requests_per_second: u32,
    pub follow_redirects: bool,
    /// Opaque bearer credential attached to every request when present.
    /// Obtaining and refreshing it is a caller concern.
    pub bearer_token: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "tv-catalog/0.3".to_string(),
            timeout_seconds: 30,
            max_requests_per_second: 5,
            follow_redirects: true,
            bearer_token: None,
        }
    }
}

/// Provider endpoints and fan-out limits.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Site root; also the program listing page.
    pub site_url: String,
    /// Content API root (direct video lookups).
    pub api_url: String,
    /// Search API endpoint.
    pub search_url: String,
    /// EPG document root.
    pub epg_url: String,
    /// How many program detail pages may be in flight at once.
    pub detail_concurrency: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            site_url: "https://www.vier.be".to_string(),
            api_url: "https://api.viervijfzes.be/content".to_string(),
            search_url: "https://api.viervijfzes.be/search".to_string(),
            epg_url: "https://www.vrt.be/bin/epg".to_string(),
            detail_concurrency: 4,
        }
    }
}
