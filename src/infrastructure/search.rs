//! Search and store-front resolution over the provider's JSON API.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::search::SearchHit;
use crate::domain::storefront::StoreFront;
use crate::error::CatalogResult;
use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::parsing::{SearchResultsParser, StoreFrontParser};

const STORE_FRONT_PATH: &str = "/storefronts/main";

#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Full-text search across the provider's content index.
    ///
    /// Hits carry a [`crate::domain::search::SearchKey`] telling the caller
    /// how to resolve each one through the catalog repository.
    async fn search(&self, query: &str) -> CatalogResult<Vec<SearchHit>>;

    /// The provider's store-front rows (catalog landing page).
    async fn store_fronts(&self) -> CatalogResult<Vec<StoreFront>>;
}

pub struct HttpSearchRepository {
    transport: Arc<dyn Transport>,
    config: CatalogConfig,
    results_parser: SearchResultsParser,
    store_front_parser: StoreFrontParser,
}

impl HttpSearchRepository {
    pub fn new(transport: Arc<dyn Transport>, config: CatalogConfig) -> Self {
        Self {
            transport,
            config,
            results_parser: SearchResultsParser,
            store_front_parser: StoreFrontParser,
        }
    }
}

#[async_trait]
impl SearchRepository for HttpSearchRepository {
    async fn search(&self, query: &str) -> CatalogResult<Vec<SearchHit>> {
        debug!("searching for '{query}'");
        let body = self
            .transport
            .post_json(&self.config.search_url, &json!({ "query": query }))
            .await?;
        self.results_parser.parse(&body)
    }

    async fn store_fronts(&self) -> CatalogResult<Vec<StoreFront>> {
        let url = format!(
            "{}{STORE_FRONT_PATH}",
            self.config.api_url.trim_end_matches('/')
        );
        let body = self.transport.get_text(&url).await?;
        self.store_front_parser.parse_list(&body)
    }
}
