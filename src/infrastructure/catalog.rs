//! Program catalog resolution.
//!
//! Orchestrates the listing crawl: fetch the listing page, parse it into
//! stubs, fetch and parse every stub's detail page concurrently, and hand back
//! the aggregate. The join is fail-fast and order-preserving: results line up
//! with the listing order, and a single failing detail page fails the whole
//! batch. Note the asymmetry with the listing parser, which accumulates all
//! entry errors before failing.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info};
use url::Url;

use crate::domain::program::{Episode, PartialProgram, Program};
use crate::domain::search::{EpisodeSearchKey, ProgramSearchKey, VideoUuid};
use crate::error::{CatalogError, CatalogResult};
use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::parsing::error::MarkupError;
use crate::infrastructure::parsing::{EpisodeParser, ProgramDetailParser, ProgramListParser};

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Every program on the listing page, fully resolved, in listing order.
    async fn fetch_programs(&self) -> CatalogResult<Vec<Program>>;

    /// A single program resolved from its page URL.
    async fn fetch_program(&self, key: &ProgramSearchKey) -> CatalogResult<Program>;

    /// An episode located by node id within its owning program's page.
    async fn fetch_episode_by_node_id(&self, key: &EpisodeSearchKey) -> CatalogResult<Episode>;

    /// An episode fetched directly from the content API by video id.
    async fn fetch_episode_by_video_id(&self, video_id: &VideoUuid) -> CatalogResult<Episode>;
}

pub struct HttpProgramRepository {
    transport: Arc<dyn Transport>,
    config: CatalogConfig,
    list_parser: ProgramListParser,
    detail_parser: ProgramDetailParser,
    episode_parser: EpisodeParser,
}

impl HttpProgramRepository {
    pub fn new(transport: Arc<dyn Transport>, config: CatalogConfig) -> Result<Self, MarkupError> {
        Ok(Self {
            transport,
            config,
            list_parser: ProgramListParser::new()?,
            detail_parser: ProgramDetailParser::new()?,
            episode_parser: EpisodeParser,
        })
    }

    /// Resolves a listing path against the site root.
    fn resolve(&self, path: &str) -> CatalogResult<String> {
        if path.starts_with("http") {
            return Ok(path.to_string());
        }
        let base = Url::parse(&self.config.site_url)
            .map_err(|e| CatalogError::configuration(format!("invalid site url: {e}")))?;
        let joined = base
            .join(path)
            .map_err(|e| CatalogError::configuration(format!("cannot resolve '{path}': {e}")))?;
        Ok(joined.to_string())
    }

    async fn fetch_program_from_url(&self, url: &str) -> CatalogResult<Program> {
        let html = self.transport.get_text(url).await?;
        self.detail_parser.parse(&html)
    }

    async fn fetch_program_details(
        &self,
        stubs: &[PartialProgram],
    ) -> CatalogResult<Vec<Program>> {
        let semaphore = Arc::new(Semaphore::new(self.config.detail_concurrency.max(1)));

        let detail_fetches = stubs.iter().map(|stub| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                let _permit = semaphore
                    .acquire()
                    .await
                    .expect("detail semaphore is never closed");
                let url = self.resolve(&stub.path)?;
                debug!(program = %stub.name, "fetching program detail");
                self.fetch_program_from_url(&url).await
            }
        });

        try_join_all(detail_fetches).await
    }
}

#[async_trait]
impl ProgramRepository for HttpProgramRepository {
    async fn fetch_programs(&self) -> CatalogResult<Vec<Program>> {
        let listing = self.transport.get_text(&self.config.site_url).await?;
        let stubs = self.list_parser.parse(&listing)?;
        info!("resolving {} programs from listing", stubs.len());

        self.fetch_program_details(&stubs).await
    }

    async fn fetch_program(&self, key: &ProgramSearchKey) -> CatalogResult<Program> {
        self.fetch_program_from_url(&key.url).await
    }

    async fn fetch_episode_by_node_id(&self, key: &EpisodeSearchKey) -> CatalogResult<Episode> {
        let program = self.fetch_program_from_url(&key.url).await?;
        program
            .episode_by_node_id(&key.node_id)
            .cloned()
            .ok_or_else(|| CatalogError::no_episode_found(&key.node_id))
    }

    async fn fetch_episode_by_video_id(&self, video_id: &VideoUuid) -> CatalogResult<Episode> {
        let url = format!(
            "{}/video/{}",
            self.config.api_url.trim_end_matches('/'),
            video_id
        );
        let body = self.transport.get_text(&url).await?;
        self.episode_parser.parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    struct FakeTransport {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn new(pages: impl IntoIterator<Item = (String, String)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get_text(&self, url: &str) -> CatalogResult<String> {
            self.requests.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| CatalogError::http_status(url, 404))
        }

        async fn post_json(
            &self,
            url: &str,
            _body: &serde_json::Value,
        ) -> CatalogResult<String> {
            Err(CatalogError::http_status(url, 405))
        }
    }

    fn config() -> CatalogConfig {
        CatalogConfig {
            site_url: "https://site.test".to_string(),
            api_url: "https://api.test/content".to_string(),
            search_url: "https://api.test/search".to_string(),
            epg_url: "https://epg.test/bin".to_string(),
            detail_concurrency: 2,
        }
    }

    fn listing_page(paths: &[&str]) -> String {
        let anchors: Vec<String> = paths
            .iter()
            .map(|p| {
                format!(r#"<a class="program-overview__link" href="{p}"><span>{p}</span></a>"#)
            })
            .collect();
        format!("<html><body>{}</body></html>", anchors.join(""))
    }

    fn detail_page(title: &str, link: &str, node_ids: &[&str]) -> String {
        let episodes: Vec<String> = node_ids
            .iter()
            .map(|n| {
                format!(
                    r#"{{"pageInfo": {{"nodeId": "{n}"}}, "videoUuid": "uuid-{n}", "title": "Ep {n}"}}"#
                )
            })
            .collect();
        let json = format!(
            r#"{{"data": {{"title": "{title}", "link": "{link}",
                "playlists": [{{"episodes": [{}]}}]}}}}"#,
            episodes.join(",")
        );
        let escaped = json.replace('"', "&quot;");
        format!(r#"<html><body><div data-hero="{escaped}"></div></body></html>"#)
    }

    fn repo(transport: Arc<FakeTransport>) -> HttpProgramRepository {
        HttpProgramRepository::new(transport, config()).unwrap()
    }

    #[tokio::test]
    async fn fetch_programs_preserves_listing_order() {
        let transport = Arc::new(FakeTransport::new([
            (
                "https://site.test".to_string(),
                listing_page(&["/alpha", "/beta", "/gamma"]),
            ),
            (
                "https://site.test/alpha".to_string(),
                detail_page("Alpha", "/alpha", &["a1"]),
            ),
            (
                "https://site.test/beta".to_string(),
                detail_page("Beta", "/beta", &["b1", "b2"]),
            ),
            (
                "https://site.test/gamma".to_string(),
                detail_page("Gamma", "/gamma", &[]),
            ),
        ]));

        let programs = repo(Arc::clone(&transport)).fetch_programs().await.unwrap();

        let titles: Vec<&str> = programs.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
        // Listing plus one request per stub.
        assert_eq!(transport.requested().len(), 4);
    }

    #[tokio::test]
    async fn one_bad_detail_page_fails_the_whole_batch() {
        let transport = Arc::new(FakeTransport::new([
            (
                "https://site.test".to_string(),
                listing_page(&["/alpha", "/beta"]),
            ),
            (
                "https://site.test/alpha".to_string(),
                detail_page("Alpha", "/alpha", &[]),
            ),
            (
                "https://site.test/beta".to_string(),
                r#"<html><body><div data-hero="{broken"></div></body></html>"#.to_string(),
            ),
        ]));

        let err = repo(transport).fetch_programs().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_detail_page_fails_the_whole_batch() {
        let transport = Arc::new(FakeTransport::new([(
            "https://site.test".to_string(),
            listing_page(&["/alpha", "/gone"]),
        ), (
            "https://site.test/alpha".to_string(),
            detail_page("Alpha", "/alpha", &[]),
        )]));

        let err = repo(transport).fetch_programs().await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn fetch_program_resolves_single_page() {
        let transport = Arc::new(FakeTransport::new([(
            "https://site.test/alpha".to_string(),
            detail_page("Alpha", "/alpha", &["a1"]),
        )]));

        let program = repo(transport)
            .fetch_program(&ProgramSearchKey {
                url: "https://site.test/alpha".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(program.title, "Alpha");
    }

    #[tokio::test]
    async fn fetch_episode_by_node_id_scans_flattened_playlists() {
        let transport = Arc::new(FakeTransport::new([(
            "https://site.test/beta".to_string(),
            detail_page("Beta", "/beta", &["b1", "b2", "b3"]),
        )]));
        let repo = repo(transport);

        let key = EpisodeSearchKey {
            url: "https://site.test/beta".to_string(),
            node_id: "b2".to_string(),
        };
        let episode = repo.fetch_episode_by_node_id(&key).await.unwrap();
        assert_eq!(episode.video_uuid.as_str(), "uuid-b2");

        let missing = EpisodeSearchKey {
            node_id: "zz".to_string(),
            ..key
        };
        assert!(matches!(
            repo.fetch_episode_by_node_id(&missing).await.unwrap_err(),
            CatalogError::NoEpisodeFound { node_id } if node_id == "zz"
        ));
    }

    #[tokio::test]
    async fn fetch_episode_by_video_id_hits_the_content_api() {
        let episode_json = r#"{
            "pageInfo": {"nodeId": "77"},
            "videoUuid": "26ab85f9",
            "title": "Aflevering 36"
        }"#;
        let transport = Arc::new(FakeTransport::new([(
            "https://api.test/content/video/26ab85f9".to_string(),
            episode_json.to_string(),
        )]));

        let episode = repo(Arc::clone(&transport))
            .fetch_episode_by_video_id(&VideoUuid::new("26ab85f9"))
            .await
            .unwrap();
        assert_eq!(episode.page_info.node_id, "77");
        assert_eq!(
            transport.requested(),
            ["https://api.test/content/video/26ab85f9"]
        );
    }
}
