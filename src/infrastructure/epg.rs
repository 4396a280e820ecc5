//! Daily schedule resolution.
//!
//! Independent of the catalog pipeline; shares the transport and failure
//! model. One request per queried date, no concurrency.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::epg::Epg;
use crate::error::CatalogResult;
use crate::infrastructure::config::CatalogConfig;
use crate::infrastructure::http_client::Transport;
use crate::infrastructure::parsing::EpgParser;

#[async_trait]
pub trait EpgRepository: Send + Sync {
    /// The schedule document for the given calendar date.
    async fn schedule(&self, date: NaiveDate) -> CatalogResult<Epg>;
}

pub struct HttpEpgRepository {
    transport: Arc<dyn Transport>,
    config: CatalogConfig,
    parser: EpgParser,
}

impl HttpEpgRepository {
    pub fn new(transport: Arc<dyn Transport>, config: CatalogConfig) -> Self {
        Self {
            transport,
            config,
            parser: EpgParser,
        }
    }

    // The upstream document name uses bare integers, e.g. schedule.2020-11-3.json
    // for November 3rd; single-digit months and days are not zero-padded.
    fn schedule_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/schedule.{}-{}-{}.json",
            self.config.epg_url.trim_end_matches('/'),
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl EpgRepository for HttpEpgRepository {
    async fn schedule(&self, date: NaiveDate) -> CatalogResult<Epg> {
        let url = self.schedule_url(date);
        debug!("fetching schedule {url}");
        let body = self.transport.get_text(&url).await?;
        self.parser.parse(&body)
    }
}
