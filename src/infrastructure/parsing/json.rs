//! Plain JSON decoders for API payloads.
//!
//! No markup involved: these inputs are pure JSON, so the only failure kind
//! is a decode error. Decoding is lenient throughout.

use serde::Deserialize;

use crate::domain::epg::Epg;
use crate::domain::program::Episode;
use crate::domain::search::SearchHit;
use crate::domain::storefront::StoreFront;
use crate::error::CatalogResult;

/// Decodes a single episode payload from the content API.
pub struct EpisodeParser;

impl EpisodeParser {
    pub fn parse(&self, raw_json: &str) -> CatalogResult<Episode> {
        Ok(serde_json::from_str(raw_json)?)
    }
}

/// Decodes a daily schedule document.
pub struct EpgParser;

impl EpgParser {
    pub fn parse(&self, raw_json: &str) -> CatalogResult<Epg> {
        Ok(serde_json::from_str(raw_json)?)
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    hits: SearchHits,
}

#[derive(Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

/// Decodes elastic-style search results into their hits.
pub struct SearchResultsParser;

impl SearchResultsParser {
    pub fn parse(&self, raw_json: &str) -> CatalogResult<Vec<SearchHit>> {
        let envelope: SearchEnvelope = serde_json::from_str(raw_json)?;
        Ok(envelope.hits.hits)
    }
}

#[derive(Deserialize)]
struct StoreFrontEnvelope {
    rows: Vec<StoreFront>,
}

/// Decodes the store-front rows envelope.
pub struct StoreFrontParser;

impl StoreFrontParser {
    pub fn parse_list(&self, raw_json: &str) -> CatalogResult<Vec<StoreFront>> {
        let envelope: StoreFrontEnvelope = serde_json::from_str(raw_json)?;
        Ok(envelope.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{Bundle, SearchKey};
    use crate::error::CatalogError;

    #[test]
    fn decodes_episode_and_tolerates_unknown_fields() {
        let json = r#"{
            "pageInfo": {"nodeId": "123", "title": "Aflevering 7"},
            "videoUuid": "26ab85f9-3946-4e1b-8b3f-79018252acb0",
            "title": "Aflevering 7",
            "seasonNumber": 18,
            "episodeNumber": 36,
            "drmInfo": {"level": "L3"}
        }"#;
        let episode = EpisodeParser.parse(json).unwrap();
        assert_eq!(episode.page_info.node_id, "123");
        assert_eq!(episode.season_number, Some(18));
    }

    #[test]
    fn episode_without_video_uuid_fails_decode() {
        let json = r#"{"pageInfo": {"nodeId": "123"}, "title": "x"}"#;
        assert!(matches!(
            EpisodeParser.parse(json).unwrap_err(),
            CatalogError::Decode(_)
        ));
    }

    #[test]
    fn decodes_epg_document() {
        let json = r#"{"een": [{"title": "Terzake", "start": "2020-11-21T20:00:00+01:00"}]}"#;
        let epg = EpgParser.parse(json).unwrap();
        assert_eq!(epg.entries("een")[0].title, "Terzake");
    }

    fn search_results(count: usize) -> String {
        let hits: Vec<String> = (0..count)
            .map(|i| {
                let bundle = if i % 2 == 0 { "program" } else { "video" };
                format!(
                    r#"{{"_index": "content", "_score": 1.5,
                        "_source": {{"id": "id-{i}", "bundle": "{bundle}",
                                     "title": "Hit {i}",
                                     "absoluteUrl": "https://host.be/show/item-{i}"}}}}"#
                )
            })
            .collect();
        format!(
            r#"{{"took": 3, "hits": {{"total": {count}, "hits": [{}]}}}}"#,
            hits.join(",")
        )
    }

    #[test]
    fn decodes_twenty_search_hits() {
        let hits = SearchResultsParser.parse(&search_results(20)).unwrap();
        assert_eq!(hits.len(), 20);
        assert_eq!(hits[0].source.bundle, Bundle::Program);
        assert!(matches!(
            hits[1].source.search_key(),
            SearchKey::EpisodeByNodeId(_)
        ));
    }

    fn store_front_rows(count: usize) -> String {
        let rows: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"id": "row-{i}", "rowType": "SWIMLANE_DEFAULT", "title": "Row {i}",
                        "teasers": [{{"title": "Teaser", "imageUrl": "https://img/{i}.jpg"}}]}}"#
                )
            })
            .collect();
        format!(r#"{{"rows": [{}]}}"#, rows.join(","))
    }

    #[test]
    fn decodes_twenty_four_store_front_rows() {
        let rows = StoreFrontParser.parse_list(&store_front_rows(24)).unwrap();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[23].id, "row-23");
    }

    #[test]
    fn truncated_payload_is_a_decode_failure() {
        let mut payload = search_results(3);
        payload.truncate(payload.len() / 2);
        assert!(matches!(
            SearchResultsParser.parse(&payload).unwrap_err(),
            CatalogError::Decode(_)
        ));
    }
}
