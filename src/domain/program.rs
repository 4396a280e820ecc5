//! Program, playlist and episode entities.
//!
//! Decoding is lenient: unknown fields in provider payloads are ignored so a
//! schema addition upstream does not break the client, but the fields modelled
//! as required here still fail the decode when absent.

use serde::{Deserialize, Serialize};

use super::search::VideoUuid;

/// Minimal stub discovered on the listing page.
///
/// Only exists to drive the subsequent detail fetch; it is never returned to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialProgram {
    pub name: String,
    pub path: String,
}

/// A full program as embedded in its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub title: String,
    /// Site-relative path of the program page.
    pub link: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl Program {
    /// All episodes across every playlist, in playlist order.
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.playlists.iter().flat_map(|playlist| playlist.episodes.iter())
    }

    /// First episode whose page node id matches.
    ///
    /// Node ids are unique within a program's flattened episode set, so the
    /// first match is the only match.
    pub fn episode_by_node_id(&self, node_id: &str) -> Option<&Episode> {
        self.episodes().find(|episode| episode.page_info.node_id == node_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub page_info: PageInfo,
    pub video_uuid: VideoUuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub created_date: Option<i64>,
    #[serde(default)]
    pub is_protected: bool,
}

/// Page metadata attached to an episode; `node_id` is the lookup key used by
/// episode resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub node_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
}
