//! Search hits and the keys used to resolve them to content.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque provider-assigned video identifier.
///
/// A distinct type so a video id cannot be mixed up with node ids or other
/// string identifiers; no behaviour is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoUuid(String);

impl VideoUuid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a program by crawling its page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSearchKey {
    pub url: String,
}

/// Resolve an episode by node id within its owning program's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeSearchKey {
    pub url: String,
    pub node_id: String,
}

/// How a search hit is resolved to content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    Program(ProgramSearchKey),
    EpisodeByNodeId(EpisodeSearchKey),
}

/// A single hit from the provider's search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source")]
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub bundle: Bundle,
    pub absolute_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
}

/// Kind of document a search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundle {
    Program,
    Video,
    #[serde(other)]
    Unknown,
}

impl Source {
    /// Derives the key a caller hands back to the catalog repository.
    ///
    /// Video hits live under their owning program's page, so the program URL
    /// is the hit URL with its last path segment dropped and the hit id
    /// becomes the node id to scan for. Everything else resolves as a program
    /// page crawl.
    pub fn search_key(&self) -> SearchKey {
        match self.bundle {
            Bundle::Video => SearchKey::EpisodeByNodeId(EpisodeSearchKey {
                url: parent_url(&self.absolute_url).to_string(),
                node_id: self.id.clone(),
            }),
            Bundle::Program | Bundle::Unknown => SearchKey::Program(ProgramSearchKey {
                url: self.absolute_url.clone(),
            }),
        }
    }
}

fn parent_url(url: &str) -> &str {
    match url.rfind('/') {
        // Keep scheme separators intact for degenerate inputs like "https://host".
        Some(idx) if idx > url.find("://").map_or(0, |s| s + 2) => &url[..idx],
        _ => url,
    }
}
