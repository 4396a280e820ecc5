//! Electronic program guide entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One day's schedule, keyed by channel.
///
/// Immutable once parsed; one instance per queried date. Caching across calls
/// is a caller concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epg(pub BTreeMap<String, Vec<EpgEntry>>);

impl Epg {
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Broadcasts for a channel, empty when the channel is absent.
    pub fn entries(&self, channel: &str) -> &[EpgEntry] {
        self.0.get(channel).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpgEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
