//! Store-front rows from the provider's catalog API.
//!
//! Rows come in several shapes (carousels, swimlanes, marketing blocks); only
//! the fields shared across shapes are modelled and everything else is
//! tolerated and dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFront {
    pub id: String,
    pub row_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub teasers: Vec<Teaser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teaser {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub target: Option<TeaserTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeaserTarget {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_row_with_unmodelled_shape_fields() {
        let json = r#"{
            "id": "row-1",
            "rowType": "SWIMLANE_DEFAULT",
            "title": "Popular",
            "swimlaneType": "wide",
            "teasers": [
                {"title": "Show", "imageUrl": "https://img/1.jpg",
                 "target": {"type": "PROGRAM", "id": "p1"}, "tagline": "new"}
            ]
        }"#;
        let row: StoreFront = serde_json::from_str(json).unwrap();
        assert_eq!(row.row_type, "SWIMLANE_DEFAULT");
        assert_eq!(row.teasers.len(), 1);
        assert_eq!(
            row.teasers[0].target.as_ref().unwrap().kind.as_deref(),
            Some("PROGRAM")
        );
    }
}
