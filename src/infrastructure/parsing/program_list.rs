//! Listing-page parser producing program stubs.
//!
//! Each anchor is validated independently: the `href` path and the title text
//! are extracted on their own, and every field error across every malformed
//! anchor is collected into one failure instead of stopping at the first. A
//! listing without any program anchors at all is a structural failure.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::domain::program::PartialProgram;
use crate::error::{CatalogError, CatalogResult};
use crate::infrastructure::parsing::error::MarkupError;
use crate::infrastructure::parsing::html;

/// Anchor carrying one program link on the listing page.
pub const PROGRAM_LINK_SELECTOR: &str = "a.program-overview__link";

pub struct ProgramListParser {
    link_selector: Selector,
}

impl ProgramListParser {
    pub fn new() -> Result<Self, MarkupError> {
        Ok(Self {
            link_selector: html::compile(PROGRAM_LINK_SELECTOR)?,
        })
    }

    /// Extracts all program stubs from the listing page, in document order.
    pub fn parse(&self, raw_html: &str) -> CatalogResult<Vec<PartialProgram>> {
        let document = Html::parse_document(raw_html);
        let anchors = html::select_all(&document, &self.link_selector, PROGRAM_LINK_SELECTOR)?;

        let mut stubs = Vec::with_capacity(anchors.len());
        let mut errors: Vec<MarkupError> = Vec::new();

        for anchor in anchors {
            let path = html::attr(anchor, "href", PROGRAM_LINK_SELECTOR);
            let name = html::child_at(anchor, 0).and_then(html::text);

            match (name, path) {
                (Ok(name), Ok(path)) => stubs.push(PartialProgram { name, path }),
                (name, path) => {
                    errors.extend(name.err());
                    errors.extend(path.err());
                }
            }
        }

        if !errors.is_empty() {
            warn!(
                "listing parse found {} field errors across program links",
                errors.len()
            );
            return Err(CatalogError::MalformedListing { errors });
        }

        debug!("listing yielded {} program stubs", stubs.len());
        Ok(stubs)
    }
}
