//! Detail-page parser.
//!
//! A program's full entity ships as a JSON document inside the hero
//! container's data attribute, under a top-level `"data"` key. Locating the
//! container and its attribute are structural concerns; everything after that
//! is a JSON decode.

use scraper::{Html, Selector};
use serde::Deserialize;

use crate::domain::program::Program;
use crate::error::CatalogResult;
use crate::infrastructure::parsing::error::MarkupError;
use crate::infrastructure::parsing::html;

const HERO_ATTRIBUTE: &str = "data-hero";
const HERO_SELECTOR: &str = "div[data-hero]";

#[derive(Deserialize)]
struct DetailEnvelope {
    data: Program,
}

pub struct ProgramDetailParser {
    hero_selector: Selector,
}

impl ProgramDetailParser {
    pub fn new() -> Result<Self, MarkupError> {
        Ok(Self {
            hero_selector: html::compile(HERO_SELECTOR)?,
        })
    }

    pub fn parse(&self, raw_html: &str) -> CatalogResult<Program> {
        let document = Html::parse_document(raw_html);
        let hero = html::select_first(&document, &self.hero_selector, HERO_SELECTOR)?;
        let raw_json = html::attr(hero, HERO_ATTRIBUTE, HERO_SELECTOR)?;

        let envelope: DetailEnvelope = serde_json::from_str(&raw_json)?;
        Ok(envelope.data)
    }
}
