//! HTML and JSON parsing for provider payloads.
//!
//! Markup access is failure-explicit: absent structure is reported as a
//! [`MarkupError`] and never silently swallowed, so page-shape drift upstream
//! surfaces as a distinct error kind instead of an empty result.

pub mod error;
pub mod html;
pub mod json;
pub mod program_detail;
pub mod program_list;

pub use error::MarkupError;
pub use json::{EpgParser, EpisodeParser, SearchResultsParser, StoreFrontParser};
pub use program_detail::ProgramDetailParser;
pub use program_list::ProgramListParser;
