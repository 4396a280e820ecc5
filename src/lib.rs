//! Async client for streaming-platform content catalogs.
//!
//! The crate resolves program listings, per-program detail pages, episode
//! metadata and daily EPG schedules from a provider's public web and JSON
//! endpoints, normalising semi-structured HTML and JSON payloads into typed
//! domain entities.
//!
//! Entry points are the repository traits in [`infrastructure`]:
//! [`infrastructure::catalog::ProgramRepository`] for programs and episodes,
//! [`infrastructure::search::SearchRepository`] for search and store fronts,
//! and [`infrastructure::epg::EpgRepository`] for schedules.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::epg::{Epg, EpgEntry};
pub use domain::program::{Episode, PageInfo, Playlist, Program};
pub use domain::search::{EpisodeSearchKey, ProgramSearchKey, SearchHit, SearchKey, VideoUuid};
pub use domain::storefront::StoreFront;
pub use error::{CatalogError, CatalogResult};
