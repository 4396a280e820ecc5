//! Domain entities returned by the repositories.
//!
//! All entities are value objects: constructed fresh per call, handed to the
//! caller by value, never cached or shared mutably by this crate.

pub mod epg;
pub mod program;
pub mod search;
pub mod storefront;

pub use epg::{Epg, EpgEntry};
pub use program::{Episode, PageInfo, PartialProgram, Playlist, Program};
pub use search::{Bundle, EpisodeSearchKey, ProgramSearchKey, SearchHit, SearchKey, Source, VideoUuid};
pub use storefront::{StoreFront, Teaser};
