//! HTTP transport, parsers and the repositories built on top of them.

pub mod catalog;
pub mod config;
pub mod epg;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod search;

pub use catalog::{HttpProgramRepository, ProgramRepository};
pub use config::{CatalogConfig, HttpClientConfig};
pub use epg::{EpgRepository, HttpEpgRepository};
pub use http_client::{HttpClient, Transport};
pub use search::{HttpSearchRepository, SearchRepository};
