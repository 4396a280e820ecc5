//! Sample driver: dump the program catalog, a search, or today's schedule.
//!
//! Usage:
//!   fetch_catalog                 list all programs with episode counts
//!   fetch_catalog search <query>  run a search and print resolution keys
//!   fetch_catalog epg             print today's schedule per channel

use std::sync::Arc;

use chrono::Utc;
use tv_catalog::infrastructure::logging::init_logging;
use tv_catalog::infrastructure::{
    CatalogConfig, EpgRepository, HttpClient, HttpClientConfig, HttpEpgRepository,
    HttpProgramRepository, HttpSearchRepository, ProgramRepository, SearchRepository, Transport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let transport: Arc<dyn Transport> = Arc::new(HttpClient::new(HttpClientConfig::default())?);
    let config = CatalogConfig::default();

    match args.first().map(String::as_str) {
        Some("search") => {
            let query = args
                .get(1)
                .ok_or_else(|| anyhow::anyhow!("usage: fetch_catalog search <query>"))?;
            let search = HttpSearchRepository::new(transport, config);
            for hit in search.search(query).await? {
                let title = hit.source.title.as_deref().unwrap_or("<untitled>");
                println!("{title}: {:?}", hit.source.search_key());
            }
        }
        Some("epg") => {
            let epg = HttpEpgRepository::new(transport, config);
            let schedule = epg.schedule(Utc::now().date_naive()).await?;
            for channel in schedule.channels() {
                println!("{channel}:");
                for entry in schedule.entries(channel) {
                    let start = entry.start.as_deref().unwrap_or("?");
                    println!("  {start}  {}", entry.title);
                }
            }
        }
        _ => {
            let catalog = HttpProgramRepository::new(transport, config)?;
            let programs = catalog.fetch_programs().await?;
            println!("{} programs", programs.len());
            for program in &programs {
                println!("  {} ({} episodes)", program.title, program.episodes().count());
            }
        }
    }

    Ok(())
}
