use log::debug;
use scraper::Html;

use crate::{
    category::Category,
    error::{Result, ScrapeError},
    options::{ScrapeOptions, Season},
    source_trait::StatSource,
    table::RawTable,
};

/// Something that can GET a page and hand back its body.
#[allow(async_fn_in_trait)]
pub trait FetchPage {
    /// Fails with [`ScrapeError::HttpStatus`] unless the server answered with a 2xx status.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

pub struct StatClient {
    client: reqwest::Client,
}

impl StatClient {
    pub fn new(options: &ScrapeOptions) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchPage for StatClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let network = |source: reqwest::Error| ScrapeError::Network {
            url: url.to_owned(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_owned(),
                status,
            });
        }
        response.text().await.map_err(network)
    }
}

/// Removes `<!--` and `--!>` so that tables hidden in comments become part of the document.
pub fn strip_comment_markers(html: &str) -> String {
    html.replace("<!--", "").replace("--!>", "")
}

/// Downloads one listing page and extracts the source's stat table from it.
pub async fn fetch_table<S: StatSource, F: FetchPage>(
    fetcher: &F,
    season: Season,
    category: Category,
    page: u32,
) -> Result<RawTable> {
    let url = S::stat_url(season, category, page);
    let body = fetcher.fetch_text(&url).await?;
    let html = Html::parse_document(&strip_comment_markers(&body));
    RawTable::nth_in(&html, S::TABLE_INDEX).ok_or_else(|| ScrapeError::Parse {
        reason: format!("table #{} not found", S::TABLE_INDEX),
        url,
    })
}
