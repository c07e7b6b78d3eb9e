use log::{debug, info};
use scraper::Html;

use crate::{
    api::FetchPage,
    category::Category,
    error::{Result, ScrapeError},
    options::ScrapeOptions,
    source_trait::{PageCount, StatSource},
};

/// Returns the number of the first listing page without results,
/// so that pages `1..n` are exactly the pages holding data.
///
/// Probing gives up with [`ScrapeError::PagesExhausted`] after `options.max_pages()` pages.
/// A page that cannot be fetched is an error, not the end of the listing.
pub async fn discover_page_count<S: StatSource, F: FetchPage>(
    fetcher: &F,
    options: &ScrapeOptions,
    category: Category,
) -> Result<u32> {
    let sentinel = match S::PAGE_COUNT {
        PageCount::Fixed(count) => {
            debug!("{} has a fixed page count of {count}", S::NAME);
            return Ok(count);
        }
        PageCount::Probe { sentinel } => sentinel,
    };
    for page in 1..=options.max_pages() {
        let url = S::stat_url(options.season(), category, page);
        let body = fetcher.fetch_text(&url).await?;
        if has_no_results(&body, sentinel) {
            info!("{} {category}: page {page} has no results", S::NAME);
            return Ok(page);
        }
        debug!("{} {category}: page {page} has results", S::NAME);
    }
    Err(ScrapeError::PagesExhausted {
        category,
        max_pages: options.max_pages(),
    })
}

fn has_no_results(body: &str, sentinel: &str) -> bool {
    Html::parse_document(body)
        .root_element()
        .text()
        .collect::<String>()
        .contains(sentinel)
}
