use reqwest::StatusCode;
use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Server returned {status} for {url}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("Could not extract a table from {url}: {reason}")]
    Parse { url: String, reason: String },
    #[error("Field {field:?} cannot be used: {reason}")]
    Schema { field: String, reason: String },
    #[error("No empty {category} page was found within the first {max_pages} pages")]
    PagesExhausted { category: Category, max_pages: u32 },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
