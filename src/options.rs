use std::time::Duration;

use getset::CopyGetters;
use typed_builder::TypedBuilder;

/// Season (year) whose statistics are requested.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    derive_more::From,
    derive_more::Into,
    derive_more::FromStr,
    derive_more::Display,
)]
pub struct Season(u16);

#[derive(Clone, Debug, TypedBuilder, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct ScrapeOptions {
    #[builder(default = Season::from(2022))]
    season: Season,
    /// Highest page number probed while looking for the "no results" page.
    #[builder(default = 100)]
    max_pages: u32,
    /// Applies to each request as a whole, from connecting until the body is read.
    #[builder(default = Duration::from_secs(30))]
    timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
