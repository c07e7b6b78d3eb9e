use crate::{
    category::Category,
    options::Season,
    source_trait::{PageCount, StatSource},
};

/// Baseball-Reference puts a whole season on a single page per category.
pub struct BaseballReference;
impl StatSource for BaseballReference {
    const NAME: &'static str = "Baseball-Reference";
    const FILE_PREFIX: &'static str = "baseball_reference";
    // The first table is the team summary; the player table sits in a comment.
    const TABLE_INDEX: usize = 1;
    const BATTING_COLUMNS: &'static [&'static str] =
        &["Name", "Tm", "AB", "R", "H", "HR", "RBI", "SB"];
    const PITCHING_COLUMNS: &'static [&'static str] =
        &["Name", "Tm", "W", "SV", "IP", "H", "ER", "BB", "SO"];
    const PAGE_COUNT: PageCount = PageCount::Fixed(2);

    fn stat_url(season: Season, category: Category, _page: u32) -> String {
        format!("https://www.baseball-reference.com/leagues/majors/{season}-standard-{category}.shtml")
    }
}
