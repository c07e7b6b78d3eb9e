use crate::{
    category::Category,
    error::Result,
    options::Season,
    record::Record,
    source_trait::{PageCount, StatSource},
};

pub mod player_repair;

/// CBS Sports lists the current season over as many pages as it takes.
pub struct Cbs;
impl StatSource for Cbs {
    const NAME: &'static str = "CBS Sports";
    const FILE_PREFIX: &'static str = "cbs";
    const TABLE_INDEX: usize = 0;
    const BATTING_COLUMNS: &'static [&'static str] = &["Player", "AB", "R", "H", "HR", "RBI", "SB"];
    const PITCHING_COLUMNS: &'static [&'static str] =
        &["Player", "IP", "W", "SV", "H", "ER", "BB", "SO"];
    const PAGE_COUNT: PageCount = PageCount::Probe {
        sentinel: "Sorry, no results",
    };

    fn stat_url(_season: Season, category: Category, page: u32) -> String {
        format!(
            "https://www.cbssports.com/mlb/stats/player/{category}/mlb/regular/all-pos/all/?page={page}"
        )
    }

    fn repair(record: Record) -> Result<Record> {
        player_repair::repair_player(record)
    }
}
