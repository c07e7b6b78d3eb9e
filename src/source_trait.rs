use crate::{category::Category, error::Result, options::Season, record::Record};

/// How a source tells how many listing pages a category has.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageCount {
    /// Exclusive upper bound of the page numbers, known in advance.
    Fixed(u32),
    /// Probe pages `1, 2, …` until the text of one of them contains `sentinel`.
    Probe { sentinel: &'static str },
}

pub trait StatSource {
    const NAME: &'static str;
    /// Output is written to `<FILE_PREFIX>.stats.json` unless told otherwise.
    const FILE_PREFIX: &'static str;
    /// Index of the `<table>` holding the statistics, counted over the whole document.
    const TABLE_INDEX: usize;
    const BATTING_COLUMNS: &'static [&'static str];
    const PITCHING_COLUMNS: &'static [&'static str];
    const PAGE_COUNT: PageCount;

    fn stat_url(season: Season, category: Category, page: u32) -> String;

    /// Fixes up a single normalized record.  Most sources have nothing to fix.
    fn repair(record: Record) -> Result<Record> {
        Ok(record)
    }

    fn columns(category: Category) -> &'static [&'static str] {
        match category {
            Category::Batting => Self::BATTING_COLUMNS,
            Category::Pitching => Self::PITCHING_COLUMNS,
        }
    }

    fn output_file_name() -> String {
        format!("{}.stats.json", Self::FILE_PREFIX)
    }
}
