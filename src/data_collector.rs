use std::path::Path;

use log::info;
use roto_scraping_utils::fs_json_util::write_json;
use serde::{Serialize, Serializer};

use crate::{
    api::{fetch_table, FetchPage},
    category::Category,
    error::Result,
    options::ScrapeOptions,
    pagination::discover_page_count,
    record::{normalize, Record},
    source_trait::StatSource,
    table::RawTable,
};

/// Batting and pitching records of one source; serialized as `[batting, pitching]`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StatsDocument {
    pub batting: Vec<Record>,
    pub pitching: Vec<Record>,
}

impl Serialize for StatsDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.batting, &self.pitching).serialize(serializer)
    }
}

/// Fetches every listing page of `category` and concatenates them in page order,
/// with headers shortened to their first word.  Pages with different columns are
/// unioned by column name.
pub async fn assemble<S: StatSource, F: FetchPage>(
    fetcher: &F,
    options: &ScrapeOptions,
    category: Category,
) -> Result<RawTable> {
    let page_count = discover_page_count::<S, _>(fetcher, options, category).await?;
    let mut assembled = RawTable::default();
    for page in 1..page_count {
        let table = fetch_table::<S, _>(fetcher, options.season(), category, page).await?;
        info!(
            "{} {category}: fetched page {page}/{} ({} rows)",
            S::NAME,
            page_count - 1,
            table.rows().len()
        );
        assembled.append(table);
    }
    Ok(assembled.shorten_headers())
}

/// Runs one category through assembly, pruning, normalization and repair.
pub async fn collect_category<S: StatSource, F: FetchPage>(
    fetcher: &F,
    options: &ScrapeOptions,
    category: Category,
) -> Result<Vec<Record>> {
    let table = assemble::<S, _>(fetcher, options, category)
        .await?
        .prune(S::columns(category));
    let records = normalize(&table)
        .into_iter()
        .map(S::repair)
        .collect::<Result<Vec<_>>>()?;
    info!("{} {category}: {} records", S::NAME, records.len());
    Ok(records)
}

pub async fn collect_stats<S: StatSource, F: FetchPage>(
    fetcher: &F,
    options: &ScrapeOptions,
) -> Result<StatsDocument> {
    Ok(StatsDocument {
        batting: collect_category::<S, _>(fetcher, options, Category::Batting).await?,
        pitching: collect_category::<S, _>(fetcher, options, Category::Pitching).await?,
    })
}

/// Writes `document` to `path`, replacing whatever was there.
pub fn emit(document: &StatsDocument, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    write_json(path, document)?;
    info!(
        "Saved {} batting and {} pitching records to {path:?}.",
        document.batting.len(),
        document.pitching.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::{
        api::testing::{FakeFetcher, FixedSource, ProbedSource, NO_RESULTS},
        category::Category,
        error::ScrapeError,
        options::ScrapeOptions,
    };

    use super::{assemble, collect_category, collect_stats, emit, StatsDocument};

    fn url(category: &str, page: u32) -> String {
        format!("https://stats.test/{category}?page={page}")
    }

    fn page(players: &[(&str, u32)]) -> String {
        let rows = players
            .iter()
            .map(|(name, hr)| format!("<tr><td>{name}</td><td>LAA</td><td>{hr}</td></tr>"))
            .join("");
        format!(
            "<table><thead><tr><th>Player</th><th>Team Name</th><th>HR Home Runs</th></tr></thead>\
             <tbody>{rows}</tbody></table>"
        )
    }

    fn probed_fetcher(category: &str, pages: &[&[(&str, u32)]]) -> FakeFetcher {
        let fetcher = pages
            .iter()
            .enumerate()
            .fold(FakeFetcher::default(), |fetcher, (i, players)| {
                fetcher.page(url(category, i as u32 + 1), page(players))
            });
        fetcher.page(url(category, pages.len() as u32 + 1), NO_RESULTS)
    }

    #[tokio::test]
    async fn test_assemble_concatenates_in_page_order() {
        let pages: &[&[(&str, u32)]] = &[
            &[("A", 1), ("B", 2)],
            &[("C", 3)],
            &[("D", 4), ("E", 5), ("F", 6)],
        ];
        let fetcher = probed_fetcher("batting", pages);
        let table = assemble::<ProbedSource, _>(&fetcher, &Default::default(), Category::Batting)
            .await
            .unwrap();
        assert_eq!(table.columns(), &["Player", "Team", "HR"]);
        assert_eq!(
            table.rows().len(),
            pages.iter().map(|players| players.len()).sum::<usize>()
        );
        assert_eq!(
            table.rows().iter().map(|row| row[0].as_deref().unwrap()).collect_vec(),
            ["A", "B", "C", "D", "E", "F"]
        );
    }

    #[tokio::test]
    async fn test_assemble_unions_differing_pages() {
        let fetcher = probed_fetcher("batting", &[&[("A", 1)]])
            .page(
                url("batting", 2),
                "<table><tr><th>Player</th><th>SB Stolen Bases</th></tr>\
                 <tr><td>B</td><td>7</td></tr></table>",
            )
            .page(url("batting", 3), NO_RESULTS);
        let table = assemble::<ProbedSource, _>(&fetcher, &Default::default(), Category::Batting)
            .await
            .unwrap();
        assert_eq!(table.columns(), &["Player", "Team", "HR", "SB"]);
        let cell = |x: &str| Some(x.to_owned());
        assert_eq!(
            table.rows(),
            &[
                vec![cell("A"), cell("LAA"), cell("1"), None],
                vec![cell("B"), None, None, cell("7")],
            ]
        );
    }

    #[tokio::test]
    async fn test_fixed_source_fetches_one_page() {
        let fetcher = FakeFetcher::default().page(
            "https://fixed.test/2021/pitching.shtml",
            "<table><tr><th>Tm</th></tr><tr><td>NYY</td></tr></table>\
             <!--<table><tr><th>Name</th><th>SO</th><th>ERA</th></tr>\
             <tr><td>Gerrit Cole</td><td>243</td><td>3.23</td></tr></table>--!>",
        );
        let options = ScrapeOptions::builder().season(2021.into()).build();
        let records = collect_category::<FixedSource, _>(&fetcher, &options, Category::Pitching)
            .await
            .unwrap();
        assert_eq!(
            fetcher.requested(),
            ["https://fixed.test/2021/pitching.shtml"]
        );
        assert_eq!(
            serde_json::to_value(records).unwrap(),
            json!([{"Name": "Gerrit Cole", "SO": 243}])
        );
    }

    #[tokio::test]
    async fn test_collect_stats() {
        let fetcher = probed_fetcher("batting", &[&[("A", 1)], &[("B", 2)]])
            .page(url("pitching", 1), NO_RESULTS);
        let document = collect_stats::<ProbedSource, _>(&fetcher, &Default::default())
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!([
                [
                    {"Player": "A", "HR": 1, "source": "probed"},
                    {"Player": "B", "HR": 2, "source": "probed"}
                ],
                []
            ])
        );
    }

    #[tokio::test]
    async fn test_collect_stats_aborts_on_failure() {
        let fetcher = probed_fetcher("batting", &[&[("A", 1)]])
            .failing(url("pitching", 1), StatusCode::BAD_GATEWAY);
        let err = collect_stats::<ProbedSource, _>(&fetcher, &Default::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::HttpStatus { .. }));
    }

    #[test]
    fn test_emit_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cbs.stats.json");
        fs_err::write(&path, "stale contents").unwrap();
        emit(&StatsDocument::default(), &path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "[[],[]]");
    }
}
