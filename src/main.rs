use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use log::info;
use roto_scraping::api::StatClient;
use roto_scraping::baseball_reference::BaseballReference;
use roto_scraping::cbs::Cbs;
use roto_scraping::data_collector::collect_stats;
use roto_scraping::data_collector::emit;
use roto_scraping::options::ScrapeOptions;
use roto_scraping::options::Season;
use roto_scraping::source_trait::StatSource;

#[derive(Parser)]
struct Opts {
    #[arg(value_enum)]
    source: Source,
    /// Ignored by sources that only publish the current season.
    #[arg(long, default_value_t = Season::from(2022))]
    season: Season,
    /// Give up looking for the end of a paginated listing after this many pages.
    #[arg(long, default_value_t = 100)]
    max_pages: u32,
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// Defaults to `<source prefix>.stats.json` in the working directory.
    #[arg(long)]
    output: Option<PathBuf>,
}
#[derive(Clone, ValueEnum)]
enum Source {
    Cbs,
    BaseballReference,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.source {
        Source::Cbs => run::<Cbs>(&opts).await,
        Source::BaseballReference => run::<BaseballReference>(&opts).await,
    }
}

async fn run<S: StatSource>(opts: &Opts) -> anyhow::Result<()> {
    let options = ScrapeOptions::builder()
        .season(opts.season)
        .max_pages(opts.max_pages)
        .timeout(Duration::from_secs(opts.timeout_secs))
        .build();
    let client = StatClient::new(&options)?;
    info!("Scraping {} ({} season).", S::NAME, options.season());
    let document = collect_stats::<S, _>(&client, &options)
        .await
        .with_context(|| format!("While scraping {}", S::NAME))?;
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| S::output_file_name().into());
    emit(&document, &output)?;
    Ok(())
}
