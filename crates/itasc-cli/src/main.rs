mod output;

use std::path::PathBuf;

use clap::Parser;
use itasc_core::{AppConfig, TimeRange, TimeWindow};
use itasc_ftc::{FetchOutcome, FtcClient, StopReason};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "itasc-cli")]
#[command(about = "Fetch FTC Do-Not-Call complaints and emit normalized phone reports as JSON")]
struct Cli {
    /// Range to fetch: day, week, or all
    #[arg(short, long, default_value = "day")]
    range: TimeRange,
    /// Write the JSON array to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Stop after this many page requests (overrides `ITASC_FTC_MAX_PAGES`)
    #[arg(long)]
    max_pages: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = itasc_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    run(&cli, &config).await
}

/// Logs go to stderr so stdout carries nothing but the JSON document.
fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let window = TimeWindow::until_now(cli.range);
    let max_pages = cli.max_pages.unwrap_or(config.ftc_max_pages);
    let client = FtcClient::with_base_url(
        &config.ftc_api_key,
        config.ftc_request_timeout_secs,
        &config.user_agent,
        &config.ftc_base_url,
    )?;

    tracing::info!(
        range = %cli.range,
        from = %window.start_param(),
        to = %window.end_param(),
        max_pages,
        "fetching FTC complaints"
    );

    let outcome = client.fetch_all(&window, max_pages).await;
    log_outcome(&outcome);

    match &cli.output {
        Some(path) => {
            output::write_reports(path, &outcome.reports)?;
            println!(
                "# Wrote {} records to {}",
                outcome.reports.len(),
                path.display()
            );
        }
        None => println!("{}", output::render_reports(&outcome.reports)?),
    }

    Ok(())
}

/// Summarizes the run. Aborts and page-limit stops are already reported by
/// `fetch_all` as they happen, so this only adds the totals.
fn log_outcome(outcome: &FetchOutcome) {
    tracing::info!(
        pages = outcome.pages_fetched,
        seen = outcome.records_seen,
        dropped = outcome.records_dropped,
        reports = outcome.reports.len(),
        stop = stop_label(&outcome.stop),
        complete = outcome.stop.is_complete(),
        "FTC fetch finished"
    );
}

fn stop_label(stop: &StopReason) -> &'static str {
    match stop {
        StopReason::EmptyPage => "empty_page",
        StopReason::ShortPage => "short_page",
        StopReason::PageLimit { .. } => "page_limit",
        StopReason::Aborted(_) => "aborted",
    }
}
