use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reposcout::{
    GatewayConfig, GithubGateway, InteractiveSearch, PageSize, ResultPage, SearchGateway,
    SearchRequest, SortDirection, SortField, SortOrder, logging,
    query::{normalize_page, normalize_page_size, normalize_search},
    search::format_repository,
};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "reposcout",
    version,
    about = "Search GitHub repositories from the terminal",
    long_about = None
)]
struct Cli {
    /// Search query, passed to GitHub as-is after trimming
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "REPOSCOUT_API_URL", default_value = GatewayConfig::DEFAULT_BASE_URL)]
    api_url: String,

    /// Log file for interactive mode (default: <tmp>/reposcout.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Sort field (forks, stars, updated)
    #[arg(long)]
    sort: Option<SortField>,

    /// Sort direction (asc, desc); only meaningful with --sort
    #[arg(long, requires = "sort")]
    order: Option<SortDirection>,

    /// Zero-based page index
    #[arg(long, default_value = "0")]
    page: usize,

    /// Results per page (10, 25, 50)
    #[arg(long, default_value = "10")]
    per_page: PageSize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Interactive search mode
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    query: &'a str,
    page: usize,
    per_page: usize,
    total_count: u64,
    items: &'a [reposcout::RepositorySummary],
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_file = if cli.interactive {
        Some(cli.log_file.clone().unwrap_or_else(logging::default_log_path))
    } else {
        cli.log_file.clone()
    };
    logging::init_tracing(log_file.as_deref(), cli.verbose)?;

    let gateway = GithubGateway::new(GatewayConfig {
        base_url: cli.api_url.clone(),
        token: cli.token.clone(),
        ..Default::default()
    })?;

    let runtime = Runtime::new().context("Failed to start async runtime")?;

    if cli.interactive {
        let mut interactive = InteractiveSearch::new(Arc::new(gateway), runtime.handle().clone());
        interactive.run(cli.query.clone())?;
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_one_shot(&cli, &gateway, &runtime, &mut handle)
}

/// Perform a single search and print the page. A gateway failure is reported
/// on stderr and turned into a failing exit code.
fn run_one_shot(
    cli: &Cli,
    gateway: &dyn SearchGateway,
    runtime: &Runtime,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let request = build_request(cli);
    if request.is_empty() {
        // Empty queries never reach the gateway.
        return Ok(ExitCode::SUCCESS);
    }

    if cli.verbose {
        eprintln!("Searching: {request:?}");
    }
    debug!(?request, "one-shot search");

    match runtime.block_on(gateway.fetch_page(&request)) {
        Ok(page) => {
            print_page(cli, &request, &page, out)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn build_request(cli: &Cli) -> SearchRequest {
    let raw = cli.query.as_deref().unwrap_or_default();
    let mut request = normalize_search(raw, &SearchRequest::default());
    request = normalize_page_size(&request, cli.per_page);
    request.sort = cli.sort.map(|field| SortOrder {
        field,
        direction: cli.order.unwrap_or(SortDirection::Asc),
    });
    normalize_page(&request, cli.page)
}

fn print_page(
    cli: &Cli,
    request: &SearchRequest,
    page: &ResultPage,
    handle: &mut impl Write,
) -> Result<()> {
    let page_size = request.page_size.get();

    match cli.format {
        OutputFormat::Text => {
            if page.is_empty() {
                writeln!(handle, "No repositories found.")?;
            } else {
                writeln!(
                    handle,
                    "Page {} of {} · {} results · {} per page\n",
                    request.page_index + 1,
                    page.page_count(page_size).max(1),
                    page.total_count,
                    page_size
                )?;
                for repo in &page.items {
                    writeln!(handle, "{}", format_repository(repo, !cli.no_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonPage {
                query: &request.query,
                page: request.page_index,
                per_page: page_size,
                total_count: page.total_count,
                items: &page.items,
            };
            writeln!(handle, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::JsonL => {
            for repo in &page.items {
                writeln!(handle, "{}", serde_json::to_string(repo)?)?;
            }
        }
    }

    Ok(())
}
