// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Fetch the target page (the only failure that stops the run)
// 3. Run the selected checks
// 4. Print or export the report
// 5. Exit with proper code (0 = success, 1 = page could not be fetched,
//    2 = any other error)
// =============================================================================

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use log::{error, info};

use seo_analyzer::analyzer::{run_full_analysis, AnalysisResult};
use seo_analyzer::cli::{AnalyzeArgs, Cli, Commands};
use seo_analyzer::client::HttpClient;
use seo_analyzer::fetch::fetch_page;
use seo_analyzer::report::{self, ReportFormat};

const EXIT_FETCH_FAILED: i32 = 1;
const EXIT_ERROR: i32 = 2;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins when set; otherwise -v picks the level
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
    }
}

// Handles the 'analyze' subcommand
async fn handle_analyze(args: AnalyzeArgs) -> Result<i32> {
    let client = HttpClient::new(args.client_config()).context("could not build HTTP client")?;

    let page = match fetch_page(&client, &args.url).await {
        Ok(page) => page,
        Err(e) => {
            error!("could not fetch {}: {}", args.url, e);
            eprintln!("[ERROR] Failed to fetch {}: {}", args.url, e);
            return Ok(EXIT_FETCH_FAILED);
        }
    };

    let result = run_full_analysis(&client, &page, &args.checks, &args.analysis_options()).await;
    info!(
        "analysis of {} finished: {} check(s), {} broken link(s)",
        result.url,
        result.checks_run.len(),
        result.broken_link_count()
    );

    // Validated only now, so an unknown format does not prevent the analysis
    let format: ReportFormat = args.report.parse()?;
    write_report(&result, format, &args)?;

    Ok(0)
}

fn write_report(result: &AnalysisResult, format: ReportFormat, args: &AnalyzeArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .or_else(|| format.default_output().map(PathBuf::from));

    match (format, output) {
        (ReportFormat::Console, _) => {
            println!("=== SEO Analyzer Results ===\n");
            println!("{}", report::format_text(result));
        }
        (ReportFormat::Json, None) => {
            println!("{}", report::to_json(result, args.pretty)?);
        }
        (format, Some(path)) => {
            report::export(result, format, &path, &args.pdf_tool)
                .with_context(|| format!("could not write {} report", format))?;
            println!("[OK] {} report saved to {}", format.to_string().to_uppercase(), path.display());
        }
        (format, None) => bail!("no output path for {} report; pass --output", format),
    }
    Ok(())
}
