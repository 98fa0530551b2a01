// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The parsed arguments are also where the run's configuration comes from:
// client_config() and analysis_options() turn them into the immutable values
// the rest of the program receives.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::{AnalysisOptions, ClientConfig, DEFAULT_USER_AGENT};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "seo-analyzer",
    version,
    about = "Analyze a web page for SEO, link health, security and download timing",
    long_about = "seo-analyzer fetches a single page and reports its title, meta description, \
                  headings, word count, internal/external links (with broken-link detection), \
                  image alt text, HTTPS usage and download timing."
)]
pub struct Cli {
    /// Increase log output on stderr (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single page
    ///
    /// Example: seo-analyzer analyze https://example.org --checks links,images --report json
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Target URL to analyze, e.g. https://example.org
    pub url: String,

    /// Comma-separated checks: basic, wordcount, links, images, security,
    /// performance, robots, sitemap. Default: the first six
    #[arg(long, value_delimiter = ',')]
    pub checks: Vec<String>,

    /// Output format: console, json, html or pdf
    #[arg(long, default_value = "console")]
    pub report: String,

    /// File to write the report to (json, html, pdf)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON written to stdout
    #[arg(long)]
    pub pretty: bool,

    /// How many internal and how many external links to probe
    #[arg(long, default_value_t = 50)]
    pub max_check_links: usize,

    /// Link probes running at the same time
    #[arg(long, default_value_t = 10)]
    pub probe_concurrency: usize,

    /// How many image srcs without alt text to list
    #[arg(long, default_value_t = 10)]
    pub max_alt_examples: usize,

    /// Timeout in seconds for downloading the page (fetch and performance check)
    #[arg(long, default_value_t = 12)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Program used to turn the HTML report into a PDF
    #[arg(long, default_value = "wkhtmltopdf")]
    pub pdf_tool: String,
}

impl AnalyzeArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_page_timeout(Duration::from_secs(self.timeout))
            .with_user_agent(self.user_agent.clone())
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            max_check_links: self.max_check_links,
            probe_concurrency: self.probe_concurrency,
            max_missing_alt_examples: self.max_alt_examples,
            ..AnalysisOptions::default()
        }
    }
}
