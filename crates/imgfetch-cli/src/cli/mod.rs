//! CLI for imgfetch: prompt for URLs, run the pipeline, print progress.

mod prompt;
mod report;

use anyhow::Result;
use clap::Parser;
use imgfetch_core::config::{self, FetchConfig};
use imgfetch_core::pipeline::Pipeline;
use std::path::PathBuf;

/// Fetch images from a comma-separated list of URLs into a local directory.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "A tool for mindfully collecting images from the web", long_about = None)]
pub struct Cli {
    /// Comma-separated image URLs. Prompted for interactively when omitted.
    pub urls: Option<String>,

    /// Directory to save images into (overrides `output_dir` from config.toml).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.run()
    }

    fn run(self) -> Result<()> {
        let mut cfg = match config::load_or_init() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("could not load config, using defaults: {:#}", e);
                FetchConfig::default()
            }
        };
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        tracing::debug!("effective config: {:?}", cfg);

        report::banner();
        let input = match self.urls {
            Some(urls) => urls,
            None => prompt::read_urls()?,
        };

        let mut pipeline = Pipeline::new(cfg);
        pipeline.run(&input, report::print_event);
        Ok(())
    }
}
