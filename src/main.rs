// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use blog_index::utils::logging::{format_info, format_success, format_warning};
use blog_index::{Config, IndexPipeline, PipelineReport};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "blog_index")]
#[command(version = "0.1.0")]
#[command(about = "Frontmatter-driven index generator for markdown blog posts", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the content tree and write the month-grouped index
    Generate {
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dry run: report skipped documents without writing the index
    Check {
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Emit the report as JSON instead of console output
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    ConfigShow,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    blog_index::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Generate {
            root,
            base_url,
            output,
        } => {
            let mut config = config;
            if let Some(root) = root {
                config.content.root = root;
            }
            if let Some(base_url) = base_url {
                config.index.base_url = base_url;
            }
            if let Some(output) = output {
                config.index.output = output;
            }
            config.validate().context("Invalid configuration")?;

            cmd_generate(config)?;
        }
        Commands::Check { root, json } => {
            let mut config = config;
            if let Some(root) = root {
                config.content.root = root;
            }

            cmd_check(config, json)?;
        }
        Commands::ConfigShow => {
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn cmd_generate(config: Config) -> Result<()> {
    info!("Generating index from {}", config.content.root.display());

    let pipeline = IndexPipeline::new(config);
    let report = pipeline.run().context("Index generation failed")?;

    print_diagnostics(&report);

    let output = report
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!(
        "{}",
        format_success(&format!(
            "Generated {} ({} posts in {} months, {} skipped, {:.2}s)",
            output,
            report.stats.files_indexed,
            report.stats.months,
            report.stats.files_skipped,
            report.stats.duration_secs,
        ))
    );

    Ok(())
}

fn cmd_check(config: Config, json: bool) -> Result<()> {
    let pipeline = IndexPipeline::new(config);
    let report = pipeline.check().context("Check failed")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    print_diagnostics(&report);
    println!(
        "{}",
        format_info(&format!(
            "{} of {} documents would be indexed ({:.0}% ok)",
            report.stats.files_indexed,
            report.stats.files_scanned,
            report.stats.success_rate(),
        ))
    );

    Ok(())
}

fn print_diagnostics(report: &PipelineReport) {
    for diagnostic in &report.diagnostics {
        eprintln!("{}", format_warning(&diagnostic.to_string()));
    }
}
