use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytsubs::cli::{Cli, Commands, OutputFormat};
use ytsubs::config::Config;
use ytsubs::transcript::{ConversionRequest, TranscriptPipeline};
use ytsubs::{output, utils};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "ytsubs=debug" } else { "ytsubs=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Download {
            url,
            output,
            format,
            languages,
            stdout,
        } => {
            // Check for yt-dlp up front (non-fatal, the fetch reports it properly)
            let missing_deps = utils::check_dependencies(&config.fetcher.yt_dlp_path).await;
            if !missing_deps.is_empty() {
                eprintln!("{}", style("⚠️  Dependency check warnings:").yellow());
                for dep in missing_deps {
                    eprintln!("   • {}", dep);
                }
            }

            let format = format.unwrap_or(config.app.default_output_format);
            let mut request = ConversionRequest::new(url, format).with_languages(languages);
            if let Some(path) = output {
                request = request.with_output(path);
            }

            let pipeline = TranscriptPipeline::from_config(config)?.with_progress(!cli.quiet && !stdout);

            tracing::info!("Starting {} download for URL: {}", format, request.url);

            if stdout {
                let conversion = pipeline.convert(&request).await?;
                output::print_to_console(&conversion.content);
            } else {
                let path = pipeline.run(&request).await?;
                println!(
                    "{} {}",
                    style("Subtitles saved as").green(),
                    path.display()
                );
            }
        }
        Commands::Config { show } => {
            if show {
                config.display();
            } else {
                println!("Configuration file:");
                println!("  {}", Config::config_path(cli.config.as_deref())?.display());
                println!("Run with --show to print the current settings.");
            }
        }
        Commands::Formats => {
            println!("Supported output formats:");
            for format in OutputFormat::all() {
                println!(
                    "  • {:<11} (.{})  {}",
                    format.to_string(),
                    format.extension(),
                    format.description()
                );
            }
        }
    }

    Ok(())
}
