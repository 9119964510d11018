mod config;
mod repo;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use commit_graph::{parse_commit_list, render_commit_graph_with, Charset, RenderOptions};
use tracing_subscriber::EnvFilter;

use config::Config;
use repo::GitWalker;

#[derive(Parser)]
#[command(name = "graphline")]
#[command(about = "Draw the commit graph beside a git log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the graph for a repository's history
    Log {
        /// Path to the repository
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Number of commits to show
        #[arg(short, long)]
        count: Option<usize>,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a commit list read from a file or stdin
    Render {
        /// File with one `<hash> <parents...>[\t<author>]` line per commit
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Hash (or prefix) of the commit to highlight
    #[arg(short, long, default_value = "")]
    select: String,
    /// Number of render threads
    #[arg(long)]
    workers: Option<usize>,
    /// Draw with ASCII characters only
    #[arg(long)]
    ascii: bool,
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Load the config file and apply flag overrides
    fn resolve(&self) -> Result<(Config, RenderOptions)> {
        let config = Config::load(self.config.as_deref()).context("Failed to load config")?;

        let mut options = RenderOptions::default().with_charset(config.charset);
        options.workers = self.workers.or(config.workers);
        if self.ascii {
            options.charset = Charset::Ascii;
        }

        Ok((config, options))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Log {
            path,
            count,
            render,
        } => {
            let (config, options) = render.resolve()?;
            let walker = GitWalker::new(Some(path.as_path()))?;
            let entries = walker.log(count)?;

            let commits: Vec<_> = entries.iter().map(|entry| entry.commit.clone()).collect();
            let lines = render_commit_graph_with(
                &commits,
                &render.select,
                |commit| config.style_of(commit),
                &options,
            );

            let mut out = io::stdout().lock();
            for (line, entry) in lines.iter().zip(&entries) {
                let short = &entry.commit.hash[..8.min(entry.commit.hash.len())];
                writeln!(out, "{} {} {}", line, short, entry.summary)?;
            }
        }
        Commands::Render { input, render } => {
            let (config, options) = render.resolve()?;

            let text = match &input {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read stdin")?;
                    text
                }
            };
            let commits = parse_commit_list(&text)?;

            let lines = render_commit_graph_with(
                &commits,
                &render.select,
                |commit| config.style_of(commit),
                &options,
            );

            let mut out = io::stdout().lock();
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}
