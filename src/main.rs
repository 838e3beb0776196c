use acromatch::cli::{Cli, Commands};
use acromatch::config::Config;
use acromatch::search::{Finder, PathSegments, Suggestion};
use acromatch::{corpus, format};
use anyhow::Context;
use clap::Parser;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    acromatch::tracing::init(cli.verbose);

    match cli.command {
        Commands::Search {
            query,
            root,
            limit,
            json,
            no_primary,
            hidden,
            extensions,
            config,
        } => {
            let mut config = match config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load(),
            };
            if let Some(limit) = limit {
                config.max_acronym_results = limit;
            }
            if no_primary {
                config.primary_search = false;
            }
            if hidden {
                config.include_hidden = true;
            }
            if !extensions.is_empty() {
                config.extensions = extensions;
            }

            run_search(&query, &root, &config, json)
        }
        Commands::Explain {
            query,
            text,
            basename,
            path,
        } => {
            let segments = basename
                .as_deref()
                .zip(path.as_deref())
                .map(|(basename, path)| PathSegments { basename, path });
            print!("{}", format::render_explanation(&query, &text, segments));
            Ok(())
        }
    }
}

fn run_search(query: &str, root: &Path, config: &Config, json: bool) -> anyhow::Result<()> {
    let files = corpus::scan(root, &config.scan_options())
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    tracing::info!("Searching {} files under {}", files.len(), root.display());

    let suggestions: Vec<Suggestion> = files.into_iter().map(Suggestion::from).collect();
    let hits = Finder::new(query, config.finder_options()).find(&suggestions);

    if json {
        println!("{}", format::render_json(&hits)?);
    } else {
        print!("{}", format::render_hits(query, &hits));
    }
    Ok(())
}
