//! lifeline — command-line frontend for the timeline journal and dataset.
//!
//! # Subcommands
//! - `add <title> --date --type --description [--media]` — journal an event
//! - `list`                — journaled events in chronological order
//! - `show <id>`           — one node of the built-in dataset
//! - `links <id>`          — edges touching a built-in node
//! - `check`               — validate the journal and its assembled dataset
//! - `export [--builtin]`  — dataset JSON for the visualization layer

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lifeline_core::{
    dataset, default_log_level, init_logging, FsEventRepository, RecordEventRequest,
    TimelineDataset, TimelineService,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lifeline",
    version,
    about = "Manage your life timeline from the command line"
)]
struct Cli {
    /// Directory holding journaled event files
    #[arg(long, default_value = "events")]
    events_dir: PathBuf,

    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Journal a new event
    Add {
        /// Event title
        title: String,

        /// Event date in YYYY-MM-DD format
        #[arg(long)]
        date: NaiveDate,

        /// Event kind (life, education, work, travel, health)
        #[arg(long = "type")]
        kind: String,

        /// Brief description of the event
        #[arg(long)]
        description: String,

        /// Also create a directory for media files
        #[arg(long)]
        media: bool,
    },

    /// List journaled events in chronological order
    List,

    /// Show one node of the built-in dataset
    Show {
        /// Node id, e.g. `today`
        id: String,
    },

    /// List edges touching a node of the built-in dataset
    Links {
        /// Node id, e.g. `house`
        id: String,
    },

    /// Load every journaled event and validate the assembled dataset
    Check,

    /// Export a dataset as pretty JSON for the visualization layer
    Export {
        /// Write to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export the built-in dataset instead of the journal
        #[arg(long)]
        builtin: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("--log-dir must be valid UTF-8")?;
        init_logging(default_log_level(), log_dir).map_err(anyhow::Error::msg)?;
    }

    let service = TimelineService::new(FsEventRepository::new(&cli.events_dir));

    match cli.command {
        Commands::Add {
            title,
            date,
            kind,
            description,
            media,
        } => {
            let request = RecordEventRequest {
                title,
                date,
                kind,
                description,
                with_media_dir: media,
            };
            let path = service.record_event(&request)?;
            println!("created event file: {}", path.display());
        }

        Commands::List => {
            for event in service.list_events()? {
                println!(
                    "{} - [{}] {}",
                    event.date.format("%Y-%m-%d"),
                    event.kind,
                    event.title
                );
            }
        }

        Commands::Show { id } => {
            let Some(node) = dataset::builtin().node(&id) else {
                bail!("no node with id `{id}`");
            };
            println!("id:          {}", node.id);
            println!("name:        {}", node.name);
            println!("date:        {}", node.date.format("%Y-%m-%d"));
            println!("type:        {}", node.kind);
            println!("description: {}", node.description);
        }

        Commands::Links { id } => {
            let data = dataset::builtin();
            if data.node(&id).is_none() {
                bail!("no node with id `{id}`");
            }
            for link in data.links_from(&id) {
                println!("{} -> {}", link.source, link.target);
            }
            for link in data.links_into(&id) {
                println!("{} <- {}", link.target, link.source);
            }
        }

        Commands::Check => {
            let assembled = service.assemble_dataset()?;
            println!(
                "journal ok: {} nodes, {} links",
                assembled.node_count(),
                assembled.link_count()
            );
        }

        Commands::Export { output, builtin } => {
            let assembled;
            let exported: &TimelineDataset = if builtin {
                dataset::builtin()
            } else {
                assembled = service.assemble_dataset()?;
                &assembled
            };
            let json = serde_json::to_string_pretty(exported)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write `{}`", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
