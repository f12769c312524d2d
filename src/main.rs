use anyhow::Context;
use clap::{Parser, Subcommand};
use fingerlib::{render_all, rewrite_file, table_to_json, FingeringTable};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::{env, process};

/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Info.
/// Set RUST_LOG=fingerlib=debug to see every candidate that was left as text.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// Fingering table in JSON source form; the built-in table is used if omitted
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every table entry to <out-dir>/<key>.svg
    Render {
        #[arg(long, default_value = fingerlib::table::DEFAULT_ASSET_DIR)]
        out_dir: PathBuf,
    },
    /// Rewrite a Markdown file in place, replacing note names with fingering images
    Replace {
        file: PathBuf,
        /// Directory prefix used in image references
        #[arg(long, default_value = fingerlib::table::DEFAULT_ASSET_DIR)]
        notes_dir: String,
    },
    /// Write the active fingering table in JSON source form to standard output
    Table,
}

fn load_table(path: Option<&Path>) -> anyhow::Result<FingeringTable> {
    match path {
        Some(path) => FingeringTable::load(path)
            .with_context(|| format!("loading fingering table {}", path.display())),
        None => Ok(FingeringTable::builtin()
            .context("built-in fingering table")?
            .clone()),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Info);
    }
    log_builder.init();

    let table = load_table(cli.table.as_deref())?;

    match cli.command {
        Commands::Render { out_dir } => {
            render_all(&table, &out_dir)
                .with_context(|| format!("rendering into {}", out_dir.display()))?;
        }
        Commands::Replace { file, notes_dir } => {
            let table = table.with_asset_dir(notes_dir);
            rewrite_file(&table, &file)?;
        }
        Commands::Table => {
            println!("{}", table_to_json(&table)?);
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(2);
    }
}
