//! wikidict: wiki dictionary dump to e-reader dictionary source converter
//!
//! Reads a line-delimited JSON dump (one dictionary entry per line) and
//! writes a dictionary source tree into the output directory: the package
//! manifest, a cover, a copyright page and the paginated entry documents.
//!
//! Usage:
//!   wikidict definitions.jsonl "My Dictionary" "Jane Doe"
//!
//! The output directory is removed and regenerated on every run.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use wikidict_build::{
    build_dictionary, BuildConfig, DEFAULT_AUTHOR, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_SIZE,
    DEFAULT_TITLE,
};
use wikidict_render::RenderOptions;

#[derive(Parser, Debug)]
#[command(name = "wikidict")]
#[command(about = "Convert a wiki dictionary dump into an e-reader dictionary source")]
struct Args {
    /// Line-delimited JSON definitions file
    definitions: PathBuf,

    /// Dictionary title
    #[arg(default_value = DEFAULT_TITLE)]
    title: String,

    /// Dictionary author
    #[arg(default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Output directory (wiped on every run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Only accept records with these language codes (e.g. "en,es")
    #[arg(long = "lang", value_delimiter = ',')]
    languages: Vec<String>,

    /// Show phonetic transcriptions next to headwords
    #[arg(long)]
    pronunciations: bool,

    /// List inflected forms and their grammatical tags after each entry
    #[arg(long)]
    forms: bool,

    /// List synonyms after each entry
    #[arg(long)]
    synonyms: bool,

    /// Enable verbose debug logging (one line per entry)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> BuildConfig {
        BuildConfig {
            definitions_path: self.definitions,
            title: self.title,
            author: self.author,
            output_dir: self.output,
            page_size: DEFAULT_PAGE_SIZE,
            languages: self.languages,
            render: RenderOptions {
                pronunciations: self.pronunciations,
                forms: self.forms,
                synonyms: self.synonyms,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = args.into_config();
    info!("wikidict starting...");

    let report = build_dictionary(&config).await.with_context(|| {
        format!(
            "Failed to build dictionary from {}",
            config.definitions_path.display()
        )
    })?;

    println!("\n========================================");
    println!("  Dictionary Created");
    println!("========================================");
    println!("  Title:       {}", report.package.title);
    println!("  Author:      {}", report.package.author);
    println!("  Identifier:  {}", report.package.identifier);
    println!("  Lines read:  {}", report.read.lines);
    println!("  Malformed:   {}", report.read.malformed);
    println!("  Filtered:    {}", report.filtered_out);
    println!("  Entries:     {}", report.rendered);
    println!("  Documents:   {}", report.package.documents);
    println!("  Output:      {}", config.output_dir.display());
    println!("========================================\n");

    if !report.is_complete() {
        for failure in &report.failures {
            warn!("{}", failure);
        }
        bail!("{} output file(s) could not be written", report.failures.len());
    }
    Ok(())
}
