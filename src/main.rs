//! weft: inspect how text is addressed in UTF-16 code units versus grapheme
//! clusters.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use weft_config::WeftConfig;
use weft_text::{BoundaryTable, CodeUnitMapping, CodeUnitRange, TextView};

#[derive(Debug, Parser)]
#[command(name = "weft", version, about = "Grapheme-safe text range conversion")]
struct Cli {
    /// Path to a weft.toml; defaults to ./weft.toml when present
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every grapheme cluster with its code-unit and byte span
    Clusters { text: String },
    /// Convert a code-unit range to a native range and back
    Convert {
        text: String,
        #[arg(long)]
        location: i64,
        #[arg(long, default_value_t = 0)]
        length: i64,
    },
    /// Show the boundaries before and after a code-unit offset
    Neighbors {
        text: String,
        #[arg(long)]
        offset: usize,
    },
    /// Search like a host widget and report the code-unit range
    Find { text: String, needle: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WeftConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => WeftConfig::load_or_default(),
    };
    config.merge_with_env();
    init_logging(&config);

    let text = match &cli.command {
        Command::Clusters { text }
        | Command::Convert { text, .. }
        | Command::Neighbors { text, .. }
        | Command::Find { text, .. } => text.as_str(),
    };

    let view = TextView::new(text);
    if view.utf16_len() >= config.text.boundary_cache_threshold {
        log::debug!(
            "using boundary table for {} code units (threshold {})",
            view.utf16_len(),
            config.text.boundary_cache_threshold
        );
        run(&BoundaryTable::from_view(&view), &view, &cli.command)
    } else {
        run(&view, &view, &cli.command)
    }
}

fn init_logging(config: &WeftConfig) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(filter) = &config.logging.filter {
        builder.parse_filters(filter);
    }
    let _ = builder.try_init();
}

fn run<'a, M: CodeUnitMapping<'a>>(map: &M, view: &TextView<'a>, command: &Command) -> Result<()> {
    match command {
        Command::Clusters { .. } => {
            println!("{:>6} {:>6} {:>10}  cluster", "utf16", "width", "bytes");
            for cluster in view.clusters() {
                println!(
                    "{:>6} {:>6} {:>10}  {:?}",
                    cluster.utf16_start,
                    cluster.utf16_len,
                    format!("{:?}", cluster.byte_range()),
                    &map.text()[cluster.byte_range()]
                );
            }
            println!("total: {} code units", map.utf16_len());
        }
        Command::Convert {
            location, length, ..
        } => {
            let host_range = CodeUnitRange::from_host(*location, *length)?;
            match map.try_range_from(host_range) {
                Ok(range) => {
                    println!("native bytes: {:?}", range.byte_range());
                    println!("slice: {:?}", map.slice(range).unwrap_or_default());
                    if let Some(back) = map.code_unit_range(range) {
                        println!("round trip: location={} length={}", back.location, back.length);
                    }
                }
                Err(err) => println!("no native range: {err}"),
            }
        }
        Command::Neighbors { offset, .. } => {
            match map.try_location_before(*offset) {
                Ok(before) => println!("before: {before}"),
                Err(err) => println!("before: none ({err})"),
            }
            match map.try_location_after(*offset) {
                Ok(after) => println!("after: {after}"),
                Err(err) => println!("after: none ({err})"),
            }
            println!("boundary: {}", map.is_boundary(*offset));
        }
        Command::Find { needle, .. } => {
            let range = map.range_of(needle);
            if range.is_not_found() {
                println!("not found");
            } else {
                println!("location={} length={}", range.location, range.length);
            }
        }
    }
    Ok(())
}
