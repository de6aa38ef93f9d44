//! editor-palette - list the style keys and colors a color scheme exposes
//!
//! Usage: editor-palette [--language ID] [--filter] [--colors foreground]

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use editor_palette::error::Result;
use editor_palette::palette::ColorSelector;
use editor_palette::registry::Catalog;
use editor_palette::render::PaletteWriter;

/// List the style keys a color scheme exposes for a language
#[derive(Debug, Parser)]
#[command(name = "editor-palette", version, about)]
struct Args {
    /// Config file (defaults to ~/.editor-palette.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language id, `any` for all languages, `none` for the generic palette
    #[arg(short, long, default_value = "none")]
    language: String,

    /// Leave out keys that conflict with rainbow highlighting
    #[arg(short, long)]
    filter: bool,

    /// Group keys by this color instead of listing them
    #[arg(long, value_enum)]
    colors: Option<ColorArg>,

    /// Do not draw color swatches
    #[arg(long)]
    no_swatch: bool,

    /// List registered languages and exit
    #[arg(long)]
    list_languages: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Foreground,
    Background,
    Effect,
    ErrorStripe,
}

impl From<ColorArg> for ColorSelector {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Foreground => ColorSelector::Foreground,
            ColorArg::Background => ColorSelector::Background,
            ColorArg::Effect => ColorSelector::Effect,
            ColorArg::ErrorStripe => ColorSelector::ErrorStripe,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("editor_palette=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = Catalog::load(args.config.as_deref())?;
    let mut writer = PaletteWriter::new(io::stdout().lock(), !args.no_swatch);

    if args.list_languages {
        return writer.write_columns(&catalog.languages.list_languages(), 4);
    }

    let language = catalog.parse_language_query(&args.language)?;
    let palette = catalog.palette(language);
    info!(
        scheme = %palette.scheme().name,
        language = palette.language().map_or("none", |l| l.id()),
        filter = args.filter,
        "computing palette"
    );

    match args.colors {
        Some(selector) => {
            let groups = palette.collect_colors(selector.into(), args.filter);
            writer.write_color_groups(&groups)
        }
        None => writer.write_keys(&palette.text_attribute_keys(args.filter)),
    }
}
