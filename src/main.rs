//! Template Studio CLI
//!
//! Usage:
//!   template-studio [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>   Options file (TOML)
//!   -f, --format <FMT>    Output format: svg (page preview) or json
//!   -o, --output <FILE>   Write to a file instead of stdout
//!   -r, --randomize       Derive every option from the seed
//!   -p, --presets         List the preset tables
//!   -h, --help            Print help

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use template_studio::{
    generate_template, grid_presets, render_preview, DocumentStyle, PreviewConfig, Scheme,
    StyleOptions, FONT_PAIRINGS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Standalone page preview SVG
    Svg,
    /// The template structure as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "template-studio")]
#[command(about = "Deterministic document template generator")]
struct Cli {
    /// Options file (TOML); flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document style: corporate, creative, minimal or abstract
    #[arg(long)]
    style: Option<String>,

    /// Base hue in degrees
    #[arg(long)]
    hue: Option<i32>,

    /// Color scheme name (unknown names fall back to monochromatic)
    #[arg(long)]
    scheme: Option<String>,

    /// Typography pairing name
    #[arg(long)]
    typography: Option<String>,

    /// Layout preset name
    #[arg(long)]
    layout: Option<String>,

    /// Seed for the pseudo-random shape and variation sequence
    #[arg(long)]
    seed: Option<f64>,

    /// Derive every option from the seed
    #[arg(short, long)]
    randomize: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: OutputFormat,

    /// Output file (stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available styles, schemes, typography pairings and layouts
    #[arg(short, long)]
    presets: bool,

    /// Print the resolved layout grid to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.presets {
        print_presets();
        return;
    }

    let mut options = match &cli.config {
        Some(path) => match StyleOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StyleOptions::default(),
    };

    if cli.randomize {
        options = StyleOptions::randomized(cli.seed.unwrap_or(options.seed));
    }

    if let Some(style) = &cli.style {
        options.style = match DocumentStyle::from_name(style) {
            Some(s) => s,
            None => {
                eprintln!("Error: unknown style '{style}' (try --presets)");
                std::process::exit(1);
            }
        };
    }
    if let Some(hue) = cli.hue {
        options.base_hue = hue;
    }
    if let Some(scheme) = &cli.scheme {
        options.color_scheme = Scheme::from_name(scheme);
    }
    if let Some(typography) = &cli.typography {
        options.typography = typography.clone();
    }
    if let Some(layout) = &cli.layout {
        options.layout = layout.clone();
    }
    if let Some(seed) = cli.seed {
        options.seed = seed;
    }

    let template = generate_template(&options);

    if cli.debug {
        eprintln!("=== Layout: {} ===", template.layout.name);
        for s in &template.layout.sections {
            eprintln!(
                "[{}] {:?} x={:.1} y={:.1} w={:.1} h={:.1}",
                s.id, s.kind, s.x, s.y, s.width, s.height
            );
        }
        eprintln!("====================");
    }

    let rendered = match cli.format {
        OutputFormat::Svg => render_preview(&template, &PreviewConfig::default()),
        OutputFormat::Json => match serde_json::to_string_pretty(&template) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing template: {e}");
                std::process::exit(1);
            }
        },
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, rendered) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{rendered}"),
    }
}

fn print_presets() {
    println!("STYLES");
    println!("------");
    for style in DocumentStyle::ALL {
        println!("  {style}");
    }

    println!();
    println!("COLOR SCHEMES");
    println!("-------------");
    for scheme in Scheme::ALL {
        println!("  {scheme}");
    }

    println!();
    println!("TYPOGRAPHY PAIRINGS");
    println!("-------------------");
    for pairing in FONT_PAIRINGS {
        println!("  {:<24} {}", pairing.name, pairing.characterization);
    }

    println!();
    println!("LAYOUTS");
    println!("-------");
    for grid in grid_presets() {
        let kinds: Vec<String> = grid
            .sections
            .iter()
            .map(|s| format!("{:?}", s.kind).to_lowercase())
            .collect();
        println!("  {:<18} {}", grid.name, kinds.join(", "));
    }
}
