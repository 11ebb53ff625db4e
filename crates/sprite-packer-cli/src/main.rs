use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use image::{ImageReader, RgbaImage};
use sprite_packer_core::config::SearchConfig;
use sprite_packer_core::{build_atlas, find_best_layout, to_json_keyed};
use tracing::info;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-packer",
    about = "Pack a folder of sprites into a texture atlas",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack sprites and write the atlas PNG plus its JSON layout
    Pack(PackArgs),
    /// Compute the layout only and write the JSON (no PNG)
    Layout(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input directory (png/jpeg files, searched recursively)
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,
    /// Atlas base name (files will be name.png/name.json)
    #[arg(short, long, default_value = "atlas")]
    name: String,
    /// Candidate atlas widths, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![128u32, 256, 512, 1024])]
    widths: Vec<u32>,
    /// Horizontal padding reserved next to each sprite
    #[arg(long, default_value_t = 0)]
    padding_x: u32,
    /// Vertical padding reserved below each sprite
    #[arg(long, default_value_t = 0)]
    padding_y: u32,
    /// Allow 90 degree rotation
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    allow_rotation: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run(args, true),
        Commands::Layout(args) => run(args, false),
    }
}

fn run(args: &PackArgs, write_png: bool) -> anyhow::Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;

    let (keys, images) = load_images(&args.input)?;
    if images.is_empty() {
        anyhow::bail!("no images found under {}", args.input.display());
    }
    info!("loaded {} sprites from {}", images.len(), args.input.display());

    let cfg = SearchConfig {
        widths: args.widths.clone(),
        padding_x: args.padding_x,
        padding_y: args.padding_y,
        allow_rotation: args.allow_rotation,
        ..SearchConfig::default()
    };

    let layout = if write_png {
        let (canvas, layout) = build_atlas(&images, &cfg)?;
        let png_path = args.out_dir.join(format!("{}.png", args.name));
        canvas
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!("wrote {}", png_path.display());
        layout
    } else {
        let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
        find_best_layout(&sizes, &cfg)?
    };

    info!(
        "packed {} sprites into a {}x{} bin (occupancy {:.1}%)",
        layout.result.placed.len(),
        layout.bin_width,
        layout.bin_height,
        layout.occupancy * 100.0
    );

    let json_path = args.out_dir.join(format!("{}.json", args.name));
    let value = to_json_keyed(&layout, &keys);
    fs::write(&json_path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("write {}", json_path.display()))?;
    info!("wrote {}", json_path.display());
    Ok(())
}

fn load_images(input: &Path) -> anyhow::Result<(Vec<String>, Vec<RgbaImage>)> {
    let mut paths: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            matches!(
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
                    .as_deref(),
                Some("png") | Some("jpg") | Some("jpeg")
            )
        })
        .collect();
    // deterministic input order regardless of directory iteration order
    paths.sort();

    let mut keys = Vec::with_capacity(paths.len());
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let img = ImageReader::open(&path)
            .with_context(|| format!("open {}", path.display()))?
            .decode()
            .with_context(|| format!("decode {}", path.display()))?;
        let key = path
            .strip_prefix(input)
            .unwrap_or(&path)
            .display()
            .to_string();
        keys.push(key);
        images.push(img.to_rgba8());
    }
    Ok((keys, images))
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
