use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use album_tiler::{
    calc_tile, calculate_statistics, generate, is_supported_image, probe_aspect, CancelToken,
    Color, GenerateEvent, GenerateMode, ImageAsset, LayoutOptions, NumberCorner, RasterBackend,
    Template,
};

#[derive(Parser)]
#[command(name = "albumt", about = "Tile images into printable album pages", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available page templates
    Templates,

    /// Lay input images out into numbered pages and export them
    Generate {
        /// Input image files or directories - can specify multiple
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Directory the artifact is written into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Page template
        #[arg(long, default_value = "a4", value_enum)]
        template: TemplateArg,

        /// Number of columns per page
        #[arg(long, default_value = "2")]
        columns: u32,

        /// Vertical gap between rows in pixels
        #[arg(long, default_value = "32")]
        row_gap: u32,

        /// Horizontal gap between columns in pixels
        #[arg(long, default_value = "32")]
        column_gap: u32,

        /// Extra vertical inset beyond the template's safe area
        #[arg(long, default_value = "100")]
        padding_y: u32,

        /// Extra horizontal inset beyond the template's safe area
        #[arg(long, default_value = "100")]
        padding_x: u32,

        /// Page background color (#rrggbb)
        #[arg(long, default_value = "#ffffff")]
        background: String,

        /// Number printed on the first page
        #[arg(long, default_value = "1")]
        number_start: u32,

        /// Corner the first page number sits in
        #[arg(long, default_value = "right-bottom", value_enum)]
        number_corner: CornerArg,

        /// Page number text size in pixels
        #[arg(long, default_value = "36")]
        number_size: u32,

        /// Page number color (#rrggbb)
        #[arg(long, default_value = "#6c6c6c")]
        number_color: String,

        /// Compose only the first page and skip the archive
        #[arg(long)]
        single: bool,

        /// Load layout options from a JSON file instead of flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the effective layout options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// TTF/OTF font used for page numbers (default: first usable
        /// system bold face)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Show statistics only, don't generate pages
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    A4,
    A5,
    A6,
    B5,
    B6,
}

#[derive(Clone, Copy, ValueEnum)]
enum CornerArg {
    LeftBottom,
    RightBottom,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::A4 => Self::A4,
            TemplateArg::A5 => Self::A5,
            TemplateArg::A6 => Self::A6,
            TemplateArg::B5 => Self::B5,
            TemplateArg::B6 => Self::B6,
        }
    }
}

impl From<CornerArg> for NumberCorner {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::LeftBottom => Self::LeftBottom,
            CornerArg::RightBottom => Self::RightBottom,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Templates => {
            for template in Template::all() {
                let (w, h) = template.dimensions_px();
                println!(
                    "{}  {}x{}px  safe inset {}px",
                    template.name(),
                    w,
                    h,
                    template.safe_inset_px()
                );
            }
        }

        Commands::Generate {
            input,
            output,
            template,
            columns,
            row_gap,
            column_gap,
            padding_y,
            padding_x,
            background,
            number_start,
            number_corner,
            number_size,
            number_color,
            single,
            config,
            save_config,
            font,
            stats_only,
        } => {
            let options = match config {
                Some(path) => LayoutOptions::load(&path)
                    .await
                    .with_context(|| format!("loading {}", path.display()))?,
                None => LayoutOptions {
                    template: template.into(),
                    columns,
                    row_gap,
                    column_gap,
                    padding_y,
                    padding_x,
                    background: Color::from_hex(&background)?,
                    number_start,
                    number_corner: number_corner.into(),
                    number_size,
                    number_color: Color::from_hex(&number_color)?,
                }
                .normalized(),
            };

            if let Some(path) = save_config {
                options.save(&path).await?;
                println!("Saved options → {}", path.display());
            }

            let assets = collect_assets(&input).await?;
            if assets.is_empty() {
                bail!("no supported images (jpg, jpeg, png, gif) among the inputs");
            }

            // Tile proportions follow the first image added.
            let aspect = probe_aspect(&assets[0].bytes)
                .with_context(|| format!("probing {}", assets[0].file_name))?;
            let tile = calc_tile(options.template, &options, aspect);

            let mode = if single {
                GenerateMode::SinglePage
            } else {
                GenerateMode::FullBatch
            };

            let stats = calculate_statistics(assets.len(), &tile, mode);
            println!("Album statistics:");
            println!("  Images: {}", stats.image_count);
            println!("  Tiles per page: {}", stats.max_per_page);
            println!("  Pages: {}", stats.page_count);
            println!("  Images on last page: {}", stats.last_page_fill);

            if stats_only {
                return Ok(());
            }

            let backend = match font {
                Some(path) => RasterBackend::with_font_bytes(tokio::fs::read(&path).await?)?,
                None => RasterBackend::new()?,
            };

            let artifact = generate(
                backend,
                assets,
                options,
                tile,
                mode,
                CancelToken::new(),
                |event| match event {
                    GenerateEvent::Started { .. } => {}
                    GenerateEvent::PageFinished {
                        page_index,
                        page_count,
                        percent,
                    } => {
                        println!("{percent}% ({}/{page_count} pages)", page_index + 1);
                    }
                    GenerateEvent::Finished => println!("done"),
                },
            )
            .await?;

            let target = output.join(&artifact.file_name);
            tokio::fs::write(&target, &artifact.bytes).await?;
            println!("Generated → {}", target.display());
        }
    }

    Ok(())
}

/// Expand the input arguments into assets: files are taken as-is,
/// directories are scanned one level deep with entries sorted by name.
async fn collect_assets(inputs: &[PathBuf]) -> Result<Vec<ImageAsset>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries = Vec::new();
            let mut dir = tokio::fs::read_dir(input).await?;
            while let Some(entry) = dir.next_entry().await? {
                let path = entry.path();
                if path.is_file() {
                    entries.push(path);
                }
            }
            entries.sort();
            files.extend(entries);
        } else {
            files.push(input.clone());
        }
    }

    let mut assets = Vec::new();
    for path in files {
        if !is_supported_image(&path) {
            continue;
        }
        let name = file_name(&path)?;
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        assets.push(ImageAsset::new(name, bytes));
    }
    Ok(assets)
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("unusable file name: {}", path.display()))
}
