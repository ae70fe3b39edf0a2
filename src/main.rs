use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mask_terrain::editor::brush::BrushCatalog;
use mask_terrain::editor::Editor;
use mask_terrain::export::export_layer_png;
use mask_terrain::procgen::observer::LogProgress;
use mask_terrain::procgen::{
    GenerationSize, GenerationSource, GenerationSpec, GeneratorConfig, ProceduralGenerator,
    SourceKind,
};

#[derive(Parser, Debug)]
#[command(name = "mask-terrain")]
#[command(about = "Paint land and water ground tiles from an image mask")]
struct Args {
    /// Generation source: `image` or `prompt`
    #[arg(short, long, default_value = "image")]
    mode: String,

    /// Mask image (PNG, JPEG or BMP)
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Colour to biome legend (JSON)
    #[arg(long)]
    legend: Option<PathBuf>,

    /// Text prompt for prompt mode
    #[arg(long)]
    prompt: Option<String>,

    /// Width of the generated area in tiles
    #[arg(short = 'W', long, default_value = "512")]
    width: i32,

    /// Height of the generated area in tiles
    #[arg(short = 'H', long, default_value = "512")]
    height: i32,

    /// Map layer to paint (0-15)
    #[arg(short = 'z', long, default_value = "7")]
    layer: i32,

    #[arg(short, long, default_value = "1337")]
    seed: u32,

    /// Generator settings (JSON)
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Brush catalog (JSON); a built-in catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write a PNG preview of the painted layer
    #[arg(long)]
    export: Option<PathBuf>,
}

impl Args {
    fn spec(&self) -> Result<GenerationSpec> {
        let kind: SourceKind = self.mode.parse()?;
        let source = match kind {
            SourceKind::ImageMask => GenerationSource::ImageMask {
                image_path: self.image.clone().unwrap_or_default(),
                legend_path: self.legend.clone(),
            },
            SourceKind::TextPrompt => GenerationSource::TextPrompt {
                prompt: self.prompt.clone().unwrap_or_default(),
            },
        };
        Ok(GenerationSpec {
            size: GenerationSize::new(self.width, self.height, self.layer),
            seed: self.seed,
            source,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig::load_from(&args.config);
    let brushes = match &args.catalog {
        Some(path) => BrushCatalog::load(path)?,
        None => BrushCatalog::default(),
    };
    let spec = args.spec()?;

    let mut editor = Editor::new(brushes);
    let generator = ProceduralGenerator::new(&config);
    let stats = generator
        .run(&mut editor, &spec, &config, &mut LogProgress)
        .context("generation failed")?;

    println!(
        "{} tiles changed ({} land, {} water)",
        stats.tiles_changed, stats.land_cells, stats.water_cells
    );

    if let Some(path) = &args.export {
        export_layer_png(&editor.map, &editor.brushes, spec.size, path)?;
    }

    Ok(())
}
